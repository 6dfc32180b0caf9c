use serde::Deserialize;

use crate::utils::extractor::{FromQueryPairs, QueryPairs};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFacilityTypeRequest {
    pub name: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFacilityRequest {
    pub facility_type_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub count: i32,
    #[serde(default)]
    pub unit: String,
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
}

// 设施查询参数，按类型名称过滤，`all` 或缺省表示不过滤
#[derive(Debug, Clone, Default)]
pub struct FacilityQuery {
    pub facility_type: Option<String>,
}

impl FromQueryPairs for FacilityQuery {
    fn from_pairs(pairs: &QueryPairs) -> Self {
        Self {
            facility_type: pairs.last(&["type"]),
        }
    }
}

impl FacilityQuery {
    pub fn type_filter(&self) -> Option<&str> {
        match self.facility_type.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() && value != "all" => Some(value),
            _ => None,
        }
    }
}

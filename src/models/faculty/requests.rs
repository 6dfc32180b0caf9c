use super::entities::FacultyCategory;
use serde::Deserialize;

use crate::utils::extractor::{FromQueryPairs, QueryPairs};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFacultyMemberRequest {
    #[serde(default = "default_category")]
    pub category: FacultyCategory,
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub photo: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
}

fn default_category() -> FacultyCategory {
    FacultyCategory::Teacher
}

fn default_true() -> bool {
    true
}

// 教职工查询参数，缺省或 `all` 返回全部分类
#[derive(Debug, Clone, Default)]
pub struct FacultyQuery {
    pub category: Option<String>,
}

impl FromQueryPairs for FacultyQuery {
    fn from_pairs(pairs: &QueryPairs) -> Self {
        Self {
            category: pairs.last(&["category"]),
        }
    }
}

impl FacultyQuery {
    pub fn category_filter(&self) -> Option<&str> {
        match self.category.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() && !value.eq_ignore_ascii_case("all") => Some(value),
            _ => None,
        }
    }
}

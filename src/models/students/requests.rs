use super::entities::Gender;
use crate::models::common::PaginationQuery;
use crate::utils::extractor::{FromQueryPairs, QueryPairs};
use serde::Deserialize;

// 创建学生请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub gender: Gender,
    pub roll_number: String,
    pub registration_number: String,
    pub class_id: Option<i64>,
    pub department_id: Option<i64>,
    pub photo: Option<String>,
    #[serde(default)]
    pub guardian_name: String,
    #[serde(default)]
    pub guardian_phone: String,
    #[serde(default)]
    pub address: String,
}

// 管理端学生列表参数
#[derive(Debug, Clone, Default)]
pub struct StudentListParams {
    pub pagination: PaginationQuery,
    pub class_id: Option<String>,
}

impl FromQueryPairs for StudentListParams {
    fn from_pairs(pairs: &QueryPairs) -> Self {
        let number = |key: &str| pairs.last(&[key]).and_then(|v| v.trim().parse().ok());
        Self {
            pagination: PaginationQuery {
                page: number("page"),
                size: number("size"),
            },
            class_id: pairs.last(&["class_id"]),
        }
    }
}

impl StudentListParams {
    pub fn class_id(&self) -> Option<i64> {
        self.class_id.as_deref()?.trim().parse().ok()
    }
}

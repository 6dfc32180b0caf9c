use super::entities::RoutineCategory;
use serde::Deserialize;

fn default_true() -> bool {
    true
}

// 创建文档请求
//
// 通知需要 notice_type_id 与 short_description，课表需要 category，
// 其余种类忽略这些字段。
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocumentRequest {
    pub title: String,
    pub file: String,
    pub class_id: Option<i64>,
    pub department_id: Option<i64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub short_description: Option<String>,
    pub notice_type_id: Option<i64>,
    pub category: Option<RoutineCategory>,
    pub routine_type_id: Option<i64>,
}

impl CreateDocumentRequest {
    pub fn new(title: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            file: file.into(),
            class_id: None,
            department_id: None,
            is_active: true,
            short_description: None,
            notice_type_id: None,
            category: None,
            routine_type_id: None,
        }
    }
}

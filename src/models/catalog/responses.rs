use super::entities::{Class, Department, NoticeType, RoutineType};
use serde::Serialize;

// 列表页筛选项
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub classes: Vec<Class>,
    pub departments: Vec<Department>,
    pub notice_types: Vec<NoticeType>,
    pub routine_types: Vec<RoutineType>,
}

// 删除班级/系部的结果
#[derive(Debug, Clone, Serialize)]
pub struct DetachSummary {
    pub id: i64,
    // 被清空引用的记录数
    pub detached: u64,
}

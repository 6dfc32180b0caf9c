use serde::{Deserialize, Serialize};

// 班级
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    // 班级名称（孟加拉语）
    pub name: String,
    pub name_en: String,
    // 排序用的数字等级，全局唯一
    pub numeric_value: i32,
    pub description: String,
    // 手工维护的男女生人数
    pub male_student: i32,
    pub female_student: i32,
    // 是否公开展示学生名单
    pub show_students_publicly: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 系部
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub name_en: String,
    pub icon: String,
    pub description: String,
    pub male_student: i32,
    pub female_student: i32,
    pub slug: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 通知类型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeType {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 课表类型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineType {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

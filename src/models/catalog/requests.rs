use serde::Deserialize;

fn default_true() -> bool {
    true
}

// 创建班级请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    pub name_en: String,
    pub numeric_value: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub male_student: i32,
    #[serde(default)]
    pub female_student: i32,
    #[serde(default = "default_true")]
    pub show_students_publicly: bool,
}

// 更新班级请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub numeric_value: Option<i32>,
    pub description: Option<String>,
    pub male_student: Option<i32>,
    pub female_student: Option<i32>,
    pub show_students_publicly: Option<bool>,
}

// 创建系部请求
//
// 未提供 slug 时由 name_en 生成
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub name_en: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub male_student: i32,
    #[serde(default)]
    pub female_student: i32,
    pub slug: Option<String>,
}

// 更新系部请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDepartmentRequest {
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub male_student: Option<i32>,
    pub female_student: Option<i32>,
    pub slug: Option<String>,
}

// 创建通知类型 / 课表类型请求，slug 缺省时由 name 生成
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTypeRequest {
    pub name: String,
    pub slug: Option<String>,
}

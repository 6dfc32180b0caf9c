use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FacilityType {
    pub id: i64,
    pub name: String,
    pub order: i32,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FacilityInfo {
    pub id: i64,
    pub facility_type_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub count: i32,
    pub unit: String,
    pub image: Option<String>,
    pub is_active: bool,
    pub order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 带类型名称的设施
#[derive(Debug, Clone)]
pub struct FacilityView {
    pub facility: FacilityInfo,
    pub type_name: Option<String>,
}

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ImportantLink {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub icon: String,
    pub is_active: bool,
    pub order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

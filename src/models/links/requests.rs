use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLinkRequest {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
}

fn default_true() -> bool {
    true
}

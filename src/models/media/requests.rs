use super::entities::GalleryCategory;
use serde::Deserialize;

use crate::utils::extractor::{FromQueryPairs, QueryPairs};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGalleryRequest {
    pub title: String,
    pub image: String,
    pub category: GalleryCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_slider: bool,
}

// 创建视频请求，链接与 ID 至少提供一个
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideoRequest {
    pub title: String,
    pub youtube_url: Option<String>,
    pub youtube_id: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

// 更新视频请求，只写入提供的字段
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVideoRequest {
    pub title: Option<String>,
    pub youtube_url: Option<String>,
    pub youtube_id: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}

// 相册查询参数，`all` 或缺省表示不过滤
#[derive(Debug, Clone, Default)]
pub struct GalleryQuery {
    pub category: Option<String>,
}

impl FromQueryPairs for GalleryQuery {
    fn from_pairs(pairs: &QueryPairs) -> Self {
        Self {
            category: pairs.last(&["category"]),
        }
    }
}

impl GalleryQuery {
    pub fn category_filter(&self) -> Option<&str> {
        match self.category.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() && !value.eq_ignore_ascii_case("all") => Some(value),
            _ => None,
        }
    }
}

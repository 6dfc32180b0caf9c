use super::entities::EventType;
use serde::Deserialize;

use crate::utils::extractor::{FromQueryPairs, QueryPairs};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub description: String,
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub status: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventImageRequest {
    pub image: String,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
}

// 公开列表查询参数，类型大小写不敏感，无法识别时不过滤
#[derive(Debug, Clone, Default)]
pub struct EventListQuery {
    pub event_type: Option<String>,
}

impl FromQueryPairs for EventListQuery {
    fn from_pairs(pairs: &QueryPairs) -> Self {
        Self {
            event_type: pairs.last(&["type"]),
        }
    }
}

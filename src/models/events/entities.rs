use serde::{Deserialize, Serialize};

// 活动/新闻类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventType {
    #[serde(rename = "EVENT")]
    Event,
    #[serde(rename = "NEWS")]
    News,
}

impl EventType {
    pub const EVENT: &'static str = "EVENT";
    pub const NEWS: &'static str = "NEWS";

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Event => Self::EVENT,
            EventType::News => Self::NEWS,
        }
    }

    /// 页面展示名（孟加拉语）
    pub fn display_name(&self) -> &'static str {
        match self {
            EventType::Event => "ইভেন্ট",
            EventType::News => "সংবাদ",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventType {
    type Err = String;

    // 查询参数大小写不敏感
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(Self::EVENT) {
            Ok(EventType::Event)
        } else if s.eq_ignore_ascii_case(Self::NEWS) {
            Ok(EventType::News)
        } else {
            Err(format!("Invalid event type: '{s}'. Expected EVENT or NEWS"))
        }
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// 活动/新闻
#[derive(Debug, Clone, Serialize)]
pub struct EventNews {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub description: String,
    // 主图存储路径
    pub image: Option<String>,
    // 是否公开
    pub status: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 活动图集中的图片
#[derive(Debug, Clone, Serialize)]
pub struct EventImage {
    pub id: i64,
    pub event_news_id: i64,
    pub image: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 活动详情及其图集，图集按 (order, -created_at) 排序
#[derive(Debug, Clone)]
pub struct EventWithImages {
    pub event: EventNews,
    pub images: Vec<EventImage>,
}

// 已公开的活动/新闻数量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventCounts {
    pub events: u64,
    pub news: u64,
}

use serde::Serialize;

use super::entities::{EventNews, EventWithImages};
use crate::utils::format::{clock_time, display_date, long_date};

// 活动列表项
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: &'static str,
    pub type_display: &'static str,
    pub description: String,
    pub primary_image: String,
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub events: Vec<EventRecord>,
    pub total_events: u64,
    pub total_news: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventImageRecord {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

// 活动详情
#[derive(Debug, Clone, Serialize)]
pub struct EventDetail {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: &'static str,
    pub type_display: &'static str,
    pub description: String,
    pub primary_image: String,
    pub gallery_images: Vec<EventImageRecord>,
    pub created_at: String,
    pub created_at_time: String,
}

#[derive(Debug, Serialize)]
pub struct EventDetailResponse {
    pub success: bool,
    pub data: EventDetail,
}

fn primary_image(event: &EventNews, file_url: &impl Fn(&str) -> String) -> String {
    event
        .image
        .as_deref()
        .filter(|path| !path.is_empty())
        .map(file_url)
        .unwrap_or_default()
}

impl EventRecord {
    pub fn from_event(event: EventNews, file_url: impl Fn(&str) -> String) -> Self {
        Self {
            id: event.id,
            primary_image: primary_image(&event, &file_url),
            event_type: event.event_type.as_str(),
            type_display: event.event_type.display_name(),
            date: display_date(&event.created_at),
            title: event.title,
            description: event.description,
        }
    }
}

impl EventDetail {
    pub fn from_event(item: EventWithImages, file_url: impl Fn(&str) -> String) -> Self {
        let EventWithImages { event, images } = item;
        let gallery_images = images
            .into_iter()
            .map(|image| EventImageRecord {
                url: file_url(&image.image),
                title: image.title,
                description: image.description,
            })
            .collect();

        Self {
            id: event.id,
            primary_image: primary_image(&event, &file_url),
            event_type: event.event_type.as_str(),
            type_display: event.event_type.display_name(),
            gallery_images,
            created_at: long_date(&event.created_at),
            created_at_time: clock_time(&event.created_at),
            title: event.title,
            description: event.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::events::entities::{EventImage, EventType};
    use chrono::TimeZone;

    fn event(image: Option<&str>) -> EventNews {
        let at = chrono::Utc.with_ymd_and_hms(2025, 3, 5, 14, 7, 0).unwrap();
        EventNews {
            id: 3,
            title: "Sports day".into(),
            event_type: EventType::News,
            description: "Annual sports".into(),
            image: image.map(String::from),
            status: true,
            created_at: at,
            updated_at: at,
        }
    }

    fn url(path: &str) -> String {
        format!("/media/{path}")
    }

    #[test]
    fn test_event_record() {
        let record = EventRecord::from_event(event(None), url);
        assert_eq!(record.primary_image, "");
        assert_eq!(record.event_type, "NEWS");
        assert_eq!(record.type_display, "সংবাদ");
        assert_eq!(record.date, "05 Mar 2025");
    }

    #[test]
    fn test_event_detail_dates_and_gallery() {
        let created_at = chrono::Utc::now();
        let detail = EventDetail::from_event(
            EventWithImages {
                event: event(Some("event_news_primary/a.jpg")),
                images: vec![EventImage {
                    id: 1,
                    event_news_id: 3,
                    image: "event_news_gallery/b.jpg".into(),
                    title: None,
                    description: Some("Prize giving".into()),
                    order: 0,
                    created_at,
                }],
            },
            url,
        );
        assert_eq!(detail.primary_image, "/media/event_news_primary/a.jpg");
        assert_eq!(detail.created_at, "05 March, 2025");
        assert_eq!(detail.created_at_time, "14:07");
        assert_eq!(detail.gallery_images[0].url, "/media/event_news_gallery/b.jpg");
    }
}

use serde::Serialize;

use super::entities::{GalleryImage, Video};

#[derive(Debug, Clone, Serialize)]
pub struct GalleryImageRecord {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub category: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoRecord {
    pub id: i64,
    pub title: String,
    pub youtube_id: String,
    pub description: String,
    pub embed_url: String,
    pub thumbnail_url: String,
}

impl GalleryImageRecord {
    pub fn from_image(image: GalleryImage, file_url: impl Fn(&str) -> String) -> Self {
        Self {
            id: image.id,
            image_url: file_url(&image.image),
            title: image.title,
            description: image.description,
            category: image.category.display_name(),
        }
    }
}

impl From<Video> for VideoRecord {
    fn from(video: Video) -> Self {
        Self {
            embed_url: video.embed_url(),
            thumbnail_url: video.thumbnail_url(),
            id: video.id,
            title: video.title,
            youtube_id: video.youtube_id,
            description: video.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GalleryListResponse {
    pub images: Vec<GalleryImageRecord>,
}

#[derive(Debug, Serialize)]
pub struct VideoListResponse {
    pub videos: Vec<VideoRecord>,
}

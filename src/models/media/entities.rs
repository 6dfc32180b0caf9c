use serde::{Deserialize, Serialize};

use crate::utils::youtube;

// 相册分类
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GalleryCategory {
    School,
    Student,
    Teacher,
}

impl GalleryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::School => "school",
            GalleryCategory::Student => "student",
            GalleryCategory::Teacher => "teacher",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GalleryCategory::School => "School",
            GalleryCategory::Student => "Student",
            GalleryCategory::Teacher => "Teacher",
        }
    }
}

impl std::str::FromStr for GalleryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "school" => Ok(GalleryCategory::School),
            "student" => Ok(GalleryCategory::Student),
            "teacher" => Ok(GalleryCategory::Teacher),
            _ => Err(format!(
                "Invalid gallery category: '{s}'. Expected school, student or teacher"
            )),
        }
    }
}

impl<'de> Deserialize<'de> for GalleryCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// 相册图片
#[derive(Debug, Clone, Serialize)]
pub struct GalleryImage {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub category: GalleryCategory,
    pub description: String,
    // 首页轮播图不出现在相册列表中
    pub is_slider: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 视频
#[derive(Debug, Clone, Serialize)]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub youtube_url: String,
    pub youtube_id: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Video {
    pub fn embed_url(&self) -> String {
        youtube::embed_url(&self.youtube_id)
    }

    pub fn thumbnail_url(&self) -> String {
        youtube::thumbnail_url(&self.youtube_id)
    }
}

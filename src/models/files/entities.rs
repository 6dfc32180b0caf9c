use serde::Serialize;

use crate::models::documents::entities::DocumentKind;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// 上传分类，决定存储目录与允许的文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadCategory {
    Document(DocumentKind),
    StudentPhoto,
    Gallery,
    EventPrimary,
    EventGallery,
    Facility,
    FacultyPhoto,
}

impl UploadCategory {
    /// 存储目录名
    pub fn dir(&self) -> &'static str {
        match self {
            UploadCategory::Document(kind) => kind.collection(),
            UploadCategory::StudentPhoto => "students",
            UploadCategory::Gallery => "gallery",
            UploadCategory::EventPrimary => "event_news_primary",
            UploadCategory::EventGallery => "event_news_gallery",
            UploadCategory::Facility => "facilities",
            UploadCategory::FacultyPhoto => "faculty_photos",
        }
    }

    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            UploadCategory::Document(kind) => kind.allowed_extensions(),
            _ => IMAGE_EXTENSIONS,
        }
    }

    pub fn allows(&self, extension: &str) -> bool {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        self.allowed_extensions().contains(&extension.as_str())
    }
}

impl std::str::FromStr for UploadCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(kind) = s.parse::<DocumentKind>() {
            return Ok(UploadCategory::Document(kind));
        }
        match s {
            "students" => Ok(UploadCategory::StudentPhoto),
            "gallery" => Ok(UploadCategory::Gallery),
            "event_news_primary" => Ok(UploadCategory::EventPrimary),
            "event_news_gallery" => Ok(UploadCategory::EventGallery),
            "facilities" => Ok(UploadCategory::Facility),
            "faculty_photos" => Ok(UploadCategory::FacultyPhoto),
            _ => Err(format!("Unknown upload category: {s}")),
        }
    }
}

/// 从存储中读出的待下载文件
#[derive(Debug, Clone)]
pub struct DeliveredFile {
    pub bytes: Vec<u8>,
    // 已做百分号编码的文件名
    pub filename: String,
    pub content_type: String,
}

/// 已写入存储的文件
#[derive(Debug, Clone, Serialize)]
pub struct StoredFile {
    // 存储内相对路径，写入记录的 file/image 字段
    pub path: String,
    // 对外访问地址
    pub url: String,
    pub size: u64,
    pub content_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_categories_follow_kind() {
        let category: UploadCategory = "results".parse().unwrap();
        assert_eq!(category, UploadCategory::Document(DocumentKind::Result));
        assert_eq!(category.dir(), "results");
        assert!(category.allows(".PDF"));
        assert!(!category.allows("png"));
    }

    #[test]
    fn test_image_categories() {
        let category: UploadCategory = "gallery".parse().unwrap();
        assert!(category.allows("webp"));
        assert!(!category.allows("pdf"));
        assert!("homeworks".parse::<UploadCategory>().is_err());
    }
}

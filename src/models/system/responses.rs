use serde::Serialize;

use crate::models::documents::entities::DocumentKind;

// 文档种类及其上传限制
#[derive(Debug, Clone, Serialize)]
pub struct DocumentKindInfo {
    pub kind: DocumentKind,
    pub collection: &'static str,
    pub download_prefix: String,
    pub allowed_extensions: &'static [&'static str],
}

impl From<DocumentKind> for DocumentKindInfo {
    fn from(kind: DocumentKind) -> Self {
        Self {
            kind,
            collection: kind.collection(),
            download_prefix: format!("/download-{}/", kind.slug()),
            allowed_extensions: kind.allowed_extensions(),
        }
    }
}

// 管理端系统信息
#[derive(Debug, Serialize)]
pub struct SystemInfoResponse {
    pub site_name: String,
    pub environment: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub uptime_seconds: i64,
    pub media_url_prefix: String,
    pub upload_max_size: usize,
    pub document_kinds: Vec<DocumentKindInfo>,
}

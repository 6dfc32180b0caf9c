use serde::Serialize;

use super::entities::ImportantLink;

#[derive(Debug, Clone, Serialize)]
pub struct LinkRecord {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub icon: String,
}

impl From<ImportantLink> for LinkRecord {
    fn from(link: ImportantLink) -> Self {
        Self {
            id: link.id,
            title: link.title,
            url: link.url,
            icon: link.icon,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub links: Vec<LinkRecord>,
}

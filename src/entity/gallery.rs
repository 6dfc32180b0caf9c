//! 相册实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gallery")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub image: String,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub is_slider: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_gallery_image(self) -> crate::models::media::entities::GalleryImage {
        use crate::models::media::entities::{GalleryCategory, GalleryImage};

        GalleryImage {
            id: self.id,
            title: self.title,
            image: self.image,
            category: self.category.parse().unwrap_or(GalleryCategory::School),
            description: self.description,
            is_slider: self.is_slider,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}

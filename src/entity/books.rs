//! 书籍实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub file: String,
    pub class_id: Option<i64>,
    pub department_id: Option<i64>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_document(self) -> crate::models::documents::entities::Document {
        use crate::models::documents::entities::{Document, DocumentDetails, DocumentKind};

        Document {
            id: self.id,
            kind: DocumentKind::Book,
            title: self.title,
            file: self.file,
            class_id: self.class_id,
            department_id: self.department_id,
            is_active: self.is_active,
            details: DocumentDetails::Plain,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}

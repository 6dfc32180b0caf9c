//! 通知实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notices")]
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
    #[sea_orm(column_type = "Text")]
    pub short_description: String,
    pub notice_type_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::notice_types::Entity",
        from = "Column::NoticeTypeId",
        to = "super::notice_types::Column::Id",
        on_delete = "Cascade"
    )]
    NoticeType,
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id",
        on_delete = "SetNull"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id",
        on_delete = "SetNull"
    )]
    Department,
}

impl Related<super::notice_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NoticeType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_document(self) -> crate::models::documents::entities::Document {
        use crate::models::documents::entities::{Document, DocumentDetails, DocumentKind};

        Document {
            id: self.id,
            kind: DocumentKind::Notice,
            title: self.title,
            file: self.file,
            class_id: self.class_id,
            department_id: self.department_id,
            is_active: self.is_active,
            details: DocumentDetails::Notice {
                short_description: self.short_description,
                notice_type_id: self.notice_type_id,
            },
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}

//! 课表实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "routines")]
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
    pub category: String,
    pub routine_type_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::routine_types::Entity",
        from = "Column::RoutineTypeId",
        to = "super::routine_types::Column::Id",
        on_delete = "SetNull"
    )]
    RoutineType,
}

impl Related<super::routine_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoutineType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_document(self) -> crate::models::documents::entities::Document {
        use crate::models::documents::entities::{
            Document, DocumentDetails, DocumentKind, RoutineCategory,
        };

        Document {
            id: self.id,
            kind: DocumentKind::Routine,
            title: self.title,
            file: self.file,
            class_id: self.class_id,
            department_id: self.department_id,
            is_active: self.is_active,
            details: DocumentDetails::Routine {
                category: self.category.parse().unwrap_or(RoutineCategory::Class),
                routine_type_id: self.routine_type_id,
            },
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}

//! 通知类型实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notice_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::notices::Entity")]
    Notices,
}

impl Related<super::notices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_notice_type(self) -> crate::models::catalog::entities::NoticeType {
        use crate::models::catalog::entities::NoticeType;

        NoticeType {
            id: self.id,
            name: self.name,
            slug: self.slug,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}

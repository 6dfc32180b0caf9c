//! 留言实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub is_read: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_contact_message(self) -> crate::models::contact::entities::ContactMessage {
        crate::models::contact::entities::ContactMessage {
            id: self.id,
            name: self.name,
            phone: self.phone,
            title: self.title,
            message: self.message,
            is_read: self.is_read,
            created_at: super::to_datetime(self.created_at),
        }
    }
}

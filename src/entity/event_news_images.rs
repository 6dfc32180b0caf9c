//! 活动图集实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event_news_images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub event_news_id: i64,
    pub image: String,
    pub title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub order: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event_news::Entity",
        from = "Column::EventNewsId",
        to = "super::event_news::Column::Id",
        on_delete = "Cascade"
    )]
    EventNews,
}

impl Related<super::event_news::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventNews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_event_image(self) -> crate::models::events::entities::EventImage {
        crate::models::events::entities::EventImage {
            id: self.id,
            event_news_id: self.event_news_id,
            image: self.image,
            title: self.title,
            description: self.description,
            order: self.order,
            created_at: super::to_datetime(self.created_at),
        }
    }
}

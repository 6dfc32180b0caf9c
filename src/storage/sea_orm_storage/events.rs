//! 活动/新闻存储操作

use super::{SeaOrmStorage, db_error, now_timestamp, require_text};
use crate::entity::{event_news, event_news_images};
use crate::errors::{FieldErrors, PortalError, Result};
use crate::models::events::{
    entities::{EventCounts, EventImage, EventNews, EventType, EventWithImages},
    requests::{CreateEventImageRequest, CreateEventRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    pub async fn create_event_impl(&self, req: CreateEventRequest) -> Result<EventNews> {
        let mut errors = FieldErrors::new();
        let title = require_text(&mut errors, "title", &req.title);
        if !errors.is_empty() {
            return Err(PortalError::validation(errors));
        }

        let now = now_timestamp();
        let model = event_news::ActiveModel {
            title: Set(title),
            event_type: Set(req.event_type.as_str().to_string()),
            description: Set(req.description),
            image: Set(req.image.filter(|p| !p.trim().is_empty())),
            status: Set(req.status),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建活动"))?;

        Ok(result.into_event())
    }

    /// 向活动图集添加图片
    pub async fn add_event_image_impl(
        &self,
        event_id: i64,
        req: CreateEventImageRequest,
    ) -> Result<Option<EventImage>> {
        let exists = event_news::Entity::find_by_id(event_id)
            .one(&self.db)
            .await
            .map_err(db_error("查询活动"))?
            .is_some();
        if !exists {
            return Ok(None);
        }

        let mut errors = FieldErrors::new();
        let image = require_text(&mut errors, "image", &req.image);
        if !errors.is_empty() {
            return Err(PortalError::validation(errors));
        }

        let model = event_news_images::ActiveModel {
            event_news_id: Set(event_id),
            image: Set(image),
            title: Set(req.title),
            description: Set(req.description),
            order: Set(req.order),
            created_at: Set(now_timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("添加活动图片"))?;

        Ok(Some(result.into_event_image()))
    }

    /// 已公开的活动，按创建时间倒序
    pub async fn list_published_events_impl(
        &self,
        event_type: Option<EventType>,
    ) -> Result<Vec<EventNews>> {
        let mut select = event_news::Entity::find().filter(event_news::Column::Status.eq(true));
        if let Some(event_type) = event_type {
            select = select.filter(event_news::Column::EventType.eq(event_type.as_str()));
        }

        let result = select
            .order_by_desc(event_news::Column::CreatedAt)
            .order_by_desc(event_news::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询活动列表"))?;

        Ok(result.into_iter().map(|m| m.into_event()).collect())
    }

    pub async fn count_published_events_impl(&self) -> Result<EventCounts> {
        let count = |event_type: EventType| {
            event_news::Entity::find()
                .filter(event_news::Column::Status.eq(true))
                .filter(event_news::Column::EventType.eq(event_type.as_str()))
                .count(&self.db)
        };

        let events = count(EventType::Event)
            .await
            .map_err(db_error("统计活动数量"))?;
        let news = count(EventType::News)
            .await
            .map_err(db_error("统计新闻数量"))?;

        Ok(EventCounts { events, news })
    }

    /// 已公开活动的详情与图集
    pub async fn get_published_event_impl(&self, id: i64) -> Result<Option<EventWithImages>> {
        let event = event_news::Entity::find_by_id(id)
            .filter(event_news::Column::Status.eq(true))
            .one(&self.db)
            .await
            .map_err(db_error("查询活动"))?;
        let Some(event) = event else {
            return Ok(None);
        };

        let images = event_news_images::Entity::find()
            .filter(event_news_images::Column::EventNewsId.eq(id))
            .order_by_asc(event_news_images::Column::Order)
            .order_by_desc(event_news_images::Column::CreatedAt)
            .order_by_asc(event_news_images::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询活动图集"))?;

        Ok(Some(EventWithImages {
            event: event.into_event(),
            images: images.into_iter().map(|m| m.into_event_image()).collect(),
        }))
    }

    /// 删除活动及其图集
    pub async fn delete_event_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_error("开启事务"))?;

        let images = event_news_images::Entity::delete_many()
            .filter(event_news_images::Column::EventNewsId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_error("删除活动图集"))?;

        let result = event_news::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_error("删除活动"))?;

        txn.commit().await.map_err(db_error("提交事务"))?;

        if result.rows_affected > 0 {
            tracing::info!("活动 {} 已删除，同时删除 {} 张图片", id, images.rows_affected);
        }
        Ok(result.rows_affected > 0)
    }
}

//! 常用链接存储操作

use super::{SeaOrmStorage, db_error, now_timestamp, require_text};
use crate::entity::important_links;
use crate::errors::{FieldErrors, PortalError, Result};
use crate::models::links::{entities::ImportantLink, requests::CreateLinkRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_link_impl(&self, req: CreateLinkRequest) -> Result<ImportantLink> {
        let mut errors = FieldErrors::new();
        let title = require_text(&mut errors, "title", &req.title);
        let url = require_text(&mut errors, "url", &req.url);
        if !errors.is_empty() {
            return Err(PortalError::validation(errors));
        }

        let now = now_timestamp();
        let model = important_links::ActiveModel {
            title: Set(title),
            url: Set(url),
            icon: Set(req.icon),
            is_active: Set(req.is_active),
            order: Set(req.order),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建链接"))?;

        Ok(result.into_link())
    }

    /// 启用的链接，按 (order, -created_at) 排序
    pub async fn list_active_links_impl(&self) -> Result<Vec<ImportantLink>> {
        let result = important_links::Entity::find()
            .filter(important_links::Column::IsActive.eq(true))
            .order_by_asc(important_links::Column::Order)
            .order_by_desc(important_links::Column::CreatedAt)
            .order_by_desc(important_links::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询链接列表"))?;

        Ok(result.into_iter().map(|m| m.into_link()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(title: &str, order: i32, is_active: bool) -> CreateLinkRequest {
        CreateLinkRequest {
            title: title.into(),
            url: format!("https://{title}.gov.bd"),
            icon: String::new(),
            is_active,
            order,
        }
    }

    #[tokio::test]
    async fn test_active_links_ordered() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        storage.create_link_impl(link("board", 2, true)).await.unwrap();
        storage.create_link_impl(link("ministry", 1, true)).await.unwrap();
        storage.create_link_impl(link("old", 0, false)).await.unwrap();

        let titles: Vec<_> = storage
            .list_active_links_impl()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.title)
            .collect();
        assert_eq!(titles, ["ministry", "board"]);

        let err = storage.create_link_impl(link(" ", 0, true)).await.unwrap_err();
        assert!(err.field_errors().unwrap().contains_key("title"));
    }
}

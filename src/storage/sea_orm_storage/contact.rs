//! 留言存储操作

use super::{SeaOrmStorage, db_error, now_timestamp};
use crate::entity::contact_messages::{ActiveModel, Column, Entity as ContactMessages};
use crate::errors::Result;
use crate::models::{
    PaginatedResponse, PaginationInfo, PaginationQuery,
    contact::{entities::ContactMessage, requests::NewContactMessage},
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 保存已通过校验的留言
    pub async fn create_contact_message_impl(
        &self,
        msg: NewContactMessage,
    ) -> Result<ContactMessage> {
        let model = ActiveModel {
            name: Set(msg.name),
            phone: Set(msg.phone),
            title: Set(msg.title),
            message: Set(msg.message),
            is_read: Set(false),
            created_at: Set(now_timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("保存留言"))?;

        Ok(result.into_contact_message())
    }

    /// 分页列出留言，最新的在前
    pub async fn list_contact_messages_impl(
        &self,
        query: PaginationQuery,
    ) -> Result<PaginatedResponse<ContactMessage>> {
        let (page, size) = query.normalized();

        let paginator = ContactMessages::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询留言总数"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询留言页数"))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询留言列表"))?;

        Ok(PaginatedResponse {
            items: items.into_iter().map(|m| m.into_contact_message()).collect(),
            pagination: PaginationInfo {
                page,
                page_size: size,
                total,
                total_pages: pages,
            },
        })
    }

    pub async fn mark_contact_message_read_impl(&self, id: i64) -> Result<bool> {
        let result = ContactMessages::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_error("更新留言状态"))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str) -> NewContactMessage {
        NewContactMessage {
            name: name.into(),
            phone: "01700000000".into(),
            title: "Admission".into(),
            message: "When does admission start?".into(),
        }
    }

    #[tokio::test]
    async fn test_create_list_and_mark_read() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let first = storage
            .create_contact_message_impl(message("Rahim"))
            .await
            .unwrap();
        storage
            .create_contact_message_impl(message("Karim"))
            .await
            .unwrap();
        assert!(!first.is_read);

        let page = storage
            .list_contact_messages_impl(PaginationQuery::default())
            .await
            .unwrap();
        assert_eq!(page.pagination.total, 2);
        assert_eq!(page.items[0].name, "Karim");

        assert!(storage.mark_contact_message_read_impl(first.id).await.unwrap());
        assert!(!storage.mark_contact_message_read_impl(999).await.unwrap());

        let page = storage
            .list_contact_messages_impl(PaginationQuery::default())
            .await
            .unwrap();
        assert!(page.items.iter().any(|m| m.id == first.id && m.is_read));
    }
}

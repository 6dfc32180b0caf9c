//! 设施存储操作

use std::collections::{HashMap, HashSet};

use super::{SeaOrmStorage, db_error, now_timestamp, require_text, write_error};
use crate::entity::{facility_infos, facility_types};
use crate::errors::{FieldErrors, PortalError, Result};
use crate::models::facilities::{
    entities::{FacilityInfo, FacilityType, FacilityView},
    requests::{CreateFacilityRequest, CreateFacilityTypeRequest},
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建设施类型，名称唯一
    pub async fn create_facility_type_impl(
        &self,
        req: CreateFacilityTypeRequest,
    ) -> Result<FacilityType> {
        let mut errors = FieldErrors::new();
        let name = require_text(&mut errors, "name", &req.name);
        if !name.is_empty() {
            let taken = facility_types::Entity::find()
                .filter(facility_types::Column::Name.eq(name.as_str()))
                .count(&self.db)
                .await
                .map_err(db_error("查询设施类型"))?
                > 0;
            if taken {
                errors.insert("name".into(), format!("Facility type '{name}' already exists."));
            }
        }
        if !errors.is_empty() {
            return Err(PortalError::validation(errors));
        }

        let now = now_timestamp();
        let model = facility_types::ActiveModel {
            name: Set(name),
            order: Set(req.order),
            is_active: Set(req.is_active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "name", "创建设施类型"))?;

        Ok(result.into_facility_type())
    }

    /// 删除设施类型，所属设施保留并清空类型引用
    pub async fn delete_facility_type_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_error("开启事务"))?;

        facility_infos::Entity::update_many()
            .col_expr(
                facility_infos::Column::FacilityTypeId,
                Expr::value(Option::<i64>::None),
            )
            .filter(facility_infos::Column::FacilityTypeId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_error("清空设施类型引用"))?;

        let result = facility_types::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_error("删除设施类型"))?;

        txn.commit().await.map_err(db_error("提交事务"))?;
        Ok(result.rows_affected > 0)
    }

    pub async fn create_facility_impl(&self, req: CreateFacilityRequest) -> Result<FacilityInfo> {
        let mut errors = FieldErrors::new();
        let title = require_text(&mut errors, "title", &req.title);
        if let Some(type_id) = req.facility_type_id {
            let exists = facility_types::Entity::find_by_id(type_id)
                .one(&self.db)
                .await
                .map_err(db_error("查询设施类型"))?
                .is_some();
            if !exists {
                errors.insert(
                    "facility_type_id".into(),
                    format!("Facility type {type_id} does not exist."),
                );
            }
        }
        if !errors.is_empty() {
            return Err(PortalError::validation(errors));
        }

        let now = now_timestamp();
        let model = facility_infos::ActiveModel {
            facility_type_id: Set(req.facility_type_id),
            title: Set(title),
            description: Set(req.description),
            icon: Set(req.icon),
            count: Set(req.count),
            unit: Set(req.unit),
            image: Set(req.image.filter(|p| !p.trim().is_empty())),
            is_active: Set(req.is_active),
            order: Set(req.order),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建设施"))?;

        Ok(result.into_facility())
    }

    /// 启用的设施，按 order 排序，可按类型名称过滤
    pub async fn list_facilities_impl(&self, type_name: Option<&str>) -> Result<Vec<FacilityView>> {
        let mut select =
            facility_infos::Entity::find().filter(facility_infos::Column::IsActive.eq(true));

        if let Some(type_name) = type_name {
            let facility_type = facility_types::Entity::find()
                .filter(facility_types::Column::Name.eq(type_name))
                .one(&self.db)
                .await
                .map_err(db_error("查询设施类型"))?;
            match facility_type {
                Some(t) => {
                    select = select.filter(facility_infos::Column::FacilityTypeId.eq(t.id));
                }
                None => return Ok(Vec::new()),
            }
        }

        let rows = select
            .order_by_asc(facility_infos::Column::Order)
            .order_by_asc(facility_infos::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询设施列表"))?;

        let type_ids: HashSet<i64> = rows.iter().filter_map(|f| f.facility_type_id).collect();
        let type_names: HashMap<i64, String> = if type_ids.is_empty() {
            HashMap::new()
        } else {
            facility_types::Entity::find()
                .filter(facility_types::Column::Id.is_in(type_ids))
                .all(&self.db)
                .await
                .map_err(db_error("查询设施类型"))?
                .into_iter()
                .map(|t| (t.id, t.name))
                .collect()
        };

        Ok(rows
            .into_iter()
            .map(|model| {
                let facility = model.into_facility();
                FacilityView {
                    type_name: facility
                        .facility_type_id
                        .and_then(|id| type_names.get(&id).cloned()),
                    facility,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn storage() -> SeaOrmStorage {
        SeaOrmStorage::new_in_memory().await.unwrap()
    }

    fn facility_type(name: &str) -> CreateFacilityTypeRequest {
        CreateFacilityTypeRequest {
            name: name.into(),
            order: 0,
            is_active: true,
        }
    }

    fn facility(title: &str, type_id: Option<i64>, order: i32, is_active: bool) -> CreateFacilityRequest {
        CreateFacilityRequest {
            facility_type_id: type_id,
            title: title.into(),
            description: String::new(),
            icon: "fa-flask".into(),
            count: 3,
            unit: "rooms".into(),
            image: None,
            is_active,
            order,
        }
    }

    #[tokio::test]
    async fn test_facility_type_name_unique() {
        let storage = storage().await;
        storage
            .create_facility_type_impl(facility_type("Lab"))
            .await
            .unwrap();
        let err = storage
            .create_facility_type_impl(facility_type("Lab"))
            .await
            .unwrap_err();
        assert!(err.field_errors().unwrap().contains_key("name"));
    }

    #[tokio::test]
    async fn test_list_filters_and_orders() {
        let storage = storage().await;
        let lab = storage
            .create_facility_type_impl(facility_type("Lab"))
            .await
            .unwrap();
        let sports = storage
            .create_facility_type_impl(facility_type("Sports"))
            .await
            .unwrap();

        storage
            .create_facility_impl(facility("Chemistry", Some(lab.id), 2, true))
            .await
            .unwrap();
        storage
            .create_facility_impl(facility("Physics", Some(lab.id), 1, true))
            .await
            .unwrap();
        storage
            .create_facility_impl(facility("Field", Some(sports.id), 0, true))
            .await
            .unwrap();
        storage
            .create_facility_impl(facility("Closed", Some(lab.id), 0, false))
            .await
            .unwrap();

        let labs = storage.list_facilities_impl(Some("Lab")).await.unwrap();
        let titles: Vec<_> = labs.iter().map(|v| v.facility.title.as_str()).collect();
        assert_eq!(titles, ["Physics", "Chemistry"]);
        assert_eq!(labs[0].type_name.as_deref(), Some("Lab"));

        assert_eq!(storage.list_facilities_impl(None).await.unwrap().len(), 3);
        assert!(storage.list_facilities_impl(Some("Library")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_type_keeps_facilities() {
        let storage = storage().await;
        let lab = storage
            .create_facility_type_impl(facility_type("Lab"))
            .await
            .unwrap();
        storage
            .create_facility_impl(facility("Physics", Some(lab.id), 0, true))
            .await
            .unwrap();

        assert!(storage.delete_facility_type_impl(lab.id).await.unwrap());
        assert!(!storage.delete_facility_type_impl(lab.id).await.unwrap());

        let all = storage.list_facilities_impl(None).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].facility.facility_type_id, None);
        assert_eq!(all[0].type_name, None);
        assert!(storage.list_facilities_impl(Some("Lab")).await.unwrap().is_empty());

        // 名称释放后可重新创建
        storage
            .create_facility_type_impl(facility_type("Lab"))
            .await
            .unwrap();
    }
}

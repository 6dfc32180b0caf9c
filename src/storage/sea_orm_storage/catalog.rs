//! 班级、系部、通知类型、课表类型存储操作

use super::documents::{Reference, detach_documents};
use super::{SeaOrmStorage, db_error, now_timestamp, require_text, write_error};
use crate::entity::{classes, departments, notice_types, notices, routine_types, routines, students};
use crate::errors::{FieldErrors, PortalError, Result};
use crate::models::catalog::{
    entities::{Class, Department, NoticeType, RoutineType},
    requests::{
        CreateClassRequest, CreateDepartmentRequest, CreateTypeRequest, UpdateClassRequest,
        UpdateDepartmentRequest,
    },
};
use crate::utils::slugify;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

/// 显式给定的 slug 优先，否则由名称生成；结果为空时记录校验错误
fn resolve_slug(errors: &mut FieldErrors, explicit: Option<&str>, source: &str) -> String {
    let slug = match explicit.map(str::trim) {
        Some(s) if !s.is_empty() => slugify(s),
        _ => slugify(source),
    };
    if slug.is_empty() {
        errors.insert(
            "slug".into(),
            "Could not derive a slug from the name. Provide a slug containing ASCII letters or digits."
                .into(),
        );
    }
    slug
}

fn into_result<T>(errors: FieldErrors, value: T) -> Result<T> {
    if errors.is_empty() {
        Ok(value)
    } else {
        Err(PortalError::validation(errors))
    }
}

/// 清空学生对班级/系部的引用
async fn detach_students<C: ConnectionTrait>(conn: &C, reference: Reference, id: i64) -> Result<u64> {
    let column = match reference {
        Reference::Class => students::Column::ClassId,
        Reference::Department => students::Column::DepartmentId,
    };
    let result = students::Entity::update_many()
        .col_expr(column, Expr::value(Option::<i64>::None))
        .filter(column.eq(id))
        .exec(conn)
        .await
        .map_err(db_error("清空学生引用"))?;
    Ok(result.rows_affected)
}

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let mut errors = FieldErrors::new();
        let name = require_text(&mut errors, "name", &req.name);
        let name_en = require_text(&mut errors, "name_en", &req.name_en);
        self.check_numeric_value(&mut errors, req.numeric_value, None)
            .await?;
        into_result(errors, ())?;

        let now = now_timestamp();
        let model = classes::ActiveModel {
            name: Set(name),
            name_en: Set(name_en),
            numeric_value: Set(req.numeric_value),
            description: Set(req.description),
            male_student: Set(req.male_student),
            female_student: Set(req.female_student),
            show_students_publicly: Set(req.show_students_publicly),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "numeric_value", "创建班级"))?;

        Ok(result.into_class())
    }

    /// 更新班级信息
    pub async fn update_class_impl(
        &self,
        id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        // 先检查班级是否存在
        if self.get_class_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut errors = FieldErrors::new();
        let mut model = classes::ActiveModel {
            id: Set(id),
            updated_at: Set(now_timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(require_text(&mut errors, "name", &name));
        }
        if let Some(name_en) = update.name_en {
            model.name_en = Set(require_text(&mut errors, "name_en", &name_en));
        }
        if let Some(numeric_value) = update.numeric_value {
            self.check_numeric_value(&mut errors, numeric_value, Some(id))
                .await?;
            model.numeric_value = Set(numeric_value);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(male) = update.male_student {
            model.male_student = Set(male);
        }
        if let Some(female) = update.female_student {
            model.female_student = Set(female);
        }
        if let Some(show) = update.show_students_publicly {
            model.show_students_publicly = Set(show);
        }
        into_result(errors, ())?;

        model
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "numeric_value", "更新班级"))?;

        self.get_class_impl(id).await
    }

    /// 通过 ID 获取班级
    pub async fn get_class_impl(&self, id: i64) -> Result<Option<Class>> {
        let result = classes::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询班级"))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 列出全部班级，按 numeric_value 排序
    pub async fn list_classes_impl(&self) -> Result<Vec<Class>> {
        let result = classes::Entity::find()
            .order_by_asc(classes::Column::NumericValue)
            .all(&self.db)
            .await
            .map_err(db_error("查询班级列表"))?;

        Ok(result.into_iter().map(|m| m.into_class()).collect())
    }

    /// 删除班级
    ///
    /// 学生与六种文档对该班级的引用在同一事务内清空，再删除班级本身。
    pub async fn delete_class_impl(&self, id: i64) -> Result<Option<u64>> {
        let txn = self.db.begin().await.map_err(db_error("开启事务"))?;

        let exists = classes::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_error("查询班级"))?
            .is_some();
        if !exists {
            return Ok(None);
        }

        let mut detached = detach_students(&txn, Reference::Class, id).await?;
        detached += detach_documents(&txn, Reference::Class, id).await?;

        classes::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_error("删除班级"))?;

        txn.commit().await.map_err(db_error("提交事务"))?;

        tracing::info!("班级 {} 已删除，清空 {} 条引用", id, detached);
        Ok(Some(detached))
    }

    async fn check_numeric_value(
        &self,
        errors: &mut FieldErrors,
        numeric_value: i32,
        exclude_id: Option<i64>,
    ) -> Result<()> {
        let mut select =
            classes::Entity::find().filter(classes::Column::NumericValue.eq(numeric_value));
        if let Some(id) = exclude_id {
            select = select.filter(classes::Column::Id.ne(id));
        }
        let taken = select
            .count(&self.db)
            .await
            .map_err(db_error("查询班级"))?
            > 0;
        if taken {
            errors.insert(
                "numeric_value".into(),
                format!("A class with numeric value {numeric_value} already exists."),
            );
        }
        Ok(())
    }

    /// 创建系部
    pub async fn create_department_impl(&self, req: CreateDepartmentRequest) -> Result<Department> {
        let mut errors = FieldErrors::new();
        let name = require_text(&mut errors, "name", &req.name);
        let name_en = require_text(&mut errors, "name_en", &req.name_en);
        let slug = resolve_slug(&mut errors, req.slug.as_deref(), &name_en);
        if !slug.is_empty() {
            self.check_department_slug(&mut errors, &slug, None).await?;
        }
        into_result(errors, ())?;

        let now = now_timestamp();
        let model = departments::ActiveModel {
            name: Set(name),
            name_en: Set(name_en),
            icon: Set(req.icon),
            description: Set(req.description),
            male_student: Set(req.male_student),
            female_student: Set(req.female_student),
            slug: Set(slug),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "slug", "创建系部"))?;

        Ok(result.into_department())
    }

    /// 更新系部信息，显式提供的 slug 会重新规范化
    pub async fn update_department_impl(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        let existing = departments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询系部"))?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut errors = FieldErrors::new();
        let mut model = departments::ActiveModel {
            id: Set(id),
            updated_at: Set(now_timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(require_text(&mut errors, "name", &name));
        }
        if let Some(name_en) = update.name_en {
            model.name_en = Set(require_text(&mut errors, "name_en", &name_en));
        }
        if let Some(icon) = update.icon {
            model.icon = Set(icon);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(male) = update.male_student {
            model.male_student = Set(male);
        }
        if let Some(female) = update.female_student {
            model.female_student = Set(female);
        }
        if let Some(slug) = update.slug {
            let slug = resolve_slug(&mut errors, Some(&slug), &existing.name_en);
            if !slug.is_empty() && slug != existing.slug {
                self.check_department_slug(&mut errors, &slug, Some(id))
                    .await?;
            }
            model.slug = Set(slug);
        }
        into_result(errors, ())?;

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "slug", "更新系部"))?;

        Ok(Some(updated.into_department()))
    }

    /// 通过 slug 获取系部
    pub async fn get_department_by_slug_impl(&self, slug: &str) -> Result<Option<Department>> {
        let result = departments::Entity::find()
            .filter(departments::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(db_error("查询系部"))?;

        Ok(result.map(|m| m.into_department()))
    }

    pub async fn list_departments_impl(&self) -> Result<Vec<Department>> {
        let result = departments::Entity::find()
            .order_by_asc(departments::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_error("查询系部列表"))?;

        Ok(result.into_iter().map(|m| m.into_department()).collect())
    }

    /// 删除系部，引用处理与班级相同
    pub async fn delete_department_impl(&self, id: i64) -> Result<Option<u64>> {
        let txn = self.db.begin().await.map_err(db_error("开启事务"))?;

        let exists = departments::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_error("查询系部"))?
            .is_some();
        if !exists {
            return Ok(None);
        }

        let mut detached = detach_students(&txn, Reference::Department, id).await?;
        detached += detach_documents(&txn, Reference::Department, id).await?;

        departments::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_error("删除系部"))?;

        txn.commit().await.map_err(db_error("提交事务"))?;

        tracing::info!("系部 {} 已删除，清空 {} 条引用", id, detached);
        Ok(Some(detached))
    }

    async fn check_department_slug(
        &self,
        errors: &mut FieldErrors,
        slug: &str,
        exclude_id: Option<i64>,
    ) -> Result<()> {
        let mut select = departments::Entity::find().filter(departments::Column::Slug.eq(slug));
        if let Some(id) = exclude_id {
            select = select.filter(departments::Column::Id.ne(id));
        }
        let taken = select
            .count(&self.db)
            .await
            .map_err(db_error("查询系部"))?
            > 0;
        if taken {
            errors.insert(
                "slug".into(),
                format!("A department with slug '{slug}' already exists."),
            );
        }
        Ok(())
    }

    /// 创建通知类型，name 与 slug 均需唯一
    pub async fn create_notice_type_impl(&self, req: CreateTypeRequest) -> Result<NoticeType> {
        let mut errors = FieldErrors::new();
        let name = require_text(&mut errors, "name", &req.name);
        let slug = resolve_slug(&mut errors, req.slug.as_deref(), &name);

        if !name.is_empty() {
            let taken = notice_types::Entity::find()
                .filter(notice_types::Column::Name.eq(name.as_str()))
                .count(&self.db)
                .await
                .map_err(db_error("查询通知类型"))?
                > 0;
            if taken {
                errors.insert("name".into(), format!("Notice type '{name}' already exists."));
            }
        }
        if !slug.is_empty() {
            let taken = notice_types::Entity::find()
                .filter(notice_types::Column::Slug.eq(slug.as_str()))
                .count(&self.db)
                .await
                .map_err(db_error("查询通知类型"))?
                > 0;
            if taken {
                errors.insert("slug".into(), format!("Notice type slug '{slug}' already exists."));
            }
        }
        into_result(errors, ())?;

        let now = now_timestamp();
        let model = notice_types::ActiveModel {
            name: Set(name),
            slug: Set(slug),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "slug", "创建通知类型"))?;

        Ok(result.into_notice_type())
    }

    pub async fn list_notice_types_impl(&self) -> Result<Vec<NoticeType>> {
        let result = notice_types::Entity::find()
            .order_by_asc(notice_types::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_error("查询通知类型列表"))?;

        Ok(result.into_iter().map(|m| m.into_notice_type()).collect())
    }

    /// 删除通知类型及其下全部通知
    pub async fn delete_notice_type_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_error("开启事务"))?;

        let removed = notices::Entity::delete_many()
            .filter(notices::Column::NoticeTypeId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_error("删除通知"))?;

        let result = notice_types::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_error("删除通知类型"))?;

        if result.rows_affected == 0 {
            // 类型不存在时不应删除任何通知
            txn.rollback().await.map_err(db_error("回滚事务"))?;
            return Ok(false);
        }

        txn.commit().await.map_err(db_error("提交事务"))?;
        tracing::info!(
            "通知类型 {} 已删除，同时删除 {} 条通知",
            id,
            removed.rows_affected
        );
        Ok(true)
    }

    /// 创建课表类型
    pub async fn create_routine_type_impl(&self, req: CreateTypeRequest) -> Result<RoutineType> {
        let mut errors = FieldErrors::new();
        let name = require_text(&mut errors, "name", &req.name);
        let slug = resolve_slug(&mut errors, req.slug.as_deref(), &name);
        if !slug.is_empty() {
            let taken = routine_types::Entity::find()
                .filter(routine_types::Column::Slug.eq(slug.as_str()))
                .count(&self.db)
                .await
                .map_err(db_error("查询课表类型"))?
                > 0;
            if taken {
                errors.insert("slug".into(), format!("Routine type slug '{slug}' already exists."));
            }
        }
        into_result(errors, ())?;

        let model = routine_types::ActiveModel {
            name: Set(name),
            slug: Set(slug),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "slug", "创建课表类型"))?;

        Ok(result.into_routine_type())
    }

    pub async fn list_routine_types_impl(&self) -> Result<Vec<RoutineType>> {
        let result = routine_types::Entity::find()
            .order_by_asc(routine_types::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_error("查询课表类型列表"))?;

        Ok(result.into_iter().map(|m| m.into_routine_type()).collect())
    }

    /// 删除课表类型，课表保留但类型置空
    pub async fn delete_routine_type_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_error("开启事务"))?;

        routines::Entity::update_many()
            .col_expr(routines::Column::RoutineTypeId, Expr::value(Option::<i64>::None))
            .filter(routines::Column::RoutineTypeId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_error("清空课表类型引用"))?;

        let result = routine_types::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_error("删除课表类型"))?;

        txn.commit().await.map_err(db_error("提交事务"))?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Criteria;
    use crate::models::documents::entities::{DocumentKind, RoutineCategory};
    use crate::models::documents::requests::CreateDocumentRequest;
    use crate::models::students::entities::Gender;
    use crate::models::students::requests::CreateStudentRequest;

    async fn storage() -> SeaOrmStorage {
        SeaOrmStorage::new_in_memory().await.unwrap()
    }

    fn class_request(numeric_value: i32) -> CreateClassRequest {
        CreateClassRequest {
            name: format!("শ্রেণি {numeric_value}"),
            name_en: format!("Class {numeric_value}"),
            numeric_value,
            description: String::new(),
            male_student: 10,
            female_student: 12,
            show_students_publicly: true,
        }
    }

    fn department_request(name: &str, name_en: &str) -> CreateDepartmentRequest {
        CreateDepartmentRequest {
            name: name.to_string(),
            name_en: name_en.to_string(),
            icon: String::new(),
            description: String::new(),
            male_student: 0,
            female_student: 0,
            slug: None,
        }
    }

    fn student(roll: &str, class_id: Option<i64>, department_id: Option<i64>) -> CreateStudentRequest {
        CreateStudentRequest {
            name: format!("Student {roll}"),
            gender: Gender::Male,
            roll_number: roll.to_string(),
            registration_number: format!("REG-{roll}"),
            class_id,
            department_id,
            photo: None,
            guardian_name: String::new(),
            guardian_phone: String::new(),
            address: String::new(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_numeric_value_leaves_store_unchanged() {
        let storage = storage().await;
        storage.create_class_impl(class_request(6)).await.unwrap();

        let err = storage.create_class_impl(class_request(6)).await.unwrap_err();
        assert!(err.field_errors().unwrap().contains_key("numeric_value"));
        assert_eq!(storage.list_classes_impl().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_classes_ordered_by_numeric_value() {
        let storage = storage().await;
        for value in [9, 6, 8] {
            storage.create_class_impl(class_request(value)).await.unwrap();
        }
        let values: Vec<_> = storage
            .list_classes_impl()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.numeric_value)
            .collect();
        assert_eq!(values, [6, 8, 9]);
    }

    #[tokio::test]
    async fn test_update_class_checks_other_rows_only() {
        let storage = storage().await;
        let six = storage.create_class_impl(class_request(6)).await.unwrap();
        storage.create_class_impl(class_request(7)).await.unwrap();

        // 保持自身的值不算冲突
        let same = UpdateClassRequest {
            numeric_value: Some(6),
            show_students_publicly: Some(false),
            ..Default::default()
        };
        let updated = storage.update_class_impl(six.id, same).await.unwrap().unwrap();
        assert!(!updated.show_students_publicly);

        let clash = UpdateClassRequest {
            numeric_value: Some(7),
            ..Default::default()
        };
        assert!(storage.update_class_impl(six.id, clash).await.is_err());
        assert!(
            storage
                .update_class_impl(999, UpdateClassRequest::default())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_department_slug_derivation() {
        let storage = storage().await;
        let science = storage
            .create_department_impl(department_request("বিজ্ঞান", "Science Group"))
            .await
            .unwrap();
        assert_eq!(science.slug, "science-group");

        // 同名生成相同 slug，不自动加后缀
        let err = storage
            .create_department_impl(department_request("বিজ্ঞান", "Science  Group"))
            .await
            .unwrap_err();
        assert!(err.field_errors().unwrap().contains_key("slug"));

        let err = storage
            .create_department_impl(department_request("মানবিক", "মানবিক"))
            .await
            .unwrap_err();
        assert!(err.field_errors().unwrap().contains_key("slug"));
    }

    #[tokio::test]
    async fn test_delete_department_nullifies_students() {
        let storage = storage().await;
        let six = storage.create_class_impl(class_request(6)).await.unwrap();
        let science = storage
            .create_department_impl(department_request("বিজ্ঞান", "Science"))
            .await
            .unwrap();
        for roll in ["1", "2", "3"] {
            storage
                .create_student_impl(student(roll, Some(six.id), Some(science.id)))
                .await
                .unwrap();
        }
        storage
            .create_student_impl(student("4", Some(six.id), None))
            .await
            .unwrap();

        let detached = storage.delete_department_impl(science.id).await.unwrap();
        assert_eq!(detached, Some(3));

        let remaining = students::Entity::find().all(&storage.db).await.unwrap();
        assert_eq!(remaining.len(), 4);
        assert!(remaining.iter().all(|s| s.department_id.is_none()));
        assert!(storage.get_department_by_slug_impl("science").await.unwrap().is_none());
        assert_eq!(storage.delete_department_impl(science.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_class_detaches_documents() {
        let storage = storage().await;
        let six = storage.create_class_impl(class_request(6)).await.unwrap();
        storage
            .create_student_impl(student("1", Some(six.id), None))
            .await
            .unwrap();

        let mut book = CreateDocumentRequest::new("Math", "books/math.pdf");
        book.class_id = Some(six.id);
        storage
            .create_document_impl(DocumentKind::Book, book)
            .await
            .unwrap();
        let mut routine = CreateDocumentRequest::new("Weekly", "routines/weekly.pdf");
        routine.class_id = Some(six.id);
        routine.category = Some(RoutineCategory::Class);
        storage
            .create_document_impl(DocumentKind::Routine, routine)
            .await
            .unwrap();

        assert_eq!(storage.delete_class_impl(six.id).await.unwrap(), Some(3));

        let books = storage
            .list_documents_impl(DocumentKind::Book, &Criteria::default(), false)
            .await
            .unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].document.class_id, None);
        assert_eq!(books[0].class_name, None);
    }

    #[tokio::test]
    async fn test_notice_type_uniqueness_and_cascade() {
        let storage = storage().await;
        let general = storage
            .create_notice_type_impl(CreateTypeRequest {
                name: "General Notice".into(),
                slug: None,
            })
            .await
            .unwrap();
        assert_eq!(general.slug, "general-notice");

        let err = storage
            .create_notice_type_impl(CreateTypeRequest {
                name: "General Notice".into(),
                slug: Some("other".into()),
            })
            .await
            .unwrap_err();
        assert!(err.field_errors().unwrap().contains_key("name"));

        let mut notice = CreateDocumentRequest::new("Holiday", "notices/holiday.pdf");
        notice.notice_type_id = Some(general.id);
        notice.short_description = Some("Closed on Friday".into());
        storage
            .create_document_impl(DocumentKind::Notice, notice)
            .await
            .unwrap();

        assert!(storage.delete_notice_type_impl(general.id).await.unwrap());
        let notices = storage
            .list_documents_impl(DocumentKind::Notice, &Criteria::default(), false)
            .await
            .unwrap();
        assert!(notices.is_empty());
        assert!(!storage.delete_notice_type_impl(general.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_routine_type_keeps_routines() {
        let storage = storage().await;
        let midterm = storage
            .create_routine_type_impl(CreateTypeRequest {
                name: "Midterm".into(),
                slug: None,
            })
            .await
            .unwrap();

        let mut routine = CreateDocumentRequest::new("Midterm", "routines/midterm.pdf");
        routine.category = Some(RoutineCategory::Exam);
        routine.routine_type_id = Some(midterm.id);
        storage
            .create_document_impl(DocumentKind::Routine, routine)
            .await
            .unwrap();

        assert!(storage.delete_routine_type_impl(midterm.id).await.unwrap());
        let routines = storage
            .list_documents_impl(DocumentKind::Routine, &Criteria::default(), false)
            .await
            .unwrap();
        assert_eq!(routines.len(), 1);
        assert_eq!(routines[0].type_name, None);
    }
}

//! 文档类存储操作
//!
//! 通知、课表、书籍、大纲、成绩、招生六张表结构相同（标题、文件、可选班级/系部、启用标记），
//! 通过 `DocumentEntity` 共享过滤、排序、删除与引用清空逻辑。

use std::collections::{HashMap, HashSet};

use super::{SeaOrmStorage, db_error, now_timestamp, require_text};
use crate::entity::{
    admissions, books, classes, departments, notice_types, notices, results, routine_types,
    routines, syllabuses,
};
use crate::errors::{FieldErrors, PortalError, Result};
use crate::models::{
    Criteria, Scope,
    documents::{
        entities::{Document, DocumentKind, DocumentView, RoutineCategory},
        requests::CreateDocumentRequest,
    },
};
use crate::utils::extension_of;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

/// 文档引用的上级记录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reference {
    Class,
    Department,
}

/// 六种文档表的公共能力
pub(crate) trait DocumentEntity: EntityTrait {
    const KIND: DocumentKind;

    fn id_column() -> Self::Column;
    fn class_column() -> Self::Column;
    fn department_column() -> Self::Column;
    fn active_column() -> Self::Column;
    /// 列表排序列（倒序）
    fn sort_column() -> Self::Column;
    fn to_document(model: Self::Model) -> Document;

    fn reference_column(reference: Reference) -> Self::Column {
        match reference {
            Reference::Class => Self::class_column(),
            Reference::Department => Self::department_column(),
        }
    }
}

macro_rules! impl_document_entity {
    ($module:ident, $kind:expr, $sort:ident) => {
        impl DocumentEntity for $module::Entity {
            const KIND: DocumentKind = $kind;

            fn id_column() -> Self::Column {
                $module::Column::Id
            }

            fn class_column() -> Self::Column {
                $module::Column::ClassId
            }

            fn department_column() -> Self::Column {
                $module::Column::DepartmentId
            }

            fn active_column() -> Self::Column {
                $module::Column::IsActive
            }

            fn sort_column() -> Self::Column {
                $module::Column::$sort
            }

            fn to_document(model: Self::Model) -> Document {
                model.into_document()
            }
        }
    };
}

impl_document_entity!(notices, DocumentKind::Notice, CreatedAt);
impl_document_entity!(routines, DocumentKind::Routine, UpdatedAt);
impl_document_entity!(books, DocumentKind::Book, UpdatedAt);
impl_document_entity!(syllabuses, DocumentKind::Syllabus, UpdatedAt);
impl_document_entity!(results, DocumentKind::Result, CreatedAt);
impl_document_entity!(admissions, DocumentKind::Admission, CreatedAt);

/// 按文档种类选择实体类型后执行同一段代码
macro_rules! with_document_entity {
    ($kind:expr, $entity:ident => $body:expr) => {
        match $kind {
            DocumentKind::Notice => {
                type $entity = notices::Entity;
                $body
            }
            DocumentKind::Routine => {
                type $entity = routines::Entity;
                $body
            }
            DocumentKind::Book => {
                type $entity = books::Entity;
                $body
            }
            DocumentKind::Syllabus => {
                type $entity = syllabuses::Entity;
                $body
            }
            DocumentKind::Result => {
                type $entity = results::Entity;
                $body
            }
            DocumentKind::Admission => {
                type $entity = admissions::Entity;
                $body
            }
        }
    };
}

/// 清空一种文档对班级/系部的引用，返回受影响行数
async fn detach_kind<E, C>(conn: &C, reference: Reference, id: i64) -> Result<u64>
where
    E: DocumentEntity,
    C: ConnectionTrait,
{
    let column = E::reference_column(reference);
    let result = E::update_many()
        .col_expr(column, Expr::value(Option::<i64>::None))
        .filter(column.eq(id))
        .exec(conn)
        .await
        .map_err(db_error("清空文档引用"))?;
    if result.rows_affected > 0 {
        tracing::debug!(
            "已清空 {} 条{}对 {:?} {} 的引用",
            result.rows_affected,
            E::KIND.label(),
            reference,
            id
        );
    }
    Ok(result.rows_affected)
}

/// 清空全部文档表对班级/系部的引用，需在删除上级记录的事务中调用
pub(crate) async fn detach_documents<C: ConnectionTrait>(
    conn: &C,
    reference: Reference,
    id: i64,
) -> Result<u64> {
    let mut detached = 0;
    for kind in DocumentKind::ALL {
        detached += with_document_entity!(kind, E => detach_kind::<E, C>(conn, reference, id).await?);
    }
    Ok(detached)
}

async fn find_documents<E, C>(conn: &C, condition: Condition) -> Result<Vec<Document>>
where
    E: DocumentEntity,
    C: ConnectionTrait,
{
    let models = E::find()
        .filter(condition)
        .order_by_desc(E::sort_column())
        .order_by_desc(E::id_column())
        .all(conn)
        .await
        .map_err(db_error("查询文档列表"))?;
    Ok(models.into_iter().map(E::to_document).collect())
}

async fn find_document<E, C>(conn: &C, id: i64) -> Result<Option<Document>>
where
    E: DocumentEntity,
    C: ConnectionTrait,
{
    let model = E::find()
        .filter(E::id_column().eq(id))
        .one(conn)
        .await
        .map_err(db_error("查询文档"))?;
    Ok(model.map(E::to_document))
}

async fn delete_document<E, C>(conn: &C, id: i64) -> Result<bool>
where
    E: DocumentEntity,
    C: ConnectionTrait,
{
    let result = E::delete_many()
        .filter(E::id_column().eq(id))
        .exec(conn)
        .await
        .map_err(db_error("删除文档"))?;
    Ok(result.rows_affected > 0)
}

/// 解析后的过滤范围，系部已换成 ID
#[derive(Debug, Clone, Copy)]
enum ScopeFilter {
    Unscoped,
    Class(i64),
    Department(i64),
}

fn base_condition<E: DocumentEntity>(scope: ScopeFilter, public_only: bool) -> Condition {
    let mut condition = Condition::all();
    match scope {
        ScopeFilter::Class(id) => condition = condition.add(E::class_column().eq(id)),
        ScopeFilter::Department(id) => condition = condition.add(E::department_column().eq(id)),
        ScopeFilter::Unscoped => {}
    }
    if public_only {
        condition = condition.add(E::active_column().eq(true));
    }
    condition
}

/// 校验通过、待写入的公共字段
struct DocumentFields {
    title: String,
    file: String,
    class_id: Option<i64>,
    department_id: Option<i64>,
    is_active: bool,
    now: i64,
}

impl SeaOrmStorage {
    /// 按过滤条件列出文档
    ///
    /// 班级优先于系部；系部 slug 或通知类型 slug 不存在时返回空列表。
    /// 公开列表中的课表默认只看 `class` 类别。
    pub async fn list_documents_impl(
        &self,
        kind: DocumentKind,
        criteria: &Criteria,
        public_only: bool,
    ) -> Result<Vec<DocumentView>> {
        let scope = match criteria.scope() {
            Scope::Class(class_id) => ScopeFilter::Class(class_id),
            Scope::Department(slug) => match self.get_department_by_slug_impl(&slug).await? {
                Some(department) => ScopeFilter::Department(department.id),
                None => return Ok(Vec::new()),
            },
            Scope::All => ScopeFilter::Unscoped,
        };
        let mut condition =
            with_document_entity!(kind, E => base_condition::<E>(scope, public_only));

        match kind {
            DocumentKind::Notice => {
                if let Some(slug) = criteria.kind_filter() {
                    let notice_type = notice_types::Entity::find()
                        .filter(notice_types::Column::Slug.eq(slug))
                        .one(&self.db)
                        .await
                        .map_err(db_error("查询通知类型"))?;
                    match notice_type {
                        Some(t) => {
                            condition = condition.add(notices::Column::NoticeTypeId.eq(t.id));
                        }
                        None => return Ok(Vec::new()),
                    }
                }
            }
            DocumentKind::Routine => {
                let category = criteria
                    .kind_filter()
                    .or(public_only.then_some(RoutineCategory::CLASS));
                if let Some(category) = category {
                    condition = condition.add(routines::Column::Category.eq(category));
                }
            }
            _ => {}
        }

        let documents =
            with_document_entity!(kind, E => find_documents::<E, _>(&self.db, condition).await?);
        self.attach_names(documents).await
    }

    pub async fn get_document_impl(&self, kind: DocumentKind, id: i64) -> Result<Option<Document>> {
        with_document_entity!(kind, E => find_document::<E, _>(&self.db, id).await)
    }

    pub async fn delete_document_impl(&self, kind: DocumentKind, id: i64) -> Result<bool> {
        with_document_entity!(kind, E => delete_document::<E, _>(&self.db, id).await)
    }

    /// 创建文档
    pub async fn create_document_impl(
        &self,
        kind: DocumentKind,
        req: CreateDocumentRequest,
    ) -> Result<Document> {
        let mut errors = FieldErrors::new();
        let title = require_text(&mut errors, "title", &req.title);
        let file = require_text(&mut errors, "file", &req.file);

        if !file.is_empty() {
            let extension = extension_of(&file).unwrap_or_default();
            if !kind.allowed_extensions().contains(&extension.as_str()) {
                errors.insert(
                    "file".into(),
                    format!(
                        "File extension '{extension}' is not allowed. Allowed extensions are: {}.",
                        kind.allowed_extensions().join(", ")
                    ),
                );
            }
        }

        self.check_references(&mut errors, req.class_id, req.department_id)
            .await?;

        // 种类特有字段
        let mut short_description = String::new();
        if kind == DocumentKind::Notice {
            short_description = require_text(
                &mut errors,
                "short_description",
                req.short_description.as_deref().unwrap_or_default(),
            );
            match req.notice_type_id {
                Some(id) => {
                    let exists = notice_types::Entity::find_by_id(id)
                        .one(&self.db)
                        .await
                        .map_err(db_error("查询通知类型"))?
                        .is_some();
                    if !exists {
                        errors.insert("notice_type_id".into(), format!("Notice type {id} does not exist."));
                    }
                }
                None => {
                    errors.insert("notice_type_id".into(), "This field is required.".into());
                }
            }
        }
        if kind == DocumentKind::Routine {
            if req.category.is_none() {
                errors.insert("category".into(), "This field is required.".into());
            }
            if let Some(id) = req.routine_type_id {
                let exists = routine_types::Entity::find_by_id(id)
                    .one(&self.db)
                    .await
                    .map_err(db_error("查询课表类型"))?
                    .is_some();
                if !exists {
                    errors.insert("routine_type_id".into(), format!("Routine type {id} does not exist."));
                }
            }
        }

        if !errors.is_empty() {
            return Err(PortalError::validation(errors));
        }

        let fields = DocumentFields {
            title,
            file,
            class_id: req.class_id,
            department_id: req.department_id,
            is_active: req.is_active,
            now: now_timestamp(),
        };

        let document = match kind {
            DocumentKind::Notice => notices::ActiveModel {
                title: Set(fields.title),
                file: Set(fields.file),
                class_id: Set(fields.class_id),
                department_id: Set(fields.department_id),
                is_active: Set(fields.is_active),
                created_at: Set(fields.now),
                updated_at: Set(fields.now),
                short_description: Set(short_description),
                notice_type_id: Set(req.notice_type_id.unwrap_or_default()),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map(notices::Model::into_document),
            DocumentKind::Routine => routines::ActiveModel {
                title: Set(fields.title),
                file: Set(fields.file),
                class_id: Set(fields.class_id),
                department_id: Set(fields.department_id),
                is_active: Set(fields.is_active),
                created_at: Set(fields.now),
                updated_at: Set(fields.now),
                category: Set(req
                    .category
                    .unwrap_or(RoutineCategory::Class)
                    .as_str()
                    .to_string()),
                routine_type_id: Set(req.routine_type_id),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map(routines::Model::into_document),
            DocumentKind::Book => books::ActiveModel {
                title: Set(fields.title),
                file: Set(fields.file),
                class_id: Set(fields.class_id),
                department_id: Set(fields.department_id),
                is_active: Set(fields.is_active),
                created_at: Set(fields.now),
                updated_at: Set(fields.now),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map(books::Model::into_document),
            DocumentKind::Syllabus => syllabuses::ActiveModel {
                title: Set(fields.title),
                file: Set(fields.file),
                class_id: Set(fields.class_id),
                department_id: Set(fields.department_id),
                is_active: Set(fields.is_active),
                created_at: Set(fields.now),
                updated_at: Set(fields.now),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map(syllabuses::Model::into_document),
            DocumentKind::Result => results::ActiveModel {
                title: Set(fields.title),
                file: Set(fields.file),
                class_id: Set(fields.class_id),
                department_id: Set(fields.department_id),
                is_active: Set(fields.is_active),
                created_at: Set(fields.now),
                updated_at: Set(fields.now),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map(results::Model::into_document),
            DocumentKind::Admission => admissions::ActiveModel {
                title: Set(fields.title),
                file: Set(fields.file),
                class_id: Set(fields.class_id),
                department_id: Set(fields.department_id),
                is_active: Set(fields.is_active),
                created_at: Set(fields.now),
                updated_at: Set(fields.now),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map(admissions::Model::into_document),
        };

        document.map_err(|e| PortalError::database_operation(format!("创建{}失败: {e}", kind.label())))
    }

    /// 检查班级与系部引用是否存在
    pub(crate) async fn check_references(
        &self,
        errors: &mut FieldErrors,
        class_id: Option<i64>,
        department_id: Option<i64>,
    ) -> Result<()> {
        if let Some(id) = class_id {
            let exists = classes::Entity::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(db_error("查询班级"))?
                .is_some();
            if !exists {
                errors.insert("class_id".into(), format!("Class {id} does not exist."));
            }
        }
        if let Some(id) = department_id {
            let exists = departments::Entity::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(db_error("查询系部"))?
                .is_some();
            if !exists {
                errors.insert("department_id".into(), format!("Department {id} does not exist."));
            }
        }
        Ok(())
    }

    /// 批量查出关联名称
    async fn attach_names(&self, documents: Vec<Document>) -> Result<Vec<DocumentView>> {
        use crate::models::documents::entities::DocumentDetails;

        let class_ids: HashSet<i64> = documents.iter().filter_map(|d| d.class_id).collect();
        let department_ids: HashSet<i64> =
            documents.iter().filter_map(|d| d.department_id).collect();
        let mut notice_type_ids = HashSet::new();
        let mut routine_type_ids = HashSet::new();
        for document in &documents {
            match &document.details {
                DocumentDetails::Notice { notice_type_id, .. } => {
                    notice_type_ids.insert(*notice_type_id);
                }
                DocumentDetails::Routine {
                    routine_type_id: Some(id),
                    ..
                } => {
                    routine_type_ids.insert(*id);
                }
                _ => {}
            }
        }

        let class_names = self.class_names(class_ids).await?;
        let department_names = self.department_names(department_ids).await?;

        let notice_type_names: HashMap<i64, String> = if notice_type_ids.is_empty() {
            HashMap::new()
        } else {
            notice_types::Entity::find()
                .filter(notice_types::Column::Id.is_in(notice_type_ids))
                .all(&self.db)
                .await
                .map_err(db_error("查询通知类型"))?
                .into_iter()
                .map(|m| (m.id, m.name))
                .collect()
        };
        let routine_type_names: HashMap<i64, String> = if routine_type_ids.is_empty() {
            HashMap::new()
        } else {
            routine_types::Entity::find()
                .filter(routine_types::Column::Id.is_in(routine_type_ids))
                .all(&self.db)
                .await
                .map_err(db_error("查询课表类型"))?
                .into_iter()
                .map(|m| (m.id, m.name))
                .collect()
        };

        Ok(documents
            .into_iter()
            .map(|document| {
                let type_name = match &document.details {
                    DocumentDetails::Notice { notice_type_id, .. } => {
                        notice_type_names.get(notice_type_id).cloned()
                    }
                    DocumentDetails::Routine {
                        routine_type_id: Some(id),
                        ..
                    } => routine_type_names.get(id).cloned(),
                    _ => None,
                };
                DocumentView {
                    class_name: document.class_id.and_then(|id| class_names.get(&id).cloned()),
                    department_name: document
                        .department_id
                        .and_then(|id| department_names.get(&id).cloned()),
                    type_name,
                    document,
                }
            })
            .collect())
    }

    pub(crate) async fn class_names(&self, ids: HashSet<i64>) -> Result<HashMap<i64, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = classes::Entity::find()
            .filter(classes::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(db_error("查询班级名称"))?;
        Ok(rows.into_iter().map(|m| (m.id, m.name)).collect())
    }

    pub(crate) async fn department_names(
        &self,
        ids: HashSet<i64>,
    ) -> Result<HashMap<i64, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = departments::Entity::find()
            .filter(departments::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(db_error("查询系部名称"))?;
        Ok(rows.into_iter().map(|m| (m.id, m.name)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::requests::{
        CreateClassRequest, CreateDepartmentRequest, CreateTypeRequest,
    };

    async fn storage() -> SeaOrmStorage {
        SeaOrmStorage::new_in_memory().await.unwrap()
    }

    fn class_request(numeric_value: i32) -> CreateClassRequest {
        CreateClassRequest {
            name: format!("শ্রেণি {numeric_value}"),
            name_en: format!("Class {numeric_value}"),
            numeric_value,
            description: String::new(),
            male_student: 0,
            female_student: 0,
            show_students_publicly: true,
        }
    }

    fn department_request(name_en: &str) -> CreateDepartmentRequest {
        CreateDepartmentRequest {
            name: name_en.to_string(),
            name_en: name_en.to_string(),
            icon: String::new(),
            description: String::new(),
            male_student: 0,
            female_student: 0,
            slug: None,
        }
    }

    fn book(title: &str, class_id: Option<i64>, department_id: Option<i64>) -> CreateDocumentRequest {
        let mut req = CreateDocumentRequest::new(title, format!("books/{title}.pdf"));
        req.class_id = class_id;
        req.department_id = department_id;
        req
    }

    #[tokio::test]
    async fn test_class_filter_wins_over_department() {
        let storage = storage().await;
        let six = storage.create_class_impl(class_request(6)).await.unwrap();
        let seven = storage.create_class_impl(class_request(7)).await.unwrap();
        let science = storage
            .create_department_impl(department_request("Science"))
            .await
            .unwrap();

        storage
            .create_document_impl(DocumentKind::Book, book("a", Some(six.id), None))
            .await
            .unwrap();
        storage
            .create_document_impl(DocumentKind::Book, book("b", Some(seven.id), Some(science.id)))
            .await
            .unwrap();

        let criteria = Criteria::for_class(six.id);
        let mut both = criteria.clone();
        both.department_slug = Some("science".into());

        let by_class = storage
            .list_documents_impl(DocumentKind::Book, &both, true)
            .await
            .unwrap();
        assert_eq!(by_class.len(), 1);
        assert!(by_class.iter().all(|v| v.document.class_id == Some(six.id)));

        let by_department = storage
            .list_documents_impl(DocumentKind::Book, &Criteria::for_department("science"), true)
            .await
            .unwrap();
        assert_eq!(by_department.len(), 1);
        assert_eq!(by_department[0].department_name.as_deref(), Some("Science"));
    }

    #[tokio::test]
    async fn test_non_numeric_class_id_is_ignored() {
        let storage = storage().await;
        let six = storage.create_class_impl(class_request(6)).await.unwrap();
        for title in ["a", "b"] {
            storage
                .create_document_impl(DocumentKind::Syllabus, book(title, Some(six.id), None))
                .await
                .unwrap();
        }
        storage
            .create_document_impl(DocumentKind::Syllabus, book("c", None, None))
            .await
            .unwrap();

        let criteria = Criteria {
            class_id: Some("abc".into()),
            ..Default::default()
        };
        let filtered = storage
            .list_documents_impl(DocumentKind::Syllabus, &criteria, true)
            .await
            .unwrap();
        let unfiltered = storage
            .list_documents_impl(DocumentKind::Syllabus, &Criteria::default(), true)
            .await
            .unwrap();
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered.len(), unfiltered.len());
    }

    #[tokio::test]
    async fn test_unknown_department_slug_yields_nothing() {
        let storage = storage().await;
        storage
            .create_document_impl(DocumentKind::Book, book("a", None, None))
            .await
            .unwrap();
        let views = storage
            .list_documents_impl(DocumentKind::Book, &Criteria::for_department("arts"), true)
            .await
            .unwrap();
        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn test_inactive_hidden_from_public_only() {
        let storage = storage().await;
        let mut req = book("hidden", None, None);
        req.is_active = false;
        storage
            .create_document_impl(DocumentKind::Book, req)
            .await
            .unwrap();

        let public = storage
            .list_documents_impl(DocumentKind::Book, &Criteria::default(), true)
            .await
            .unwrap();
        let admin = storage
            .list_documents_impl(DocumentKind::Book, &Criteria::default(), false)
            .await
            .unwrap();
        assert!(public.is_empty());
        assert_eq!(admin.len(), 1);
    }

    #[tokio::test]
    async fn test_notice_type_filter_and_validation() {
        let storage = storage().await;
        let general = storage
            .create_notice_type_impl(CreateTypeRequest {
                name: "General".into(),
                slug: None,
            })
            .await
            .unwrap();

        // 缺少类型与简介
        let err = storage
            .create_document_impl(
                DocumentKind::Notice,
                CreateDocumentRequest::new("Holiday", "notices/holiday.pdf"),
            )
            .await
            .unwrap_err();
        let fields = err.field_errors().unwrap();
        assert!(fields.contains_key("notice_type_id"));
        assert!(fields.contains_key("short_description"));

        let mut req = CreateDocumentRequest::new("Holiday", "notices/holiday.pdf");
        req.notice_type_id = Some(general.id);
        req.short_description = Some("School closed".into());
        storage
            .create_document_impl(DocumentKind::Notice, req)
            .await
            .unwrap();

        let matching = storage
            .list_documents_impl(
                DocumentKind::Notice,
                &Criteria::default().with_kind("general"),
                true,
            )
            .await
            .unwrap();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].type_name.as_deref(), Some("General"));

        let unknown = storage
            .list_documents_impl(
                DocumentKind::Notice,
                &Criteria::default().with_kind("exam"),
                true,
            )
            .await
            .unwrap();
        assert!(unknown.is_empty());
    }

    #[tokio::test]
    async fn test_public_routines_default_to_class_category() {
        let storage = storage().await;
        for (title, category) in [
            ("weekly", RoutineCategory::Class),
            ("finals", RoutineCategory::Exam),
        ] {
            let mut req = CreateDocumentRequest::new(title, format!("routines/{title}.pdf"));
            req.category = Some(category);
            storage
                .create_document_impl(DocumentKind::Routine, req)
                .await
                .unwrap();
        }

        let public = storage
            .list_documents_impl(DocumentKind::Routine, &Criteria::default(), true)
            .await
            .unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].document.title, "weekly");

        let exams = storage
            .list_documents_impl(
                DocumentKind::Routine,
                &Criteria::default().with_kind("exam"),
                true,
            )
            .await
            .unwrap();
        assert_eq!(exams.len(), 1);
        assert_eq!(exams[0].document.title, "finals");

        let admin = storage
            .list_documents_impl(DocumentKind::Routine, &Criteria::default(), false)
            .await
            .unwrap();
        assert_eq!(admin.len(), 2);
    }

    #[tokio::test]
    async fn test_result_requires_pdf() {
        let storage = storage().await;
        let err = storage
            .create_document_impl(
                DocumentKind::Result,
                CreateDocumentRequest::new("SSC", "results/ssc.png"),
            )
            .await
            .unwrap_err();
        assert!(err.field_errors().unwrap().contains_key("file"));

        let missing_class = storage
            .create_document_impl(DocumentKind::Result, {
                let mut req = CreateDocumentRequest::new("SSC", "results/ssc.pdf");
                req.class_id = Some(99);
                req
            })
            .await
            .unwrap_err();
        assert!(missing_class.field_errors().unwrap().contains_key("class_id"));
    }

    #[tokio::test]
    async fn test_get_and_delete_document() {
        let storage = storage().await;
        let created = storage
            .create_document_impl(DocumentKind::Admission, {
                CreateDocumentRequest::new("Form", "admissions/form.pdf")
            })
            .await
            .unwrap();

        let found = storage
            .get_document_impl(DocumentKind::Admission, created.id)
            .await
            .unwrap();
        assert_eq!(found.map(|d| d.file), Some("admissions/form.pdf".to_string()));
        // 同一 ID 在其他种类中不存在
        assert!(
            storage
                .get_document_impl(DocumentKind::Book, created.id)
                .await
                .unwrap()
                .is_none()
        );

        assert!(
            storage
                .delete_document_impl(DocumentKind::Admission, created.id)
                .await
                .unwrap()
        );
        assert!(
            !storage
                .delete_document_impl(DocumentKind::Admission, created.id)
                .await
                .unwrap()
        );
    }
}

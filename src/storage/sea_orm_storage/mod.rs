//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod catalog;
mod contact;
mod documents;
mod events;
mod facilities;
mod faculty;
mod links;
mod media;
mod students;

use crate::config::AppConfig;
use crate::errors::{PortalError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config.database.pool_size, config.database.timeout)
                .await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        let storage = Self::from_connection(db).await?;
        info!("SeaORM 存储初始化完成，数据库: {}", db_url);
        Ok(storage)
    }

    /// 基于已有连接创建存储并执行迁移
    pub async fn from_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| PortalError::database_operation(format!("数据库迁移失败: {e}")))?;
        Ok(Self { db })
    }

    /// 内存 SQLite，单连接以保证所有查询落在同一个库上
    pub async fn new_in_memory() -> Result<Self> {
        let db = Self::connect_sqlite("sqlite::memory:", 1, 5).await?;
        Self::from_connection(db).await
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");
        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| PortalError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory");
        }

        let mut pool = SqlitePoolOptions::new()
            .max_connections(pool_size.max(1))
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(timeout));
        // 内存库随连接关闭而消失，连接不能被回收
        pool = if in_memory {
            pool.idle_timeout(None).max_lifetime(None)
        } else {
            pool.test_before_acquire(true)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool
            .connect_with(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(PortalError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 唯一约束冲突（并发写入时校验查询可能漏掉）
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// 数据库错误转换：唯一约束冲突转为字段校验错误
pub(crate) fn write_error(err: DbErr, field: &str, action: &str) -> PortalError {
    if is_unique_violation(&err) {
        PortalError::field(field, "A record with this value already exists.")
    } else {
        PortalError::database_operation(format!("{action}失败: {err}"))
    }
}

pub(crate) fn db_error(action: &str) -> impl FnOnce(DbErr) -> PortalError + '_ {
    move |e| PortalError::database_operation(format!("{action}失败: {e}"))
}

pub(crate) fn now_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

/// 必填文本字段
pub(crate) fn require_text(
    errors: &mut crate::errors::FieldErrors,
    field: &str,
    value: &str,
) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert(field.to_string(), "This field is required.".to_string());
    }
    trimmed.to_string()
}

// 实现 Storage trait
use crate::models::{
    Criteria, PaginatedResponse, PaginationQuery, Scope,
    catalog::{
        entities::{Class, Department, NoticeType, RoutineType},
        requests::{
            CreateClassRequest, CreateDepartmentRequest, CreateTypeRequest, UpdateClassRequest,
            UpdateDepartmentRequest,
        },
    },
    contact::{entities::ContactMessage, requests::NewContactMessage},
    documents::{
        entities::{Document, DocumentKind, DocumentView},
        requests::CreateDocumentRequest,
    },
    events::{
        entities::{EventCounts, EventImage, EventNews, EventType, EventWithImages},
        requests::{CreateEventImageRequest, CreateEventRequest},
    },
    facilities::{
        entities::{FacilityInfo, FacilityType, FacilityView},
        requests::{CreateFacilityRequest, CreateFacilityTypeRequest},
    },
    faculty::{entities::FacultyMember, requests::CreateFacultyMemberRequest},
    links::{entities::ImportantLink, requests::CreateLinkRequest},
    media::{
        entities::{GalleryImage, Video},
        requests::{CreateGalleryRequest, CreateVideoRequest, UpdateVideoRequest},
    },
    students::{
        entities::{Student, StudentView},
        requests::{CreateStudentRequest, StudentListParams},
        responses::StudentCounts,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 班级模块
    async fn create_class(&self, req: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(req).await
    }

    async fn update_class(&self, id: i64, update: UpdateClassRequest) -> Result<Option<Class>> {
        self.update_class_impl(id, update).await
    }

    async fn get_class(&self, id: i64) -> Result<Option<Class>> {
        self.get_class_impl(id).await
    }

    async fn list_classes(&self) -> Result<Vec<Class>> {
        self.list_classes_impl().await
    }

    async fn delete_class(&self, id: i64) -> Result<Option<u64>> {
        self.delete_class_impl(id).await
    }

    // 系部模块
    async fn create_department(&self, req: CreateDepartmentRequest) -> Result<Department> {
        self.create_department_impl(req).await
    }

    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        self.update_department_impl(id, update).await
    }

    async fn get_department_by_slug(&self, slug: &str) -> Result<Option<Department>> {
        self.get_department_by_slug_impl(slug).await
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        self.list_departments_impl().await
    }

    async fn delete_department(&self, id: i64) -> Result<Option<u64>> {
        self.delete_department_impl(id).await
    }

    // 类型模块
    async fn create_notice_type(&self, req: CreateTypeRequest) -> Result<NoticeType> {
        self.create_notice_type_impl(req).await
    }

    async fn list_notice_types(&self) -> Result<Vec<NoticeType>> {
        self.list_notice_types_impl().await
    }

    async fn delete_notice_type(&self, id: i64) -> Result<bool> {
        self.delete_notice_type_impl(id).await
    }

    async fn create_routine_type(&self, req: CreateTypeRequest) -> Result<RoutineType> {
        self.create_routine_type_impl(req).await
    }

    async fn list_routine_types(&self) -> Result<Vec<RoutineType>> {
        self.list_routine_types_impl().await
    }

    async fn delete_routine_type(&self, id: i64) -> Result<bool> {
        self.delete_routine_type_impl(id).await
    }

    // 学生模块
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(req).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn list_students(
        &self,
        params: StudentListParams,
    ) -> Result<PaginatedResponse<Student>> {
        self.list_students_impl(params).await
    }

    async fn student_counts(&self, scope: &Scope) -> Result<StudentCounts> {
        self.student_counts_impl(scope).await
    }

    async fn visible_students(&self, scope: &Scope) -> Result<Vec<StudentView>> {
        self.visible_students_impl(scope).await
    }

    // 文档模块
    async fn list_documents(
        &self,
        kind: DocumentKind,
        criteria: &Criteria,
        public_only: bool,
    ) -> Result<Vec<DocumentView>> {
        self.list_documents_impl(kind, criteria, public_only).await
    }

    async fn get_document(&self, kind: DocumentKind, id: i64) -> Result<Option<Document>> {
        self.get_document_impl(kind, id).await
    }

    async fn create_document(
        &self,
        kind: DocumentKind,
        req: CreateDocumentRequest,
    ) -> Result<Document> {
        self.create_document_impl(kind, req).await
    }

    async fn delete_document(&self, kind: DocumentKind, id: i64) -> Result<bool> {
        self.delete_document_impl(kind, id).await
    }

    // 活动模块
    async fn create_event(&self, req: CreateEventRequest) -> Result<EventNews> {
        self.create_event_impl(req).await
    }

    async fn add_event_image(
        &self,
        event_id: i64,
        req: CreateEventImageRequest,
    ) -> Result<Option<EventImage>> {
        self.add_event_image_impl(event_id, req).await
    }

    async fn list_published_events(
        &self,
        event_type: Option<EventType>,
    ) -> Result<Vec<EventNews>> {
        self.list_published_events_impl(event_type).await
    }

    async fn count_published_events(&self) -> Result<EventCounts> {
        self.count_published_events_impl().await
    }

    async fn get_published_event(&self, id: i64) -> Result<Option<EventWithImages>> {
        self.get_published_event_impl(id).await
    }

    async fn delete_event(&self, id: i64) -> Result<bool> {
        self.delete_event_impl(id).await
    }

    // 相册与视频模块
    async fn create_gallery_image(&self, req: CreateGalleryRequest) -> Result<GalleryImage> {
        self.create_gallery_image_impl(req).await
    }

    async fn list_gallery_images(&self, category: Option<&str>) -> Result<Vec<GalleryImage>> {
        self.list_gallery_images_impl(category).await
    }

    async fn create_video(&self, req: CreateVideoRequest) -> Result<Video> {
        self.create_video_impl(req).await
    }

    async fn update_video(&self, id: i64, update: UpdateVideoRequest) -> Result<Option<Video>> {
        self.update_video_impl(id, update).await
    }

    async fn list_public_videos(&self) -> Result<Vec<Video>> {
        self.list_public_videos_impl().await
    }

    // 设施模块
    async fn create_facility_type(&self, req: CreateFacilityTypeRequest) -> Result<FacilityType> {
        self.create_facility_type_impl(req).await
    }

    async fn delete_facility_type(&self, id: i64) -> Result<bool> {
        self.delete_facility_type_impl(id).await
    }

    async fn create_facility(&self, req: CreateFacilityRequest) -> Result<FacilityInfo> {
        self.create_facility_impl(req).await
    }

    async fn list_facilities(&self, type_name: Option<&str>) -> Result<Vec<FacilityView>> {
        self.list_facilities_impl(type_name).await
    }

    // 教职工模块
    async fn create_faculty_member(&self, req: CreateFacultyMemberRequest) -> Result<FacultyMember> {
        self.create_faculty_member_impl(req).await
    }

    async fn list_faculty_members(&self, category: Option<&str>) -> Result<Vec<FacultyMember>> {
        self.list_faculty_members_impl(category).await
    }

    // 链接模块
    async fn create_link(&self, req: CreateLinkRequest) -> Result<ImportantLink> {
        self.create_link_impl(req).await
    }

    async fn list_active_links(&self) -> Result<Vec<ImportantLink>> {
        self.list_active_links_impl().await
    }

    // 留言模块
    async fn create_contact_message(&self, msg: NewContactMessage) -> Result<ContactMessage> {
        self.create_contact_message_impl(msg).await
    }

    async fn list_contact_messages(
        &self,
        query: PaginationQuery,
    ) -> Result<PaginatedResponse<ContactMessage>> {
        self.list_contact_messages_impl(query).await
    }

    async fn mark_contact_message_read(&self, id: i64) -> Result<bool> {
        self.mark_contact_message_read_impl(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("portal.db").unwrap(),
            "sqlite://portal.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/portal").unwrap(),
            "postgres://u:p@localhost/portal"
        );
        assert!(SeaOrmStorage::build_database_url("ftp://nowhere").is_err());
    }

    #[tokio::test]
    async fn test_in_memory_storage_migrates() {
        use sea_orm::EntityTrait;

        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let classes = crate::entity::prelude::Classes::find()
            .all(&storage.db)
            .await
            .unwrap();
        assert!(classes.is_empty());
    }
}

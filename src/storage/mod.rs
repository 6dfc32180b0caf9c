use std::sync::Arc;

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

use crate::errors::Result;

pub mod file_store;
pub mod sea_orm_storage;

pub use file_store::{FileStore, LocalFileStore};

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 班级管理方法
    // 创建班级，numeric_value 重复时返回校验错误
    async fn create_class(&self, req: CreateClassRequest) -> Result<Class>;
    async fn update_class(&self, id: i64, update: UpdateClassRequest) -> Result<Option<Class>>;
    async fn get_class(&self, id: i64) -> Result<Option<Class>>;
    // 按 numeric_value 排序
    async fn list_classes(&self) -> Result<Vec<Class>>;
    // 删除班级并清空所有引用，返回被清空引用的记录数；班级不存在时返回 None
    async fn delete_class(&self, id: i64) -> Result<Option<u64>>;

    /// 系部管理方法
    async fn create_department(&self, req: CreateDepartmentRequest) -> Result<Department>;
    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>>;
    async fn get_department_by_slug(&self, slug: &str) -> Result<Option<Department>>;
    async fn list_departments(&self) -> Result<Vec<Department>>;
    async fn delete_department(&self, id: i64) -> Result<Option<u64>>;

    /// 通知类型与课表类型
    async fn create_notice_type(&self, req: CreateTypeRequest) -> Result<NoticeType>;
    async fn list_notice_types(&self) -> Result<Vec<NoticeType>>;
    // 级联删除该类型下的通知
    async fn delete_notice_type(&self, id: i64) -> Result<bool>;
    async fn create_routine_type(&self, req: CreateTypeRequest) -> Result<RoutineType>;
    async fn list_routine_types(&self) -> Result<Vec<RoutineType>>;
    async fn delete_routine_type(&self, id: i64) -> Result<bool>;

    /// 学生管理方法
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student>;
    async fn delete_student(&self, id: i64) -> Result<bool>;
    async fn list_students(&self, params: StudentListParams)
    -> Result<PaginatedResponse<Student>>;
    // 人数统计视图：取班级手工维护的人数，与是否公开无关
    async fn student_counts(&self, scope: &Scope) -> Result<StudentCounts>;
    // 公开名单视图：只包含公开班级中的学生
    async fn visible_students(&self, scope: &Scope) -> Result<Vec<StudentView>>;

    /// 文档管理方法（通知、课表、书籍、大纲、成绩、招生）
    // public_only 为真时只返回启用的记录
    async fn list_documents(
        &self,
        kind: DocumentKind,
        criteria: &Criteria,
        public_only: bool,
    ) -> Result<Vec<DocumentView>>;
    async fn get_document(&self, kind: DocumentKind, id: i64) -> Result<Option<Document>>;
    async fn create_document(
        &self,
        kind: DocumentKind,
        req: CreateDocumentRequest,
    ) -> Result<Document>;
    async fn delete_document(&self, kind: DocumentKind, id: i64) -> Result<bool>;

    /// 活动/新闻
    async fn create_event(&self, req: CreateEventRequest) -> Result<EventNews>;
    // 活动不存在时返回 None
    async fn add_event_image(
        &self,
        event_id: i64,
        req: CreateEventImageRequest,
    ) -> Result<Option<EventImage>>;
    async fn list_published_events(&self, event_type: Option<EventType>)
    -> Result<Vec<EventNews>>;
    async fn count_published_events(&self) -> Result<EventCounts>;
    async fn get_published_event(&self, id: i64) -> Result<Option<EventWithImages>>;
    // 同一事务内删除图集
    async fn delete_event(&self, id: i64) -> Result<bool>;

    /// 相册与视频
    async fn create_gallery_image(&self, req: CreateGalleryRequest) -> Result<GalleryImage>;
    // 不含轮播图；category 为 None 时不过滤
    async fn list_gallery_images(&self, category: Option<&str>) -> Result<Vec<GalleryImage>>;
    async fn create_video(&self, req: CreateVideoRequest) -> Result<Video>;
    async fn update_video(&self, id: i64, update: UpdateVideoRequest) -> Result<Option<Video>>;
    async fn list_public_videos(&self) -> Result<Vec<Video>>;

    /// 设施
    async fn create_facility_type(&self, req: CreateFacilityTypeRequest) -> Result<FacilityType>;
    async fn delete_facility_type(&self, id: i64) -> Result<bool>;
    async fn create_facility(&self, req: CreateFacilityRequest) -> Result<FacilityInfo>;
    async fn list_facilities(&self, type_name: Option<&str>) -> Result<Vec<FacilityView>>;

    /// 教职工
    async fn create_faculty_member(&self, req: CreateFacultyMemberRequest) -> Result<FacultyMember>;
    // 未知分类返回空列表
    async fn list_faculty_members(&self, category: Option<&str>) -> Result<Vec<FacultyMember>>;

    /// 常用链接
    async fn create_link(&self, req: CreateLinkRequest) -> Result<ImportantLink>;
    async fn list_active_links(&self) -> Result<Vec<ImportantLink>>;

    /// 留言
    async fn create_contact_message(&self, msg: NewContactMessage) -> Result<ContactMessage>;
    async fn list_contact_messages(
        &self,
        query: PaginationQuery,
    ) -> Result<PaginatedResponse<ContactMessage>>;
    async fn mark_contact_message_read(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

//! 管理接口
//!
//! 全部挂在 `/api/v1/admin` 下，由 [`RequireAdmin`] 校验令牌。

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireAdmin;
use crate::models::catalog::requests::{
    CreateClassRequest, CreateDepartmentRequest, CreateTypeRequest, UpdateClassRequest,
    UpdateDepartmentRequest,
};
use crate::models::documents::{entities::DocumentKind, requests::CreateDocumentRequest};
use crate::models::events::requests::{CreateEventImageRequest, CreateEventRequest};
use crate::models::facilities::requests::{CreateFacilityRequest, CreateFacilityTypeRequest};
use crate::models::faculty::requests::CreateFacultyMemberRequest;
use crate::models::links::requests::CreateLinkRequest;
use crate::models::media::requests::{CreateGalleryRequest, CreateVideoRequest, UpdateVideoRequest};
use crate::models::students::requests::{CreateStudentRequest, StudentListParams};
use crate::models::{ApiResponse, Criteria, ErrorCode, PaginationQuery};
use crate::services::catalog::TypeKind;
use crate::utils::FilterQuery;
use crate::services::{
    CatalogService, ContactService, DocumentService, EventService, FacilityService,
    FacultyService, LinkService, MediaService, StudentService, SystemService, UploadService,
};

static CATALOG_SERVICE: Lazy<CatalogService> = Lazy::new(CatalogService::new_lazy);
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);
static DOCUMENT_SERVICE: Lazy<DocumentService> = Lazy::new(DocumentService::new_lazy);
static EVENT_SERVICE: Lazy<EventService> = Lazy::new(EventService::new_lazy);
static MEDIA_SERVICE: Lazy<MediaService> = Lazy::new(MediaService::new_lazy);
static FACILITY_SERVICE: Lazy<FacilityService> = Lazy::new(FacilityService::new_lazy);
static FACULTY_SERVICE: Lazy<FacultyService> = Lazy::new(FacultyService::new_lazy);
static LINK_SERVICE: Lazy<LinkService> = Lazy::new(LinkService::new_lazy);
static CONTACT_SERVICE: Lazy<ContactService> = Lazy::new(ContactService::new_lazy);
static UPLOAD_SERVICE: Lazy<UploadService> = Lazy::new(UploadService::new_lazy);
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

fn unknown_kind(kind: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::NotFound,
        format!("Unknown document kind: {kind}"),
    ))
}

// 班级
pub async fn list_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_classes(&req).await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .create_class(&req, class_data.into_inner())
        .await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: web::Path<i64>,
    update_data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .update_class(&req, class_id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_class(req: HttpRequest, class_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .delete_class(&req, class_id.into_inner())
        .await
}

// 系部
pub async fn list_departments(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_departments(&req).await
}

pub async fn create_department(
    req: HttpRequest,
    department_data: web::Json<CreateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .create_department(&req, department_data.into_inner())
        .await
}

pub async fn update_department(
    req: HttpRequest,
    department_id: web::Path<i64>,
    update_data: web::Json<UpdateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .update_department(&req, department_id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_department(
    req: HttpRequest,
    department_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .delete_department(&req, department_id.into_inner())
        .await
}

// 通知类型与课表类型
fn configure_type_routes(cfg: &mut web::ServiceConfig, path: &str, kind: TypeKind) {
    cfg.service(
        web::resource(path)
            .route(web::get().to(move |req: HttpRequest| async move {
                CATALOG_SERVICE.list_types(&req, kind).await
            }))
            .route(web::post().to(
                move |req: HttpRequest, type_data: web::Json<CreateTypeRequest>| async move {
                    CATALOG_SERVICE
                        .create_type(&req, kind, type_data.into_inner())
                        .await
                },
            )),
    )
    .service(web::resource(format!("{path}/{{id}}")).route(web::delete().to(
        move |req: HttpRequest, type_id: web::Path<i64>| async move {
            CATALOG_SERVICE
                .delete_type(&req, kind, type_id.into_inner())
                .await
        },
    )));
}

// 学生
pub async fn list_students(
    req: HttpRequest,
    query: FilterQuery<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req, query.into_inner()).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(&req, student_data.into_inner())
        .await
}

pub async fn delete_student(
    req: HttpRequest,
    student_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .delete_student(&req, student_id.into_inner())
        .await
}

// 文档，路径中的分类接受单数或复数形式
pub async fn list_documents(
    req: HttpRequest,
    kind: web::Path<String>,
    query: FilterQuery<Criteria>,
) -> ActixResult<HttpResponse> {
    match kind.parse::<DocumentKind>() {
        Ok(kind) => {
            DOCUMENT_SERVICE
                .list_documents(&req, kind, query.into_inner())
                .await
        }
        Err(_) => Ok(unknown_kind(&kind)),
    }
}

pub async fn create_document(
    req: HttpRequest,
    kind: web::Path<String>,
    document_data: web::Json<CreateDocumentRequest>,
) -> ActixResult<HttpResponse> {
    match kind.parse::<DocumentKind>() {
        Ok(kind) => {
            DOCUMENT_SERVICE
                .create_document(&req, kind, document_data.into_inner())
                .await
        }
        Err(_) => Ok(unknown_kind(&kind)),
    }
}

pub async fn delete_document(
    req: HttpRequest,
    path: web::Path<(String, i64)>,
) -> ActixResult<HttpResponse> {
    let (kind, id) = path.into_inner();
    match kind.parse::<DocumentKind>() {
        Ok(kind) => DOCUMENT_SERVICE.delete_document(&req, kind, id).await,
        Err(_) => Ok(unknown_kind(&kind)),
    }
}

// 活动与新闻
pub async fn create_event(
    req: HttpRequest,
    event_data: web::Json<CreateEventRequest>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.create_event(&req, event_data.into_inner()).await
}

pub async fn delete_event(req: HttpRequest, event_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.delete_event(&req, event_id.into_inner()).await
}

pub async fn add_event_image(
    req: HttpRequest,
    event_id: web::Path<i64>,
    image_data: web::Json<CreateEventImageRequest>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE
        .add_event_image(&req, event_id.into_inner(), image_data.into_inner())
        .await
}

// 相册与视频
pub async fn create_gallery_image(
    req: HttpRequest,
    image_data: web::Json<CreateGalleryRequest>,
) -> ActixResult<HttpResponse> {
    MEDIA_SERVICE
        .create_gallery_image(&req, image_data.into_inner())
        .await
}

pub async fn create_video(
    req: HttpRequest,
    video_data: web::Json<CreateVideoRequest>,
) -> ActixResult<HttpResponse> {
    MEDIA_SERVICE.create_video(&req, video_data.into_inner()).await
}

pub async fn update_video(
    req: HttpRequest,
    video_id: web::Path<i64>,
    update_data: web::Json<UpdateVideoRequest>,
) -> ActixResult<HttpResponse> {
    MEDIA_SERVICE
        .update_video(&req, video_id.into_inner(), update_data.into_inner())
        .await
}

// 设施
pub async fn create_facility_type(
    req: HttpRequest,
    type_data: web::Json<CreateFacilityTypeRequest>,
) -> ActixResult<HttpResponse> {
    FACILITY_SERVICE
        .create_facility_type(&req, type_data.into_inner())
        .await
}

pub async fn delete_facility_type(
    req: HttpRequest,
    type_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    FACILITY_SERVICE
        .delete_facility_type(&req, type_id.into_inner())
        .await
}

// 教职工
pub async fn create_faculty_member(
    req: HttpRequest,
    member_data: web::Json<CreateFacultyMemberRequest>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE
        .create_member(&req, member_data.into_inner())
        .await
}

pub async fn create_facility(
    req: HttpRequest,
    facility_data: web::Json<CreateFacilityRequest>,
) -> ActixResult<HttpResponse> {
    FACILITY_SERVICE
        .create_facility(&req, facility_data.into_inner())
        .await
}

pub async fn create_link(
    req: HttpRequest,
    link_data: web::Json<CreateLinkRequest>,
) -> ActixResult<HttpResponse> {
    LINK_SERVICE.create_link(&req, link_data.into_inner()).await
}

// 留言
pub async fn list_contact_messages(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    CONTACT_SERVICE.list_messages(&req, query.into_inner()).await
}

pub async fn mark_contact_message_read(
    req: HttpRequest,
    message_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CONTACT_SERVICE
        .mark_read(&req, message_id.into_inner())
        .await
}

// 上传
pub async fn upload_file(
    req: HttpRequest,
    category: web::Path<String>,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    UPLOAD_SERVICE
        .handle_upload(&req, &category, payload)
        .await
}

pub async fn get_system_info(req: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.get_info(&req).await
}

fn configure_admin_scope(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/classes")
            .route(web::get().to(list_classes))
            .route(web::post().to(create_class)),
    )
    .service(
        web::resource("/classes/{id}")
            .route(web::put().to(update_class))
            .route(web::delete().to(delete_class)),
    )
    .service(
        web::resource("/departments")
            .route(web::get().to(list_departments))
            .route(web::post().to(create_department)),
    )
    .service(
        web::resource("/departments/{id}")
            .route(web::put().to(update_department))
            .route(web::delete().to(delete_department)),
    );

    configure_type_routes(cfg, "/notice-types", TypeKind::Notice);
    configure_type_routes(cfg, "/routine-types", TypeKind::Routine);

    cfg.service(
        web::resource("/students")
            .route(web::get().to(list_students))
            .route(web::post().to(create_student)),
    )
    .service(web::resource("/students/{id}").route(web::delete().to(delete_student)))
    .service(
        web::resource("/documents/{kind}")
            .route(web::get().to(list_documents))
            .route(web::post().to(create_document)),
    )
    .service(web::resource("/documents/{kind}/{id}").route(web::delete().to(delete_document)))
    .service(web::resource("/events").route(web::post().to(create_event)))
    .service(web::resource("/events/{id}").route(web::delete().to(delete_event)))
    .service(web::resource("/events/{id}/images").route(web::post().to(add_event_image)))
    .service(web::resource("/gallery").route(web::post().to(create_gallery_image)))
    .service(web::resource("/videos").route(web::post().to(create_video)))
    .service(web::resource("/videos/{id}").route(web::put().to(update_video)))
    .service(web::resource("/facility-types").route(web::post().to(create_facility_type)))
    .service(
        web::resource("/facility-types/{id}").route(web::delete().to(delete_facility_type)),
    )
    .service(web::resource("/facilities").route(web::post().to(create_facility)))
    .service(web::resource("/faculty-members").route(web::post().to(create_faculty_member)))
    .service(web::resource("/links").route(web::post().to(create_link)))
    .service(web::resource("/contact-messages").route(web::get().to(list_contact_messages)))
    .service(
        web::resource("/contact-messages/{id}/read")
            .route(web::post().to(mark_contact_message_read)),
    )
    .service(web::resource("/uploads/{category}").route(web::post().to(upload_file)))
    .service(web::resource("/system").route(web::get().to(get_system_info)));
}

// 配置路由
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin")
            .wrap(RequireAdmin::from_config())
            .configure(configure_admin_scope),
    );
}

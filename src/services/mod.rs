pub mod catalog;
pub mod contact;
pub mod documents;
pub mod events;
pub mod facilities;
pub mod faculty;
pub mod links;
pub mod media;
pub mod students;
pub mod system;
pub mod uploads;

pub use catalog::CatalogService;
pub use contact::ContactService;
pub use documents::DocumentService;
pub use events::EventService;
pub use facilities::FacilityService;
pub use faculty::FacultyService;
pub use links::LinkService;
pub use media::MediaService;
pub use students::StudentService;
pub use system::SystemService;
pub use uploads::UploadService;

use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::errors::PortalError;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::{FileStore, Storage};

pub(crate) fn storage_from_request(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}

pub(crate) fn file_store_from_request(request: &HttpRequest) -> Arc<dyn FileStore> {
    request
        .app_data::<web::Data<Arc<dyn FileStore>>>()
        .expect("FileStore not found in app data")
        .get_ref()
        .clone()
}

/// 将存储层错误转换为响应
///
/// 校验错误返回 400 与字段表，未找到返回 404，其余错误只写日志，
/// 客户端只看到通用提示。
pub(crate) fn error_response(err: PortalError, not_found: ErrorCode, action: &str) -> HttpResponse {
    match err {
        PortalError::Validation(errors) => HttpResponse::BadRequest().json(ApiResponse::error(
            ErrorCode::ValidationFailed,
            errors,
            "Validation failed",
        )),
        PortalError::NotFound(msg) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(not_found, msg))
        }
        err => {
            tracing::error!("{} failed: {}", action, err.format_simple());
            internal_error()
        }
    }
}

pub(crate) fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        "Internal server error",
    ))
}

#[cfg(test)]
pub(crate) mod test_support {
    //! 接口测试共用的应用数据

    use std::sync::Arc;

    use actix_web::web;

    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::storage::{FileStore, LocalFileStore, Storage};

    pub struct TestContext {
        pub storage: Arc<dyn Storage>,
        pub files: Arc<dyn FileStore>,
        pub media: tempfile::TempDir,
    }

    impl TestContext {
        pub async fn new() -> Self {
            let media = tempfile::tempdir().unwrap();
            let storage: Arc<dyn Storage> =
                Arc::new(SeaOrmStorage::new_in_memory().await.unwrap());
            let files: Arc<dyn FileStore> = Arc::new(LocalFileStore::new(media.path(), "/media/"));
            Self {
                storage,
                files,
                media,
            }
        }

        pub fn storage_data(&self) -> web::Data<Arc<dyn Storage>> {
            web::Data::new(self.storage.clone())
        }

        pub fn files_data(&self) -> web::Data<Arc<dyn FileStore>> {
            web::Data::new(self.files.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldErrors;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_error_response_mapping() {
        let mut errors = FieldErrors::new();
        errors.insert("slug".into(), "taken".into());
        let resp = error_response(
            PortalError::validation(errors),
            ErrorCode::NotFound,
            "create",
        );
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value =
            serde_json::from_slice(&to_bytes(resp.into_body()).await.unwrap()).unwrap();
        assert_eq!(body["data"]["slug"], "taken");

        let resp = error_response(
            PortalError::not_found("Class 3 not found"),
            ErrorCode::ClassNotFound,
            "get",
        );
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = error_response(
            PortalError::database_operation("disk I/O error at /var/lib/portal.db"),
            ErrorCode::NotFound,
            "list",
        );
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert!(!String::from_utf8_lossy(&body).contains("/var/lib"));
    }
}

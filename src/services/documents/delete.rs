use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DocumentService;
use crate::models::{ApiResponse, ErrorCode, documents::entities::DocumentKind};
use crate::services::error_response;

pub async fn delete_document(
    service: &DocumentService,
    request: &HttpRequest,
    kind: DocumentKind,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_document(kind, id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(format!(
            "{} deleted successfully",
            kind.label()
        )))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DocumentNotFound,
            format!("{} not found", kind.label()),
        ))),
        Err(e) => Ok(error_response(
            e,
            ErrorCode::DocumentNotFound,
            &format!("Delete {}", kind.slug()),
        )),
    }
}

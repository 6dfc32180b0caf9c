use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DocumentService;
use crate::models::{
    ApiResponse, ErrorCode,
    documents::{entities::DocumentKind, requests::CreateDocumentRequest},
};
use crate::services::error_response;

pub async fn create_document(
    service: &DocumentService,
    request: &HttpRequest,
    kind: DocumentKind,
    req: CreateDocumentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_document(kind, req).await {
        Ok(document) => Ok(HttpResponse::Created().json(ApiResponse::success(
            document,
            format!("{} created successfully", kind.label()),
        ))),
        Err(e) => Ok(error_response(
            e,
            ErrorCode::DocumentNotFound,
            &format!("Create {}", kind.slug()),
        )),
    }
}

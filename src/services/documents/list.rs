use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DocumentService;
use crate::models::{
    ApiResponse, Criteria, ErrorCode,
    documents::{
        entities::DocumentKind,
        responses::{DocumentListResponse, DocumentRecord},
    },
};
use crate::services::error_response;

pub async fn filter_documents(
    service: &DocumentService,
    request: &HttpRequest,
    kind: DocumentKind,
    criteria: Criteria,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let files = service.get_file_store(request);

    match storage.list_documents(kind, &criteria, true).await {
        Ok(views) => {
            let records = views
                .into_iter()
                .map(|view| DocumentRecord::from_view(view, |path| files.url(path)))
                .collect();
            Ok(HttpResponse::Ok().json(DocumentListResponse { kind, records }))
        }
        Err(e) => Ok(error_response(
            e,
            ErrorCode::DocumentNotFound,
            &format!("Filter {}", kind.collection()),
        )),
    }
}

pub async fn list_documents(
    service: &DocumentService,
    request: &HttpRequest,
    kind: DocumentKind,
    criteria: Criteria,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_documents(kind, &criteria, false).await {
        Ok(views) => {
            let documents: Vec<_> = views.into_iter().map(|view| view.document).collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                documents,
                format!("{} list retrieved successfully", kind.label()),
            )))
        }
        Err(e) => Ok(error_response(
            e,
            ErrorCode::DocumentNotFound,
            &format!("List {}", kind.collection()),
        )),
    }
}

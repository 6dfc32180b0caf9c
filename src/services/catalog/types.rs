use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CatalogService, TypeKind};
use crate::models::{ApiResponse, ErrorCode, catalog::requests::CreateTypeRequest};
use crate::services::error_response;

impl TypeKind {
    fn not_found_code(self) -> ErrorCode {
        match self {
            TypeKind::Notice => ErrorCode::NoticeTypeNotFound,
            TypeKind::Routine => ErrorCode::RoutineTypeNotFound,
        }
    }

    fn label(self) -> &'static str {
        match self {
            TypeKind::Notice => "Notice type",
            TypeKind::Routine => "Routine type",
        }
    }
}

pub async fn list_types(
    service: &CatalogService,
    request: &HttpRequest,
    kind: TypeKind,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let message = format!("{} list retrieved successfully", kind.label());

    let response = match kind {
        TypeKind::Notice => storage
            .list_notice_types()
            .await
            .map(|types| HttpResponse::Ok().json(ApiResponse::success(types, message))),
        TypeKind::Routine => storage
            .list_routine_types()
            .await
            .map(|types| HttpResponse::Ok().json(ApiResponse::success(types, message))),
    };

    Ok(response.unwrap_or_else(|e| error_response(e, kind.not_found_code(), "List types")))
}

pub async fn create_type(
    service: &CatalogService,
    request: &HttpRequest,
    kind: TypeKind,
    req: CreateTypeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let message = format!("{} created successfully", kind.label());

    let response = match kind {
        TypeKind::Notice => storage
            .create_notice_type(req)
            .await
            .map(|created| HttpResponse::Created().json(ApiResponse::success(created, message))),
        TypeKind::Routine => storage
            .create_routine_type(req)
            .await
            .map(|created| HttpResponse::Created().json(ApiResponse::success(created, message))),
    };

    Ok(response.unwrap_or_else(|e| error_response(e, kind.not_found_code(), "Create type")))
}

pub async fn delete_type(
    service: &CatalogService,
    request: &HttpRequest,
    kind: TypeKind,
    type_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result = match kind {
        TypeKind::Notice => storage.delete_notice_type(type_id).await,
        TypeKind::Routine => storage.delete_routine_type(type_id).await,
    };

    match result {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(format!(
            "{} deleted successfully",
            kind.label()
        )))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            kind.not_found_code(),
            format!("{} not found", kind.label()),
        ))),
        Err(e) => Ok(error_response(e, kind.not_found_code(), "Delete type")),
    }
}

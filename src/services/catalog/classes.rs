use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CatalogService;
use crate::models::{
    ApiResponse, ErrorCode,
    catalog::{
        requests::{CreateClassRequest, UpdateClassRequest},
        responses::DetachSummary,
    },
};
use crate::services::error_response;

pub async fn list_classes(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_classes().await {
        Ok(classes) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            classes,
            "Class list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(e, ErrorCode::ClassNotFound, "List classes")),
    }
}

pub async fn create_class(
    service: &CatalogService,
    request: &HttpRequest,
    req: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_class(req).await {
        Ok(class) => Ok(HttpResponse::Created().json(ApiResponse::success(
            class,
            "Class created successfully",
        ))),
        Err(e) => Ok(error_response(e, ErrorCode::ClassNotFound, "Create class")),
    }
}

pub async fn update_class(
    service: &CatalogService,
    request: &HttpRequest,
    class_id: i64,
    update: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_class(class_id, update).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            class,
            "Class updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        Err(e) => Ok(error_response(e, ErrorCode::ClassNotFound, "Update class")),
    }
}

pub async fn delete_class(
    service: &CatalogService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_class(class_id).await {
        Ok(Some(detached)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DetachSummary {
                id: class_id,
                detached,
            },
            "Class deleted successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        Err(e) => Ok(error_response(e, ErrorCode::ClassNotFound, "Delete class")),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CatalogService;
use crate::models::{
    ApiResponse, ErrorCode,
    catalog::{
        requests::{CreateDepartmentRequest, UpdateDepartmentRequest},
        responses::DetachSummary,
    },
};
use crate::services::error_response;

pub async fn list_departments(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_departments().await {
        Ok(departments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            departments,
            "Department list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(
            e,
            ErrorCode::DepartmentNotFound,
            "List departments",
        )),
    }
}

pub async fn create_department(
    service: &CatalogService,
    request: &HttpRequest,
    req: CreateDepartmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_department(req).await {
        Ok(department) => Ok(HttpResponse::Created().json(ApiResponse::success(
            department,
            "Department created successfully",
        ))),
        Err(e) => Ok(error_response(
            e,
            ErrorCode::DepartmentNotFound,
            "Create department",
        )),
    }
}

pub async fn update_department(
    service: &CatalogService,
    request: &HttpRequest,
    department_id: i64,
    update: UpdateDepartmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_department(department_id, update).await {
        Ok(Some(department)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            department,
            "Department updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DepartmentNotFound,
            "Department not found",
        ))),
        Err(e) => Ok(error_response(
            e,
            ErrorCode::DepartmentNotFound,
            "Update department",
        )),
    }
}

pub async fn delete_department(
    service: &CatalogService,
    request: &HttpRequest,
    department_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_department(department_id).await {
        Ok(Some(detached)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DetachSummary {
                id: department_id,
                detached,
            },
            "Department deleted successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::DepartmentNotFound,
            "Department not found",
        ))),
        Err(e) => Ok(error_response(
            e,
            ErrorCode::DepartmentNotFound,
            "Delete department",
        )),
    }
}

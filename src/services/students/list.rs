use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::StudentListParams};
use crate::services::error_response;

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    params: StudentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students(params).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            page,
            "Student list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(e, ErrorCode::StudentNotFound, "List students")),
    }
}

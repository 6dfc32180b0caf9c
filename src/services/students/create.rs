use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::CreateStudentRequest};
use crate::services::error_response;

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    req: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_student(req).await {
        Ok(student) => Ok(HttpResponse::Created().json(ApiResponse::success(
            student,
            "Student created successfully",
        ))),
        Err(e) => Ok(error_response(e, ErrorCode::StudentNotFound, "Create student")),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FacilityService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn delete_facility_type(
    service: &FacilityService,
    request: &HttpRequest,
    type_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_facility_type(type_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Facility type deleted successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Facility type not found",
        ))),
        Err(e) => Ok(error_response(e, ErrorCode::NotFound, "Delete facility type")),
    }
}


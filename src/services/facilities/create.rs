use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FacilityService;
use crate::models::{
    ApiResponse, ErrorCode,
    facilities::requests::{CreateFacilityRequest, CreateFacilityTypeRequest},
};
use crate::services::error_response;

pub async fn create_facility_type(
    service: &FacilityService,
    request: &HttpRequest,
    req: CreateFacilityTypeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_facility_type(req).await {
        Ok(facility_type) => Ok(HttpResponse::Created().json(ApiResponse::success(
            facility_type,
            "Facility type created successfully",
        ))),
        Err(e) => Ok(error_response(e, ErrorCode::NotFound, "Create facility type")),
    }
}

pub async fn create_facility(
    service: &FacilityService,
    request: &HttpRequest,
    req: CreateFacilityRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_facility(req).await {
        Ok(facility) => Ok(HttpResponse::Created().json(ApiResponse::success(
            facility,
            "Facility created successfully",
        ))),
        Err(e) => Ok(error_response(e, ErrorCode::NotFound, "Create facility")),
    }
}

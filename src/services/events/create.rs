use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EventService;
use crate::models::{
    ApiResponse, ErrorCode,
    events::requests::{CreateEventImageRequest, CreateEventRequest},
};
use crate::services::error_response;

pub async fn create_event(
    service: &EventService,
    request: &HttpRequest,
    req: CreateEventRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_event(req).await {
        Ok(event) => Ok(HttpResponse::Created().json(ApiResponse::success(
            event,
            "Event created successfully",
        ))),
        Err(e) => Ok(error_response(e, ErrorCode::EventNotFound, "Create event")),
    }
}

pub async fn add_event_image(
    service: &EventService,
    request: &HttpRequest,
    event_id: i64,
    req: CreateEventImageRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.add_event_image(event_id, req).await {
        Ok(Some(image)) => Ok(HttpResponse::Created().json(ApiResponse::success(
            image,
            "Event image added successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EventNotFound,
            "Event not found",
        ))),
        Err(e) => Ok(error_response(e, ErrorCode::EventNotFound, "Add event image")),
    }
}

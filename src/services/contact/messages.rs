use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ContactService;
use crate::models::{ApiResponse, ErrorCode, PaginationQuery};
use crate::services::error_response;

pub async fn list_messages(
    service: &ContactService,
    request: &HttpRequest,
    query: PaginationQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_contact_messages(query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            page,
            "Contact messages retrieved successfully",
        ))),
        Err(e) => Ok(error_response(
            e,
            ErrorCode::ContactMessageNotFound,
            "List contact messages",
        )),
    }
}

pub async fn mark_read(
    service: &ContactService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.mark_contact_message_read(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Contact message marked as read",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ContactMessageNotFound,
            "Contact message not found",
        ))),
        Err(e) => Ok(error_response(
            e,
            ErrorCode::ContactMessageNotFound,
            "Mark contact message read",
        )),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::events::requests::EventListQuery;
use crate::services::EventService;
use crate::utils::FilterQuery;

static EVENT_SERVICE: Lazy<EventService> = Lazy::new(EventService::new_lazy);

pub async fn list_events(
    req: HttpRequest,
    query: FilterQuery<EventListQuery>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE
        .list_events(&req, query.into_inner().event_type)
        .await
}

pub async fn get_event_detail(
    req: HttpRequest,
    event_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE
        .get_event_detail(&req, event_id.into_inner())
        .await
}

pub fn configure_event_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/events/", web::get().to(list_events))
        .route("/event-news-detail/{id}/", web::get().to(get_event_detail));
}

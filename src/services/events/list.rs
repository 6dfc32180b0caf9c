use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EventService;
use crate::models::{
    ErrorCode,
    events::{
        entities::EventType,
        responses::{EventListResponse, EventRecord},
    },
};
use crate::services::error_response;

pub async fn list_events(
    service: &EventService,
    request: &HttpRequest,
    event_type: Option<String>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let files = service.get_file_store(request);

    // 无法识别的类型按不过滤处理
    let event_type = event_type
        .as_deref()
        .map(str::trim)
        .and_then(|t| t.parse::<EventType>().ok());

    let events = match storage.list_published_events(event_type).await {
        Ok(events) => events,
        Err(e) => return Ok(error_response(e, ErrorCode::EventNotFound, "List events")),
    };
    let counts = match storage.count_published_events().await {
        Ok(counts) => counts,
        Err(e) => return Ok(error_response(e, ErrorCode::EventNotFound, "Count events")),
    };

    Ok(HttpResponse::Ok().json(EventListResponse {
        events: events
            .into_iter()
            .map(|event| EventRecord::from_event(event, |path| files.url(path)))
            .collect(),
        total_events: counts.events,
        total_news: counts.news,
    }))
}

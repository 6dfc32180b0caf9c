use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::json;

use super::EventService;
use crate::models::events::responses::{EventDetail, EventDetailResponse};

pub async fn get_event_detail(
    service: &EventService,
    request: &HttpRequest,
    event_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let files = service.get_file_store(request);

    match storage.get_published_event(event_id).await {
        Ok(Some(item)) => Ok(HttpResponse::Ok().json(EventDetailResponse {
            success: true,
            data: EventDetail::from_event(item, |path| files.url(path)),
        })),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "error": "Item not found",
        }))),
        Err(e) => {
            tracing::error!("Load event {} failed: {}", event_id, e.format_simple());
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Internal server error",
            })))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::events::{
        entities::EventType,
        requests::{CreateEventImageRequest, CreateEventRequest},
    };
    use crate::routes::configure_event_routes;
    use crate::services::test_support::TestContext;
    use actix_web::App;
    use actix_web::http::StatusCode;
    use actix_web::test::{TestRequest, call_and_read_body_json, call_service, init_service};

    fn event(title: &str, event_type: EventType, status: bool) -> CreateEventRequest {
        CreateEventRequest {
            title: title.into(),
            event_type,
            description: String::new(),
            image: None,
            status,
        }
    }

    #[actix_web::test]
    async fn test_list_and_detail() {
        let ctx = TestContext::new().await;
        let sports = ctx
            .storage
            .create_event(event("Sports day", EventType::Event, true))
            .await
            .unwrap();
        ctx.storage
            .create_event(event("Result published", EventType::News, true))
            .await
            .unwrap();
        let draft = ctx
            .storage
            .create_event(event("Draft", EventType::News, false))
            .await
            .unwrap();
        ctx.storage
            .add_event_image(
                sports.id,
                CreateEventImageRequest {
                    image: "event_news_gallery/race.jpg".into(),
                    title: Some("Race".into()),
                    description: None,
                    order: 1,
                },
            )
            .await
            .unwrap();

        let app = init_service(
            App::new()
                .app_data(ctx.storage_data())
                .app_data(ctx.files_data())
                .configure(configure_event_routes),
        )
        .await;

        let req = TestRequest::get().uri("/events/?type=event").to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["events"].as_array().unwrap().len(), 1);
        assert_eq!(body["total_events"], 1);
        assert_eq!(body["total_news"], 1);

        // 无法识别的类型不过滤
        let req = TestRequest::get().uri("/events/?type=gala").to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["events"].as_array().unwrap().len(), 2);

        let req = TestRequest::get()
            .uri(&format!("/event-news-detail/{}/", sports.id))
            .to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["type"], "EVENT");
        assert_eq!(
            body["data"]["gallery_images"][0]["url"],
            "/media/event_news_gallery/race.jpg"
        );

        let req = TestRequest::get()
            .uri(&format!("/event-news-detail/{}/", draft.id))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "error": "Item not found" })
        );
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ContactService;
use crate::models::contact::{
    requests::ContactSubmission,
    responses::{ContactAccepted, ContactRejected},
};
use crate::services::internal_error;

const ACCEPTED_MESSAGE: &str = "আপনার বার্তা সফলভাবে পাঠানো হয়েছে!";

/// 解析留言正文
///
/// 逐字段读取字符串值，非字符串字段按缺失处理，整体无法解析时所有字段都视为缺失。
fn parse_submission(body: &[u8]) -> ContactSubmission {
    let value: serde_json::Value = serde_json::from_slice(body).unwrap_or_default();
    let field = |name: &str| value.get(name).and_then(|v| v.as_str()).map(str::to_string);
    ContactSubmission {
        name: field("name"),
        phone: field("phone"),
        title: field("title"),
        message: field("message"),
    }
}

pub async fn submit_contact(
    service: &ContactService,
    request: &HttpRequest,
    body: &[u8],
) -> ActixResult<HttpResponse> {
    let accepted = match parse_submission(body).validate() {
        Ok(accepted) => accepted,
        Err(errors) => {
            return Ok(HttpResponse::BadRequest().json(ContactRejected {
                success: false,
                errors,
            }));
        }
    };

    let storage = service.get_storage(request);
    match storage.create_contact_message(accepted).await {
        Ok(message) => {
            info!("Contact message {} received", message.id);
            Ok(HttpResponse::Created().json(ContactAccepted {
                success: true,
                message: ACCEPTED_MESSAGE.to_string(),
            }))
        }
        Err(e) => {
            tracing::error!("Store contact message failed: {}", e.format_simple());
            Ok(internal_error())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaginationQuery;
    use crate::routes::configure_contact_routes;
    use crate::services::test_support::TestContext;
    use actix_web::App;
    use actix_web::http::StatusCode;
    use actix_web::test::{TestRequest, call_service, init_service, read_body};

    #[test]
    fn test_malformed_body_counts_as_empty() {
        let submission = parse_submission(b"name=Rahim&phone=017");
        assert!(submission.name.is_none());
        assert_eq!(submission.validate().unwrap_err().len(), 4);
    }

    #[test]
    fn test_non_string_field_only_affects_itself() {
        let submission = parse_submission(
            br#"{"name": "Rahim", "phone": 1700000000, "title": "Admission", "message": "When?"}"#,
        );
        assert_eq!(submission.name.as_deref(), Some("Rahim"));
        let errors = submission.validate().unwrap_err();
        let fields: Vec<_> = errors.keys().map(String::as_str).collect();
        assert_eq!(fields, ["phone"]);
    }

    #[actix_web::test]
    async fn test_submit_contact_message() {
        let ctx = TestContext::new().await;
        let app = init_service(
            App::new()
                .app_data(ctx.storage_data())
                .configure(configure_contact_routes),
        )
        .await;

        let req = TestRequest::post()
            .uri("/contact/submit/")
            .insert_header(("X-Forwarded-For", "10.9.0.1"))
            .set_json(serde_json::json!({
                "name": "Rahim",
                "phone": "01700000000",
                "title": "Admission",
                "message": "When does admission open?"
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = serde_json::from_slice(&read_body(resp).await).unwrap();
        assert_eq!(body["success"], true);

        let req = TestRequest::post()
            .uri("/contact/submit/")
            .insert_header(("X-Forwarded-For", "10.9.0.2"))
            .set_json(serde_json::json!({ "name": "Karim", "phone": " " }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_slice(&read_body(resp).await).unwrap();
        assert_eq!(body["success"], false);
        assert!(body["errors"]["phone"].is_string());
        assert!(body["errors"].get("name").is_none());

        let stored = ctx
            .storage
            .list_contact_messages(PaginationQuery::default())
            .await
            .unwrap();
        assert_eq!(stored.pagination.total, 1);
        assert_eq!(stored.items[0].name, "Rahim");
    }
}

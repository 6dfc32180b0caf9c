use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RateLimit;
use crate::services::ContactService;

static CONTACT_SERVICE: Lazy<ContactService> = Lazy::new(ContactService::new_lazy);

// 所有 worker 共用同一份计数
static CONTACT_LIMIT: Lazy<RateLimit> = Lazy::new(RateLimit::contact);

pub async fn submit_contact(req: HttpRequest, body: web::Bytes) -> ActixResult<HttpResponse> {
    CONTACT_SERVICE.submit(&req, &body).await
}

pub fn configure_contact_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/contact/submit/")
            .wrap(CONTACT_LIMIT.clone())
            .route(web::post().to(submit_contact)),
    );
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::LinkService;

static LINK_SERVICE: Lazy<LinkService> = Lazy::new(LinkService::new_lazy);

pub async fn list_links(req: HttpRequest) -> ActixResult<HttpResponse> {
    LINK_SERVICE.list_links(&req).await
}

pub fn configure_link_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/important-links/", web::get().to(list_links));
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::CatalogService;

static CATALOG_SERVICE: Lazy<CatalogService> = Lazy::new(CatalogService::new_lazy);

// 列表页渲染过滤器所需的班级、系部与通知类型
pub async fn get_catalog(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.get_catalog(&req).await
}

pub fn configure_catalog_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/catalog/", web::get().to(get_catalog));
}

use actix_web::{HttpRequest, web};
use once_cell::sync::Lazy;

use crate::models::Criteria;
use crate::utils::FilterQuery;
use crate::models::documents::entities::DocumentKind;
use crate::services::DocumentService;

// 懒加载的全局 DOCUMENT_SERVICE 实例
static DOCUMENT_SERVICE: Lazy<DocumentService> = Lazy::new(DocumentService::new_lazy);

// 配置路由：六类文档共用同一组处理程序，按分类注册
pub fn configure_document_routes(cfg: &mut web::ServiceConfig) {
    for kind in DocumentKind::ALL {
        cfg.route(
            &format!("/filter-{}/", kind.collection()),
            web::get().to(move |req: HttpRequest, query: FilterQuery<Criteria>| async move {
                DOCUMENT_SERVICE
                    .filter_documents(&req, kind, query.into_inner())
                    .await
            }),
        )
        .route(
            &format!("/download-{}/{{id}}/", kind.slug()),
            web::get().to(move |req: HttpRequest, id: web::Path<i64>| async move {
                DOCUMENT_SERVICE
                    .download_document(&req, kind, id.into_inner())
                    .await
            }),
        )
        .route(
            &format!("/view-{}-pdf/{{id}}/", kind.slug()),
            web::get().to(move |req: HttpRequest, id: web::Path<i64>| async move {
                DOCUMENT_SERVICE
                    .view_document(&req, kind, id.into_inner())
                    .await
            }),
        );
    }
}

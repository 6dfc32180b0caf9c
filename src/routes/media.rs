use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::config::AppConfig;
use crate::models::media::requests::GalleryQuery;
use crate::services::MediaService;
use crate::utils::FilterQuery;

static MEDIA_SERVICE: Lazy<MediaService> = Lazy::new(MediaService::new_lazy);

pub async fn filter_gallery_images(
    req: HttpRequest,
    query: FilterQuery<GalleryQuery>,
) -> ActixResult<HttpResponse> {
    MEDIA_SERVICE
        .filter_gallery_images(&req, query.into_inner())
        .await
}

pub async fn filter_gallery_videos(req: HttpRequest) -> ActixResult<HttpResponse> {
    MEDIA_SERVICE.list_videos(&req).await
}

pub async fn serve_media_file(
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    MEDIA_SERVICE.serve_file(&req, &path).await
}

pub fn configure_media_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/filter-gallery-images/", web::get().to(filter_gallery_images))
        .route("/filter-gallery-videos/", web::get().to(filter_gallery_videos));

    // 前缀为完整 URL 时文件由外部服务器提供
    let prefix = &AppConfig::get().media.url_prefix;
    if prefix.starts_with('/') {
        cfg.route(
            &format!("{}/{{path:.*}}", prefix.trim_end_matches('/')),
            web::get().to(serve_media_file),
        );
    }
}

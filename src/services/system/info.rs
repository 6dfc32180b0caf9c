use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::SystemService;
use crate::models::{
    ApiResponse, AppStartTime,
    documents::entities::DocumentKind,
    system::responses::{DocumentKindInfo, SystemInfoResponse},
};

pub async fn get_info(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = service.get_config();
    let started_at = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|t| t.start_datetime)
        .unwrap_or_else(chrono::Utc::now);

    let response = SystemInfoResponse {
        site_name: config.app.site_name.clone(),
        environment: config.app.environment.clone(),
        started_at,
        uptime_seconds: (chrono::Utc::now() - started_at).num_seconds().max(0),
        media_url_prefix: config.media.url_prefix.clone(),
        upload_max_size: config.upload.max_size,
        document_kinds: DocumentKind::ALL
            .into_iter()
            .map(DocumentKindInfo::from)
            .collect(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "System info retrieved successfully",
    )))
}

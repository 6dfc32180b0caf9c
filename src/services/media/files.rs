use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};

use super::MediaService;
use crate::models::{ApiResponse, ErrorCode};

/// 按相对路径返回上传文件，供 `media.url_prefix` 下的公开地址使用
pub async fn serve_media_file(
    service: &MediaService,
    request: &HttpRequest,
    path: &str,
) -> ActixResult<HttpResponse> {
    let files = service.get_file_store(request);

    match files.read(path).await {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .insert_header((
                header::CONTENT_TYPE,
                mime_guess::from_path(path)
                    .first_or_octet_stream()
                    .to_string(),
            ))
            .body(bytes)),
        Err(e) if e.is_not_found() => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::FileNotFound, "The requested file was not found."),
        )),
        Err(e) => {
            tracing::error!("Serve media file {} failed: {}", path, e.format_simple());
            Ok(crate::services::internal_error())
        }
    }
}

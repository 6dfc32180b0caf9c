use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MediaService;
use crate::models::{
    ApiResponse, ErrorCode,
    media::{
        requests::{CreateVideoRequest, UpdateVideoRequest},
        responses::{VideoListResponse, VideoRecord},
    },
};
use crate::services::error_response;

pub async fn list_videos(service: &MediaService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_public_videos().await {
        Ok(videos) => Ok(HttpResponse::Ok().json(VideoListResponse {
            videos: videos.into_iter().map(VideoRecord::from).collect(),
        })),
        Err(e) => Ok(error_response(e, ErrorCode::NotFound, "List videos")),
    }
}

pub async fn create_video(
    service: &MediaService,
    request: &HttpRequest,
    req: CreateVideoRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_video(req).await {
        Ok(video) => Ok(HttpResponse::Created().json(ApiResponse::success(
            video,
            "Video created successfully",
        ))),
        Err(e) => Ok(error_response(e, ErrorCode::NotFound, "Create video")),
    }
}

pub async fn update_video(
    service: &MediaService,
    request: &HttpRequest,
    video_id: i64,
    update: UpdateVideoRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_video(video_id, update).await {
        Ok(Some(video)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            video,
            "Video updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Video not found",
        ))),
        Err(e) => Ok(error_response(e, ErrorCode::NotFound, "Update video")),
    }
}

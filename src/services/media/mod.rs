pub mod files;
pub mod gallery;
pub mod videos;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::media::requests::{
    CreateGalleryRequest, CreateVideoRequest, GalleryQuery, UpdateVideoRequest,
};
use crate::storage::{FileStore, Storage};

pub struct MediaService {
    storage: Option<Arc<dyn Storage>>,
    files: Option<Arc<dyn FileStore>>,
}

impl MediaService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            files: None,
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub(crate) fn get_file_store(&self, request: &HttpRequest) -> Arc<dyn FileStore> {
        match &self.files {
            Some(files) => files.clone(),
            None => super::file_store_from_request(request),
        }
    }

    pub async fn filter_gallery_images(
        &self,
        request: &HttpRequest,
        query: GalleryQuery,
    ) -> ActixResult<HttpResponse> {
        gallery::filter_gallery_images(self, request, query).await
    }

    pub async fn create_gallery_image(
        &self,
        request: &HttpRequest,
        req: CreateGalleryRequest,
    ) -> ActixResult<HttpResponse> {
        gallery::create_gallery_image(self, request, req).await
    }

    pub async fn list_videos(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        videos::list_videos(self, request).await
    }

    pub async fn serve_file(&self, request: &HttpRequest, path: &str) -> ActixResult<HttpResponse> {
        files::serve_media_file(self, request, path).await
    }

    pub async fn create_video(
        &self,
        request: &HttpRequest,
        req: CreateVideoRequest,
    ) -> ActixResult<HttpResponse> {
        videos::create_video(self, request, req).await
    }

    pub async fn update_video(
        &self,
        request: &HttpRequest,
        video_id: i64,
        update: UpdateVideoRequest,
    ) -> ActixResult<HttpResponse> {
        videos::update_video(self, request, video_id, update).await
    }
}

pub mod create;
pub mod delete;
pub mod detail;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::events::requests::{CreateEventImageRequest, CreateEventRequest};
use crate::storage::{FileStore, Storage};

pub struct EventService {
    storage: Option<Arc<dyn Storage>>,
    files: Option<Arc<dyn FileStore>>,
}

impl EventService {
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

    // 已发布的活动/新闻，附带两类总数
    pub async fn list_events(
        &self,
        request: &HttpRequest,
        event_type: Option<String>,
    ) -> ActixResult<HttpResponse> {
        list::list_events(self, request, event_type).await
    }

    pub async fn get_event_detail(
        &self,
        request: &HttpRequest,
        event_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_event_detail(self, request, event_id).await
    }

    pub async fn create_event(
        &self,
        request: &HttpRequest,
        req: CreateEventRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_event(self, request, req).await
    }

    pub async fn add_event_image(
        &self,
        request: &HttpRequest,
        event_id: i64,
        req: CreateEventImageRequest,
    ) -> ActixResult<HttpResponse> {
        create::add_event_image(self, request, event_id, req).await
    }

    // 同时删除图集
    pub async fn delete_event(
        &self,
        request: &HttpRequest,
        event_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_event(self, request, event_id).await
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    links::{
        requests::CreateLinkRequest,
        responses::{LinkListResponse, LinkRecord},
    },
};
use crate::storage::Storage;

use super::error_response;

pub struct LinkService {
    storage: Option<Arc<dyn Storage>>,
}

impl LinkService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    /// 启用的常用链接，按排序号升序
    pub async fn list_links(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);

        match storage.list_active_links().await {
            Ok(links) => Ok(HttpResponse::Ok().json(LinkListResponse {
                links: links.into_iter().map(LinkRecord::from).collect(),
            })),
            Err(e) => Ok(error_response(e, ErrorCode::NotFound, "List links")),
        }
    }

    pub async fn create_link(
        &self,
        request: &HttpRequest,
        req: CreateLinkRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);

        match storage.create_link(req).await {
            Ok(link) => Ok(HttpResponse::Created().json(ApiResponse::success(
                link,
                "Link created successfully",
            ))),
            Err(e) => Ok(error_response(e, ErrorCode::NotFound, "Create link")),
        }
    }
}

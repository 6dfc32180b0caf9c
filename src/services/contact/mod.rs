pub mod messages;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::PaginationQuery;
use crate::storage::Storage;

pub struct ContactService {
    storage: Option<Arc<dyn Storage>>,
}

impl ContactService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn submit(&self, request: &HttpRequest, body: &[u8]) -> ActixResult<HttpResponse> {
        submit::submit_contact(self, request, body).await
    }

    pub async fn list_messages(
        &self,
        request: &HttpRequest,
        query: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        messages::list_messages(self, request, query).await
    }

    pub async fn mark_read(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        messages::mark_read(self, request, id).await
    }
}

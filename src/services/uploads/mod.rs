pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::FileStore;

pub struct UploadService {
    files: Option<Arc<dyn FileStore>>,
}

impl UploadService {
    pub fn new_lazy() -> Self {
        Self { files: None }
    }

    pub(crate) fn get_file_store(&self, request: &HttpRequest) -> Arc<dyn FileStore> {
        match &self.files {
            Some(files) => files.clone(),
            None => super::file_store_from_request(request),
        }
    }

    pub async fn handle_upload(
        &self,
        request: &HttpRequest,
        category: &str,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        let max_size = AppConfig::get().upload.max_size;
        upload::handle_upload(self, request, category, payload, max_size).await
    }
}

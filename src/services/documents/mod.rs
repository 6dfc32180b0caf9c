pub mod create;
pub mod delete;
pub mod download;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::Criteria;
use crate::models::documents::{entities::DocumentKind, requests::CreateDocumentRequest};
use crate::storage::{FileStore, Storage};

pub use download::{Disposition, fetch_document};

/// 六种文档共用的服务，接口按 `DocumentKind` 区分
pub struct DocumentService {
    storage: Option<Arc<dyn Storage>>,
    files: Option<Arc<dyn FileStore>>,
}

impl DocumentService {
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

    // 公开过滤列表，只含启用的记录
    pub async fn filter_documents(
        &self,
        request: &HttpRequest,
        kind: DocumentKind,
        criteria: Criteria,
    ) -> ActixResult<HttpResponse> {
        list::filter_documents(self, request, kind, criteria).await
    }

    // 管理端列表，包含未启用的记录
    pub async fn list_documents(
        &self,
        request: &HttpRequest,
        kind: DocumentKind,
        criteria: Criteria,
    ) -> ActixResult<HttpResponse> {
        list::list_documents(self, request, kind, criteria).await
    }

    pub async fn create_document(
        &self,
        request: &HttpRequest,
        kind: DocumentKind,
        req: CreateDocumentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_document(self, request, kind, req).await
    }

    pub async fn delete_document(
        &self,
        request: &HttpRequest,
        kind: DocumentKind,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_document(self, request, kind, id).await
    }

    // 以附件形式下载文档文件
    pub async fn download_document(
        &self,
        request: &HttpRequest,
        kind: DocumentKind,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        download::deliver_document(self, request, kind, id, Disposition::Attachment).await
    }

    // 在浏览器内直接打开文档文件
    pub async fn view_document(
        &self,
        request: &HttpRequest,
        kind: DocumentKind,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        download::deliver_document(self, request, kind, id, Disposition::Inline).await
    }
}

pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::facilities::requests::{
    CreateFacilityRequest, CreateFacilityTypeRequest, FacilityQuery,
};
use crate::storage::{FileStore, Storage};

pub struct FacilityService {
    storage: Option<Arc<dyn Storage>>,
    files: Option<Arc<dyn FileStore>>,
}

impl FacilityService {
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

    pub async fn list_facilities(
        &self,
        request: &HttpRequest,
        query: FacilityQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_facilities(self, request, query).await
    }

    pub async fn create_facility_type(
        &self,
        request: &HttpRequest,
        req: CreateFacilityTypeRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_facility_type(self, request, req).await
    }

    // 删除类型，所属设施保留
    pub async fn delete_facility_type(
        &self,
        request: &HttpRequest,
        type_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_facility_type(self, request, type_id).await
    }

    pub async fn create_facility(
        &self,
        request: &HttpRequest,
        req: CreateFacilityRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_facility(self, request, req).await
    }
}

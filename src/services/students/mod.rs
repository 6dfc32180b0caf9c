pub mod create;
pub mod delete;
pub mod filter;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::Criteria;
use crate::models::students::requests::{CreateStudentRequest, StudentListParams};
use crate::storage::{FileStore, Storage};

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
    files: Option<Arc<dyn FileStore>>,
}

impl StudentService {
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

    // 公开学生名单与人数统计
    pub async fn filter_students(
        &self,
        request: &HttpRequest,
        criteria: Criteria,
    ) -> ActixResult<HttpResponse> {
        filter::filter_students(self, request, criteria).await
    }

    pub async fn list_students(
        &self,
        request: &HttpRequest,
        params: StudentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, request, params).await
    }

    pub async fn create_student(
        &self,
        request: &HttpRequest,
        req: CreateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, request, req).await
    }

    pub async fn delete_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, request, student_id).await
    }
}

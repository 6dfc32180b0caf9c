pub mod classes;
pub mod departments;
pub mod overview;
pub mod types;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::catalog::requests::{
    CreateClassRequest, CreateDepartmentRequest, CreateTypeRequest, UpdateClassRequest,
    UpdateDepartmentRequest,
};
use crate::storage::Storage;

/// 通知/课表类型的区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Notice,
    Routine,
}

pub struct CatalogService {
    storage: Option<Arc<dyn Storage>>,
}

impl CatalogService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    // 列表页筛选项（公开）
    pub async fn get_catalog(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        overview::get_catalog(self, request).await
    }

    pub async fn list_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        classes::list_classes(self, request).await
    }

    pub async fn create_class(
        &self,
        request: &HttpRequest,
        req: CreateClassRequest,
    ) -> ActixResult<HttpResponse> {
        classes::create_class(self, request, req).await
    }

    pub async fn update_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> ActixResult<HttpResponse> {
        classes::update_class(self, request, class_id, update).await
    }

    // 删除班级，返回被清空引用的记录数
    pub async fn delete_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        classes::delete_class(self, request, class_id).await
    }

    pub async fn list_departments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        departments::list_departments(self, request).await
    }

    pub async fn create_department(
        &self,
        request: &HttpRequest,
        req: CreateDepartmentRequest,
    ) -> ActixResult<HttpResponse> {
        departments::create_department(self, request, req).await
    }

    pub async fn update_department(
        &self,
        request: &HttpRequest,
        department_id: i64,
        update: UpdateDepartmentRequest,
    ) -> ActixResult<HttpResponse> {
        departments::update_department(self, request, department_id, update).await
    }

    pub async fn delete_department(
        &self,
        request: &HttpRequest,
        department_id: i64,
    ) -> ActixResult<HttpResponse> {
        departments::delete_department(self, request, department_id).await
    }

    pub async fn list_types(&self, request: &HttpRequest, kind: TypeKind) -> ActixResult<HttpResponse> {
        types::list_types(self, request, kind).await
    }

    pub async fn create_type(
        &self,
        request: &HttpRequest,
        kind: TypeKind,
        req: CreateTypeRequest,
    ) -> ActixResult<HttpResponse> {
        types::create_type(self, request, kind, req).await
    }

    // 通知类型级联删除通知，课表类型只清空引用
    pub async fn delete_type(
        &self,
        request: &HttpRequest,
        kind: TypeKind,
        type_id: i64,
    ) -> ActixResult<HttpResponse> {
        types::delete_type(self, request, kind, type_id).await
    }
}

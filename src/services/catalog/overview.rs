use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CatalogService;
use crate::models::{ErrorCode, catalog::responses::CatalogResponse};
use crate::services::error_response;

pub async fn get_catalog(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result = async {
        Ok::<_, crate::errors::PortalError>(CatalogResponse {
            classes: storage.list_classes().await?,
            departments: storage.list_departments().await?,
            notice_types: storage.list_notice_types().await?,
            routine_types: storage.list_routine_types().await?,
        })
    }
    .await;

    match result {
        Ok(catalog) => Ok(HttpResponse::Ok().json(catalog)),
        Err(e) => Ok(error_response(e, ErrorCode::NotFound, "Load catalog")),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::facilities::requests::FacilityQuery;
use crate::services::FacilityService;
use crate::utils::FilterQuery;

static FACILITY_SERVICE: Lazy<FacilityService> = Lazy::new(FacilityService::new_lazy);

pub async fn filter_facilities(
    req: HttpRequest,
    query: FilterQuery<FacilityQuery>,
) -> ActixResult<HttpResponse> {
    FACILITY_SERVICE
        .list_facilities(&req, query.into_inner())
        .await
}

pub fn configure_facility_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/filter-facilities/", web::get().to(filter_facilities));
}

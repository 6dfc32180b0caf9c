use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::faculty::requests::FacultyQuery;
use crate::services::FacultyService;
use crate::utils::FilterQuery;

static FACULTY_SERVICE: Lazy<FacultyService> = Lazy::new(FacultyService::new_lazy);

pub async fn list_faculty_members(
    req: HttpRequest,
    query: FilterQuery<FacultyQuery>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE.list_members(&req, query.into_inner()).await
}

pub fn configure_faculty_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/faculty-members/", web::get().to(list_faculty_members));
}

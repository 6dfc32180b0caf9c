use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::Criteria;
use crate::utils::FilterQuery;
use crate::services::StudentService;

static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn filter_students(
    req: HttpRequest,
    query: FilterQuery<Criteria>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .filter_students(&req, query.into_inner())
        .await
}

pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/filter-students/", web::get().to(filter_students));
}

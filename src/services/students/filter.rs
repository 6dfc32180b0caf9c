use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    Criteria, ErrorCode,
    students::responses::{StudentFilterResponse, StudentRecord},
};
use crate::services::error_response;

pub async fn filter_students(
    service: &StudentService,
    request: &HttpRequest,
    criteria: Criteria,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let files = service.get_file_store(request);
    let scope = criteria.scope();

    // 人数与名单是两个独立视图
    let counts = match storage.student_counts(&scope).await {
        Ok(counts) => counts,
        Err(e) => return Ok(error_response(e, ErrorCode::StudentNotFound, "Count students")),
    };
    let students = match storage.visible_students(&scope).await {
        Ok(views) => views
            .into_iter()
            .map(|view| StudentRecord::from_view(view, |path| files.url(path)))
            .collect(),
        Err(e) => return Ok(error_response(e, ErrorCode::StudentNotFound, "Filter students")),
    };

    Ok(HttpResponse::Ok().json(StudentFilterResponse { students, counts }))
}

#[cfg(test)]
mod tests {
    use crate::models::catalog::requests::CreateClassRequest;
    use crate::models::students::{entities::Gender, requests::CreateStudentRequest};
    use crate::routes::configure_student_routes;
    use crate::services::test_support::TestContext;
    use actix_web::App;
    use actix_web::test::{TestRequest, call_and_read_body_json, init_service};

    fn class(numeric_value: i32, public: bool) -> CreateClassRequest {
        CreateClassRequest {
            name: format!("Class {numeric_value}"),
            name_en: format!("Class {numeric_value}"),
            numeric_value,
            description: String::new(),
            male_student: 30,
            female_student: 25,
            show_students_publicly: public,
        }
    }

    fn student(name: &str, class_id: i64, photo: Option<&str>) -> CreateStudentRequest {
        CreateStudentRequest {
            name: name.into(),
            gender: Gender::Female,
            roll_number: format!("{name}-1"),
            registration_number: format!("REG-{name}"),
            class_id: Some(class_id),
            department_id: None,
            photo: photo.map(String::from),
            guardian_name: String::new(),
            guardian_phone: String::new(),
            address: String::new(),
        }
    }

    #[actix_web::test]
    async fn test_hidden_class_reports_counts_without_rows() {
        let ctx = TestContext::new().await;
        let public = ctx.storage.create_class(class(6, true)).await.unwrap();
        let hidden = ctx.storage.create_class(class(7, false)).await.unwrap();
        let with_photo = ctx
            .storage
            .create_student(student("Nadia", public.id, Some("students/nadia.jpg")))
            .await
            .unwrap();
        let without_photo = ctx
            .storage
            .create_student(student("Mitu", public.id, None))
            .await
            .unwrap();
        ctx.storage
            .create_student(student("Rina", hidden.id, None))
            .await
            .unwrap();

        let app = init_service(
            App::new()
                .app_data(ctx.storage_data())
                .app_data(ctx.files_data())
                .configure(configure_student_routes),
        )
        .await;

        let req = TestRequest::get()
            .uri(&format!("/filter-students/?class_id={}", hidden.id))
            .to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["students"], serde_json::json!([]));
        assert_eq!(
            body["counts"],
            serde_json::json!({ "male": 30, "female": 25, "total": 55 })
        );

        let req = TestRequest::get()
            .uri(&format!("/filter-students/?class_id={}", public.id))
            .to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        let rows = body["students"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        for row in rows {
            if row["id"] == with_photo.id {
                assert_eq!(row["image"], "/media/students/nadia.jpg");
            } else {
                assert_eq!(row["id"], without_photo.id);
                assert_eq!(
                    row["image"],
                    format!("/static/img/administration/{}.jpeg", without_photo.id % 10 + 1)
                );
            }
        }

        let req = TestRequest::get().uri("/filter-students/?class_id=999").to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["counts"]["total"], 0);
        assert_eq!(body["students"], serde_json::json!([]));
    }
}

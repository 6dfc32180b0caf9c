use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    faculty::{
        requests::{CreateFacultyMemberRequest, FacultyQuery},
        responses::{FacultyListResponse, FacultyRecord},
    },
};
use crate::storage::{FileStore, Storage};

use super::error_response;

pub struct FacultyService {
    storage: Option<Arc<dyn Storage>>,
    files: Option<Arc<dyn FileStore>>,
}

impl FacultyService {
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

    /// 启用的教职工，可按分类过滤
    pub async fn list_members(
        &self,
        request: &HttpRequest,
        query: FacultyQuery,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);
        let files = self.get_file_store(request);

        match storage.list_faculty_members(query.category_filter()).await {
            Ok(members) => Ok(HttpResponse::Ok().json(FacultyListResponse {
                members: members
                    .into_iter()
                    .map(|member| FacultyRecord::from_member(member, |path| files.url(path)))
                    .collect(),
            })),
            Err(e) => Ok(error_response(e, ErrorCode::NotFound, "List faculty members")),
        }
    }

    pub async fn create_member(
        &self,
        request: &HttpRequest,
        req: CreateFacultyMemberRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request);

        match storage.create_faculty_member(req).await {
            Ok(member) => Ok(HttpResponse::Created().json(ApiResponse::success(
                member,
                "Faculty member created successfully",
            ))),
            Err(e) => Ok(error_response(e, ErrorCode::NotFound, "Create faculty member")),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::faculty::{
        entities::FacultyCategory, requests::CreateFacultyMemberRequest,
    };
    use crate::routes::configure_faculty_routes;
    use crate::services::test_support::TestContext;
    use actix_web::App;
    use actix_web::test::{TestRequest, call_and_read_body_json, init_service};

    fn member(name: &str, category: FacultyCategory, photo: Option<&str>) -> CreateFacultyMemberRequest {
        CreateFacultyMemberRequest {
            category,
            name: name.into(),
            position: "Head Teacher".into(),
            department: "Science".into(),
            education: String::new(),
            experience: String::new(),
            email: String::new(),
            phone: String::new(),
            photo: photo.map(String::from),
            is_active: true,
            order: 0,
        }
    }

    #[actix_web::test]
    async fn test_faculty_list_by_category() {
        let ctx = TestContext::new().await;
        for req in [
            member("Rahima", FacultyCategory::Teacher, Some("faculty_photos/rahima.jpg")),
            member("Jamal", FacultyCategory::Staff, None),
        ] {
            ctx.storage.create_faculty_member(req).await.unwrap();
        }

        let app = init_service(
            App::new()
                .app_data(ctx.storage_data())
                .app_data(ctx.files_data())
                .configure(configure_faculty_routes),
        )
        .await;

        let req = TestRequest::get()
            .uri("/faculty-members/?category=staff&category=teacher")
            .to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        let members = body["members"].as_array().unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0]["name"], "Rahima");
        assert_eq!(members[0]["category"], "teacher");
        assert_eq!(members[0]["photo_url"], "/media/faculty_photos/rahima.jpg");

        let req = TestRequest::get().uri("/faculty-members/?category=all").to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["members"].as_array().unwrap().len(), 2);

        let req = TestRequest::get()
            .uri("/faculty-members/?category=principal")
            .to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body, serde_json::json!({ "members": [] }));
    }
}

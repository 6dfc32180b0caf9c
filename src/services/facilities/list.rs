use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FacilityService;
use crate::models::{
    ErrorCode,
    facilities::{
        requests::FacilityQuery,
        responses::{FacilityListResponse, FacilityRecord},
    },
};
use crate::services::error_response;

pub async fn list_facilities(
    service: &FacilityService,
    request: &HttpRequest,
    query: FacilityQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let files = service.get_file_store(request);

    match storage.list_facilities(query.type_filter()).await {
        Ok(views) => Ok(HttpResponse::Ok().json(FacilityListResponse {
            facilities: views
                .into_iter()
                .map(|view| FacilityRecord::from_view(view, |path| files.url(path)))
                .collect(),
        })),
        Err(e) => Ok(error_response(e, ErrorCode::NotFound, "List facilities")),
    }
}

#[cfg(test)]
mod tests {
    use crate::models::facilities::requests::{CreateFacilityRequest, CreateFacilityTypeRequest};
    use crate::routes::configure_facility_routes;
    use crate::services::test_support::TestContext;
    use actix_web::App;
    use actix_web::test::{TestRequest, call_and_read_body_json, init_service};

    fn facility(type_id: Option<i64>, title: &str) -> CreateFacilityRequest {
        CreateFacilityRequest {
            facility_type_id: type_id,
            title: title.into(),
            description: String::new(),
            icon: "fa-flask".into(),
            count: 2,
            unit: "rooms".into(),
            image: None,
            is_active: true,
            order: 0,
        }
    }

    #[actix_web::test]
    async fn test_filter_by_type_name() {
        let ctx = TestContext::new().await;
        let labs = ctx
            .storage
            .create_facility_type(CreateFacilityTypeRequest {
                name: "Laboratory".into(),
                order: 1,
                is_active: true,
            })
            .await
            .unwrap();
        ctx.storage
            .create_facility(facility(Some(labs.id), "Physics Lab"))
            .await
            .unwrap();
        ctx.storage
            .create_facility(facility(None, "Playground"))
            .await
            .unwrap();

        let app = init_service(
            App::new()
                .app_data(ctx.storage_data())
                .app_data(ctx.files_data())
                .configure(configure_facility_routes),
        )
        .await;

        let req = TestRequest::get().uri("/filter-facilities/").to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["facilities"].as_array().unwrap().len(), 2);

        let req = TestRequest::get()
            .uri("/filter-facilities/?type=Laboratory")
            .to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        let facilities = body["facilities"].as_array().unwrap();
        assert_eq!(facilities.len(), 1);
        assert_eq!(facilities[0]["type"], "Laboratory");
        assert_eq!(facilities[0]["image_url"], "");

        let req = TestRequest::get()
            .uri("/filter-facilities/?type=Library")
            .to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        assert!(body["facilities"].as_array().unwrap().is_empty());
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MediaService;
use crate::models::{
    ApiResponse, ErrorCode,
    media::{
        requests::{CreateGalleryRequest, GalleryQuery},
        responses::{GalleryImageRecord, GalleryListResponse},
    },
};
use crate::services::error_response;

pub async fn filter_gallery_images(
    service: &MediaService,
    request: &HttpRequest,
    query: GalleryQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let files = service.get_file_store(request);

    match storage.list_gallery_images(query.category_filter()).await {
        Ok(images) => Ok(HttpResponse::Ok().json(GalleryListResponse {
            images: images
                .into_iter()
                .map(|image| GalleryImageRecord::from_image(image, |path| files.url(path)))
                .collect(),
        })),
        Err(e) => Ok(error_response(e, ErrorCode::NotFound, "Filter gallery")),
    }
}

pub async fn create_gallery_image(
    service: &MediaService,
    request: &HttpRequest,
    req: CreateGalleryRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_gallery_image(req).await {
        Ok(image) => Ok(HttpResponse::Created().json(ApiResponse::success(
            image,
            "Gallery image created successfully",
        ))),
        Err(e) => Ok(error_response(e, ErrorCode::NotFound, "Create gallery image")),
    }
}

#[cfg(test)]
mod tests {
    use crate::models::media::{entities::GalleryCategory, requests::CreateGalleryRequest};
    use crate::routes::configure_media_routes;
    use crate::services::test_support::TestContext;
    use actix_web::App;
    use actix_web::test::{TestRequest, call_and_read_body_json, init_service};

    #[actix_web::test]
    async fn test_gallery_category_filter() {
        let ctx = TestContext::new().await;
        for (title, category) in [
            ("Campus", GalleryCategory::School),
            ("Staff", GalleryCategory::Teacher),
        ] {
            ctx.storage
                .create_gallery_image(CreateGalleryRequest {
                    title: title.into(),
                    image: format!("gallery/{}.jpg", title.to_lowercase()),
                    category,
                    description: String::new(),
                    is_slider: false,
                })
                .await
                .unwrap();
        }

        let app = init_service(
            App::new()
                .app_data(ctx.storage_data())
                .app_data(ctx.files_data())
                .configure(configure_media_routes),
        )
        .await;

        let req = TestRequest::get()
            .uri("/filter-gallery-images/?category=all")
            .to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["images"].as_array().unwrap().len(), 2);

        let req = TestRequest::get()
            .uri("/filter-gallery-images/?category=teacher")
            .to_request();
        let body: serde_json::Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body["images"][0]["title"], "Staff");
        assert_eq!(body["images"][0]["category"], "Teacher");
        assert_eq!(body["images"][0]["image_url"], "/media/gallery/staff.jpg");
    }
}

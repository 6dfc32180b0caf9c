use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;

use super::UploadService;
use crate::models::files::entities::UploadCategory;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

/// 接收单个 `file` 字段并写入文件存储
///
/// 分类决定目录与允许的扩展名，超过 `max_size` 字节立即中止读取。
pub async fn handle_upload(
    service: &UploadService,
    req: &HttpRequest,
    category: &str,
    mut payload: Multipart,
    max_size: usize,
) -> ActixResult<HttpResponse> {
    let category: UploadCategory = match category.parse() {
        Ok(category) => category,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                msg,
            )));
        }
    };

    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name != "file" {
            continue;
        }
        if upload.is_some() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::MultifileUploadNotAllowed,
                "Only one file can be uploaded at a time",
            )));
        }

        let original_name = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string())
            .unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let data = chunk?;
            if bytes.len() + data.len() > max_size {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileSizeExceeded,
                    "File size exceeds the limit",
                )));
            }
            bytes.extend_from_slice(&data);
        }
        upload = Some((original_name, bytes));
    }

    let Some((original_name, bytes)) = upload else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "No file found in upload payload",
        )));
    };

    let files = service.get_file_store(req);
    match files.save(category, &original_name, bytes).await {
        Ok(stored) => {
            tracing::info!("Stored upload {} ({} bytes)", stored.path, stored.size);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                stored,
                "File uploaded successfully",
            )))
        }
        Err(e) => Ok(error_response(e, ErrorCode::FileUploadFailed, "Upload file")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::TestContext;
    use actix_web::http::StatusCode;
    use actix_web::test::{TestRequest, call_service, init_service, read_body};
    use actix_web::{App, web};

    const BOUNDARY: &str = "----portal-test-boundary";
    const PDF_BYTES: &[u8] = b"%PDF-1.4\n%test document\n";

    static SERVICE: once_cell::sync::Lazy<UploadService> =
        once_cell::sync::Lazy::new(UploadService::new_lazy);

    async fn upload(
        req: HttpRequest,
        path: web::Path<String>,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        handle_upload(&SERVICE, &req, &path.into_inner(), payload, 1024).await
    }

    fn multipart_body(parts: &[(&str, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();
        for (filename, content) in parts {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn request(category: &str, body: Vec<u8>) -> TestRequest {
        TestRequest::post()
            .uri(&format!("/uploads/{category}"))
            .insert_header((
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
    }

    #[actix_web::test]
    async fn test_upload_rules() {
        let ctx = TestContext::new().await;
        let app = init_service(
            App::new()
                .app_data(ctx.files_data())
                .route("/uploads/{category}", web::post().to(upload)),
        )
        .await;

        let resp = call_service(
            &app,
            request("notices", multipart_body(&[("Exam Notice.pdf", PDF_BYTES)])).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = serde_json::from_slice(&read_body(resp).await).unwrap();
        assert_eq!(body["data"]["path"], "notices/exam-notice.pdf");
        assert_eq!(body["data"]["url"], "/media/notices/exam-notice.pdf");
        assert!(ctx.media.path().join("notices/exam-notice.pdf").exists());

        // 扩展名正确但内容不是 PDF
        let resp = call_service(
            &app,
            request("notices", multipart_body(&[("fake.pdf", b"plain text")])).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = call_service(
            &app,
            request(
                "books",
                multipart_body(&[("a.pdf", PDF_BYTES), ("b.pdf", PDF_BYTES)]),
            )
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = call_service(
            &app,
            request("results", multipart_body(&[("big.pdf", &[b'%'; 2048])])).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = call_service(
            &app,
            request("homeworks", multipart_body(&[("a.pdf", PDF_BYTES)])).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

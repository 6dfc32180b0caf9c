use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};

use super::DocumentService;
use crate::errors::{PortalError, Result};
use crate::models::{
    ApiResponse, ErrorCode,
    documents::entities::DocumentKind,
    files::entities::DeliveredFile,
};
use crate::storage::{FileStore, Storage};
use crate::utils::format::encoded_basename;

/// 读取文档附件
///
/// 记录不存在或文件已从存储中移除都返回 `NotFound`，其余读取失败返回 `Transient`。
pub async fn fetch_document(
    storage: &dyn Storage,
    files: &dyn FileStore,
    kind: DocumentKind,
    id: i64,
) -> Result<DeliveredFile> {
    let document = storage
        .get_document(kind, id)
        .await?
        .ok_or_else(|| PortalError::not_found(format!("{} {} not found", kind.label(), id)))?;

    if document.file.trim().is_empty() {
        return Err(PortalError::not_found(format!(
            "{} {} has no attached file",
            kind.label(),
            id
        )));
    }

    let bytes = files.read(&document.file).await?;
    let content_type = mime_guess::from_path(&document.file)
        .first_or_octet_stream()
        .to_string();

    Ok(DeliveredFile {
        bytes,
        filename: encoded_basename(&document.file),
        content_type,
    })
}

/// 文件交付方式：下载保存或在浏览器内打开
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Attachment,
    Inline,
}

impl Disposition {
    fn as_str(self) -> &'static str {
        match self {
            Disposition::Attachment => "attachment",
            Disposition::Inline => "inline",
        }
    }
}

pub async fn deliver_document(
    service: &DocumentService,
    request: &HttpRequest,
    kind: DocumentKind,
    id: i64,
    disposition: Disposition,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let files = service.get_file_store(request);

    match fetch_document(storage.as_ref(), files.as_ref(), kind, id).await {
        Ok(file) => Ok(HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, file.content_type))
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("{}; filename=\"{}\"", disposition.as_str(), file.filename),
            ))
            .body(file.bytes)),
        Err(e) if e.is_not_found() => {
            tracing::debug!("Deliver {} {} failed: {}", kind.slug(), id, e);
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "The requested file was not found.",
            )))
        }
        Err(e) => {
            tracing::error!("Deliver {} {} failed: {}", kind.slug(), id, e.format_simple());
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "The file could not be read, please try again later.",
                )),
            )
        }
    }
}

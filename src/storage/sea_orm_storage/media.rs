//! 相册与视频存储操作

use super::{SeaOrmStorage, db_error, now_timestamp, require_text};
use crate::entity::{gallery, videos};
use crate::errors::{FieldErrors, PortalError, Result};
use crate::models::media::{
    entities::{GalleryCategory, GalleryImage, Video},
    requests::{CreateGalleryRequest, CreateVideoRequest, UpdateVideoRequest},
};
use crate::utils::youtube::{extract_youtube_id, watch_url};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

/// 写入前确定视频链接与 ID
///
/// 只给链接时从链接提取 ID，提取失败视为校验错误；只给 ID 时合成观看链接；
/// 两者都给时保留给定的 ID。
fn resolve_video_source(
    errors: &mut FieldErrors,
    youtube_url: Option<&str>,
    youtube_id: Option<&str>,
) -> (String, String) {
    let url = youtube_url.map(str::trim).unwrap_or_default();
    let id = youtube_id.map(str::trim).unwrap_or_default();

    match (url.is_empty(), id.is_empty()) {
        (false, true) => {
            let derived = extract_youtube_id(url);
            if derived.is_empty() {
                errors.insert(
                    "youtube_url".into(),
                    "Could not extract a YouTube video ID from this URL.".into(),
                );
            }
            (url.to_string(), derived)
        }
        (true, false) => (watch_url(id), id.to_string()),
        (false, false) => (url.to_string(), id.to_string()),
        (true, true) => {
            errors.insert(
                "youtube_url".into(),
                "Provide a YouTube URL or video ID.".into(),
            );
            (String::new(), String::new())
        }
    }
}

impl SeaOrmStorage {
    pub async fn create_gallery_image_impl(&self, req: CreateGalleryRequest) -> Result<GalleryImage> {
        let mut errors = FieldErrors::new();
        let title = require_text(&mut errors, "title", &req.title);
        let image = require_text(&mut errors, "image", &req.image);
        if !errors.is_empty() {
            return Err(PortalError::validation(errors));
        }

        let now = now_timestamp();
        let model = gallery::ActiveModel {
            title: Set(title),
            image: Set(image),
            category: Set(req.category.as_str().to_string()),
            description: Set(req.description),
            is_slider: Set(req.is_slider),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建相册图片"))?;

        Ok(result.into_gallery_image())
    }

    /// 相册列表（不含轮播图），未知分类返回空列表
    pub async fn list_gallery_images_impl(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<GalleryImage>> {
        let mut select = gallery::Entity::find().filter(gallery::Column::IsSlider.eq(false));
        if let Some(category) = category {
            let Ok(category) = category.parse::<GalleryCategory>() else {
                return Ok(Vec::new());
            };
            select = select.filter(gallery::Column::Category.eq(category.as_str()));
        }

        let result = select
            .order_by_desc(gallery::Column::CreatedAt)
            .order_by_desc(gallery::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询相册列表"))?;

        Ok(result.into_iter().map(|m| m.into_gallery_image()).collect())
    }

    pub async fn create_video_impl(&self, req: CreateVideoRequest) -> Result<Video> {
        let mut errors = FieldErrors::new();
        let title = require_text(&mut errors, "title", &req.title);
        let (youtube_url, youtube_id) = resolve_video_source(
            &mut errors,
            req.youtube_url.as_deref(),
            req.youtube_id.as_deref(),
        );
        if !errors.is_empty() {
            return Err(PortalError::validation(errors));
        }

        let now = now_timestamp();
        let model = videos::ActiveModel {
            title: Set(title),
            youtube_url: Set(youtube_url),
            youtube_id: Set(youtube_id),
            description: Set(req.description),
            is_active: Set(req.is_active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建视频"))?;

        Ok(result.into_video())
    }

    /// 更新视频，合并后按创建时的规则重新确定链接与 ID
    ///
    /// 只换链接不会覆盖已保存的 ID。
    pub async fn update_video_impl(
        &self,
        id: i64,
        update: UpdateVideoRequest,
    ) -> Result<Option<Video>> {
        let existing = videos::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询视频"))?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut errors = FieldErrors::new();
        let mut model = videos::ActiveModel {
            id: Set(id),
            updated_at: Set(now_timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(require_text(&mut errors, "title", &title));
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        let url = update.youtube_url.unwrap_or(existing.youtube_url);
        let youtube_id = update.youtube_id.unwrap_or(existing.youtube_id);
        let (youtube_url, youtube_id) =
            resolve_video_source(&mut errors, Some(&url), Some(&youtube_id));
        model.youtube_url = Set(youtube_url);
        model.youtube_id = Set(youtube_id);
        if !errors.is_empty() {
            return Err(PortalError::validation(errors));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(db_error("更新视频"))?;

        Ok(Some(updated.into_video()))
    }

    /// 公开视频：启用且 ID 非空
    pub async fn list_public_videos_impl(&self) -> Result<Vec<Video>> {
        let result = videos::Entity::find()
            .filter(videos::Column::IsActive.eq(true))
            .filter(videos::Column::YoutubeId.ne(""))
            .order_by_desc(videos::Column::CreatedAt)
            .order_by_desc(videos::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("查询视频列表"))?;

        Ok(result.into_iter().map(|m| m.into_video()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn storage() -> SeaOrmStorage {
        SeaOrmStorage::new_in_memory().await.unwrap()
    }

    fn video(url: Option<&str>, id: Option<&str>) -> CreateVideoRequest {
        CreateVideoRequest {
            title: "Annual function".into(),
            youtube_url: url.map(String::from),
            youtube_id: id.map(String::from),
            description: String::new(),
            is_active: true,
        }
    }

    #[test]
    fn test_resolve_video_source() {
        let mut errors = FieldErrors::new();
        let (url, id) = resolve_video_source(
            &mut errors,
            Some("https://youtu.be/dQw4w9WgXcQ"),
            None,
        );
        assert_eq!(id, "dQw4w9WgXcQ");
        assert_eq!(url, "https://youtu.be/dQw4w9WgXcQ");

        let (url, _) = resolve_video_source(&mut errors, None, Some("dQw4w9WgXcQ"));
        assert_eq!(url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");

        // 已给定的 ID 不被链接覆盖
        let (_, id) = resolve_video_source(
            &mut errors,
            Some("https://youtu.be/aaaaaaaaaaa"),
            Some("dQw4w9WgXcQ"),
        );
        assert_eq!(id, "dQw4w9WgXcQ");
        assert!(errors.is_empty());

        resolve_video_source(&mut errors, Some("not a url"), None);
        assert!(errors.contains_key("youtube_url"));
    }

    #[tokio::test]
    async fn test_video_create_and_public_list() {
        let storage = storage().await;
        let created = storage
            .create_video_impl(video(
                Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(created.youtube_id, "dQw4w9WgXcQ");

        let err = storage
            .create_video_impl(video(Some("https://example.com/clip"), None))
            .await
            .unwrap_err();
        assert!(err.field_errors().unwrap().contains_key("youtube_url"));

        let mut hidden = video(None, Some("aaaaaaaaaaa"));
        hidden.is_active = false;
        storage.create_video_impl(hidden).await.unwrap();

        let public = storage.list_public_videos_impl().await.unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].id, created.id);
    }

    #[tokio::test]
    async fn test_video_update_keeps_stored_id() {
        let storage = storage().await;
        let created = storage
            .create_video_impl(video(Some("https://youtu.be/dQw4w9WgXcQ"), None))
            .await
            .unwrap();

        let updated = storage
            .update_video_impl(
                created.id,
                UpdateVideoRequest {
                    youtube_url: Some("https://youtu.be/aaaaaaaaaaa".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.youtube_url, "https://youtu.be/aaaaaaaaaaa");
        assert_eq!(updated.youtube_id, "dQw4w9WgXcQ");

        // 清空链接只给 ID 时合成观看链接
        let updated = storage
            .update_video_impl(
                created.id,
                UpdateVideoRequest {
                    youtube_url: Some(String::new()),
                    youtube_id: Some("bbbbbbbbbbb".into()),
                    title: Some("Sports day".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.youtube_id, "bbbbbbbbbbb");
        assert_eq!(
            updated.youtube_url,
            "https://www.youtube.com/watch?v=bbbbbbbbbbb"
        );
        assert_eq!(updated.title, "Sports day");

        let err = storage
            .update_video_impl(
                created.id,
                UpdateVideoRequest {
                    youtube_url: Some(String::new()),
                    youtube_id: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(err.field_errors().unwrap().contains_key("youtube_url"));

        assert!(
            storage
                .update_video_impl(999, UpdateVideoRequest::default())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_gallery_excludes_sliders() {
        let storage = storage().await;
        for (title, category, is_slider) in [
            ("Campus", GalleryCategory::School, false),
            ("Banner", GalleryCategory::School, true),
            ("Teachers", GalleryCategory::Teacher, false),
        ] {
            storage
                .create_gallery_image_impl(CreateGalleryRequest {
                    title: title.into(),
                    image: format!("gallery/{title}.jpg"),
                    category,
                    description: String::new(),
                    is_slider,
                })
                .await
                .unwrap();
        }

        assert_eq!(storage.list_gallery_images_impl(None).await.unwrap().len(), 2);
        let school = storage
            .list_gallery_images_impl(Some("school"))
            .await
            .unwrap();
        assert_eq!(school.len(), 1);
        assert_eq!(school[0].title, "Campus");
        assert!(
            storage
                .list_gallery_images_impl(Some("alumni"))
                .await
                .unwrap()
                .is_empty()
        );
    }
}

//! 本地文件存储
//!
//! 上传文件按分类存放在 `media.root/<分类目录>/` 下，记录中只保存相对路径，
//! 对外地址为 `media.url_prefix` 加相对路径。

use std::io::{ErrorKind, Write};
use std::path::{Component, Path, PathBuf};

use actix_web::web;
use rand::Rng;
use rand::distr::Alphanumeric;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::{PortalError, Result};
use crate::models::files::entities::{StoredFile, UploadCategory};
use crate::utils::{extension_of, slugify, validate_magic_bytes};

const SUFFIX_LEN: usize = 7;
const MAX_SAVE_ATTEMPTS: usize = 8;

#[async_trait::async_trait]
pub trait FileStore: Send + Sync {
    /// 相对路径对应的公开地址
    fn url(&self, path: &str) -> String;

    /// 读取文件内容
    ///
    /// 文件不存在返回 `NotFound`，其余 I/O 错误返回 `Transient`。
    async fn read(&self, path: &str) -> Result<Vec<u8>>;

    /// 校验扩展名与文件头后写入，文件名冲突时追加随机后缀
    async fn save(
        &self,
        category: UploadCategory,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredFile>;
}

#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
    url_prefix: String,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.media.root, config.media.url_prefix.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 拼出绝对路径，拒绝绝对路径与 `..`
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !safe || path.trim().is_empty() {
            return None;
        }
        Some(self.root.join(relative))
    }
}

fn random_suffix() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(char::from)
        .collect()
}

/// 规范化上传文件名的主干部分
fn file_stem(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let stem = base.rsplit_once('.').map(|(s, _)| s).unwrap_or(base);
    let slug = slugify(stem);
    if slug.is_empty() {
        Uuid::new_v4().simple().to_string()[..12].to_string()
    } else {
        slug
    }
}

/// 写入已占用的文件名，失败时删除不完整的文件
fn fill_reserved(path: &Path, mut file: impl Write, bytes: &[u8]) -> std::io::Result<()> {
    let result = file.write_all(bytes).and_then(|_| file.flush());
    if result.is_err() {
        let _ = std::fs::remove_file(path);
    }
    result
}

/// 以 create_new 方式写入，已存在时换名重试
fn write_unique(dir: &Path, stem: &str, extension: &str, bytes: &[u8]) -> std::io::Result<String> {
    std::fs::create_dir_all(dir)?;
    for attempt in 0..MAX_SAVE_ATTEMPTS {
        let name = if attempt == 0 {
            format!("{stem}.{extension}")
        } else {
            format!("{stem}_{}.{extension}", random_suffix())
        };
        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(dir.join(&name))
        {
            Ok(file) => {
                fill_reserved(&dir.join(&name), file, bytes)?;
                return Ok(name);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        }
    }
    Err(std::io::Error::new(
        ErrorKind::AlreadyExists,
        format!("no free file name for {stem}.{extension}"),
    ))
}

#[async_trait::async_trait]
impl FileStore for LocalFileStore {
    fn url(&self, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }
        format!(
            "{}/{}",
            self.url_prefix.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        let Some(full_path) = self.resolve(path) else {
            return Err(PortalError::not_found(format!("文件路径无效: {path}")));
        };

        let display_path = full_path.display().to_string();
        let result = web::block(move || std::fs::read(full_path))
            .await
            .map_err(|e| PortalError::transient(format!("读取文件任务失败: {e}")))?;

        match result {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(PortalError::not_found(format!("文件不存在: {display_path}")))
            }
            Err(e) => {
                tracing::error!("读取文件 {} 失败: {}", display_path, e);
                Err(PortalError::transient(format!("读取文件失败: {e}")))
            }
        }
    }

    async fn save(
        &self,
        category: UploadCategory,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredFile> {
        let Some(extension) = extension_of(file_name).filter(|ext| category.allows(ext)) else {
            return Err(PortalError::field(
                "file",
                format!(
                    "File type not allowed. Allowed extensions are: {}.",
                    category.allowed_extensions().join(", ")
                ),
            ));
        };
        if !validate_magic_bytes(&bytes, &extension) {
            return Err(PortalError::field(
                "file",
                "File content does not match its extension.",
            ));
        }

        let stem = file_stem(file_name);
        let dir = self.root.join(category.dir());
        let size = bytes.len() as u64;
        let ext = extension.clone();
        let stored_name = web::block(move || write_unique(&dir, &stem, &ext, &bytes))
            .await
            .map_err(|e| PortalError::file_operation(format!("写入文件任务失败: {e}")))?
            .map_err(|e| PortalError::file_operation(format!("写入文件失败: {e}")))?;

        let path = format!("{}/{}", category.dir(), stored_name);
        Ok(StoredFile {
            url: self.url(&path),
            content_type: mime_guess::from_ext(&extension)
                .first_or_octet_stream()
                .to_string(),
            path,
            size,
        })
    }
}

use crate::config::AppConfig;
use crate::storage::{FileStore, LocalFileStore, Storage};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub files: Arc<dyn FileStore>,
}

/// 创建本地文件存储，根目录不存在时自动创建
fn create_file_store(config: &AppConfig) -> std::io::Result<Arc<dyn FileStore>> {
    let store = LocalFileStore::from_config(config);
    std::fs::create_dir_all(store.root())?;
    debug!("Media root: {}", store.root().display());
    Ok(Arc::new(store))
}

/// 准备服务器启动的上下文
/// 包括存储与文件存储
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let config = AppConfig::get();

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    let files = create_file_store(config).expect("Failed to prepare media directory");
    warn!("File store initialized at {}", config.media.root);

    if !config.admin_enabled() {
        warn!("ADMIN_TOKEN is not set, admin API is disabled");
    }

    StartupContext { storage, files }
}

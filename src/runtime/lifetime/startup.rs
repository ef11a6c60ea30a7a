use crate::cache::{MokaCacheWrapper, ObjectCache};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::{MediaStore, Storage};
use std::sync::Arc;
use tracing::warn;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub media: MediaStore,
}

/// 准备服务器启动的上下文
/// 包括存储、身份缓存和资料目录
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let config = AppConfig::get();

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::new());
    warn!(
        "Identity cache initialized (ttl: {}s, capacity: {})",
        config.cache.default_ttl, config.cache.max_capacity
    );

    let media = MediaStore::from_config();
    if !media.root().exists() {
        warn!(
            "Media root {} does not exist, downloads will return 404",
            media.root().display()
        );
    }

    Ok(StartupContext {
        storage,
        cache,
        media,
    })
}

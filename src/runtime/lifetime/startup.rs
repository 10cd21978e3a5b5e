//! Startup preparation
//!
//! Builds the storage backend and loads the link store from it.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::StaticConfig;
use crate::services::{LinkSettings, LinkStore};
use crate::storage::StorageFactory;

/// 准备 LinkStore：创建存储后端并加载已保存的链接
pub async fn prepare_store(config: &StaticConfig) -> Result<LinkStore> {
    let start_time = std::time::Instant::now();
    debug!("Preparing link store...");

    let kv = StorageFactory::create(&config.storage)
        .await
        .with_context(|| {
            format!(
                "Failed to create '{}' storage backend at {}",
                config.storage.backend, config.storage.path
            )
        })?;
    info!("Using storage backend: {}", kv.backend_name());

    let store = LinkStore::load(kv, LinkSettings::from(&config.links)).await;

    debug!(
        "Link store ready in {:?}: {} links",
        start_time.elapsed(),
        store.grid().link_count()
    );
    Ok(store)
}

//! Persistence adapter
//!
//! Quick links live in a small key-value namespace. Each record is read and
//! written wholesale as a JSON value; the store does not know what is inside.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::config::StorageConfig;
use crate::errors::{QuicktabError, Result};

pub mod backend;
pub mod models;

pub use backend::{FileStore, MemoryStore};
pub use models::{Icon, IconKind, Link, RawLink, UploadedImage, UploadedImages};

/// Record holding the link grid
pub const LINKS_KEY: &str = "quickLinks";
/// Record holding the uploaded image map
pub const IMAGES_KEY: &str = "uploadedImages";

#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>>;
    async fn set(&self, key: &str, value: serde_json::Value) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
    fn backend_name(&self) -> &'static str;
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create(config: &StorageConfig) -> Result<Arc<dyn KvStore>> {
        debug!("Creating storage backend: {}", config.backend);

        let store: Arc<dyn KvStore> = match config.backend.as_str() {
            "file" => {
                let store = FileStore::open(&config.path).await?;
                debug!("File store path: {}", store.path().display());
                Arc::new(store)
            }
            "memory" => Arc::new(MemoryStore::new()),
            other => {
                return Err(QuicktabError::config(format!(
                    "Unknown storage backend: '{}'. Valid: file, memory",
                    other
                )));
            }
        };

        Ok(store)
    }
}

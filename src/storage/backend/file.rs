use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use tracing::{debug, error, info};

use crate::errors::{QuicktabError, Result};
use crate::storage::KvStore;

/// JSON 文件存储
///
/// 整个命名空间保存为一个 JSON 对象，内存中保留一份副本，
/// 每次写入后整体落盘（先写临时文件再 rename）。
pub struct FileStore {
    file_path: PathBuf,
    cache: RwLock<Map<String, Value>>,
}

impl FileStore {
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        let records = Self::load_from_file(&file_path).await?;
        info!(
            "FileStore ready at {} ({} records)",
            file_path.display(),
            records.len()
        );

        Ok(Self {
            file_path,
            cache: RwLock::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    async fn load_from_file(path: &Path) -> Result<Map<String, Value>> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) if content.trim().is_empty() => Ok(Map::new()),
            Ok(content) => match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(map)) => Ok(map),
                Ok(_) => Err(QuicktabError::storage(format!(
                    "Store file {} is not a JSON object",
                    path.display()
                ))),
                Err(e) => {
                    error!("解析存储文件失败: {}", e);
                    Err(QuicktabError::serialization(format!(
                        "Failed to parse store file {}: {}",
                        path.display(),
                        e
                    )))
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("存储文件不存在，创建空的存储: {}", path.display());
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::write(path, "{}").await.map_err(|e| {
                    QuicktabError::file_operation(format!(
                        "Failed to create store file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                Ok(Map::new())
            }
            Err(e) => Err(QuicktabError::file_operation(format!(
                "Failed to read store file {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn save_to_file(&self) -> Result<()> {
        // 持锁期间只做序列化，不跨 await
        let json = {
            let guard = self.cache.read();
            serde_json::to_string_pretty(&*guard)?
        };

        let mut tmp = self.file_path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.file_path).await?;
        debug!("Store flushed to {}", self.file_path.display());
        Ok(())
    }
}

#[async_trait]
impl KvStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.cache.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.cache.write().insert(key.to_string(), value);
        self.save_to_file().await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let removed = self.cache.write().remove(key).is_some();
        if removed {
            self.save_to_file().await?;
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let store = FileStore::open(&path).await.unwrap();
        assert!(path.exists());
        assert_eq!(store.get("quickLinks").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        let store = FileStore::open(&path).await.unwrap();
        store.set("quickLinks", json!([[{"name": "a"}]])).await.unwrap();
        drop(store);

        let reopened = FileStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.get("quickLinks").await.unwrap(),
            Some(json!([[{"name": "a"}]]))
        );
    }

    #[tokio::test]
    async fn test_remove_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        let store = FileStore::open(&path).await.unwrap();
        store.set("a", json!(1)).await.unwrap();
        store.set("b", json!(2)).await.unwrap();
        store.remove("a").await.unwrap();

        let reopened = FileStore::open(&path).await.unwrap();
        assert_eq!(reopened.get("a").await.unwrap(), None);
        assert_eq!(reopened.get("b").await.unwrap(), Some(json!(2)));
    }

    #[tokio::test]
    async fn test_rejects_non_object_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = FileStore::open(&path).await.err().unwrap();
        assert_eq!(err.code(), "E003");
    }

    #[tokio::test]
    async fn test_rejects_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = FileStore::open(&path).await.err().unwrap();
        assert_eq!(err.code(), "E005");
    }
}

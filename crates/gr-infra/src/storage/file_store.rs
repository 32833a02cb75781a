use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use gr_core::ports::{KeyValueStoreError, KeyValueStorePort};
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Key-value store backed by one JSON object file.
///
/// Writes go to a temporary file next to the target which is then renamed
/// over it, so readers see either the old or the new file. Writers are
/// serialized by an in-process lock.
pub struct FileKeyValueStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create store dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Current contents; a missing file is an empty store.
    async fn read_map(&self) -> Result<Map<String, Value>, KeyValueStoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp store failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp store to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let map = self
            .read_map()
            .await
            .with_context(|| format!("read store failed: {}", self.path.display()))?;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut map = match self.read_map().await {
            Ok(map) => map,
            Err(KeyValueStoreError::Serde(e)) => {
                warn!(path = %self.path.display(), error = %e, "Store file is not valid JSON, starting over");
                Map::new()
            }
            Err(e) => {
                return Err(e).with_context(|| format!("read store failed: {}", self.path.display()));
            }
        };
        map.insert(key.to_string(), value);

        let content = serde_json::to_string_pretty(&map).context("serialize store failed")?;
        self.atomic_write(&content).await?;

        debug!(key, path = %self.path.display(), "Store updated");
        Ok(())
    }
}

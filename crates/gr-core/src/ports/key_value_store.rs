//! Key-value persistence port
//!
//! Single-key reads and writes of JSON values. Each `set` replaces the
//! previous value (last write wins).

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// `Ok(None)` when nothing was ever stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    async fn set(&self, key: &str, value: Value) -> Result<()>;
}

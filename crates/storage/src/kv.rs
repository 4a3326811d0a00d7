//! Key-value store for device preferences
//!
//! This module provides the durable key-value boundary: the [`KeyValueStore`]
//! trait consumed by preference state, a sled-backed [`KvStore`] that survives
//! restarts, an in-memory [`MemoryStore`], and [`DeviceStore`] scoping.

use parking_lot::RwLock;
use serde::{de::DeserializeOwned, Serialize};
use sled::Db;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid key
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Backing store cannot be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Durable string key-value boundary.
///
/// `read` returns `Ok(None)` when the key is absent. Implementations must be
/// shareable across threads; callers decide how to treat failures.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database path
    pub path: String,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Enable compression
    pub use_compression: bool,
    /// Flush to disk after every `write` through [`KeyValueStore`]
    pub flush_on_write: bool,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: "bugar_kv.db".to_string(),
            cache_capacity: 8 * 1024 * 1024, // 8MB
            use_compression: true,
            flush_on_write: true,
        }
    }
}

impl KvConfig {
    /// Create a new configuration with a custom path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Enable or disable flushing after each write
    pub fn flush_on_write(mut self, enabled: bool) -> Self {
        self.flush_on_write = enabled;
        self
    }
}

/// Sled-backed key-value store. Values are stored as JSON.
pub struct KvStore {
    db: Arc<Db>,
    separator: &'static str,
    flush_on_write: bool,
}

impl KvStore {
    /// Open (or create) a key-value store with configuration
    pub fn new(config: KvConfig) -> Result<Self> {
        let mut db_config = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity)
            .use_compression(config.use_compression);

        // Writes flush themselves; no background flusher needed
        if config.flush_on_write {
            db_config = db_config.flush_every_ms(None);
        }

        let db = db_config.open()?;

        tracing::debug!(path = %config.path, "Opened key-value store");

        Ok(Self { db: Arc::new(db), separator: ":", flush_on_write: config.flush_on_write })
    }

    /// Create an in-memory key-value store (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;

        Ok(Self { db: Arc::new(db), separator: ":", flush_on_write: false })
    }

    /// Get a value by key
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.db.get(key.as_bytes())? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Get a value by scoped key (e.g., ["device", "appearance_mode"])
    pub fn get_scoped<T>(&self, scopes: &[&str]) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let key = scopes.join(self.separator);
        self.get(&key)
    }

    /// Set a value by key
    pub fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        if key.is_empty() {
            return Err(KvError::InvalidKey(key.to_string()));
        }
        let bytes = serde_json::to_vec(value)?;
        self.db.insert(key.as_bytes(), bytes)?;
        Ok(())
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}

impl KeyValueStore for KvStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.get(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.set(key, &value)?;
        if self.flush_on_write {
            self.flush()?;
        }
        Ok(())
    }
}

/// Volatile key-value store held in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() {
            return Err(KvError::InvalidKey(key.to_string()));
        }
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Scoped key-value store for device-level settings
///
/// Every key is prefixed with `device:` before reaching the inner store.
pub struct DeviceStore {
    kv: Arc<dyn KeyValueStore>,
}

impl DeviceStore {
    /// Create a new device store
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    fn scoped(key: &str) -> String {
        format!("device:{}", key)
    }
}

impl KeyValueStore for DeviceStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.kv.read(&Self::scoped(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.kv.write(&Self::scoped(key), value)
    }
}

//! Bugar application core
//!
//! Wires the appearance preference store and the offline content catalog into
//! a single [`AppContext`] that is built once at startup and shared with the
//! presentation layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::sync::Arc;

pub use app_core::{Catalog, CatalogError};
pub use app_platform::{AppearanceSource, FixedAppearance, SystemAppearance};
pub use app_state::{AppearanceState, PreferenceConfig, PreferenceStore, Subscription};
pub use app_ui::{AppearanceMode, ColorRole, Palette};
pub use storage::{KeyValueStore, KvConfig, KvStore, MemoryStore};

use storage::DeviceStore;

/// Startup failures
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bundled catalog failed validation
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Result type for application startup
pub type Result<T> = std::result::Result<T, AppError>;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Key-value store settings
    pub kv: KvConfig,
    /// Appearance preference settings
    pub preferences: PreferenceConfig,
}

impl AppConfig {
    /// Create a configuration storing preferences at `path`
    pub fn new(path: impl Into<String>) -> Self {
        Self { kv: KvConfig::new(path), ..Default::default() }
    }

    /// Replace the key-value store settings
    pub fn kv(mut self, kv: KvConfig) -> Self {
        self.kv = kv;
        self
    }

    /// Replace the appearance preference settings
    pub fn preferences(mut self, preferences: PreferenceConfig) -> Self {
        self.preferences = preferences;
        self
    }
}

/// Shared application services
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Appearance preference store
    pub preferences: Arc<PreferenceStore>,
    /// Offline content catalog
    pub catalog: Arc<Catalog>,
}

impl AppContext {
    /// Open storage, restore the appearance preference, and load the catalog.
    ///
    /// If the durable store cannot be opened, preferences are kept in memory
    /// for this session and startup continues.
    pub fn init(config: AppConfig, platform: &dyn AppearanceSource) -> Result<Self> {
        let backend: Arc<dyn KeyValueStore> = match KvStore::new(config.kv.clone()) {
            Ok(kv) => Arc::new(kv),
            Err(e) => {
                tracing::warn!(
                    path = %config.kv.path,
                    error = %e,
                    "Key-value store unavailable, preferences will not persist"
                );
                Arc::new(MemoryStore::new())
            }
        };

        Self::with_backend(backend, platform, config.preferences)
    }

    /// Build a context on an explicit backend
    pub fn with_backend(
        backend: Arc<dyn KeyValueStore>,
        platform: &dyn AppearanceSource,
        preferences: PreferenceConfig,
    ) -> Result<Self> {
        let device = Arc::new(DeviceStore::new(backend));
        let preferences = PreferenceStore::new(device, platform, preferences);
        let catalog = Catalog::builtin()?;

        Ok(Self { preferences: Arc::new(preferences), catalog: Arc::new(catalog) })
    }
}

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` overrides `default_filter`. Calling this more than once is a
/// no-op.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

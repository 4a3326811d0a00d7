//! Appearance preference state
//!
//! [`PreferenceStore`] is the single source of truth for the light/dark
//! appearance. It is constructed once at startup and shared by reference with
//! whatever composes the UI; screens read it with [`PreferenceStore::get_current`],
//! change it only through [`PreferenceStore::toggle`], and re-render from
//! [`PreferenceStore::subscribe`] notifications.
//!
//! The store keeps only the mode; the palette is always derived from it, so
//! the two can never disagree.

use app_platform::AppearanceSource;
use app_ui::{AppearanceMode, Palette};
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Weak};
use storage::KeyValueStore;

/// Default key the appearance mode is persisted under
pub const DEFAULT_STORAGE_KEY: &str = "appearance_mode";

/// Active mode and its resolved palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppearanceState {
    /// Active appearance mode
    pub mode: AppearanceMode,
    /// Palette matching `mode`
    pub palette: &'static Palette,
}

impl From<AppearanceMode> for AppearanceState {
    fn from(mode: AppearanceMode) -> Self {
        Self { mode, palette: mode.palette() }
    }
}

/// Preference store configuration
#[derive(Debug, Clone)]
pub struct PreferenceConfig {
    /// Key the mode is persisted under
    pub storage_key: String,
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.to_string() }
    }
}

impl PreferenceConfig {
    /// Set the persistence key
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

type Listener = Arc<dyn Fn(AppearanceState) + Send + Sync>;

#[derive(Default)]
struct ListenerRegistry {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
    /// States waiting to be delivered, in toggle order
    pending: VecDeque<AppearanceState>,
    /// A delivery loop is draining `pending`
    notifying: bool,
}

impl ListenerRegistry {
    fn insert(&mut self, listener: Listener) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }
}

/// Handle returned by [`PreferenceStore::subscribe`]
///
/// Dropping the handle leaves the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<ListenerRegistry>>,
}

impl Subscription {
    /// Registration id, unique per store
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Remove the listener. Returns false if the store is already gone.
    pub fn unsubscribe(self) -> bool {
        match self.registry.upgrade() {
            Some(registry) => registry.lock().remove(self.id),
            None => false,
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Process-wide appearance preference store
pub struct PreferenceStore {
    mode: RwLock<AppearanceMode>,
    listeners: Arc<Mutex<ListenerRegistry>>,
    backend: Arc<dyn KeyValueStore>,
    persist_lock: Mutex<()>,
    config: PreferenceConfig,
}

impl PreferenceStore {
    /// Create the store, restoring the persisted mode.
    ///
    /// A valid persisted mode wins. With nothing persisted the platform's
    /// preference is used. A corrupt or unreadable value falls back to light.
    pub fn new(
        backend: Arc<dyn KeyValueStore>,
        platform: &dyn AppearanceSource,
        config: PreferenceConfig,
    ) -> Self {
        let mode = initial_mode(backend.as_ref(), platform, &config.storage_key);
        tracing::info!(mode = mode.as_str(), "Appearance preference initialized");

        Self {
            mode: RwLock::new(mode),
            listeners: Arc::new(Mutex::new(ListenerRegistry::default())),
            backend,
            persist_lock: Mutex::new(()),
            config,
        }
    }

    /// Active mode and palette
    pub fn get_current(&self) -> AppearanceState {
        AppearanceState::from(*self.mode.read())
    }

    /// Active mode
    pub fn mode(&self) -> AppearanceMode {
        *self.mode.read()
    }

    /// Palette of the active mode
    pub fn palette(&self) -> &'static Palette {
        self.mode().palette()
    }

    /// Check if dark mode is active
    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// Flip light/dark, persist the new mode, and notify every subscriber
    /// before returning.
    ///
    /// Persistence failures are logged; the new mode stays active regardless.
    /// Readers see the new mode while it is still being written.
    ///
    /// A toggle made from inside a listener is queued and delivered once the
    /// current round finishes, so every listener sees states in toggle order
    /// and its last state matches the store.
    pub fn toggle(&self) -> AppearanceState {
        let (state, persist_guard, deliver) = {
            let mut mode = self.mode.write();
            *mode = mode.toggled();
            let state = AppearanceState::from(*mode);

            // Queued and write-ordered before the next toggle can start
            let deliver = self.enqueue(state);
            (state, self.persist_lock.lock(), deliver)
        };

        self.persist(state.mode);
        drop(persist_guard);

        tracing::debug!(mode = state.mode.as_str(), "Appearance toggled");
        if deliver {
            self.drain();
        }
        state
    }

    /// Register a listener called with the new state after every toggle.
    ///
    /// Listeners run in registration order. A listener registered while a
    /// notification is running is first called on the next toggle.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(AppearanceState) + Send + Sync + 'static,
    {
        let id = self.listeners.lock().insert(Arc::new(listener));
        Subscription { id, registry: Arc::downgrade(&self.listeners) }
    }

    /// Number of registered listeners
    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().entries.len()
    }

    fn persist(&self, mode: AppearanceMode) {
        if let Err(err) = self.backend.write(&self.config.storage_key, mode.as_str()) {
            tracing::warn!(
                key = %self.config.storage_key,
                "Failed to persist appearance mode {}: {}",
                mode.as_str(),
                err
            );
        }
    }

    /// Queue `state`; true if the caller must run the delivery loop
    fn enqueue(&self, state: AppearanceState) -> bool {
        let mut registry = self.listeners.lock();
        registry.pending.push_back(state);
        if registry.notifying {
            false
        } else {
            registry.notifying = true;
            true
        }
    }

    fn drain(&self) {
        loop {
            let next = {
                let mut registry = self.listeners.lock();
                let next = registry.pending.pop_front();
                if next.is_none() {
                    registry.notifying = false;
                }
                next
            };

            match next {
                Some(state) => self.notify(state),
                None => break,
            }
        }
    }

    fn notify(&self, state: AppearanceState) {
        // No lock is held while listeners run; they may re-enter the store
        let snapshot: Vec<(u64, Listener)> = self.listeners.lock().entries.clone();

        for (id, listener) in snapshot {
            // Skip listeners removed by an earlier listener in this round
            if !self.listeners.lock().contains(id) {
                continue;
            }

            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| listener(state))) {
                tracing::error!(
                    listener_id = id,
                    "Appearance listener panicked: {}",
                    panic_message(payload.as_ref())
                );
            }
        }
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("mode", &self.mode())
            .field("subscribers", &self.subscriber_count())
            .field("config", &self.config)
            .finish()
    }
}

fn initial_mode(
    backend: &dyn KeyValueStore,
    platform: &dyn AppearanceSource,
    key: &str,
) -> AppearanceMode {
    match backend.read(key) {
        Ok(Some(raw)) => match raw.parse::<AppearanceMode>() {
            Ok(mode) => mode,
            Err(err) => {
                tracing::warn!("Ignoring persisted appearance: {}", err);
                AppearanceMode::Light
            }
        },
        Ok(None) => platform.system_appearance().unwrap_or_default(),
        Err(err) => {
            tracing::warn!(key, "Failed to read persisted appearance: {}", err);
            AppearanceMode::Light
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}

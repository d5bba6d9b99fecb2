use std::collections::HashMap;
use std::sync::Mutex;

use codee::string::FromToStringCodec;
use codee::{Decoder, Encoder};
use thiserror::Error;

/// localStorage key holding the dark mode preference.
pub const THEME_KEY: &str = "darkMode";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage backend failed: {0}")]
    Backend(String),
    #[error("couldn't encode theme value")]
    Encode,
}

/// Synchronous key/value store the theme preference is persisted to.
pub trait ThemeStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. Used on the server and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .lock()
            .expect("should be able to lock memory store")
            .insert(key.to_string(), value.to_string());
        store
    }

    /// A store that accepts reads but rejects every write, like a browser
    /// with storage disabled or over quota.
    pub fn read_only() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("should be able to lock memory store")
            .get(key)
            .cloned()
    }
}

impl ThemeStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Backend("quota exceeded".to_string()));
        }
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`, looked up on every access so the store itself
/// carries no browser handles.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl ThemeStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

/// Owns the dark mode flag and keeps the store in sync with it.
///
/// When a write fails the controller keeps working with session-only state:
/// the flag still flips, [`ThemeController::is_persistent`] turns false and
/// later changes still try to write.
pub struct ThemeController {
    store: Box<dyn ThemeStore>,
    dark: bool,
    persistent: bool,
}

impl ThemeController {
    /// Resolves the initial flag: a stored preference wins, then the
    /// environment's color scheme, which callers pass as `false` when it is
    /// unknown.
    pub fn new(store: Box<dyn ThemeStore>, prefers_dark: bool) -> Self {
        let dark = stored_preference(store.as_ref()).unwrap_or(prefers_dark);
        Self {
            store,
            dark,
            persistent: true,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn toggle(&mut self) -> bool {
        self.set(!self.dark);
        self.dark
    }

    pub fn set(&mut self, dark: bool) {
        self.dark = dark;
        match self.persist() {
            Ok(()) => self.persistent = true,
            Err(e) => {
                if self.persistent {
                    log::warn!("theme preference will not survive a reload: {e}");
                }
                self.persistent = false;
            }
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        let encoded = <FromToStringCodec as Encoder<bool>>::encode(&self.dark)
            .map_err(|_| StorageError::Encode)?;
        self.store.write(THEME_KEY, &encoded)
    }
}

fn stored_preference(store: &dyn ThemeStore) -> Option<bool> {
    let raw = match store.read(THEME_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            log::warn!("couldn't read theme preference: {e}");
            return None;
        }
    };
    match <FromToStringCodec as Decoder<bool>>::decode(raw.as_str()) {
        Ok(dark) => Some(dark),
        Err(_) => {
            log::warn!("ignoring unrecognized theme preference {raw:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Shares one backing store between controllers, like two page loads.
    struct Shared(Arc<MemoryStore>);

    impl ThemeStore for Shared {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.read(key)
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.write(key, value)
        }
    }

    #[test]
    fn test_defaults_to_color_scheme_without_stored_value() {
        let light = ThemeController::new(Box::new(MemoryStore::default()), false);
        assert!(!light.is_dark());
        let dark = ThemeController::new(Box::new(MemoryStore::default()), true);
        assert!(dark.is_dark());
    }

    #[test]
    fn test_stored_preference_beats_color_scheme() {
        let c = ThemeController::new(Box::new(MemoryStore::with_entry(THEME_KEY, "true")), false);
        assert!(c.is_dark());
        let c = ThemeController::new(Box::new(MemoryStore::with_entry(THEME_KEY, "false")), true);
        assert!(!c.is_dark());
    }

    #[test]
    fn test_garbage_stored_value_falls_back_to_color_scheme() {
        let c = ThemeController::new(Box::new(MemoryStore::with_entry(THEME_KEY, "dark")), true);
        assert!(c.is_dark());
    }

    #[test]
    fn test_toggle_persists_immediately() {
        let store = Arc::new(MemoryStore::default());
        let mut c = ThemeController::new(Box::new(Shared(store.clone())), false);
        assert_eq!(store.get(THEME_KEY), None);

        assert!(c.toggle());
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("true"));

        // a fresh load sees the written value
        let reloaded = ThemeController::new(Box::new(Shared(store.clone())), false);
        assert!(reloaded.is_dark());
    }

    #[test]
    fn test_double_toggle_restores_persisted_value() {
        for initial in ["true", "false"] {
            let store = Arc::new(MemoryStore::with_entry(THEME_KEY, initial));
            let mut c = ThemeController::new(Box::new(Shared(store.clone())), false);
            c.toggle();
            assert_ne!(store.get(THEME_KEY).as_deref(), Some(initial));
            c.toggle();
            assert_eq!(store.get(THEME_KEY).as_deref(), Some(initial));
        }
    }

    #[test]
    fn test_failed_write_keeps_session_state() {
        let mut c = ThemeController::new(Box::new(MemoryStore::read_only()), false);
        assert!(c.is_persistent());
        assert!(c.toggle());
        assert!(c.is_dark());
        assert!(!c.is_persistent());
        assert!(!c.toggle());
    }
}

use std::collections::HashMap;

/// The fixed set of keys the portal persists.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Theme,
    UserRole,
    UserToken,
}

impl StoreKey {
    pub fn name(&self) -> &'static str {
        match self {
            StoreKey::Theme => "theme",
            StoreKey::UserRole => "userRole",
            StoreKey::UserToken => "userToken",
        }
    }
}

/// String-keyed, string-valued persistence for portal preferences.
pub trait StateStore {
    fn get(&self, key: StoreKey) -> Option<String>;
    fn set(&mut self, key: StoreKey, value: &str);
    fn remove(&mut self, key: StoreKey);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore(HashMap<StoreKey, String>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: StoreKey, value: &str) -> Self {
        self.0.insert(key, value.to_owned());
        self
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: StoreKey) -> Option<String> {
        self.0.get(&key).cloned()
    }

    fn set(&mut self, key: StoreKey, value: &str) {
        self.0.insert(key, value.to_owned());
    }

    fn remove(&mut self, key: StoreKey) {
        self.0.remove(&key);
    }
}

/// `window.localStorage`. Browsers may refuse storage (private mode, quota),
/// so every call is best-effort and failures only get logged.
#[cfg(feature = "web")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(feature = "web")]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "web")]
impl StateStore for BrowserStore {
    fn get(&self, key: StoreKey) -> Option<String> {
        Self::storage()?.get_item(key.name()).ok().flatten()
    }

    fn set(&mut self, key: StoreKey, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, dropping {}", key.name());
            return;
        };
        if storage.set_item(key.name(), value).is_err() {
            log::warn!("failed to persist {}", key.name());
        }
    }

    fn remove(&mut self, key: StoreKey) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, cannot clear {}", key.name());
            return;
        };
        if storage.remove_item(key.name()).is_err() {
            log::warn!("failed to clear {}", key.name());
        }
    }
}

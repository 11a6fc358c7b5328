use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Minimal string key-value persistence used by the session store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{local_storage as browser_local_storage, window, BrowserStorage};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::KeyValueStore;
    use web_sys::{Storage, Window};

    pub fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    pub fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub struct BrowserStorage {
        storage: Storage,
    }

    impl BrowserStorage {
        pub fn new(storage: Storage) -> Self {
            Self { storage }
        }
    }

    impl KeyValueStore for BrowserStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            self.storage
                .set_item(key, value)
                .map_err(|_| format!("Failed to write {} to localStorage", key))
        }

        fn remove(&self, key: &str) {
            let _ = self.storage.remove_item(key);
        }
    }
}

/// Durable store for the current target: `localStorage` in the browser,
/// process memory elsewhere (or when the browser denies storage access).
pub fn local_storage() -> Rc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        match browser_local_storage() {
            Ok(storage) => return Rc::new(BrowserStorage::new(storage)),
            Err(err) => log::warn!("falling back to in-memory session storage: {}", err),
        }
    }
    Rc::new(MemoryStorage::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_and_removes() {
        let store = MemoryStorage::new();
        assert!(store.get("token").is_none());
        store.set("token", "abc").unwrap();
        assert_eq!(store.get("token").as_deref(), Some("abc"));
        store.remove("token");
        store.remove("token");
        assert!(store.get("token").is_none());
    }
}

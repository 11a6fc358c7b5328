use std::{cell::RefCell, rc::Rc};

use crate::{
    api::{ProfileUpdate, Session, UserProfile},
    utils::storage::{self, KeyValueStore, MemoryStorage},
};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Single owner of the authenticated identity. Clones share the same
/// in-memory state and backing store.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
    current: Rc<RefCell<Option<Session>>>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let store = Self {
            storage,
            current: Rc::new(RefCell::new(None)),
        };
        let restored = store.load();
        *store.current.borrow_mut() = restored;
        store
    }

    /// Store backed by the browser's `localStorage` (memory on the host).
    pub fn browser() -> Self {
        Self::new(storage::local_storage())
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    /// Reads the persisted identity. Missing keys or a malformed `user`
    /// value yield `None`.
    pub fn load(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let raw_user = self.storage.get(USER_KEY)?;
        match serde_json::from_str::<UserProfile>(&raw_user) {
            Ok(user) => Some(Session { user, token }),
            Err(err) => {
                log::warn!("ignoring malformed persisted user: {}", err);
                None
            }
        }
    }

    pub fn set(&self, user: UserProfile, token: String) -> Result<(), String> {
        let raw_user = serde_json::to_string(&user)
            .map_err(|e| format!("Failed to serialize user: {}", e))?;
        self.storage.set(USER_KEY, &raw_user)?;
        if let Err(err) = self.storage.set(TOKEN_KEY, &token) {
            self.storage.remove(USER_KEY);
            return Err(err);
        }
        log::info!("session started for user {} ({})", user.id, user.role.as_str());
        *self.current.borrow_mut() = Some(Session { user, token });
        Ok(())
    }

    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        if self.current.borrow_mut().take().is_some() {
            log::info!("session cleared");
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|s| s.token.clone())
    }

    /// Merges edited profile fields into the stored identity. No-op without
    /// a session.
    pub fn update_profile(&self, update: &ProfileUpdate) -> Result<Option<Session>, String> {
        let Some(session) = self.current() else {
            return Ok(None);
        };
        let mut user = session.user;
        user.name = update.name.clone();
        user.email = update.email.clone();
        user.phone = if update.phone.is_empty() {
            None
        } else {
            Some(update.phone.clone())
        };
        self.set(user, session.token)?;
        Ok(self.current())
    }
}

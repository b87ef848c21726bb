//! Client-side auth session persistence.
//!
//! Three string values live in tab-scoped browser storage: the bearer token,
//! the serialized user profile, and the active chat session id. The storage
//! backend is a trait so the store runs against an in-memory map in tests.

use crate::types::UserProfile;

const KEY_TOKEN: &str = "quill_token";
const KEY_USER: &str = "quill_user";
const KEY_CHAT_SESSION: &str = "quill_session";

/// Minimal key-value surface the session store needs.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser session storage. Scoped to the tab; cleared when it closes.
#[derive(Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        use gloo_storage::Storage;
        gloo_storage::SessionStorage::get(key).ok()
    }

    fn write(&self, key: &str, value: &str) {
        use gloo_storage::Storage;
        let _ = gloo_storage::SessionStorage::set(key, value);
    }

    fn remove(&self, key: &str) {
        use gloo_storage::Storage;
        gloo_storage::SessionStorage::delete(key);
    }
}

/// Everything a rehydrated session carries.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user: UserProfile,
    pub chat_session: Option<String>,
}

/// Session store over an injectable backend. Reads and writes are
/// synchronous; last writer wins.
#[derive(Clone, Default)]
pub struct SessionStore<S> {
    backend: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Rehydrates a persisted session. An absent token means unauthenticated;
    /// a profile that fails to parse is treated the same way.
    pub fn load(&self) -> Option<StoredSession> {
        let token = self.backend.read(KEY_TOKEN)?;
        let user = serde_json::from_str(&self.backend.read(KEY_USER)?).ok()?;
        let chat_session = self.backend.read(KEY_CHAT_SESSION);
        Some(StoredSession {
            token,
            user,
            chat_session,
        })
    }

    /// Persists token, profile, and chat session id together.
    pub fn persist(&self, token: &str, user: &UserProfile, chat_session: Option<&str>) {
        self.backend.write(KEY_TOKEN, token);
        if let Ok(json) = serde_json::to_string(user) {
            self.backend.write(KEY_USER, &json);
        }
        self.set_chat_session(chat_session);
    }

    /// Rotates (or unsets) the chat session id independently of the token.
    pub fn set_chat_session(&self, chat_session: Option<&str>) {
        match chat_session {
            Some(id) => self.backend.write(KEY_CHAT_SESSION, id),
            None => self.backend.remove(KEY_CHAT_SESSION),
        }
    }

    /// Clears everything. Never fails.
    pub fn clear(&self) {
        self.backend.remove(KEY_TOKEN);
        self.backend.remove(KEY_USER);
        self.backend.remove(KEY_CHAT_SESSION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.values.borrow_mut().remove(key);
        }
    }

    fn profile() -> UserProfile {
        serde_json::from_value(serde_json::json!({
            "_id": "u1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "role": "user",
        }))
        .unwrap()
    }

    #[test]
    fn test_persist_then_load_round_trips() {
        let store = SessionStore::new(MemoryStore::default());
        store.persist("tok-1", &profile(), Some("s1"));

        let session = store.load().unwrap();
        assert_eq!(session.token, "tok-1");
        assert_eq!(session.user.email, "ada@example.com");
        assert_eq!(session.chat_session.as_deref(), Some("s1"));
    }

    #[test]
    fn test_clear_leaves_nothing_behind() {
        let backend = MemoryStore::default();
        let store = SessionStore::new(backend);
        store.persist("tok-1", &profile(), Some("s1"));

        store.clear();

        assert!(store.load().is_none());
        assert!(store.backend.values.borrow().is_empty());
    }

    #[test]
    fn test_missing_token_means_unauthenticated() {
        let store = SessionStore::new(MemoryStore::default());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_chat_session_rotates_independently() {
        let store = SessionStore::new(MemoryStore::default());
        store.persist("tok-1", &profile(), None);
        assert_eq!(store.load().unwrap().chat_session, None);

        store.set_chat_session(Some("s2"));
        let session = store.load().unwrap();
        assert_eq!(session.token, "tok-1");
        assert_eq!(session.chat_session.as_deref(), Some("s2"));

        store.set_chat_session(None);
        assert_eq!(store.load().unwrap().chat_session, None);
    }

    #[test]
    fn test_corrupt_profile_is_unauthenticated() {
        let backend = MemoryStore::default();
        backend.write(KEY_TOKEN, "tok-1");
        backend.write(KEY_USER, "{not json");
        let store = SessionStore::new(backend);

        assert!(store.load().is_none());
    }
}

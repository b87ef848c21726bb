//! Global application state

use leptos::prelude::*;

use crate::session::{BrowserStore, SessionStore};
use crate::types::UserProfile;

fn default_api_base() -> String {
    option_env!("QUILL_BACKEND_API")
        .unwrap_or("http://127.0.0.1:5050")
        .to_string()
}

/// Global application state, provided through context at the app root.
///
/// The signals mirror what the session store persists; components react to
/// the signals, never to storage directly.
#[derive(Clone)]
pub struct AppState {
    /// Bearer token for authenticated requests
    pub token: RwSignal<Option<String>>,
    /// Signed-in user's profile
    pub user: RwSignal<Option<UserProfile>>,
    /// Active chat session id, rotated independently of the token
    pub chat_session: RwSignal<Option<String>>,
    /// API base URL
    pub api_base: RwSignal<String>,
    store: SessionStore<BrowserStore>,
}

impl AppState {
    pub fn new() -> Self {
        let store = SessionStore::new(BrowserStore);
        let (token, user, chat_session) = match store.load() {
            Some(s) => (Some(s.token), Some(s.user), s.chat_session),
            None => (None, None, None),
        };

        Self {
            token: RwSignal::new(token),
            user: RwSignal::new(user),
            chat_session: RwSignal::new(chat_session),
            api_base: RwSignal::new(default_api_base()),
            store,
        }
    }

    /// Persists the session and updates the signals synchronously so
    /// guarded routes re-render immediately.
    pub fn login(&self, token: String, user: UserProfile, chat_session: Option<String>) {
        self.store.persist(&token, &user, chat_session.as_deref());
        self.token.set(Some(token));
        self.user.set(Some(user));
        self.chat_session.set(chat_session);
    }

    /// Clears persisted and in-memory state unconditionally.
    pub fn logout(&self) {
        self.store.clear();
        self.token.set(None);
        self.user.set(None);
        self.chat_session.set(None);
    }

    /// Rotates or unsets the active chat session id.
    pub fn set_chat_session(&self, session_id: Option<String>) {
        self.store.set_chat_session(session_id.as_deref());
        self.chat_session.set(session_id);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.get().map(|u| u.is_admin()).unwrap_or(false)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

//! Session Storage
//!
//! Persists the access token in `localStorage` and answers the session check.

use storefront_core::{Session, SessionCheck};

const TOKEN_KEY: &str = "token";

/// `localStorage`-backed session
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSession;

impl LocalStorageSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn store(&self, session: &Session) {
        let Some(storage) = Self::storage() else {
            log::warn!("[SESSION] localStorage unavailable, session not persisted");
            return;
        };
        if storage.set_item(TOKEN_KEY, &session.access_token).is_err() {
            log::warn!("[SESSION] Failed to persist session token");
        }
    }

    pub fn clear(&self) {
        let Some(storage) = Self::storage() else {
            log::warn!("[SESSION] localStorage unavailable, session not cleared");
            return;
        };
        if storage.remove_item(TOKEN_KEY).is_err() {
            log::warn!("[SESSION] Failed to clear session token");
        }
    }
}

impl SessionCheck for LocalStorageSession {
    fn has_session(&self) -> bool {
        Self::storage()
            .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
            .is_some_and(|token| !token.is_empty())
    }
}

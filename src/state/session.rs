//! Persisted session slots: the bearer token and the cached user profile.
//!
//! Both live in browser local storage under the `mailops.` prefix and are
//! read lazily on every access, so a token removed by another tab (or by
//! the session monitor) is observed immediately.

use crate::api::types::UserProfile;
use crate::utils::storage;

pub const TOKEN_KEY: &str = "mailops.token";
pub const USER_KEY: &str = "mailops.user";

pub fn auth_token() -> Option<String> {
    storage::read(TOKEN_KEY).filter(|token| !token.is_empty())
}

pub fn set_auth_token(token: &str) {
    storage::write(TOKEN_KEY, token);
}

pub fn clear_auth_token() {
    storage::remove(TOKEN_KEY);
}

/// Returns the cached profile, or `None` when the slot is empty or holds
/// JSON that no longer parses.
pub fn current_user() -> Option<UserProfile> {
    let raw = storage::read(USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

pub fn set_current_user(user: &UserProfile) {
    if let Ok(raw) = serde_json::to_string(user) {
        storage::write(USER_KEY, &raw);
    }
}

pub fn clear_current_user() {
    storage::remove(USER_KEY);
}

pub fn clear_session() {
    clear_auth_token();
    clear_current_user();
}

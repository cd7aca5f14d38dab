//! The client-held session: auth token plus cached user record in
//! localStorage. This module is the only reader and writer of those keys.

use contracts::domain::user::User;
use web_sys::window;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the login pair. The token is what the HTTP client attaches as a
/// bearer on every request.
pub fn save_session(token: &str, user: &User) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(serialized) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &serialized);
        }
    }
}

/// Stored bearer token, absent outside a browser context.
pub fn token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Cached user record; a corrupt entry reads as logged out.
pub fn user() -> Option<User> {
    let raw = local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

//! Admin auth context
//!
//! The FixItNow admin console signs in elsewhere and leaves the admin's
//! bearer token in local storage. This page only reads it and clears it on
//! logout.

use fixitnow_insights::Session;
use leptos::*;

/// Local storage key holding the admin token
pub const TOKEN_KEY: &str = "fixitnow_token";

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub token: RwSignal<Option<String>>,
}

/// Provide the auth context, seeded from local storage
pub fn provide_auth() {
    let token = storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten());

    provide_context(AuthContext {
        token: create_rw_signal(token.filter(|t| !t.is_empty())),
    });
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

impl AuthContext {
    /// Store a token handed over by the admin
    pub fn sign_in(&self, token: &str) {
        let token = token.trim();
        if token.is_empty() {
            return;
        }
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
        self.token.set(Some(token.to_string()));
    }
}

impl Session for AuthContext {
    fn logout(&self) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
        self.token.set(None);
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

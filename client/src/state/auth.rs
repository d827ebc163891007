//! Identity state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page only needs four capabilities from the identity provider: is the
//! session known yet, is someone signed in, who, and how to start sign-in.
//! `Identity` captures exactly that so the provider can be swapped without
//! touching page logic. `SessionIdentity` is the cookie-session
//! implementation backed by `/api/auth/me`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::User;

/// Capabilities the page consumes from the identity provider.
///
/// Reactive implementations should track their reads so views re-render
/// when the session changes.
pub trait Identity: Send + Sync {
    /// The provider finished resolving the session.
    fn is_ready(&self) -> bool;
    fn is_authenticated(&self) -> bool;
    fn current_user(&self) -> Option<User>;
    /// Start the provider's sign-in flow.
    fn sign_in(&self);
}

/// Shared handle to the active identity provider, provided via context.
pub type IdentityHandle = Arc<dyn Identity>;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }
}

/// Cookie-session identity resolved through `/api/auth/me`.
#[derive(Clone, Copy)]
pub struct SessionIdentity {
    state: RwSignal<AuthState>,
}

impl Default for SessionIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionIdentity {
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()) }
    }

    /// Resolve the session in the background. On the server the state stays
    /// loading so SSR output matches the first hydrated render.
    pub fn load(self) {
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                let next = match crate::net::api::fetch_current_user().await {
                    Some(user) => AuthState::signed_in(user),
                    None => AuthState::signed_out(),
                };
                state.set(next);
            });
        }
    }

    pub fn state(self) -> RwSignal<AuthState> {
        self.state
    }
}

impl Identity for SessionIdentity {
    fn is_ready(&self) -> bool {
        self.state.with(|s| !s.loading)
    }

    fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.user.is_some())
    }

    fn current_user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    fn sign_in(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let location = window.location();
                let return_to = location.pathname().unwrap_or_else(|_| "/".to_owned());
                let _ = location.set_href(&crate::net::api::sign_in_url(&return_to));
            }
        }
    }
}

//! Auth context for managing user authentication state
//!
//! This module provides a reactive authentication context that:
//! - Owns the single session state machine for the whole component tree
//! - Mirrors its state into a signal for rendering
//! - Rehydrates the session from localStorage once hydration is done
//! - Exposes login/logout actions

use std::sync::Arc;

use leptos::prelude::*;

use crate::core::session::{
    AuthState, Credentials, HttpLoginBackend, LoginOutcome, SessionStateMachine, SessionStorage,
    User,
};
use crate::core::Config;

/// Session state machine backed by the HTTP login endpoint
pub type Session = SessionStateMachine<HttpLoginBackend>;

/// Auth context providing authentication state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authentication state, mirrored from the session
    pub state: RwSignal<AuthState>,
    session: StoredValue<Session>,
}

impl AuthContext {
    /// Get current user (if authenticated)
    pub fn user(&self) -> Option<User> {
        self.state.with(|state| state.user().cloned())
    }

    /// Whether a login call is in flight
    pub fn loading(&self) -> bool {
        self.state.with(|state| state.loading)
    }

    /// Error message from the last operation
    pub fn error(&self) -> Option<String> {
        self.state.with(|state| state.error.clone())
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.session.with_value(|session| session.clear_error());
        self.sync();
    }

    /// Read storage and settle the initial state
    pub fn initialize(&self) {
        self.session.with_value(|session| session.initialize());
        self.sync();
    }

    /// Login with email and password
    pub async fn login(self, email: String, password: String) -> LoginOutcome {
        let session = self.session.get_value();

        // The machine flips `loading` inside the future; show it right away
        self.state.update(|state| {
            state.loading = true;
            state.error = None;
        });

        let outcome = session.login(&Credentials::new(email, password)).await;
        self.sync();
        outcome
    }

    /// Logout the current user
    pub fn logout(&self) {
        self.session.with_value(|session| session.logout());
        self.sync();
    }

    fn sync(&self) {
        let snapshot = self.session.with_value(|session| session.state());
        self.state.set(snapshot);
    }
}

#[cfg(feature = "hydrate")]
fn session_storage() -> Arc<dyn SessionStorage> {
    Arc::new(crate::core::session::LocalStorage)
}

#[cfg(not(feature = "hydrate"))]
fn session_storage() -> Arc<dyn SessionStorage> {
    Arc::new(crate::core::session::MemoryStorage::new())
}

#[cfg(feature = "hydrate")]
fn resolve_config(config: Config) -> Config {
    match web_sys::window().and_then(|window| window.location().origin().ok()) {
        Some(origin) => config.with_origin(&origin),
        None => config,
    }
}

#[cfg(not(feature = "hydrate"))]
fn resolve_config(config: Config) -> Config {
    config
}

/// Provide auth context to the component tree
pub fn provide_auth_context(config: Config) -> AuthContext {
    let config = resolve_config(config);
    let backend = HttpLoginBackend::new(reqwest::Client::new(), &config.api_base_url);
    let session = Session::new(backend, session_storage());

    // Both server and client start uninitialized to avoid hydration mismatch
    let ctx = AuthContext {
        state: RwSignal::new(session.state()),
        session: StoredValue::new(session),
    };

    // Storage only exists in the browser; read it once hydration is complete
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            ctx.initialize();
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

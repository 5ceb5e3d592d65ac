//! Shared fixtures for session tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;

use super::backend::{BackendError, Credentials, LoginBackend, LoginResponse};
use super::codec::{Role, User};

/// Fixed "now" used by tests that inject a clock
pub const NOW: i64 = 1_750_000_000;

/// Mint a signed token carrying the standard session claims
pub fn mint_token(id: &str, email: &str, name: &str, role: &str, exp: i64) -> String {
    encode(
        &Header::default(),
        &json!({ "jti": id, "email": email, "name": name, "sub": role, "exp": exp }),
        &EncodingKey::from_secret(b"test_secret_key_for_testing_only"),
    )
    .unwrap()
}

/// Token for Ann the admin, valid for another hour
pub fn ann_token() -> String {
    mint_token("42", "a@b.com", "Ann", "Admin", NOW + 3600)
}

pub fn ann() -> User {
    User {
        user_id: "42".to_string(),
        email: "a@b.com".to_string(),
        name: "Ann".to_string(),
        role: Role::Admin,
    }
}

/// Login backend returning a canned reply
#[derive(Clone)]
pub struct StubBackend {
    reply: Result<LoginResponse, BackendError>,
    calls: Arc<AtomicUsize>,
}

impl StubBackend {
    pub fn token(token: impl Into<String>) -> Self {
        Self::reply(Ok(LoginResponse {
            token: Some(token.into()),
        }))
    }

    pub fn reply(reply: Result<LoginResponse, BackendError>) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LoginBackend for StubBackend {
    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

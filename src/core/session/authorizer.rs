//! Authorization header binding
//!
//! Holds the bearer token every outgoing request should carry. Instead of
//! mutating default headers on a shared client, requests are decorated at
//! send time from the current slot value. Only the session state machine
//! writes the slot.

use std::sync::{Arc, RwLock};

/// Shared bearer token slot
#[derive(Debug, Clone, Default)]
pub struct RequestAuthorizer {
    token: Arc<RwLock<Option<String>>>,
}

impl RequestAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `token` to every request authorized from now on
    pub(crate) fn bind(&self, token: &str) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.to_string());
        }
    }

    /// Stop attaching any token
    pub(crate) fn unbind(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }

    pub fn is_bound(&self) -> bool {
        self.token.read().map(|slot| slot.is_some()).unwrap_or(false)
    }

    /// Value for the `Authorization` header, if a token is bound
    pub fn header_value(&self) -> Option<String> {
        let slot = self.token.read().ok()?;
        slot.as_ref().map(|token| format!("Bearer {}", token))
    }

    /// Decorate a request with the current token
    pub fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.header_value() {
            Some(value) => request.header(reqwest::header::AUTHORIZATION, value),
            None => request,
        }
    }
}

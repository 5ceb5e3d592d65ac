//! Session authentication and role-based authorization
//!
//! This module provides the client side of the login flow:
//! - Bearer token decoding and expiry checks
//! - Token + user persistence
//! - Authorization header binding for outgoing requests
//! - The session state machine (initialize / login / logout)
//! - Route guard decisions per role

pub mod authorizer;
pub mod backend;
pub mod codec;
pub mod error;
pub mod guard;
pub mod machine;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use authorizer::RequestAuthorizer;
pub use backend::{BackendError, Credentials, HttpLoginBackend, LoginBackend, LoginResponse};
pub use codec::{Claims, DecodeError, Role, User};
pub use error::SessionError;
pub use guard::{GuardDecision, decide};
pub use machine::{AuthState, LoginOutcome, SessionStateMachine, SessionStatus};
#[cfg(feature = "hydrate")]
pub use store::LocalStorage;
pub use store::{MemoryStorage, SessionStorage, StoredSession, TokenStore};

//! Route guarding
//!
//! Pure decision over the session state and a route's required role.
//! Rendering the outcome is the UI's job.

use super::codec::Role;
use super::machine::AuthState;

/// What a protected route should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not rehydrated yet: placeholder, never content or redirect
    Loading,
    /// No session: send to the login screen
    RedirectToLogin,
    /// Session role does not match: show a notice in place
    Unauthorized,
    /// Show the protected content
    Render,
}

/// Decide how a protected route renders
pub fn decide(state: &AuthState, required_role: Option<Role>) -> GuardDecision {
    if !state.is_initialized() {
        return GuardDecision::Loading;
    }

    match (state.user(), required_role) {
        (None, _) => GuardDecision::RedirectToLogin,
        (Some(user), Some(role)) if user.role != role => GuardDecision::Unauthorized,
        (Some(_), _) => GuardDecision::Render,
    }
}

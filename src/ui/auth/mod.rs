//! Authentication UI module
//!
//! This module provides the auth context, route guard and the
//! authentication-related components of the portal.

mod context;
mod login_form;
mod route_guard;
mod user_menu;

pub use context::{AuthContext, Session, provide_auth_context, use_auth_context};
pub use login_form::LoginForm;
pub use route_guard::{LoadingScreen, ProtectedRoute, UnauthorizedNotice};
pub use user_menu::{UserAvatar, UserMenu};

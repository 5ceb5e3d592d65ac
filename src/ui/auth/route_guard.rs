//! Protected route wrapper
//!
//! Renders its children only for an initialized, signed-in session whose
//! role matches. Until the session has been read from storage it shows a
//! loading screen, never the content and never a redirect.

use leptos::prelude::*;
use leptos_router::components::{A, Redirect};

use super::context::use_auth_context;
use crate::core::session::guard::{GuardDecision, decide};
use crate::core::session::{Role, SessionError};
use crate::ui::common::{LoadingSpinner, WarningMessageStatic};

/// Guard a subtree by session and role
#[component]
pub fn ProtectedRoute(
    /// Role the session must have; any signed-in user when absent
    #[prop(optional)]
    required_role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth_context();

    move || match auth.state.with(|state| decide(state, required_role)) {
        GuardDecision::Loading => view! { <LoadingScreen /> }.into_any(),
        GuardDecision::RedirectToLogin => view! { <Redirect path="/login" /> }.into_any(),
        GuardDecision::Unauthorized => view! { <UnauthorizedNotice /> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}

/// Full-page placeholder while the session is rehydrated
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex items-center justify-center">
            <LoadingSpinner message="Loading session...".to_string() />
        </div>
    }
}

/// Shown in place of a route the session's role may not see; never redirects
#[component]
pub fn UnauthorizedNotice() -> impl IntoView {
    let auth = use_auth_context();
    let home = auth
        .user()
        .map(|user| user.role.home_path())
        .unwrap_or("/");

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col items-center justify-center p-4">
            <div class="text-center max-w-md">
                <h1 class="text-3xl font-bold text-theme-primary mb-4">{SessionError::Authorization.to_string()}</h1>
                <WarningMessageStatic message="You do not have permission to view this page.".to_string() />
                <div class="mt-8">
                    <A
                        href=home
                        attr:class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                    >
                        "Back to my dashboard"
                    </A>
                </div>
            </div>
        </div>
    }
}

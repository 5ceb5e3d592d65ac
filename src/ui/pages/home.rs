//! Root route: forwards a signed-in user to their role's dashboard.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::ui::auth::{ProtectedRoute, use_auth_context};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth_context();

    view! {
        <ProtectedRoute>
            {move || auth.user().map(|user| view! { <Redirect path=user.role.home_path() /> })}
        </ProtectedRoute>
    }
}

//! Login page component
//!
//! A standalone page for user login, sends the user to their role's
//! dashboard on success.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::session::User;
use crate::ui::auth::{LoginForm, use_auth_context};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();

    // Already signed in (e.g. rehydrated session): go to the dashboard
    Effect::new(move |_| {
        if let Some(user) = auth.user() {
            let navigate = use_navigate();
            navigate(user.role.home_path(), Default::default());
        }
    });

    let on_success = move |user: User| {
        let navigate = use_navigate();
        navigate(user.role.home_path(), Default::default());
    };

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center h-16">
                        <span class="text-xl font-bold text-theme-primary">"LMS Portal"</span>
                    </div>
                </div>
            </header>

            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md">
                    <LoginForm on_success=Callback::new(on_success) />
                </div>
            </main>

            <footer class="py-4 border-t border-theme">
                <p class="text-center text-sm text-theme-tertiary">"LMS Portal"</p>
            </footer>
        </div>
    }
}

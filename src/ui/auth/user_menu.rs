//! User menu component
//!
//! Header widget showing the signed-in user, their role and a sign-out
//! button. Renders nothing while signed out.

use leptos::prelude::*;

use super::context::use_auth_context;
use crate::core::session::User;
use crate::ui::icon::{Icon, icons};

/// User menu component for the header
#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth_context();

    move || {
        auth.user().map(|user| {
            view! {
                <div class="flex items-center gap-3">
                    <UserAvatar user=user.clone() />
                    <div class="hidden sm:flex flex-col">
                        <span class="text-sm font-medium text-theme-primary max-w-[160px] truncate">
                            {user.name.clone()}
                        </span>
                        <span class="text-xs text-theme-tertiary">{user.role.to_string()}</span>
                    </div>
                    <button
                        class="flex items-center gap-1 px-3 py-1.5 text-sm text-theme-secondary hover:text-theme-primary transition-colors"
                        title="Sign out"
                        on:click=move |_| auth.logout()
                    >
                        <Icon name=icons::LOGOUT class="h-4 w-4" />
                        "Sign Out"
                    </button>
                </div>
            }
        })
    }
}

/// Initial-letter avatar
#[component]
pub fn UserAvatar(user: User) -> impl IntoView {
    let source = if user.name.is_empty() { &user.email } else { &user.name };
    let initial = source
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    view! {
        <div
            class="w-8 h-8 rounded-full bg-accent-primary flex items-center justify-center text-white text-sm font-medium"
            title=user.email.clone()
        >
            {initial}
        </div>
    }
}

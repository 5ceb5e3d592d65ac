//! Login form component
//!
//! Email/password form bound to the auth context.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_auth_context;
use crate::core::session::{LoginOutcome, User};
use crate::ui::common::{ErrorMessage, InlineSpinner};
use crate::ui::icon::{Icon, icons};

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<User>>,
) -> impl IntoView {
    let auth = use_auth_context();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    // Form validation
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let validate_email = move || {
        let value = email.get();
        if value.trim().is_empty() {
            email_error.set(Some("Email is required".to_string()));
            false
        } else if !value.contains('@') {
            email_error.set(Some("Please enter a valid email".to_string()));
            false
        } else {
            email_error.set(None);
            true
        }
    };

    let validate_password = move || {
        if password.get().is_empty() {
            password_error.set(Some("Password is required".to_string()));
            false
        } else {
            password_error.set(None);
            true
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.clear_error();

        let email_valid = validate_email();
        let password_valid = validate_password();
        if !email_valid || !password_valid || auth.loading() {
            return;
        }

        let email_val = email.get().trim().to_string();
        let password_val = password.get();

        spawn_local(async move {
            // Failures are already reflected in the auth context error
            if let LoginOutcome::Success(user) = auth.login(email_val, password_val).await {
                password.set(String::new());
                if let Some(callback) = on_success {
                    callback.run(user);
                }
            }
        });
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
            <form on:submit=on_submit class="space-y-6">
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-theme-primary">"Welcome Back"</h2>
                    <p class="mt-2 text-sm text-theme-secondary">
                        "Sign in to your training portal"
                    </p>
                </div>

                <ErrorMessage error=Signal::derive(move || auth.error()) />

                // Email field
                <div>
                    <label for="email" class="block text-sm font-medium text-theme-primary mb-1">
                        "Email"
                    </label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        autocomplete="email"
                        placeholder="you@company.com"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg text-theme-primary"
                        class:border-red-500=move || email_error.get().is_some()
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            email_error.set(None);
                        }
                        on:blur=move |_| { validate_email(); }
                    />
                    {move || {
                        email_error.get().map(|error| {
                            view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                        })
                    }}
                </div>

                // Password field
                <div>
                    <label for="password" class="block text-sm font-medium text-theme-primary mb-1">
                        "Password"
                    </label>
                    <div class="relative">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            placeholder="Enter your password"
                            class="w-full px-3 py-2 pr-10 bg-theme-secondary border border-theme rounded-lg text-theme-primary"
                            class:border-red-500=move || password_error.get().is_some()
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                password_error.set(None);
                            }
                            on:blur=move |_| { validate_password(); }
                        />
                        <button
                            type="button"
                            class="absolute inset-y-0 right-0 pr-3 flex items-center text-theme-tertiary"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || {
                                if show_password.get() {
                                    view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                                } else {
                                    view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                    {move || {
                        password_error.get().map(|error| {
                            view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                        })
                    }}
                </div>

                <button
                    type="submit"
                    class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg disabled:opacity-50"
                    disabled=move || auth.loading()
                >
                    {move || {
                        if auth.loading() {
                            view! {
                                <span class="flex items-center justify-center gap-2">
                                    <InlineSpinner />
                                    "Signing in..."
                                </span>
                            }.into_any()
                        } else {
                            view! { <span class="block">"Sign In"</span> }.into_any()
                        }
                    }}
                </button>
            </form>
        </div>
    }
}

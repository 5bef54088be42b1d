//! Sign-in form component
//!
//! Collects email and password, runs the sign-in flow and shows the error banner.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::context::use_auth_provider;
use crate::core::routes::{FORGOT_PASSWORD_ROUTE, SIGN_UP_ROUTE};
use crate::core::{SignInState, intercept_submission, submit};

/// Sign-in form component
#[component]
pub fn SignInForm() -> impl IntoView {
    let provider = use_auth_provider();
    let navigate = use_navigate();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let attempt = RwSignal::new(SignInState::Idle);

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let credentials = intercept_submission(&ev, email.get_untracked(), password.get_untracked());

        let provider = provider.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let navigator = move |path: &str| navigate(path, Default::default());
            submit(&provider, &navigator, &attempt, credentials).await;
        });
    };

    let submitting = move || attempt.with(SignInState::is_submitting);

    view! {
        <form on:submit=on_submit class="space-y-6">
            <h1 class="text-3xl font-bold text-center mb-8 bg-gradient-to-r from-orange-primary to-orange-secondary bg-clip-text text-transparent">
                "Welcome Back"
            </h1>

            // Error banner
            {move || {
                attempt.with(|state| state.error().map(str::to_string)).map(|error| {
                    view! {
                        <div
                            class="bg-red-100 border-l-4 border-red-500 text-red-700 p-4 rounded mb-6 animate-shake"
                            role="alert"
                        >
                            <p>{error}</p>
                        </div>
                    }
                })
            }}

            <div class="space-y-2">
                <input
                    type="email"
                    name="email"
                    autocomplete="email"
                    placeholder="Email"
                    required
                    class="w-full px-4 py-3 rounded-lg border border-gray-300 bg-white/50 backdrop-blur-sm
                           focus:ring-2 focus:ring-orange-primary focus:border-transparent
                           transition-all duration-300"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>

            <div class="space-y-2">
                <input
                    type="password"
                    name="password"
                    autocomplete="current-password"
                    placeholder="Password"
                    required
                    class="w-full px-4 py-3 rounded-lg border border-gray-300 bg-white/50 backdrop-blur-sm
                           focus:ring-2 focus:ring-orange-primary focus:border-transparent
                           transition-all duration-300"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </div>

            <button
                type="submit"
                class="w-full py-3 px-4 rounded-lg bg-gradient-to-r from-orange-primary to-orange-secondary
                       text-white font-medium hover:brightness-110 transform hover:scale-[1.02]
                       disabled:opacity-50 disabled:cursor-not-allowed
                       transition-all duration-300 flex items-center justify-center gap-2"
                disabled=submitting
            >
                {move || {
                    if submitting() {
                        view! { <span>"Signing in..."</span> }.into_any()
                    } else {
                        view! {
                            <span>"Sign In"</span>
                            <SparklesIcon />
                        }
                            .into_any()
                    }
                }}
            </button>

            <div class="space-y-4 text-center">
                <p class="text-gray-600">
                    "Don't have an account? "
                    <A href=SIGN_UP_ROUTE attr:class="text-orange-primary hover:underline font-medium">
                        "Sign Up"
                    </A>
                </p>
                <A
                    href=FORGOT_PASSWORD_ROUTE
                    attr:class="block text-orange-secondary hover:underline font-medium"
                >
                    "Forgot your password?"
                </A>
            </div>
        </form>
    }
}

#[component]
fn SparklesIcon() -> impl IntoView {
    view! {
        <svg
            class="h-4 w-4 animate-spin-slow"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            aria-hidden="true"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M9.8 4.6 12 2l2.2 2.6L17 6l-2.8 1.4L12 10 9.8 7.4 7 6zM5 14l1.2-2 1.2 2 2 1.2-2 1.2L6.2 18 5 16.4 3 15.2zM17 15l1-1.8 1 1.8 1.8 1-1.8 1-1 1.8-1-1.8-1.8-1z"
            />
        </svg>
    }
}

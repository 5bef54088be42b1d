//! Home page component
//!
//! Landing route reached after a successful sign-in.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::routes::SIGN_IN_ROUTE;

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Medilens"/>

        <div class="min-h-screen bg-gradient-to-br from-[#FFF7F4] via-white to-[#FFF0E9] flex flex-col items-center justify-center p-4">
            <h1 class="text-5xl font-bold mb-6 bg-gradient-to-r from-orange-primary to-orange-secondary bg-clip-text text-transparent">
                "Medilens"
            </h1>
            <A
                href=SIGN_IN_ROUTE
                attr:class="px-6 py-3 rounded-lg bg-gradient-to-r from-orange-primary to-orange-secondary text-white font-medium hover:brightness-110 transition-all"
            >
                "Sign In"
            </A>
        </div>
    }
}

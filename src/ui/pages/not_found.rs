//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::routes::{HOME_ROUTE, SIGN_IN_ROUTE};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-[#FFF7F4] via-white to-[#FFF0E9] flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-800 mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-gray-800 mb-2">
                    "Page Not Found"
                </h2>

                <p class="text-gray-600 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                // Actions
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href=HOME_ROUTE
                        attr:class="px-6 py-3 bg-gradient-to-r from-orange-primary to-orange-secondary text-white font-medium rounded-lg transition-all"
                    >
                        "Go Home"
                    </A>
                    <A
                        href=SIGN_IN_ROUTE
                        attr:class="px-6 py-3 border border-gray-300 text-gray-800 hover:bg-white/60 font-medium rounded-lg transition-colors"
                    >
                        "Sign In"
                    </A>
                </div>
            </div>
        </div>
    }
}

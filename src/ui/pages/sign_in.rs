//! Sign-in page component
//!
//! Full-screen sign-in with the brand panel, the form and the parallax backdrop.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::auth::SignInForm;
use crate::ui::parallax::ParallaxBackdrop;

/// Sign-in page component
#[component]
pub fn SignInPage() -> impl IntoView {
    view! {
        <Title text="Sign In - Medilens"/>

        <div class="relative min-h-screen overflow-hidden bg-gradient-to-br from-[#FFF7F4] via-white to-[#FFF0E9]">
            <ParallaxBackdrop />

            // Main content
            <div class="relative flex min-h-screen items-center justify-center px-6">
                <div class="w-full max-w-4xl animate-fade-in">
                    <div class="flex shadow-2xl rounded-lg overflow-hidden backdrop-blur-sm bg-white/30">
                        // Brand panel
                        <div class="bg-gradient-to-r from-orange-primary to-orange-secondary w-1/3 p-12 flex flex-col justify-center items-center relative overflow-hidden">
                            <div class="flex flex-col items-center relative z-10">
                                <h2 class="text-4xl text-center pb-8 font-bold text-white animate-float">
                                    "Medilens"
                                </h2>
                            </div>
                            <div class="absolute inset-0" aria-hidden="true">
                                <div class="absolute inset-0 grid-animation opacity-20"></div>
                                <div class="absolute inset-0 particles-container opacity-30"></div>
                            </div>
                        </div>

                        // Form panel
                        <div class="w-2/3 p-12 bg-white/40">
                            <div class="max-w-md mx-auto">
                                <SignInForm />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

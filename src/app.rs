use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::auth::{AUTH_ENDPOINT_META, AuthEndpoint};
use crate::ui::{HomePage, NotFoundPage, SignInPage, provide_auth_provider};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provided per request by the server, for routed pages and the 404 fallback alike
    let auth_endpoint = use_context::<AuthEndpoint>().unwrap_or_default().0;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=AUTH_ENDPOINT_META content=auth_endpoint/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Sign-in API client shared by the sign-in form
    provide_auth_provider();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/medilens.css"/>

        <Title text="Medilens"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/sign-in") view=SignInPage/>
            </Routes>
        </Router>
    }
}

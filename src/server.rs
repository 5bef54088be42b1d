//! HTTP router for the server binary.

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::services::ServeDir;

use crate::app::{App, shell};
use crate::ui::auth::AuthEndpoint;

/// Build the application router.
///
/// Every rendered page, including the 404 fallback, advertises `auth_endpoint`
/// in its head so the hydrated client posts credentials to the same place.
pub fn app_router(leptos_options: LeptosOptions, auth_endpoint: AuthEndpoint) -> Router {
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Serve .br and .gz variants of /pkg assets when present
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let route_context = {
        let auth_endpoint = auth_endpoint.clone();
        move || provide_context(auth_endpoint.clone())
    };
    let fallback_context = move || provide_context(auth_endpoint.clone());

    Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes_with_context(&leptos_options, routes, route_context, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler_with_context(
            fallback_context,
            shell,
        ))
        .with_state(leptos_options)
        .layer(
            CompressionLayer::new()
                .br(true) // Brotli - best compression ratio
                .gzip(true) // Gzip - wide support fallback
                .quality(CompressionLevel::Best),
        )
}

//! Auth context for the sign-in screen
//!
//! This module wires the core sign-in flow to the browser:
//! - `HttpAuthProvider` posts credentials to the external sign-in API
//! - the endpoint is handed from the server shell to the client via a meta tag
//! - `RwSignal<SignInState>` and `SubmitEvent` implement the core seams

use std::future::Future;

use leptos::prelude::*;
use serde::Serialize;

use crate::core::routes::DEFAULT_AUTH_ENDPOINT;
use crate::core::{AttemptStore, AuthError, AuthProvider, Credentials, FormSubmission, SignInState};

/// Name of the `<meta>` tag carrying the sign-in endpoint
pub const AUTH_ENDPOINT_META: &str = "medilens-auth-endpoint";

/// Sign-in API location, provided as context by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthEndpoint(pub String);

impl AuthEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AuthEndpoint {
    fn default() -> Self {
        Self(DEFAULT_AUTH_ENDPOINT.to_string())
    }
}

/// Sign-in request body
#[derive(Serialize)]
#[cfg_attr(feature = "ssr", allow(dead_code))]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl<'a> From<&'a Credentials> for SignInRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        SignInRequest {
            email: credentials.identifier(),
            password: credentials.secret(),
        }
    }
}

/// Map the sign-in API's response status onto the provider contract
pub fn classify_status(status: u16) -> Result<(), AuthError> {
    match status {
        200..=299 => Ok(()),
        400 | 401 | 403 => Err(AuthError::InvalidCredentials),
        status => Err(AuthError::Rejected { status }),
    }
}

/// AuthProvider backed by the external sign-in HTTP API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpAuthProvider {
    endpoint: String,
}

impl HttpAuthProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Resolve the endpoint the server advertised in the page head
    #[cfg(not(feature = "ssr"))]
    pub fn discover() -> Self {
        let endpoint = document()
            .query_selector(&format!("meta[name=\"{AUTH_ENDPOINT_META}\"]"))
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"))
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| DEFAULT_AUTH_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    /// Resolve the endpoint from the server-provided context
    #[cfg(feature = "ssr")]
    pub fn discover() -> Self {
        let endpoint = use_context::<AuthEndpoint>().unwrap_or_default();
        Self::new(endpoint.0)
    }
}

impl AuthProvider for HttpAuthProvider {
    #[cfg(not(feature = "ssr"))]
    fn sign_in(&self, credentials: Credentials) -> impl Future<Output = Result<(), AuthError>> {
        use gloo_net::http::Request;

        let endpoint = self.endpoint.clone();
        async move {
            let request = Request::post(&endpoint)
                .header("Content-Type", "application/json")
                .json(&SignInRequest::from(&credentials))
                .map_err(|e| AuthError::Network(e.to_string()))?;

            let response = request
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;

            classify_status(response.status())
        }
    }

    #[cfg(feature = "ssr")]
    fn sign_in(&self, credentials: Credentials) -> impl Future<Output = Result<(), AuthError>> {
        drop(credentials);
        std::future::ready(Err(AuthError::Unavailable(
            "sign-in is not available on the server".to_string(),
        )))
    }
}

/// Provide the auth provider to the component tree
pub fn provide_auth_provider() -> HttpAuthProvider {
    let provider = HttpAuthProvider::discover();
    provide_context(provider.clone());
    provider
}

/// Get the auth provider from the component tree
pub fn use_auth_provider() -> HttpAuthProvider {
    expect_context::<HttpAuthProvider>()
}

impl AttemptStore for RwSignal<SignInState> {
    fn current(&self) -> SignInState {
        self.get_untracked()
    }

    fn replace(&self, state: SignInState) {
        self.set(state);
    }
}

impl FormSubmission for leptos::ev::SubmitEvent {
    fn suppress_default(&self) {
        self.prevent_default();
    }
}

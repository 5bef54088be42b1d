//! Authentication UI module
//!
//! This module provides the sign-in form and the auth provider context
//! for the Medilens frontend.

mod context;
mod sign_in_form;

pub use context::{
    AUTH_ENDPOINT_META, AuthEndpoint, HttpAuthProvider, classify_status, provide_auth_provider,
    use_auth_provider,
};
pub use sign_in_form::SignInForm;

//! Core sign-in logic, independent of the rendering layer

#[cfg(feature = "ssr")]
pub mod config;
pub mod parallax;
pub mod routes;
pub mod sign_in;

pub use parallax::{ParallaxLayer, PointerPosition, PointerSource, PointerSubscription, Viewport};
pub use sign_in::{
    AttemptStore, AuthError, AuthProvider, Credentials, FormSubmission, Navigator,
    SIGN_IN_FAILED_MESSAGE, SignInState, SubmitOutcome, intercept_submission, submit,
};

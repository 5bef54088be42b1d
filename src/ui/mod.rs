pub mod auth;
pub mod pages;
pub mod parallax;

pub use auth::{SignInForm, provide_auth_provider};
pub use pages::{HomePage, NotFoundPage, SignInPage};
pub use parallax::ParallaxBackdrop;

//! Application pages module
//!
//! - Home page (landing route after sign-in)
//! - Sign-in page
//! - Not found page

mod home;
mod not_found;
mod sign_in;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use sign_in::SignInPage;

//! Client-side route paths shared by the router, the sign-in flow and page links.

/// Landing route; the sign-in flow navigates here after a successful attempt
pub const HOME_ROUTE: &str = "/";

/// The sign-in screen itself
pub const SIGN_IN_ROUTE: &str = "/sign-in";

/// Account creation, owned by the surrounding application
pub const SIGN_UP_ROUTE: &str = "/sign-up";

/// Password recovery, owned by the surrounding application
pub const FORGOT_PASSWORD_ROUTE: &str = "/forgot-password";

/// Sign-in API used when no `AUTH_ENDPOINT` is configured
pub const DEFAULT_AUTH_ENDPOINT: &str = "/api/auth/login";

//! Sign-in flow
//!
//! Framework-independent core of the sign-in screen:
//! - `Credentials` built fresh from the form on every submission
//! - `SignInState` machine (`Idle`, `Submitting`, `Failed`, `Succeeded`)
//! - `AuthProvider` / `Navigator` / `AttemptStore` seams for the external collaborators
//! - `submit`, which drives one attempt from credentials to navigation or error

use std::fmt;
use std::future::Future;

use leptos::logging::debug_warn;

use crate::core::routes::HOME_ROUTE;

/// The only message ever shown for a failed attempt
pub const SIGN_IN_FAILED_MESSAGE: &str = "Invalid email or password. Please try again.";

/// Identifier and secret taken verbatim from the form.
///
/// Passed by value into the provider and dropped when the call returns.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    identifier: String,
    secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// True when either field is empty (the input's `required` check was bypassed)
    pub fn is_blank(&self) -> bool {
        self.identifier.is_empty() || self.secret.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// State of the current sign-in attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SignInState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Waiting for the provider; further submissions are ignored.
    ///
    /// There is no timeout: if the provider never resolves, the form stays here
    /// and only a page reload recovers.
    Submitting,
    /// Last attempt was rejected; carries the user-facing message
    Failed(String),
    /// Provider accepted the credentials; navigation has been requested
    Succeeded,
}

impl SignInState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SignInState::Submitting)
    }

    /// Message for the error banner, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            SignInState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Errors reported at the provider boundary.
///
/// Kept distinct for diagnostics; the screen collapses all of them to
/// [`SIGN_IN_FAILED_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Sign-in rejected with status {status}")]
    Rejected { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication provider unavailable: {0}")]
    Unavailable(String),

    #[error("Identifier or secret is empty")]
    MissingCredentials,
}

impl AuthError {
    pub fn user_message(&self) -> &'static str {
        SIGN_IN_FAILED_MESSAGE
    }
}

/// External service that verifies credentials and establishes the session.
pub trait AuthProvider {
    fn sign_in(&self, credentials: Credentials) -> impl Future<Output = Result<(), AuthError>>;
}

/// Client-side view transitions
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate(&self, path: &str) {
        self(path)
    }
}

/// Holder of the attempt state (a signal in the UI, a plain cell in tests)
pub trait AttemptStore {
    fn current(&self) -> SignInState;
    fn replace(&self, state: SignInState);
}

/// A form submission event whose default action (page reload) can be suppressed
pub trait FormSubmission {
    fn suppress_default(&self);
}

/// What `submit` did with a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    SignedIn,
    Failed,
    /// Another attempt was still in flight
    Ignored,
}

/// Suppress the browser's form action and capture the field values.
///
/// Must run synchronously inside the submit handler, before any await.
pub fn intercept_submission<E: FormSubmission>(
    event: &E,
    identifier: impl Into<String>,
    secret: impl Into<String>,
) -> Credentials {
    event.suppress_default();
    Credentials::new(identifier, secret)
}

/// Run one sign-in attempt.
///
/// The provider is called at most once. Navigation to the home route happens
/// only after the provider resolves successfully and the state has moved to
/// `Succeeded`; any error moves the state to `Failed` with the generic message.
pub async fn submit<P, N, S>(
    provider: &P,
    navigator: &N,
    store: &S,
    credentials: Credentials,
) -> SubmitOutcome
where
    P: AuthProvider,
    N: Navigator,
    S: AttemptStore,
{
    if store.current().is_submitting() {
        return SubmitOutcome::Ignored;
    }

    let result = if credentials.is_blank() {
        Err(AuthError::MissingCredentials)
    } else {
        store.replace(SignInState::Submitting);
        provider.sign_in(credentials).await
    };

    match result {
        Ok(()) => {
            store.replace(SignInState::Succeeded);
            navigator.navigate(HOME_ROUTE);
            SubmitOutcome::SignedIn
        }
        Err(err) => {
            debug_warn!("sign-in attempt failed: {err}");
            store.replace(SignInState::Failed(err.user_message().to_string()));
            SubmitOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    /// Provider answering from a queue of scripted outcomes
    #[derive(Default)]
    struct ScriptedProvider {
        outcomes: RefCell<VecDeque<Result<(), AuthError>>>,
        calls: RefCell<Vec<Credentials>>,
    }

    impl ScriptedProvider {
        fn with(outcomes: impl IntoIterator<Item = Result<(), AuthError>>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes.into_iter().collect()),
                calls: RefCell::default(),
            }
        }
    }

    impl AuthProvider for ScriptedProvider {
        fn sign_in(&self, credentials: Credentials) -> impl Future<Output = Result<(), AuthError>> {
            self.calls.borrow_mut().push(credentials);
            let outcome = self
                .outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(AuthError::InvalidCredentials));
            std::future::ready(outcome)
        }
    }

    /// Provider that stays pending until the test releases it
    struct GatedProvider {
        gate: RefCell<Option<oneshot::Receiver<Result<(), AuthError>>>>,
        calls: Cell<usize>,
    }

    impl AuthProvider for GatedProvider {
        fn sign_in(&self, _credentials: Credentials) -> impl Future<Output = Result<(), AuthError>> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            async move {
                match gate {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(AuthError::Network("gate dropped".to_string()))),
                    None => Err(AuthError::Unavailable("gate already used".to_string())),
                }
            }
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        state: RefCell<SignInState>,
        history: RefCell<Vec<SignInState>>,
    }

    impl RecordingStore {
        fn failures(&self) -> usize {
            self.history
                .borrow()
                .iter()
                .filter(|s| matches!(s, SignInState::Failed(_)))
                .count()
        }
    }

    impl AttemptStore for RecordingStore {
        fn current(&self) -> SignInState {
            self.state.borrow().clone()
        }

        fn replace(&self, state: SignInState) {
            self.history.borrow_mut().push(state.clone());
            *self.state.borrow_mut() = state;
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        paths: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.paths.borrow_mut().push(path.to_string());
        }
    }

    #[derive(Default)]
    struct FakeSubmitEvent {
        suppressed: Cell<usize>,
    }

    impl FormSubmission for FakeSubmitEvent {
        fn suppress_default(&self) {
            self.suppressed.set(self.suppressed.get() + 1);
        }
    }

    #[tokio::test]
    async fn test_successful_sign_in_navigates_home_once() {
        let provider = ScriptedProvider::with([Ok(())]);
        let navigator = RecordingNavigator::default();
        let store = RecordingStore::default();

        let outcome = submit(
            &provider,
            &navigator,
            &store,
            Credentials::new("user@example.com", "correctpass"),
        )
        .await;

        assert_eq!(outcome, SubmitOutcome::SignedIn);
        assert_eq!(*navigator.paths.borrow(), vec!["/".to_string()]);
        assert_eq!(store.failures(), 0);
        assert_eq!(store.current(), SignInState::Succeeded);
        assert!(store.current().error().is_none());
    }

    #[tokio::test]
    async fn test_rejected_sign_in_shows_generic_message() {
        let provider = ScriptedProvider::with([Err(AuthError::InvalidCredentials)]);
        let navigator = RecordingNavigator::default();
        let store = RecordingStore::default();

        let outcome = submit(
            &provider,
            &navigator,
            &store,
            Credentials::new("user@example.com", "wrongpass"),
        )
        .await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(navigator.paths.borrow().is_empty());
        assert_eq!(store.failures(), 1);
        assert_eq!(
            store.current().error(),
            Some("Invalid email or password. Please try again.")
        );
    }

    #[tokio::test]
    async fn test_every_error_kind_collapses_to_one_message() {
        let errors = [
            AuthError::InvalidCredentials,
            AuthError::Rejected { status: 500 },
            AuthError::Network("connection reset".to_string()),
            AuthError::Unavailable("offline".to_string()),
        ];

        for error in errors {
            let provider = ScriptedProvider::with([Err(error.clone())]);
            let navigator = RecordingNavigator::default();
            let store = RecordingStore::default();

            submit(&provider, &navigator, &store, Credentials::new("a@b.c", "pw")).await;

            assert_eq!(
                store.current(),
                SignInState::Failed(SIGN_IN_FAILED_MESSAGE.to_string()),
                "{error:?}"
            );
            assert!(navigator.paths.borrow().is_empty());
        }
    }

    #[tokio::test]
    async fn test_credentials_reach_provider_unchanged() {
        let provider = ScriptedProvider::with([Ok(())]);
        let navigator = RecordingNavigator::default();
        let store = RecordingStore::default();

        submit(
            &provider,
            &navigator,
            &store,
            Credentials::new("  User@Example.com ", " p@ss word "),
        )
        .await;

        let calls = provider.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].identifier(), "  User@Example.com ");
        assert_eq!(calls[0].secret(), " p@ss word ");
    }

    #[tokio::test]
    async fn test_failure_then_success_clears_error_before_navigation() {
        let provider = ScriptedProvider::with([Err(AuthError::InvalidCredentials), Ok(())]);
        let store = RecordingStore::default();
        let seen_at_navigation = RefCell::new(Vec::new());
        let navigator = |path: &str| {
            seen_at_navigation
                .borrow_mut()
                .push((path.to_string(), store.current()));
        };

        submit(&provider, &navigator, &store, Credentials::new("user@example.com", "wrongpass")).await;
        assert!(store.current().error().is_some());

        submit(&provider, &navigator, &store, Credentials::new("user@example.com", "correctpass")).await;

        let seen = seen_at_navigation.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], ("/".to_string(), SignInState::Succeeded));
        assert!(store.current().error().is_none());
    }

    #[tokio::test]
    async fn test_repeated_failures_overwrite_message() {
        let provider = ScriptedProvider::with([
            Err(AuthError::InvalidCredentials),
            Err(AuthError::Network("timeout".to_string())),
        ]);
        let navigator = RecordingNavigator::default();
        let store = RecordingStore::default();

        submit(&provider, &navigator, &store, Credentials::new("a@b.c", "one")).await;
        submit(&provider, &navigator, &store, Credentials::new("a@b.c", "two")).await;

        assert_eq!(store.failures(), 2);
        assert_eq!(store.current().error(), Some(SIGN_IN_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_blank_fields_skip_provider() {
        let provider = ScriptedProvider::with([Ok(())]);
        let navigator = RecordingNavigator::default();
        let store = RecordingStore::default();

        let outcome = submit(&provider, &navigator, &store, Credentials::new("", "secret")).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(provider.calls.borrow().is_empty());
        assert!(navigator.paths.borrow().is_empty());
        assert_eq!(*store.history.borrow(), vec![SignInState::Failed(SIGN_IN_FAILED_MESSAGE.to_string())]);
    }

    #[tokio::test]
    async fn test_submission_ignored_while_in_flight() {
        let provider = ScriptedProvider::with([Ok(())]);
        let navigator = RecordingNavigator::default();
        let store = RecordingStore::default();
        store.replace(SignInState::Submitting);

        let outcome = submit(&provider, &navigator, &store, Credentials::new("a@b.c", "pw")).await;

        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert!(provider.calls.borrow().is_empty());
        assert_eq!(store.current(), SignInState::Submitting);
    }

    #[tokio::test]
    async fn test_overlapping_submissions_call_provider_once() {
        let (release, gate) = oneshot::channel();
        let provider = GatedProvider {
            gate: RefCell::new(Some(gate)),
            calls: Cell::new(0),
        };
        let navigator = RecordingNavigator::default();
        let store = RecordingStore::default();

        let first = submit(&provider, &navigator, &store, Credentials::new("a@b.c", "pw"));
        let second = async {
            tokio::task::yield_now().await;
            let outcome = submit(&provider, &navigator, &store, Credentials::new("a@b.c", "pw")).await;
            let _ = release.send(Ok(()));
            outcome
        };

        let (first, second) = tokio::join!(first, second);

        assert_eq!(first, SubmitOutcome::SignedIn);
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(provider.calls.get(), 1);
        assert_eq!(navigator.paths.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_unresolved_provider_keeps_form_submitting() {
        let (_never_released, gate) = oneshot::channel();
        let provider = GatedProvider {
            gate: RefCell::new(Some(gate)),
            calls: Cell::new(0),
        };
        let navigator = RecordingNavigator::default();
        let store = RecordingStore::default();

        tokio::select! {
            biased;
            _ = submit(&provider, &navigator, &store, Credentials::new("a@b.c", "pw")) => {
                panic!("attempt completed without a provider answer");
            }
            retry = async {
                tokio::task::yield_now().await;
                submit(&provider, &navigator, &store, Credentials::new("a@b.c", "pw")).await
            } => {
                assert_eq!(retry, SubmitOutcome::Ignored);
            }
        }

        assert_eq!(store.current(), SignInState::Submitting);
        assert_eq!(provider.calls.get(), 1);
        assert!(navigator.paths.borrow().is_empty());
    }

    #[test]
    fn test_intercept_suppresses_default_action() {
        let event = FakeSubmitEvent::default();

        let credentials = intercept_submission(&event, "user@example.com", "correctpass");

        assert_eq!(event.suppressed.get(), 1);
        assert_eq!(credentials.identifier(), "user@example.com");
        assert_eq!(credentials.secret(), "correctpass");
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let credentials = Credentials::new("user@example.com", "hunter2");
        let debug_str = format!("{:?}", credentials);

        assert!(debug_str.contains("user@example.com"));
        assert!(!debug_str.contains("hunter2"));
    }

    #[test]
    fn test_is_blank() {
        assert!(Credentials::new("", "").is_blank());
        assert!(Credentials::new("a@b.c", "").is_blank());
        assert!(!Credentials::new("a@b.c", "pw").is_blank());
    }

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(SignInState::default(), SignInState::Idle);
        assert!(!SignInState::Idle.is_submitting());
        assert!(SignInState::Submitting.is_submitting());
        assert!(SignInState::Succeeded.error().is_none());
    }
}

//! Auth session manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionManager`] is built by the root `App` component and injected
//! through the Leptos context. It is the only writer of the in-memory
//! [`Session`] and of the persisted token, and it publishes an [`AuthState`]
//! snapshot to its listener after every change.
//!
//! DESIGN
//! ======
//! The manager is a cheap clonable handle over `Arc<Mutex<..>>`. The lock is
//! only taken for short synchronous reads and writes and is never held across
//! an `.await`, so concurrent operations interleave at their remote calls.
//! Concurrent credential exchanges are not coordinated: the last one to
//! complete owns the in-memory token.
//!
//! ERROR HANDLING
//! ==============
//! Bootstrap swallows profile-resolution failures (logged as a warning) and
//! clears the stale persisted token. Explicit sign-in surfaces every failure
//! and only installs its token once the profile resolves, so the visitor
//! stays on the login view.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::expiry::ExpiresIn;
use super::store::SessionStore;
use crate::net::api::AuthApi;
use crate::net::error::{ApiError, AuthError};
use crate::net::types::{Credentials, SignUpRequest, UserProfile};
use crate::state::auth::{AuthState, AuthStatus, BootstrapPhase};

/// Callback receiving a snapshot after every session change.
pub type AuthListener = Arc<dyn Fn(&AuthState) + Send + Sync>;

/// Token returned by a credential exchange, not yet installed.
#[derive(Debug)]
struct Exchanged {
    token: String,
    expires_in_days: Option<u32>,
}

/// In-memory session for the page lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub expires_in_days: Option<u32>,
}

#[derive(Debug, Default)]
struct Inner {
    session: Session,
    profile: Option<UserProfile>,
    phase: BootstrapPhase,
    /// Bumped by every token write or logout; lets a slow bootstrap detect
    /// that the session moved on while it was waiting.
    generation: u64,
}

/// Owner of the auth session.
pub struct SessionManager<A, S> {
    api: A,
    store: S,
    inner: Arc<Mutex<Inner>>,
    listener: Option<AuthListener>,
}

impl<A: Clone, S: Clone> Clone for SessionManager<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            store: self.store.clone(),
            inner: Arc::clone(&self.inner),
            listener: self.listener.clone(),
        }
    }
}

impl<A, S> SessionManager<A, S>
where
    A: AuthApi,
    S: SessionStore,
{
    pub fn new(api: A, store: S) -> Self {
        Self { api, store, inner: Arc::new(Mutex::new(Inner::default())), listener: None }
    }

    /// Attach the change listener.
    #[must_use]
    pub fn with_listener(mut self, listener: impl Fn(&AuthState) + Send + Sync + 'static) -> Self {
        self.listener = Some(Arc::new(listener));
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // READS
    // =========================================================================

    pub fn status(&self) -> AuthStatus {
        let (in_memory, phase) = {
            let inner = self.lock();
            (inner.session.token.is_some(), inner.phase)
        };
        AuthStatus::derive(in_memory, self.store.read_token().is_some(), phase)
    }

    pub fn snapshot(&self) -> AuthState {
        let user = self.lock().profile.clone();
        AuthState { status: self.status(), user }
    }

    /// The in-memory token.
    pub fn token(&self) -> Option<String> {
        self.lock().session.token.clone()
    }

    /// Token for authenticated requests: the in-memory one, else the
    /// persisted one while bootstrap has not confirmed it yet.
    pub fn bearer_token(&self) -> Option<String> {
        self.token().or_else(|| self.store.read_token())
    }

    pub fn session(&self) -> Session {
        self.lock().session.clone()
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.lock().profile.clone()
    }

    pub fn phase(&self) -> BootstrapPhase {
        self.lock().phase
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Restore the session from the persisted token. Runs once; later calls
    /// return immediately.
    pub async fn bootstrap(&self) {
        let generation = {
            let mut inner = self.lock();
            if inner.phase != BootstrapPhase::Idle {
                return;
            }
            inner.phase = BootstrapPhase::Running;
            inner.generation
        };

        let Some(token) = self.store.read_token() else {
            self.lock().phase = BootstrapPhase::Settled;
            self.notify();
            return;
        };
        self.notify();

        match self.login(&token).await {
            Ok(profile) => {
                let mut inner = self.lock();
                if inner.generation == generation {
                    inner.session = Session { token: Some(token), expires_in_days: None };
                    inner.profile = Some(profile);
                }
                inner.phase = BootstrapPhase::Settled;
            }
            Err(err) => {
                leptos::logging::warn!("session bootstrap failed: {err}");
                let untouched = self.lock().generation == generation;
                if untouched && self.store.read_token().as_deref() == Some(token.as_str()) {
                    self.store.clear_token();
                }
                self.lock().phase = BootstrapPhase::Settled;
            }
        }
        self.notify();
    }

    /// Resolve the profile behind `token`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AuthResolution`] when the token is rejected or the
    /// profile endpoint cannot be reached.
    pub async fn login(&self, token: &str) -> Result<UserProfile, AuthError> {
        self.api.resolve_profile(token).await.map_err(AuthError::AuthResolution)
    }

    /// Exchange credentials for a token and hold it in memory, persisting it
    /// when `remember` is set and the response carries a usable lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CredentialRejected`] on a non-2xx answer and
    /// [`AuthError::Exchange`] when the exchange cannot complete.
    pub async fn authenticate(&self, email: &str, password: &str, remember: bool) -> Result<(), AuthError> {
        let exchanged = self.exchange(email, password).await?;
        self.commit(&exchanged, remember, None);
        self.notify();
        Ok(())
    }

    /// [`authenticate`](Self::authenticate) followed by [`login`](Self::login).
    ///
    /// Nothing is written until the profile resolves, so a failed or
    /// cancelled call leaves the session as it was.
    ///
    /// # Errors
    ///
    /// Returns the failing step's error.
    pub async fn sign_in(&self, email: &str, password: &str, remember: bool) -> Result<UserProfile, AuthError> {
        let exchanged = self.exchange(email, password).await?;

        match self.login(&exchanged.token).await {
            Ok(profile) => {
                self.commit(&exchanged, remember, Some(profile.clone()));
                self.notify();
                Ok(profile)
            }
            Err(err) => {
                leptos::logging::warn!("sign-in profile resolution failed: {err}");
                Err(err)
            }
        }
    }

    /// Create an account, then sign in without persisting the token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Registration`] when the account is refused, or the
    /// sign-in error.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let request = SignUpRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() };
        self.api.register(&request).await.map_err(AuthError::Registration)?;
        self.sign_in(email, password, false).await
    }

    /// Forget the token and profile everywhere.
    pub fn logout(&self) {
        {
            let mut inner = self.lock();
            inner.session = Session::default();
            inner.profile = None;
            inner.generation += 1;
            if inner.phase == BootstrapPhase::Idle {
                inner.phase = BootstrapPhase::Settled;
            }
        }
        self.store.clear_token();
        self.notify();
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    async fn exchange(&self, email: &str, password: &str) -> Result<Exchanged, AuthError> {
        let credentials = Credentials { email: email.to_owned(), password: password.to_owned() };
        let response = self
            .api
            .exchange_credentials(&credentials)
            .await
            .map_err(AuthError::from_exchange)?;

        let token = response
            .token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AuthError::Exchange(ApiError::InvalidResponse("missing token".to_owned())))?;

        let expires_in_days = match response.expires_in.as_deref().map(str::parse::<ExpiresIn>) {
            Some(Ok(expires_in)) => Some(expires_in.as_days()),
            Some(Err(err)) => {
                leptos::logging::warn!("ignoring token lifetime: {err}");
                None
            }
            None => None,
        };
        Ok(Exchanged { token, expires_in_days })
    }

    /// Install an exchanged token in memory and, when remembered with a usable
    /// lifetime, in the store. A different stored token is cleared otherwise.
    fn commit(&self, exchanged: &Exchanged, remember: bool, profile: Option<UserProfile>) {
        let Exchanged { token, expires_in_days } = exchanged;
        {
            let mut inner = self.lock();
            if profile.is_some() || inner.session.token.as_deref() != Some(token.as_str()) {
                inner.profile = profile;
            }
            inner.session = Session { token: Some(token.clone()), expires_in_days: *expires_in_days };
            inner.generation += 1;
        }

        match expires_in_days {
            Some(days) if remember => self.store.write_token(token, *days),
            _ => {
                let stored = self.store.read_token();
                if stored.is_some_and(|stored| stored != *token) {
                    self.store.clear_token();
                }
            }
        }
    }

    fn notify(&self) {
        if let Some(listener) = &self.listener {
            listener(&self.snapshot());
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

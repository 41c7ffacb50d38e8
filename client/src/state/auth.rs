//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session manager publishes an [`AuthState`] snapshot after every change;
//! the app mirrors it into an `RwSignal` that route guards and user-aware
//! components read.
//!
//! DESIGN
//! ======
//! Status is three-valued. Until the startup bootstrap has settled, a visitor
//! without an in-memory or persisted token is `Unknown`, and guarded routes
//! wait instead of redirecting.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Progress of the one-shot startup bootstrap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootstrapPhase {
    #[default]
    Idle,
    Running,
    Settled,
}

impl AuthStatus {
    /// Status from token presence and bootstrap progress. Token presence is
    /// what counts; the resolved profile is not consulted.
    pub fn derive(token_in_memory: bool, token_in_store: bool, phase: BootstrapPhase) -> Self {
        if token_in_memory || token_in_store {
            Self::Authenticated
        } else if phase == BootstrapPhase::Settled {
            Self::Unauthenticated
        } else {
            Self::Unknown
        }
    }
}

/// Snapshot of the session as seen by the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub user: Option<UserProfile>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }

    /// Name to greet the user with, once the profile has resolved.
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.name.as_str())
    }
}

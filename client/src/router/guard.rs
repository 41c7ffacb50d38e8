//! Route guard decision.
//!
//! | protection | Authenticated      | Unauthenticated         | Unknown |
//! |------------|--------------------|-------------------------|---------|
//! | public     | render             | render                  | render  |
//! | auth-only  | redirect to `from` | render                  | wait    |
//! | private    | render             | redirect to `/login`    | wait    |
//!
//! A private redirect records the attempted path (with its query string) as
//! `from`; an auth-only redirect consumes it. A `from` that is not a local
//! path, or that points back at an auth-only route, becomes `/`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::table::{Protection, resolve};
use crate::state::auth::AuthStatus;

pub const LOGIN_PATH: &str = "/login";
pub const ROOT_PATH: &str = "/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
    /// Path the visitor was trying to reach, handed to the target route.
    pub from: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Auth status is not known yet; show a placeholder.
    Wait,
    Redirect(Redirect),
}

/// Decide what a navigation to `current_path` shows.
///
/// `current_path` is the attempted path including its query string; `from`
/// is the path carried by the redirect that led here, if any.
pub fn evaluate(protection: Protection, status: AuthStatus, current_path: &str, from: Option<&str>) -> GuardDecision {
    match (protection, status) {
        (Protection::Public, _)
        | (Protection::AuthOnly, AuthStatus::Unauthenticated)
        | (Protection::Private, AuthStatus::Authenticated) => GuardDecision::Render,
        (_, AuthStatus::Unknown) => GuardDecision::Wait,
        (Protection::AuthOnly, AuthStatus::Authenticated) => {
            GuardDecision::Redirect(Redirect { to: return_target(from), from: None })
        }
        (Protection::Private, AuthStatus::Unauthenticated) => GuardDecision::Redirect(Redirect {
            to: LOGIN_PATH.to_owned(),
            from: Some(current_path.to_owned()),
        }),
    }
}

/// Where a signed-in visitor leaving an auth-only route should go.
pub fn return_target(from: Option<&str>) -> String {
    match from {
        Some(path) if is_local_path(path) && resolve(path).descriptor.protection != Protection::AuthOnly => {
            path.to_owned()
        }
        _ => ROOT_PATH.to_owned(),
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}

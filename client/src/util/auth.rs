//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route outlet and the auth screens apply identical redirect behavior:
//! record the navigation state for the target, then replace the history
//! entry so "back" does not bounce through the guard again.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::router::guard::{GuardDecision, Redirect};
use crate::router::navigation::NavigationState;

/// The redirect a decision asks for, if any.
pub fn redirect_target(decision: &GuardDecision) -> Option<&Redirect> {
    match decision {
        GuardDecision::Redirect(redirect) => Some(redirect),
        GuardDecision::Render | GuardDecision::Wait => None,
    }
}

/// Navigation options for guard redirects.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Follow the guard's redirects whenever `decision` asks for one.
pub fn install_guard_redirect<F>(decision: Memo<GuardDecision>, navigation: RwSignal<NavigationState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let decision = decision.get();
        let Some(redirect) = redirect_target(&decision) else {
            return;
        };
        navigation.update(|state| state.record(redirect));
        navigate(&redirect.to, redirect_options());
    });
}

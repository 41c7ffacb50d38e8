//! Cookie consent and the "remember me" gate.
//!
//! Only the acceptance flag is persisted; the bar starts visible until
//! consent has been given.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::util::ui_persistence::{load_json, save_json};

pub const CONSENT_STORAGE_KEY: &str = "paperbook_cookie_consent";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentState {
    pub accepted: bool,
    pub bar_visible: bool,
}

impl Default for ConsentState {
    fn default() -> Self {
        Self::from_accepted(false)
    }
}

impl ConsentState {
    pub fn from_accepted(accepted: bool) -> Self {
        Self { accepted, bar_visible: !accepted }
    }

    pub fn accept(&mut self) {
        self.accepted = true;
        self.bar_visible = false;
    }

    /// Hide the bar without consenting.
    pub fn dismiss(&mut self) {
        self.bar_visible = false;
    }

    pub fn reopen(&mut self) {
        self.bar_visible = true;
    }
}

/// Outcome of clicking the "remember me" checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RememberToggle {
    Set(bool),
    /// Cookies are not accepted; show the consent bar instead.
    AskConsent,
}

pub fn toggle_remember(consent: &ConsentState, remember: bool) -> RememberToggle {
    if consent.accepted || remember {
        RememberToggle::Set(!remember)
    } else {
        RememberToggle::AskConsent
    }
}

pub fn load_consent() -> ConsentState {
    ConsentState::from_accepted(load_json(CONSENT_STORAGE_KEY).unwrap_or(false))
}

/// Apply `f` and persist the acceptance flag.
pub fn update_consent(consent: RwSignal<ConsentState>, f: impl FnOnce(&mut ConsentState)) {
    consent.update(f);
    save_json(CONSENT_STORAGE_KEY, &consent.get_untracked().accepted);
}

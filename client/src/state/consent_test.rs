use super::*;

#[test]
fn default_shows_bar_without_consent() {
    let consent = ConsentState::default();
    assert!(!consent.accepted);
    assert!(consent.bar_visible);
}

#[test]
fn restored_acceptance_hides_bar() {
    assert_eq!(ConsentState::from_accepted(true), ConsentState { accepted: true, bar_visible: false });
}

#[test]
fn accept_and_dismiss_hide_bar() {
    let mut consent = ConsentState::default();
    consent.dismiss();
    assert!(!consent.bar_visible);
    assert!(!consent.accepted);
    consent.reopen();
    consent.accept();
    assert_eq!(consent, ConsentState { accepted: true, bar_visible: false });
}

#[test]
fn remember_toggles_freely_once_accepted() {
    let consent = ConsentState::from_accepted(true);
    assert_eq!(toggle_remember(&consent, false), RememberToggle::Set(true));
    assert_eq!(toggle_remember(&consent, true), RememberToggle::Set(false));
}

#[test]
fn remember_asks_for_consent_when_cookies_refused() {
    let consent = ConsentState::default();
    assert_eq!(toggle_remember(&consent, false), RememberToggle::AskConsent);
}

#[test]
fn remember_can_always_be_switched_off() {
    let consent = ConsentState::default();
    assert_eq!(toggle_remember(&consent, true), RememberToggle::Set(false));
}

use super::*;

fn login_redirect(from: &str) -> Redirect {
    Redirect { to: "/login".to_owned(), from: Some(from.to_owned()) }
}

#[test]
fn from_is_visible_only_at_redirect_target() {
    let mut state = NavigationState::default();
    state.record(&login_redirect("/payment"));
    assert_eq!(state.from_for("/login"), Some("/payment"));
    assert_eq!(state.from_for("/signup"), None);
}

#[test]
fn from_lookup_ignores_query_and_trailing_slash() {
    let mut state = NavigationState::default();
    state.record(&login_redirect("/payment"));
    assert_eq!(state.from_for("/login/?next=1"), Some("/payment"));
}

#[test]
fn later_redirect_without_from_clears_it() {
    let mut state = NavigationState::default();
    state.record(&login_redirect("/payment"));
    state.record(&Redirect { to: "/payment".to_owned(), from: None });
    assert_eq!(state.at.as_deref(), Some("/payment"));
    assert_eq!(state.from_for("/login"), None);
    assert_eq!(state.from_for("/payment"), None);
}

#[test]
fn empty_state_carries_nothing() {
    assert_eq!(NavigationState::default().from_for("/login"), None);
}

#[test]
fn attempted_path_appends_query() {
    assert_eq!(attempted_path("/payment", ""), "/payment");
    assert_eq!(attempted_path("/payment", "?step=2"), "/payment?step=2");
    assert_eq!(attempted_path("/payment", "step=2"), "/payment?step=2");
    assert_eq!(attempted_path("/payment", "?"), "/payment");
}

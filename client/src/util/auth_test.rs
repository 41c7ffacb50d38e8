use super::*;

#[test]
fn render_and_wait_have_no_redirect() {
    assert_eq!(redirect_target(&GuardDecision::Render), None);
    assert_eq!(redirect_target(&GuardDecision::Wait), None);
}

#[test]
fn redirect_decision_exposes_target() {
    let redirect = Redirect { to: "/login".to_owned(), from: Some("/payment".to_owned()) };
    let decision = GuardDecision::Redirect(redirect.clone());
    assert_eq!(redirect_target(&decision), Some(&redirect));
}

#[test]
fn redirects_replace_history_entry() {
    let options = redirect_options();
    assert!(options.replace);
    assert!(options.resolve);
}

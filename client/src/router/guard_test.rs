use super::*;

const STATUSES: [AuthStatus; 3] = [AuthStatus::Unknown, AuthStatus::Authenticated, AuthStatus::Unauthenticated];

fn redirect(to: &str, from: Option<&str>) -> GuardDecision {
    GuardDecision::Redirect(Redirect { to: to.to_owned(), from: from.map(str::to_owned) })
}

// =============================================================
// Public routes
// =============================================================

#[test]
fn public_routes_always_render() {
    for status in STATUSES {
        assert_eq!(evaluate(Protection::Public, status, "/cart", None), GuardDecision::Render);
    }
}

// =============================================================
// Private routes
// =============================================================

#[test]
fn private_route_without_token_redirects_to_login_with_from() {
    assert_eq!(
        evaluate(Protection::Private, AuthStatus::Unauthenticated, "/payment", None),
        redirect(LOGIN_PATH, Some("/payment"))
    );
}

#[test]
fn private_redirect_keeps_query_string() {
    assert_eq!(
        evaluate(Protection::Private, AuthStatus::Unauthenticated, "/identification?step=2", None),
        redirect(LOGIN_PATH, Some("/identification?step=2"))
    );
}

#[test]
fn private_route_with_token_renders() {
    assert_eq!(evaluate(Protection::Private, AuthStatus::Authenticated, "/payment", None), GuardDecision::Render);
}

#[test]
fn private_route_waits_while_unknown() {
    assert_eq!(evaluate(Protection::Private, AuthStatus::Unknown, "/payment", None), GuardDecision::Wait);
}

// =============================================================
// Auth-only routes
// =============================================================

#[test]
fn auth_only_route_with_token_redirects_to_from() {
    assert_eq!(
        evaluate(Protection::AuthOnly, AuthStatus::Authenticated, "/login", Some("/payment")),
        redirect("/payment", None)
    );
}

#[test]
fn auth_only_route_with_token_and_no_from_redirects_home() {
    assert_eq!(evaluate(Protection::AuthOnly, AuthStatus::Authenticated, "/login", None), redirect(ROOT_PATH, None));
}

#[test]
fn auth_only_route_without_token_renders() {
    assert_eq!(
        evaluate(Protection::AuthOnly, AuthStatus::Unauthenticated, "/login", Some("/payment")),
        GuardDecision::Render
    );
}

#[test]
fn auth_only_route_waits_while_unknown() {
    assert_eq!(evaluate(Protection::AuthOnly, AuthStatus::Unknown, "/signup", None), GuardDecision::Wait);
}

// =============================================================
// Return target
// =============================================================

#[test]
fn from_pointing_at_auth_only_route_becomes_root() {
    assert_eq!(return_target(Some("/signup")), ROOT_PATH);
    assert_eq!(return_target(Some("/login?x=1")), ROOT_PATH);
}

#[test]
fn non_local_from_becomes_root() {
    assert_eq!(return_target(Some("https://evil.example")), ROOT_PATH);
    assert_eq!(return_target(Some("//evil.example")), ROOT_PATH);
    assert_eq!(return_target(Some("")), ROOT_PATH);
}

#[test]
fn local_from_is_kept_verbatim() {
    assert_eq!(return_target(Some("/products?search=dom%20casmurro")), "/products?search=dom%20casmurro");
}

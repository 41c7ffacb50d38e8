use super::*;
use crate::net::query::ProductTopic;
use futures::executor::block_on;

// =============================================================
// Configuration
// =============================================================

#[test]
fn config_defaults_to_local_api() {
    let config = ApiConfig::from_base_url(None);
    assert_eq!(config.base_url, DEFAULT_API_URL);
    assert_eq!(config.timeout, Duration::from_secs(15));
}

#[test]
fn config_ignores_blank_and_trims_trailing_slash() {
    assert_eq!(ApiConfig::from_base_url(Some("  ")).base_url, DEFAULT_API_URL);
    assert_eq!(
        ApiConfig::from_base_url(Some("https://api.paperbook.dev/")).base_url,
        "https://api.paperbook.dev"
    );
}

#[test]
fn url_joins_base_and_path_with_one_slash() {
    let config = ApiConfig::from_base_url(Some("https://api.paperbook.dev"));
    assert_eq!(config.url("/auth/local"), "https://api.paperbook.dev/auth/local");
    assert_eq!(config.url("users/me"), "https://api.paperbook.dev/users/me");
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn catalog_endpoints_embed_parameters() {
    assert_eq!(product_endpoint(42), "/products/42");
    assert_eq!(categories_endpoint(7), "/categories?limit=7");
    assert_eq!(
        products_endpoint(&ProductQuery::new(ProductTopic::All)),
        "/products?page=1&limit=6&offset=0"
    );
}

// =============================================================
// Off-browser behavior
// =============================================================

#[test]
fn http_api_is_unavailable_off_browser() {
    let api = HttpApi::default();
    let credentials = Credentials { email: "a@b.co".to_owned(), password: "12345".to_owned() };
    assert_eq!(block_on(api.exchange_credentials(&credentials)), Err(ApiError::Unavailable));
    assert_eq!(block_on(api.resolve_profile("abc")), Err(ApiError::Unavailable));
    assert_eq!(block_on(api.get_product(1)), Err(ApiError::Unavailable));
}

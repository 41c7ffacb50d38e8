use super::*;

fn product(price: f64, sale_price: Option<f64>, is_on_sale: bool) -> Product {
    Product {
        id: 1,
        name: "Dom Casmurro".to_owned(),
        price,
        description: None,
        image_url: None,
        author: None,
        is_on_sale,
        sale_price,
        installments: None,
        category_id: None,
        rating: None,
    }
}

#[test]
fn token_response_reads_camel_case_fields() {
    let parsed: TokenResponse = serde_json::from_str(r#"{"token":"abc","expiresIn":"1a"}"#).unwrap();
    assert_eq!(parsed.token.as_deref(), Some("abc"));
    assert_eq!(parsed.expires_in.as_deref(), Some("1a"));
}

#[test]
fn token_response_tolerates_missing_lifetime() {
    let parsed: TokenResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
    assert_eq!(parsed.expires_in, None);
}

#[test]
fn product_defaults_optional_catalog_fields() {
    let parsed: Product = serde_json::from_str(r#"{"id":7,"name":"Iracema","price":19.9}"#).unwrap();
    assert_eq!(parsed.id, 7);
    assert!(!parsed.is_on_sale);
    assert_eq!(parsed.installments, None);
}

#[test]
fn effective_price_uses_sale_price_only_while_on_sale() {
    assert_eq!(product(50.0, Some(35.0), true).effective_price(), 35.0);
    assert_eq!(product(50.0, Some(35.0), false).effective_price(), 50.0);
    assert_eq!(product(50.0, None, true).effective_price(), 50.0);
}

#[test]
fn price_cents_rounds_to_nearest_cent() {
    assert_eq!(product(19.99, None, false).price_cents(), 1999);
    assert_eq!(product(0.1 + 0.2, None, false).price_cents(), 30);
}

#[test]
fn get_many_reports_remaining_pages() {
    let page: GetMany<Category> =
        serde_json::from_str(r#"{"data":[],"count":0,"total":20,"page":1,"pageCount":3}"#).unwrap();
    assert!(page.has_more());
    let last = GetMany::<Category> { page: 3, page_count: 3, ..GetMany::default() };
    assert!(!last.has_more());
}

#[test]
fn new_product_request_skips_empty_optionals() {
    let body = NewProductRequest {
        name: "Memórias Póstumas".to_owned(),
        price: 42.5,
        description: None,
        author: None,
        category_id: Some(3),
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["categoryId"], 3);
    assert!(json.get("description").is_none());
}

#[test]
fn sign_up_request_yields_matching_credentials() {
    let request = SignUpRequest {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "secret".to_owned(),
    };
    assert_eq!(
        request.credentials(),
        Credentials { email: "ana@example.com".to_owned(), password: "secret".to_owned() }
    );
}

use super::*;
use crate::net::mock::{MockApi, product};
use futures::executor::block_on;

// =============================================================
// Price row
// =============================================================

#[test]
fn price_limit_covers_every_candidate() {
    assert_eq!(pick_price_limit(0.0), 10);
    assert_eq!(pick_price_limit(0.2), 20);
    assert_eq!(pick_price_limit(0.5), 30);
    assert_eq!(pick_price_limit(0.99), 50);
}

#[test]
fn price_limit_clamps_out_of_range_samples() {
    assert_eq!(pick_price_limit(1.0), 50);
    assert_eq!(pick_price_limit(-3.0), 10);
    assert_eq!(pick_price_limit(f64::NAN), 10);
}

// =============================================================
// Featured product
// =============================================================

#[test]
fn featured_prefers_product_on_sale() {
    let api = MockApi::new();
    api.on_products(ProductTopic::OnSale, vec![product(1, "Oferta", 10.0)]);
    api.on_products(ProductTopic::InterestFree, vec![product(2, "Parcelado", 10.0)]);

    let featured = block_on(pick_featured(&api)).unwrap();

    assert_eq!(featured.map(|p| p.id), Some(1));
    assert_eq!(api.list_calls().len(), 1);
    assert_eq!(api.list_calls()[0].limit, 1);
}

#[test]
fn featured_falls_back_to_interest_free_then_recent() {
    let api = MockApi::new();
    api.on_products(ProductTopic::Recent, vec![product(3, "Novo", 10.0)]);
    assert_eq!(block_on(pick_featured(&api)).unwrap().map(|p| p.id), Some(3));

    api.on_products(ProductTopic::InterestFree, vec![product(2, "Parcelado", 10.0)]);
    assert_eq!(block_on(pick_featured(&api)).unwrap().map(|p| p.id), Some(2));
}

#[test]
fn featured_is_none_for_empty_catalog() {
    let api = MockApi::new();
    assert_eq!(block_on(pick_featured(&api)).unwrap(), None);
    let topics: Vec<ProductTopic> = api.list_calls().into_iter().map(|q| q.topic).collect();
    assert_eq!(topics, FEATURED_FALLBACK.to_vec());
}

use super::*;
use crate::net::mock::{MockApi, product};
use futures::executor::block_on;

fn catalog(count: i64) -> MockApi {
    let api = MockApi::new();
    api.on_products(ProductTopic::OnSale, (1..=count).map(|id| product(id, "Livro", 10.0)).collect());
    api
}

#[test]
fn fetch_page_requests_topic_page() {
    let api = catalog(8);
    let first = block_on(fetch_page(&api, ProductTopic::OnSale, 1)).unwrap();
    assert_eq!(first.data.len(), 6);
    assert!(first.has_more());

    let second = block_on(fetch_page(&api, ProductTopic::OnSale, 2)).unwrap();
    assert_eq!(second.data.iter().map(|p| p.id).collect::<Vec<_>>(), vec![7, 8]);
    assert!(!second.has_more());
    assert_eq!(api.list_calls()[1].page, 2);
}

#[test]
fn fetch_page_for_unknown_topic_is_empty() {
    let api = catalog(3);
    let page = block_on(fetch_page(&api, ProductTopic::Recent, 1)).unwrap();
    assert!(page.data.is_empty());
    assert!(!page.has_more());
}

#[test]
fn merge_page_appends_without_duplicates() {
    let mut list = vec![product(1, "A", 1.0), product(2, "B", 1.0)];
    merge_page(&mut list, vec![product(2, "B", 1.0), product(3, "C", 1.0)]);
    assert_eq!(list.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn load_more_hidden_until_first_page_arrives() {
    assert!(!shows_load_more(true, 0, false));
    assert!(shows_load_more(true, 1, false));
    assert!(!shows_load_more(false, 3, false));
}

#[test]
fn failed_first_page_offers_retry() {
    assert!(shows_load_more(true, 0, true));
    assert!(shows_load_more(true, 2, true));
}

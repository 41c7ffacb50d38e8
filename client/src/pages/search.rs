//! Search results (`/products`).
//!
//! Query parameters pick the listing: `catId` filters by category, otherwise
//! a non-blank `search` filters by name, otherwise every product is listed.
//! The `category` slug is only used for the heading.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::product_list::ProductList;
use crate::net::query::ProductTopic;

/// Listing for the given query parameters.
pub fn search_topic(cat_id: Option<&str>, search: Option<&str>) -> ProductTopic {
    if let Some(id) = cat_id.and_then(|raw| raw.trim().parse::<i64>().ok()) {
        return ProductTopic::Category(id);
    }
    match search.map(str::trim) {
        Some(term) if !term.is_empty() => ProductTopic::Search(term.to_owned()),
        _ => ProductTopic::All,
    }
}

/// Heading for a listing; category pages show the readable slug.
pub fn search_title(topic: &ProductTopic, category_slug: Option<&str>) -> String {
    match (topic, category_slug) {
        (ProductTopic::Category(_), Some(slug)) if !slug.trim().is_empty() => {
            format!("Categoria: {}", slug.replace('-', " "))
        }
        _ => topic.title(),
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = use_query_map();
    let listing = Memo::new(move |_| {
        query.with(|params| {
            let topic = search_topic(params.get_str("catId"), params.get_str("search"));
            let title = search_title(&topic, params.get_str("category"));
            (topic, title)
        })
    });

    view! {
        <div class="search-page">
            {move || {
                let (topic, title) = listing.get();
                view! { <ProductList topic=topic title=title/> }
            }}
        </div>
    }
}

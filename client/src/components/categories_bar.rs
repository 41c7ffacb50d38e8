//! Horizontal bar of category links shown on the home page.

#[cfg(test)]
#[path = "categories_bar_test.rs"]
mod categories_bar_test;

use leptos::prelude::*;

use crate::net::types::Category;
use crate::util::format::{encode_query_component, format_query_param};

/// Categories requested for the bar.
pub const CATEGORY_BAR_LIMIT: u32 = 7;

/// Search URL listing one category.
pub fn category_href(category: &Category) -> String {
    format!(
        "/products?category={}&catId={}",
        encode_query_component(&format_query_param(&category.name)),
        category.id
    )
}

#[component]
pub fn CategoriesBar(categories: Vec<Category>) -> impl IntoView {
    view! {
        <nav class="categories-bar" aria-label="Categorias">
            {categories
                .into_iter()
                .map(|category| {
                    let href = category_href(&category);
                    view! { <a class="categories-bar__item" href=href>{category.name}</a> }
                })
                .collect_view()}
            <a class="categories-bar__item categories-bar__item--more" href="/products">"Ver todas"</a>
        </nav>
    }
}

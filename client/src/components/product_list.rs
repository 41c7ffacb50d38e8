//! Paged product row with a "load more" action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Home rows and the search page render a [`ProductList`] per topic. Each
//! list fetches its own pages; a page request still in flight is cancelled
//! when the list unmounts.

#[cfg(test)]
#[path = "product_list_test.rs"]
mod product_list_test;

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::net::api::{CatalogApi, HttpApi};
use crate::net::error::ApiError;
use crate::net::query::{ProductQuery, ProductTopic};
use crate::net::types::{GetMany, Product};
use crate::util::cancel::{CancelSlot, spawn_cancellable};

/// Fetch page `page` (1-based) of `topic`.
///
/// # Errors
///
/// Propagates the catalog request failure.
pub async fn fetch_page<A: CatalogApi>(api: &A, topic: ProductTopic, page: u32) -> Result<GetMany<Product>, ApiError> {
    api.list_products(&ProductQuery::new(topic).with_page(page)).await
}

/// Append `batch` to `list`, skipping products already shown.
pub fn merge_page(list: &mut Vec<Product>, batch: Vec<Product>) {
    for product in batch {
        if !list.iter().any(|existing| existing.id == product.id) {
            list.push(product);
        }
    }
}

/// Whether the "load more" button shows. A failed request keeps it visible
/// as a retry, including when the first page failed.
pub fn shows_load_more(has_more: bool, loaded_pages: u32, failed: bool) -> bool {
    has_more && (failed || loaded_pages > 0)
}

#[component]
pub fn ProductList(topic: ProductTopic, #[prop(optional, into)] title: Option<String>) -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let title = title.unwrap_or_else(|| topic.title());

    let products = RwSignal::new(Vec::<Product>::new());
    let page = RwSignal::new(0_u32);
    let has_more = RwSignal::new(true);
    let loading = RwSignal::new(false);
    let failed = RwSignal::new(false);

    let slot = CancelSlot::new();
    let cleanup_slot = slot.clone();
    on_cleanup(move || cleanup_slot.cancel());

    let load_next = move || {
        if loading.get_untracked() || !has_more.get_untracked() {
            return;
        }
        loading.set(true);
        let next = page.get_untracked() + 1;
        let api = api.clone();
        let topic = topic.clone();
        spawn_cancellable(&slot, async move {
            match fetch_page(&api, topic, next).await {
                Ok(batch) => {
                    has_more.set(batch.has_more());
                    products.update(|list| merge_page(list, batch.data));
                    page.set(next);
                    failed.set(false);
                }
                Err(err) => {
                    leptos::logging::warn!("product page {next} failed: {err}");
                    failed.set(true);
                }
            }
            loading.set(false);
        });
    };

    let initial_load = load_next.clone();
    Effect::new(move || initial_load());

    view! {
        <section class="product-list">
            <h2 class="product-list__title">{title}</h2>
            <div class="product-list__items">
                <For
                    each=move || products.get()
                    key=|product| product.id
                    children=|product| view! { <ProductCard product=product/> }
                />
            </div>
            <Show when=move || !loading.get() && products.with(Vec::is_empty) && !has_more.get()>
                <p class="product-list__empty">"Nenhum livro encontrado."</p>
            </Show>
            <Show when=move || failed.get()>
                <p class="product-list__error">"Não foi possível carregar os livros."</p>
            </Show>
            <Show when=move || shows_load_more(has_more.get(), page.get(), failed.get())>
                <button
                    class="product-list__more"
                    disabled=move || loading.get()
                    on:click={
                        let load_next = load_next.clone();
                        move |_| load_next()
                    }
                >
                    {move || if failed.get() { "Tentar novamente" } else { "Carregar mais" }}
                </button>
            </Show>
        </section>
    }
}

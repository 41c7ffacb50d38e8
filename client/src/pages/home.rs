//! Landing page: categories bar, a highlighted product and topic rows.
//!
//! DESIGN
//! ======
//! The highlighted product falls back through topics: the first product on
//! sale, else the first with interest-free installments, else the most
//! recent. The "under R$ X" row picks X at random once hydrated, so the
//! server never renders a row the client would disagree with.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::categories_bar::{CATEGORY_BAR_LIMIT, CategoriesBar};
use crate::components::product_card::ProductCard;
use crate::components::product_list::ProductList;
use crate::net::api::{CatalogApi, HttpApi};
use crate::net::error::ApiError;
use crate::net::query::{ProductQuery, ProductTopic};
use crate::net::types::{Category, Product};
use crate::util::cancel::{CancelSlot, spawn_cancellable};

/// Candidate limits for the "under R$ X" row.
pub const PRICE_LIMITS: [u32; 5] = [10, 20, 30, 40, 50];

const FEATURED_FALLBACK: [ProductTopic; 3] = [ProductTopic::OnSale, ProductTopic::InterestFree, ProductTopic::Recent];

/// Map a uniform sample in `[0, 1)` to one of [`PRICE_LIMITS`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn pick_price_limit(sample: f64) -> u32 {
    let last = PRICE_LIMITS.len() - 1;
    let index = (sample.clamp(0.0, 1.0) * PRICE_LIMITS.len() as f64) as usize;
    PRICE_LIMITS[index.min(last)]
}

/// First product of the first non-empty fallback topic.
///
/// # Errors
///
/// Stops at the first failed request.
pub async fn pick_featured<A: CatalogApi>(api: &A) -> Result<Option<Product>, ApiError> {
    for topic in FEATURED_FALLBACK {
        let page = api.list_products(&ProductQuery::new(topic).with_limit(1)).await?;
        if let Some(product) = page.data.into_iter().next() {
            return Ok(Some(product));
        }
    }
    Ok(None)
}

fn random_sample() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let categories = RwSignal::new(Vec::<Category>::new());
    let featured = RwSignal::new(None::<Product>);
    let featured_loading = RwSignal::new(true);
    let price_limit = RwSignal::new(None::<u32>);

    let slot = CancelSlot::new();
    let featured_slot = CancelSlot::new();
    let cleanup = (slot.clone(), featured_slot.clone());
    on_cleanup(move || {
        cleanup.0.cancel();
        cleanup.1.cancel();
    });

    Effect::new(move || {
        price_limit.set(Some(pick_price_limit(random_sample())));

        let categories_api = api.clone();
        spawn_cancellable(&slot, async move {
            match categories_api.list_categories(CATEGORY_BAR_LIMIT).await {
                Ok(list) => categories.set(list),
                Err(err) => leptos::logging::warn!("categories failed: {err}"),
            }
        });

        let featured_api = api.clone();
        spawn_cancellable(&featured_slot, async move {
            match pick_featured(&featured_api).await {
                Ok(product) => featured.set(product),
                Err(err) => leptos::logging::warn!("featured product failed: {err}"),
            }
            featured_loading.set(false);
        });
    });

    view! {
        <div class="home-page">
            <Show when=move || categories.with(|list| !list.is_empty())>
                <CategoriesBar categories=categories.get()/>
            </Show>
            <section class="home-page__hero">
                <h1 class="home-page__title">"Leia um livro e mude uma vida!"</h1>
                <div class="home-page__featured">
                    {move || {
                        if featured_loading.get() {
                            view! { <p class="home-page__featured-loading">"Carregando destaque..."</p> }.into_any()
                        } else {
                            featured
                                .get()
                                .map(|product| view! { <ProductCard product=product highlight=true/> }.into_any())
                                .unwrap_or_else(|| ().into_any())
                        }
                    }}
                </div>
            </section>
            <section class="home-page__rows">
                {move || price_limit.get().map(|limit| view! { <ProductList topic=ProductTopic::UnderPrice(limit)/> })}
                <ProductList topic=ProductTopic::OnSale/>
                <ProductList topic=ProductTopic::InterestFree/>
                <ProductList topic=ProductTopic::Recent/>
                <ProductList topic=ProductTopic::WellRated/>
            </section>
        </div>
    }
}

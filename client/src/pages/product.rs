//! Product detail page with add-to-cart and buy-now.

use leptos::prelude::*;

use crate::components::product_card::installment_label;
use crate::net::api::{CatalogApi, HttpApi};
use crate::net::error::ApiError;
use crate::net::types::Product;
use crate::state::cart::{CartState, update_cart};
use crate::util::cancel::{CancelSlot, spawn_cancellable};
use crate::util::format::format_price;

#[derive(Clone, Debug, PartialEq)]
enum Loaded {
    Pending,
    Found(Product),
    Missing,
    Failed,
}

#[component]
pub fn ProductPage(id: i64) -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let cart = expect_context::<RwSignal<CartState>>();
    let loaded = RwSignal::new(Loaded::Pending);
    let added = RwSignal::new(false);

    let slot = CancelSlot::new();
    let cleanup_slot = slot.clone();
    on_cleanup(move || cleanup_slot.cancel());

    Effect::new(move || {
        let api = api.clone();
        spawn_cancellable(&slot, async move {
            let next = match api.get_product(id).await {
                Ok(product) => Loaded::Found(product),
                Err(ApiError::Status(404)) => Loaded::Missing,
                Err(err) => {
                    leptos::logging::warn!("product {id} failed: {err}");
                    Loaded::Failed
                }
            };
            loaded.set(next);
        });
    });

    let add_to_cart = move || {
        if let Loaded::Found(product) = loaded.get_untracked() {
            update_cart(cart, |state| state.add(product, 1));
            added.set(true);
        }
    };

    let detail = move |product: Product| {
        let installments = installment_label(&product);
        view! {
            <article class="product-page__detail">
                {product.image_url.clone().map(|src| view! { <img class="product-page__cover" src=src alt=product.name.clone()/> })}
                <h1 class="product-page__name">{product.name.clone()}</h1>
                {product.author.clone().map(|author| view! { <p class="product-page__author">{author}</p> })}
                <p class="product-page__price">{format!("R$ {}", format_price(product.effective_price()))}</p>
                {installments.map(|label| view! { <p class="product-page__installments">{label}</p> })}
                {product.description.clone().map(|text| view! { <p class="product-page__description">{text}</p> })}
            </article>
        }
    };

    view! {
        <div class="product-page">
            {move || match loaded.get() {
                Loaded::Pending => view! { <p>"Carregando livro..."</p> }.into_any(),
                Loaded::Missing => view! { <p>"Livro não encontrado."</p> }.into_any(),
                Loaded::Failed => view! { <p>"Não foi possível carregar este livro."</p> }.into_any(),
                Loaded::Found(product) => detail(product).into_any(),
            }}
            <Show when=move || matches!(loaded.get(), Loaded::Found(_))>
                <div class="product-page__actions">
                    <button class="product-page__add" on:click=move |_| add_to_cart()>
                        {move || if added.get() { "Adicionado ao carrinho" } else { "Adicionar ao carrinho" }}
                    </button>
                    <a class="product-page__buy" href="/cart" on:click=move |_| add_to_cart()>"Comprar agora"</a>
                </div>
            </Show>
        </div>
    }
}

//! Cart page: quantities, removal and the running total.

use leptos::prelude::*;

use crate::state::cart::{CartItem, CartState, update_cart};
use crate::util::format::format_cents;

#[component]
fn CartLine(item: CartItem) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let id = item.product.id;
    let quantity = item.quantity;

    view! {
        <li class="cart-line">
            <a class="cart-line__name" href=format!("/products/{id}")>{item.product.name.clone()}</a>
            <div class="cart-line__quantity">
                <button
                    class="cart-line__step"
                    aria-label="Diminuir quantidade"
                    on:click=move |_| update_cart(cart, |state| state.set_quantity(id, quantity.saturating_sub(1)))
                >
                    "−"
                </button>
                <span class="cart-line__count">{quantity}</span>
                <button
                    class="cart-line__step"
                    aria-label="Aumentar quantidade"
                    on:click=move |_| update_cart(cart, |state| state.set_quantity(id, quantity.saturating_add(1)))
                >
                    "+"
                </button>
            </div>
            <span class="cart-line__subtotal">{format!("R$ {}", format_cents(item.subtotal_cents()))}</span>
            <button class="cart-line__remove" on:click=move |_| update_cart(cart, |state| state.remove(id))>
                "Remover"
            </button>
        </li>
    }
}

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    view! {
        <div class="cart-page">
            <h1>"Carrinho"</h1>
            <Show
                when=move || !cart.with(CartState::is_empty)
                fallback=|| {
                    view! {
                        <p class="cart-page__empty">"Seu carrinho está vazio."</p>
                        <a href="/">"Continuar comprando"</a>
                    }
                }
            >
                <ul class="cart-page__lines">
                    <For
                        each=move || cart.get().items
                        key=|item| (item.product.id, item.quantity)
                        children=|item| view! { <CartLine item=item/> }
                    />
                </ul>
                <p class="cart-page__total">
                    "Total: "
                    <strong>{move || format!("R$ {}", format_cents(cart.with(CartState::total_cents)))}</strong>
                </p>
                <a class="cart-page__continue" href="/identification">"Continuar"</a>
            </Show>
        </div>
    }
}

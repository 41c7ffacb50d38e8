//! Checkout step one: confirm who is buying and what.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::cart::CartState;
use crate::util::format::format_cents;

#[component]
pub fn IdentificationPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();

    view! {
        <div class="checkout-page">
            <h1>"Identificação"</h1>
            <section class="checkout-page__profile">
                {move || match auth.get().user {
                    Some(user) => {
                        view! {
                            <p class="checkout-page__name">{user.name}</p>
                            <p class="checkout-page__email">{user.email}</p>
                        }
                            .into_any()
                    }
                    None => view! { <p>"Carregando seus dados..."</p> }.into_any(),
                }}
            </section>
            <section class="checkout-page__summary">
                <p>{move || format!("{} item(s) no carrinho", cart.with(CartState::item_count))}</p>
                <p>{move || format!("Total: R$ {}", format_cents(cart.with(CartState::total_cents)))}</p>
            </section>
            <Show
                when=move || !cart.with(CartState::is_empty)
                fallback=|| view! { <a href="/">"Seu carrinho está vazio. Voltar para a loja"</a> }
            >
                <a class="checkout-page__continue" href="/payment">"Ir para o pagamento"</a>
            </Show>
        </div>
    }
}

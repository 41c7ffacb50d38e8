//! Checkout step two: choose installments and confirm.
//!
//! No payment is processed; confirming only clears the cart.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use leptos::prelude::*;

use crate::state::cart::{CartState, update_cart};
use crate::util::format::format_cents;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InstallmentOption {
    pub count: u32,
    /// Per-installment amount, rounded up to the cent.
    pub per_cents: i64,
}

impl InstallmentOption {
    pub fn label(&self) -> String {
        if self.count == 1 {
            format!("À vista: R$ {}", format_cents(self.per_cents))
        } else {
            format!("{}x de R$ {} sem juros", self.count, format_cents(self.per_cents))
        }
    }
}

/// Options `1..=max` for a total. A zero total offers a single option.
pub fn installment_options(total_cents: i64, max: u32) -> Vec<InstallmentOption> {
    let total = total_cents.max(0);
    let max = if total == 0 { 1 } else { max.max(1) };
    (1..=max)
        .map(|count| {
            let n = i64::from(count);
            InstallmentOption { count, per_cents: (total + n - 1) / n }
        })
        .collect()
}

#[component]
pub fn PaymentPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let chosen = RwSignal::new(1_u32);
    let confirmed = RwSignal::new(false);

    let options = Memo::new(move |_| cart.with(|state| installment_options(state.total_cents(), state.max_installments())));

    let on_confirm = move |_| {
        update_cart(cart, CartState::clear);
        confirmed.set(true);
    };

    view! {
        <div class="checkout-page">
            <h1>"Pagamento"</h1>
            <Show
                when=move || !confirmed.get()
                fallback=|| {
                    view! {
                        <p class="checkout-page__done">"Pedido confirmado! Obrigado pela compra."</p>
                        <a href="/">"Voltar para a loja"</a>
                    }
                }
            >
                <ul class="checkout-page__installments">
                    <For
                        each=move || options.get()
                        key=|option| *option
                        children=move |option| {
                            view! {
                                <li>
                                    <label>
                                        <input
                                            type="radio"
                                            name="installments"
                                            prop:checked=move || chosen.get() == option.count
                                            on:change=move |_| chosen.set(option.count)
                                        />
                                        {option.label()}
                                    </label>
                                </li>
                            }
                        }
                    />
                </ul>
                <button
                    class="checkout-page__confirm"
                    disabled=move || cart.with(CartState::is_empty)
                    on:click=on_confirm
                >
                    "Confirmar pedido"
                </button>
            </Show>
        </div>
    }
}

//! Product card used by product rows, search results and the home highlight.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::format::{format_cents, format_price};

pub fn product_href(id: i64) -> String {
    format!("/products/{id}")
}

/// "em até 3x de R$ 10,00 sem juros", when more than one installment is
/// offered. The per-installment amount rounds up to the cent.
pub fn installment_label(product: &Product) -> Option<String> {
    let count = product.installments.filter(|count| *count > 1)?;
    let cents = product.price_cents();
    let per = (cents + i64::from(count) - 1) / i64::from(count);
    Some(format!("em até {count}x de R$ {} sem juros", format_cents(per)))
}

#[component]
pub fn ProductCard(product: Product, #[prop(optional)] highlight: bool) -> impl IntoView {
    let href = product_href(product.id);
    let on_sale = product.is_on_sale && product.sale_price.is_some();
    let list_price = format!("R$ {}", format_price(product.price));
    let price = format!("R$ {}", format_price(product.effective_price()));
    let installments = installment_label(&product);

    view! {
        <a class="product-card" class:product-card--highlight=highlight href=href>
            {product
                .image_url
                .map(|src| view! { <img class="product-card__cover" src=src alt=product.name.clone()/> })}
            <span class="product-card__name">{product.name.clone()}</span>
            {product.author.map(|author| view! { <span class="product-card__author">{author}</span> })}
            <span class="product-card__prices">
                <Show when=move || on_sale>
                    <s class="product-card__list-price">{list_price.clone()}</s>
                </Show>
                <span class="product-card__price">{price}</span>
            </span>
            {installments.map(|label| view! { <span class="product-card__installments">{label}</span> })}
        </a>
    }
}

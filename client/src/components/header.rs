//! Top navigation bar: brand, search box, cart count and account area.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::state::auth::{AuthState, AuthStatus};
use crate::state::cart::CartState;
use crate::util::format::encode_query_component;

/// Search results URL for a typed term; `None` for a blank term.
pub fn search_href(term: &str) -> Option<String> {
    let term = term.trim();
    (!term.is_empty()).then(|| format!("/products?search={}", encode_query_component(term)))
}

fn cart_badge(count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_owned()),
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let term = RwSignal::new(String::new());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(href) = search_href(&term.get()) {
            navigate(&href, NavigateOptions::default());
        }
    };

    // Private screens fall back to the login redirect on their own.
    let on_logout = move |_: leptos::ev::MouseEvent| session.logout();

    let badge = move || cart_badge(cart.with(CartState::item_count));

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"PaperBook"</a>
            <form class="site-header__search" on:submit=on_search>
                <input
                    class="site-header__search-input"
                    type="search"
                    placeholder="Buscar livros"
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
            </form>
            <a href="/cart" class="site-header__cart">
                "Carrinho"
                {move || badge().map(|count| view! { <span class="site-header__badge">{count}</span> })}
            </a>
            <Show
                when=move || auth.with(|state| state.status == AuthStatus::Authenticated)
                fallback=|| view! { <a href="/login" class="site-header__login">"Entrar"</a> }
            >
                <span class="site-header__user">
                    {move || auth.with(|state| state.display_name().map_or_else(|| "Minha conta".to_owned(), |name| format!("Olá, {name}")))}
                </span>
                <button class="site-header__logout" on:click=on_logout.clone()>"Sair"</button>
            </Show>
        </header>
    }
}

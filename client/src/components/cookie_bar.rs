//! Cookie consent bar.
//!
//! Consent gates the "remember me" option on the login screen, which is the
//! only thing the storefront stores in a cookie.

use leptos::prelude::*;

use crate::state::consent::{ConsentState, update_consent};

#[component]
pub fn CookieBar() -> impl IntoView {
    let consent = expect_context::<RwSignal<ConsentState>>();

    view! {
        <Show when=move || consent.with(|state| state.bar_visible)>
            <div class="cookie-bar" role="dialog" aria-live="polite">
                <p class="cookie-bar__text">
                    "Usamos cookies para manter você conectado. Ao aceitar, você permite que lembremos seu acesso neste navegador."
                </p>
                <button class="cookie-bar__accept" on:click=move |_| update_consent(consent, ConsentState::accept)>
                    "Aceitar"
                </button>
                <button class="cookie-bar__dismiss" on:click=move |_| update_consent(consent, ConsentState::dismiss)>
                    "Agora não"
                </button>
            </div>
        </Show>
    }
}

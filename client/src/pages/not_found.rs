//! Fallback for paths outside the route table.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Página não encontrada"</h1>
            <a href="/">"Voltar para a loja"</a>
        </div>
    }
}

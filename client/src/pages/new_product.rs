//! New product form (private). Posts to the catalog with the session's
//! bearer token.

#[cfg(test)]
#[path = "new_product_test.rs"]
mod new_product_test;

use leptos::prelude::*;

use crate::app::AppSession;
use crate::net::api::{CatalogApi, HttpApi};
use crate::net::error::ApiError;
use crate::net::types::{Category, NewProductRequest, Product};
use crate::util::cancel::{CancelSlot, spawn_cancellable};

const CATEGORY_OPTIONS_LIMIT: u32 = 50;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewProductForm {
    pub name: String,
    pub price: String,
    pub author: String,
    pub description: String,
    pub category_id: Option<i64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NewProductIssue {
    #[error("Informe o nome do livro.")]
    MissingName,
    #[error("Informe um preço válido, por exemplo 39,90.")]
    InvalidPrice,
}

/// Parse a price typed as `39,90`, `1.234,56`, `R$ 10` or `12.5`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().trim_start_matches("R$").chars().filter(|ch| !ch.is_whitespace()).collect();
    let normalized = if cleaned.contains(',') { cleaned.replace('.', "").replace(',', ".") } else { cleaned };
    let value: f64 = normalized.parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Turn the form into a request body.
///
/// # Errors
///
/// Returns the first [`NewProductIssue`] found.
pub fn validate_new_product(form: &NewProductForm) -> Result<NewProductRequest, NewProductIssue> {
    let name = non_blank(&form.name).ok_or(NewProductIssue::MissingName)?;
    let price = parse_price(&form.price).ok_or(NewProductIssue::InvalidPrice)?;
    Ok(NewProductRequest {
        name,
        price,
        description: non_blank(&form.description),
        author: non_blank(&form.author),
        category_id: form.category_id,
    })
}

/// Create the product with `token`, or fail as unauthorized without one.
///
/// # Errors
///
/// Returns [`ApiError::Status`] 401 without a token, otherwise the request
/// failure.
pub async fn submit_product<A: CatalogApi>(
    api: &A,
    token: Option<String>,
    request: &NewProductRequest,
) -> Result<Product, ApiError> {
    let token = token.ok_or(ApiError::Status(401))?;
    api.create_product(&token, request).await
}

#[component]
pub fn NewProductPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let session = expect_context::<AppSession>();

    let form = RwSignal::new(NewProductForm::default());
    let categories = RwSignal::new(Vec::<Category>::new());
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);
    let created = RwSignal::new(None::<Product>);

    let slot = CancelSlot::new();
    let categories_slot = CancelSlot::new();
    let cleanup = (slot.clone(), categories_slot.clone());
    on_cleanup(move || {
        cleanup.0.cancel();
        cleanup.1.cancel();
    });

    let categories_api = api.clone();
    Effect::new(move || {
        let api = categories_api.clone();
        spawn_cancellable(&categories_slot, async move {
            match api.list_categories(CATEGORY_OPTIONS_LIMIT).await {
                Ok(list) => categories.set(list),
                Err(err) => leptos::logging::warn!("categories failed: {err}"),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_new_product(&form.get()) {
            Ok(request) => request,
            Err(issue) => {
                message.set(Some(issue.to_string()));
                return;
            }
        };
        busy.set(true);
        message.set(None);
        let api = api.clone();
        let token = session.bearer_token();
        spawn_cancellable(&slot, async move {
            match submit_product(&api, token, &request).await {
                Ok(product) => {
                    created.set(Some(product));
                    form.set(NewProductForm::default());
                }
                Err(err) => {
                    leptos::logging::warn!("create product failed: {err}");
                    message.set(Some("Não foi possível cadastrar o livro.".to_owned()));
                }
            }
            busy.set(false);
        });
    };

    let text_field = move |placeholder: &'static str, get: fn(&NewProductForm) -> &String, set: fn(&mut NewProductForm, String)| {
        view! {
            <input
                class="auth-input"
                type="text"
                placeholder=placeholder
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        }
    };

    view! {
        <div class="new-product-page">
            <form class="auth-card" on:submit=on_submit>
                <h1 class="auth-card__title">"Novo livro"</h1>
                {text_field("Nome", |f| &f.name, |f, v| f.name = v)}
                {text_field("Preço (ex.: 39,90)", |f| &f.price, |f, v| f.price = v)}
                {text_field("Autor", |f| &f.author, |f, v| f.author = v)}
                <textarea
                    class="auth-input"
                    placeholder="Descrição"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.description = value);
                    }
                ></textarea>
                <select
                    class="auth-input"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.category_id = value.parse().ok());
                    }
                >
                    <option value="">"Sem categoria"</option>
                    <For
                        each=move || categories.get()
                        key=|category| category.id
                        children=|category| view! { <option value=category.id.to_string()>{category.name}</option> }
                    />
                </select>
                <Show when=move || message.get().is_some()>
                    <p class="auth-card__error">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || created.get().is_some()>
                    <p class="new-product-page__created">
                        "Livro cadastrado: "
                        {move || {
                            created
                                .get()
                                .map(|product| view! { <a href=format!("/products/{}", product.id)>{product.name}</a> })
                        }}
                    </p>
                </Show>
                <button class="auth-submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Salvando..." } else { "Cadastrar livro" }}
                </button>
            </form>
        </div>
    }
}

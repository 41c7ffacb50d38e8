//! Sign-up page. Registers the account, then signs in without persisting the
//! token; the route guard takes over once the session is authenticated.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::pages::login::auth_error_message;
use crate::util::cancel::{CancelSlot, spawn_cancellable};
use crate::util::validation::{SignUpForm, validate_signup};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = expect_context::<AppSession>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let slot = CancelSlot::new();
    let cleanup_slot = slot.clone();
    on_cleanup(move || cleanup_slot.cancel());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = SignUpForm {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            confirmation: confirmation.get(),
        };
        if let Err(issue) = validate_signup(&form) {
            error.set(Some(issue.to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        let session = session.clone();
        spawn_cancellable(&slot, async move {
            if let Err(err) = session.register(&form.name, &form.email, &form.password).await {
                leptos::logging::warn!("sign-up failed: {err}");
                error.set(Some(auth_error_message(&err).to_owned()));
                busy.set(false);
            }
        });
    };

    let field = move |signal: RwSignal<String>, kind: &'static str, placeholder: &'static str| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=placeholder
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1 class="auth-card__title">"Criar conta"</h1>
                {field(name, "text", "Nome")}
                {field(email, "email", "E-mail")}
                {field(password, "password", "Senha")}
                {field(confirmation, "password", "Confirme a senha")}
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="auth-submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Criando conta..." } else { "Cadastrar" }}
                </button>
                <p class="auth-card__switch">
                    "Já tem conta? "
                    <a href="/login">"Entrar"</a>
                </p>
            </form>
        </div>
    }
}

//! Login page: email + password with an optional "remember me".
//!
//! SYSTEM CONTEXT
//! ==============
//! The page never navigates by itself. A successful sign-in flips the auth
//! status, and the route guard sends the visitor to the path they were
//! trying to reach (or `/`). Failures keep the visitor here with an inline
//! message.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::AppSession;
use crate::net::error::{ApiError, AuthError};
use crate::state::consent::{ConsentState, RememberToggle, toggle_remember, update_consent};
use crate::util::cancel::{CancelSlot, spawn_cancellable};
use crate::util::validation::can_submit_login;

/// User-facing message for a failed auth operation.
pub fn auth_error_message(err: &AuthError) -> &'static str {
    match err {
        AuthError::CredentialRejected { .. } => "E-mail ou senha incorretos.",
        AuthError::Exchange(ApiError::Timeout) | AuthError::AuthResolution(ApiError::Timeout) => {
            "O servidor demorou a responder. Tente novamente."
        }
        AuthError::Exchange(_) => "Não foi possível entrar agora. Tente novamente.",
        AuthError::AuthResolution(_) => "Não foi possível carregar seu perfil. Tente novamente.",
        AuthError::Registration(ApiError::Status(409)) => "Este e-mail já está cadastrado.",
        AuthError::Registration(_) => "Não foi possível criar sua conta.",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let consent = expect_context::<RwSignal<ConsentState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    let slot = CancelSlot::new();
    let cleanup_slot = slot.clone();
    on_cleanup(move || cleanup_slot.cancel());

    let can_submit = move || !busy.get() && can_submit_login(&email.get(), &password.get());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !can_submit() {
            return;
        }
        busy.set(true);
        error.set(None);
        let session = session.clone();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let remember_value = remember.get();
        spawn_cancellable(&slot, async move {
            if let Err(err) = session.sign_in(&email_value, &password_value, remember_value).await {
                leptos::logging::warn!("sign-in failed: {err}");
                error.set(Some(auth_error_message(&err)));
                busy.set(false);
            }
        });
    };

    let on_remember = move |_| match toggle_remember(&consent.get(), remember.get()) {
        RememberToggle::Set(value) => remember.set(value),
        RememberToggle::AskConsent => update_consent(consent, ConsentState::reopen),
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1 class="auth-card__title">"Entrar"</h1>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="E-mail"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Senha"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button
                    class="auth-remember"
                    class:auth-remember--on=move || remember.get()
                    type="button"
                    aria-pressed=move || if remember.get() { "true" } else { "false" }
                    on:click=on_remember
                >
                    "Lembrar de mim"
                </button>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="auth-submit" type="submit" disabled=move || !can_submit()>
                    {move || if busy.get() { "Entrando..." } else { "Entrar" }}
                </button>
                <p class="auth-card__switch">
                    "Ainda não tem conta? "
                    <a href="/signup">"Cadastre-se"</a>
                </p>
            </form>
        </div>
    }
}

//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the session manager, mirrors its snapshots into the auth
//! signal, and starts the one-shot bootstrap once hydrated. Every URL is
//! handed to [`RouteOutlet`], which resolves it against the static route
//! table and lets the guard decide between rendering, waiting and
//! redirecting.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::cookie_bar::CookieBar;
use crate::components::header::Header;
use crate::net::api::{ApiConfig, HttpApi};
use crate::pages::{
    cart::CartPage, home::HomePage, identification::IdentificationPage, login::LoginPage,
    new_product::NewProductPage, not_found::NotFoundPage, payment::PaymentPage, product::ProductPage,
    search::SearchPage, signup::SignUpPage,
};
use crate::router::guard::{GuardDecision, evaluate};
use crate::router::navigation::{NavigationState, attempted_path};
use crate::router::table::{RouteMatch, View, resolve};
use crate::session::manager::SessionManager;
use crate::session::store::CookieStore;
use crate::state::auth::AuthState;
use crate::state::cart::{CartState, load_cart};
use crate::state::consent::{ConsentState, load_consent};
use crate::util::auth::install_guard_redirect;

/// Session manager type used by the running app.
pub type AppSession = SessionManager<HttpApi, CookieStore>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let cart = RwSignal::new(CartState::default());
    let consent = RwSignal::new(ConsentState::default());
    let navigation = RwSignal::new(NavigationState::default());

    let api = HttpApi::new(ApiConfig::from_env());
    let session: AppSession =
        SessionManager::new(api.clone(), CookieStore::default()).with_listener(move |state| auth.set(state.clone()));

    provide_context(auth);
    provide_context(cart);
    provide_context(consent);
    provide_context(navigation);
    provide_context(api);
    provide_context(session.clone());

    // Effects only run in the browser: restore persisted state, then
    // bootstrap the session from the token cookie.
    Effect::new(move || {
        cart.set(load_cart());
        consent.set(load_consent());
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move { session.bootstrap().await });
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/paperbook.css"/>
        <Title text="PaperBook"/>

        <Router>
            <Header/>
            <main class="storefront">
                <Routes fallback=|| view! { <RouteOutlet/> }>
                    <Route path=StaticSegment("") view=RouteOutlet/>
                    <Route path=WildcardSegment("any") view=RouteOutlet/>
                </Routes>
            </main>
            <CookieBar/>
        </Router>
    }
}

/// Guarded view for the current location.
#[component]
fn RouteOutlet() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigation = expect_context::<RwSignal<NavigationState>>();
    let location = use_location();

    let matched = Memo::new(move |_| resolve(&location.pathname.get()));
    let decision = Memo::new(move |_| {
        let pathname = location.pathname.get();
        let attempted = attempted_path(&pathname, &location.search.get());
        // Redirects record the navigation state before navigating, so it is
        // current whenever the path changes; tracking it would re-run the
        // guard mid-redirect.
        let from = navigation.with_untracked(|state| state.from_for(&pathname).map(str::to_owned));
        evaluate(matched.get().descriptor.protection, auth.get().status, &attempted, from.as_deref())
    });
    install_guard_redirect(decision, navigation, use_navigate());

    move || match decision.get() {
        GuardDecision::Render => render_view(&matched.get()),
        GuardDecision::Wait => view! { <p class="route-pending">"Carregando..."</p> }.into_any(),
        GuardDecision::Redirect(_) => view! { <p class="route-pending">"Redirecionando..."</p> }.into_any(),
    }
}

fn render_view(route: &RouteMatch) -> AnyView {
    match route.descriptor.view {
        View::Home => view! { <HomePage/> }.into_any(),
        View::SignUp => view! { <SignUpPage/> }.into_any(),
        View::Login => view! { <LoginPage/> }.into_any(),
        View::Search => view! { <SearchPage/> }.into_any(),
        View::NewProduct => view! { <NewProductPage/> }.into_any(),
        View::Product => match route.param("id").and_then(|id| id.parse::<i64>().ok()) {
            Some(id) => view! { <ProductPage id=id/> }.into_any(),
            None => view! { <NotFoundPage/> }.into_any(),
        },
        View::Cart => view! { <CartPage/> }.into_any(),
        View::Identification => view! { <IdentificationPage/> }.into_any(),
        View::Payment => view! { <PaymentPage/> }.into_any(),
        View::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}

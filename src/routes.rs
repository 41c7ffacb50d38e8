//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host server-renders the Leptos storefront for every path, serves the
//! hydrate bundle under `/pkg`, and exposes `/healthz`. The bookstore REST API
//! lives elsewhere; the browser talks to it directly.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, HostConfig};

fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full host router: health check, static bundle, then Leptos SSR.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &HostConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = health_routes()
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(leptos_router)
        .layer(TraceLayer::new_for_http());

    Ok(if config.compression { router.layer(CompressionLayer::new()) } else { router })
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

//! REST client for the storefront API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced against
//! the configured timeout.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`]; remote
//! data is only fetched in the browser.
//!
//! DESIGN
//! ======
//! The session manager and pages depend on the [`AuthApi`] and [`CatalogApi`]
//! traits rather than on [`HttpApi`], so tests drive them with an in-memory
//! implementation.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`]; transport failures,
//! undecodable bodies and timeouts get their own variants. Nothing retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use super::error::ApiError;
use super::query::ProductQuery;
use super::types::{Category, Credentials, GetMany, NewProductRequest, Product, SignUpRequest, TokenResponse, UserProfile};

/// API origin used when `PAPERBOOK_API_URL` is not set at compile time.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Deadline for a single remote call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_owned(), timeout: REQUEST_TIMEOUT }
    }
}

impl ApiConfig {
    /// Configuration baked in at compile time via `PAPERBOOK_API_URL`.
    pub fn from_env() -> Self {
        Self::from_base_url(option_env!("PAPERBOOK_API_URL"))
    }

    fn from_base_url(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url, timeout: REQUEST_TIMEOUT }
    }

    /// Absolute URL for an API path such as `/auth/local`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Authentication endpoints consumed by the session manager.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /auth/local`.
    async fn exchange_credentials(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError>;

    /// `GET /users/me` with the token as bearer credential.
    async fn resolve_profile(&self, token: &str) -> Result<UserProfile, ApiError>;

    /// `POST /users`.
    async fn register(&self, request: &SignUpRequest) -> Result<(), ApiError>;
}

/// Catalog endpoints consumed by the storefront pages.
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    async fn list_products(&self, query: &ProductQuery) -> Result<GetMany<Product>, ApiError>;

    async fn get_product(&self, id: i64) -> Result<Product, ApiError>;

    async fn list_categories(&self, limit: u32) -> Result<Vec<Category>, ApiError>;

    /// `POST /products`, authorized with `token`.
    async fn create_product(&self, token: &str, request: &NewProductRequest) -> Result<Product, ApiError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn products_endpoint(query: &ProductQuery) -> String {
    format!("/products?{}", query.to_query_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn product_endpoint(id: i64) -> String {
    format!("/products/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn categories_endpoint(limit: u32) -> String {
    format!("/categories?limit={limit}")
}

/// `gloo-net` implementation of the API traits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, Response};
    use serde::de::DeserializeOwned;

    use super::{ApiConfig, ApiError};
    use crate::util::timeout::with_timeout;

    pub(super) fn network(err: gloo_net::Error) -> ApiError {
        ApiError::Network(err.to_string())
    }

    async fn send(config: &ApiConfig, request: Request) -> Result<Response, ApiError> {
        with_timeout(
            async move {
                let resp = request.send().await.map_err(network)?;
                if !resp.ok() {
                    return Err(ApiError::Status(resp.status()));
                }
                Ok(resp)
            },
            config.timeout,
        )
        .await
    }

    pub(super) async fn fetch_json<T: DeserializeOwned>(config: &ApiConfig, request: Request) -> Result<T, ApiError> {
        let resp = send(config, request).await?;
        resp.json::<T>().await.map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    pub(super) async fn fetch_empty(config: &ApiConfig, request: Request) -> Result<(), ApiError> {
        send(config, request).await.map(|_| ())
    }
}

impl AuthApi for HttpApi {
    async fn exchange_credentials(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.config.url("/auth/local"))
                .json(credentials)
                .map_err(transport::network)?;
            transport::fetch_json(&self.config, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn resolve_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(&self.config.url("/users/me"))
                .header("Authorization", &bearer(token))
                .build()
                .map_err(transport::network)?;
            transport::fetch_json(&self.config, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &SignUpRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.config.url("/users"))
                .json(request)
                .map_err(transport::network)?;
            transport::fetch_empty(&self.config, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

impl CatalogApi for HttpApi {
    async fn list_products(&self, query: &ProductQuery) -> Result<GetMany<Product>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(&self.config.url(&products_endpoint(query)))
                .build()
                .map_err(transport::network)?;
            transport::fetch_json(&self.config, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
            Err(ApiError::Unavailable)
        }
    }

    async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(&self.config.url(&product_endpoint(id)))
                .build()
                .map_err(transport::network)?;
            transport::fetch_json(&self.config, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    async fn list_categories(&self, limit: u32) -> Result<Vec<Category>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(&self.config.url(&categories_endpoint(limit)))
                .build()
                .map_err(transport::network)?;
            transport::fetch_json(&self.config, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = limit;
            Err(ApiError::Unavailable)
        }
    }

    async fn create_product(&self, token: &str, request: &NewProductRequest) -> Result<Product, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.config.url("/products"))
                .header("Authorization", &bearer(token))
                .json(request)
                .map_err(transport::network)?;
            transport::fetch_json(&self.config, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, request);
            Err(ApiError::Unavailable)
        }
    }
}

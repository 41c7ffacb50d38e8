//! In-memory API used by unit tests.
//!
//! Responses are scripted per email, token and topic. Credential exchanges
//! and profile lookups can be gated on a oneshot channel so tests control completion order.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;

use super::api::{AuthApi, CatalogApi};
use super::error::ApiError;
use super::query::{ProductQuery, ProductTopic};
use super::types::{Category, Credentials, GetMany, NewProductRequest, Product, SignUpRequest, TokenResponse, UserProfile};

#[derive(Default)]
struct MockInner {
    exchanges: HashMap<String, Result<TokenResponse, ApiError>>,
    exchange_gates: HashMap<String, oneshot::Receiver<()>>,
    profiles: HashMap<String, Result<UserProfile, ApiError>>,
    profile_gates: HashMap<String, oneshot::Receiver<()>>,
    register_error: Option<ApiError>,
    registered: Vec<SignUpRequest>,
    products: HashMap<ProductTopic, Vec<Product>>,
    categories: Vec<Category>,
    created: Vec<(String, NewProductRequest)>,
    exchange_calls: usize,
    profile_calls: usize,
    list_calls: Vec<ProductQuery>,
}

#[derive(Clone, Default)]
pub struct MockApi {
    inner: Arc<Mutex<MockInner>>,
}

pub fn profile(id: i64, name: &str, email: &str) -> UserProfile {
    UserProfile { id, name: name.to_owned(), email: email.to_owned() }
}

pub fn token_response(token: &str, expires_in: Option<&str>) -> TokenResponse {
    TokenResponse { token: Some(token.to_owned()), expires_in: expires_in.map(str::to_owned) }
}

pub fn product(id: i64, name: &str, price: f64) -> Product {
    Product {
        id,
        name: name.to_owned(),
        price,
        description: None,
        image_url: None,
        author: None,
        is_on_sale: false,
        sale_price: None,
        installments: None,
        category_id: None,
        rating: None,
    }
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_exchange(&self, email: &str, result: Result<TokenResponse, ApiError>) -> &Self {
        self.inner.lock().unwrap().exchanges.insert(email.to_owned(), result);
        self
    }

    /// Hold the exchange for `email` until the returned sender fires.
    pub fn gate_exchange(&self, email: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.inner.lock().unwrap().exchange_gates.insert(email.to_owned(), rx);
        tx
    }

    pub fn on_profile(&self, token: &str, result: Result<UserProfile, ApiError>) -> &Self {
        self.inner.lock().unwrap().profiles.insert(token.to_owned(), result);
        self
    }

    /// Hold profile resolution for `token` until the returned sender fires.
    pub fn gate_profile(&self, token: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.inner.lock().unwrap().profile_gates.insert(token.to_owned(), rx);
        tx
    }

    pub fn fail_register(&self, err: ApiError) -> &Self {
        self.inner.lock().unwrap().register_error = Some(err);
        self
    }

    pub fn on_products(&self, topic: ProductTopic, products: Vec<Product>) -> &Self {
        self.inner.lock().unwrap().products.insert(topic, products);
        self
    }

    pub fn with_categories(&self, categories: Vec<Category>) -> &Self {
        self.inner.lock().unwrap().categories = categories;
        self
    }

    pub fn exchange_calls(&self) -> usize {
        self.inner.lock().unwrap().exchange_calls
    }

    pub fn profile_calls(&self) -> usize {
        self.inner.lock().unwrap().profile_calls
    }

    pub fn registered(&self) -> Vec<SignUpRequest> {
        self.inner.lock().unwrap().registered.clone()
    }

    pub fn list_calls(&self) -> Vec<ProductQuery> {
        self.inner.lock().unwrap().list_calls.clone()
    }

    pub fn created(&self) -> Vec<(String, NewProductRequest)> {
        self.inner.lock().unwrap().created.clone()
    }
}

impl AuthApi for MockApi {
    async fn exchange_credentials(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        let gate = {
            let mut inner = self.inner.lock().unwrap();
            inner.exchange_calls += 1;
            inner.exchange_gates.remove(&credentials.email)
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.inner
            .lock()
            .unwrap()
            .exchanges
            .get(&credentials.email)
            .cloned()
            .unwrap_or(Err(ApiError::Status(401)))
    }

    async fn resolve_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        let gate = {
            let mut inner = self.inner.lock().unwrap();
            inner.profile_calls += 1;
            inner.profile_gates.remove(token)
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.inner.lock().unwrap().profiles.get(token).cloned().unwrap_or(Err(ApiError::Status(401)))
    }

    async fn register(&self, request: &SignUpRequest) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(err) = inner.register_error.clone() {
            return Err(err);
        }
        inner.registered.push(request.clone());
        Ok(())
    }
}

impl CatalogApi for MockApi {
    async fn list_products(&self, query: &ProductQuery) -> Result<GetMany<Product>, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.list_calls.push(query.clone());
        let all = inner.products.get(&query.topic).cloned().unwrap_or_default();
        let limit = query.limit.max(1) as usize;
        let start = (query.page.saturating_sub(1) as usize) * limit + query.offset as usize;
        let data: Vec<Product> = all.iter().skip(start).take(limit).cloned().collect();
        let total = u32::try_from(all.len()).unwrap();
        Ok(GetMany {
            count: u32::try_from(data.len()).unwrap(),
            data,
            total,
            page: query.page,
            page_count: total.div_ceil(query.limit.max(1)),
        })
    }

    async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        let inner = self.inner.lock().unwrap();
        inner
            .products
            .values()
            .flatten()
            .find(|product| product.id == id)
            .cloned()
            .ok_or(ApiError::Status(404))
    }

    async fn list_categories(&self, limit: u32) -> Result<Vec<Category>, ApiError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.categories.iter().take(limit as usize).cloned().collect())
    }

    async fn create_product(&self, token: &str, request: &NewProductRequest) -> Result<Product, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.profiles.contains_key(token) {
            return Err(ApiError::Status(401));
        }
        inner.created.push((token.to_owned(), request.clone()));
        let id = i64::try_from(inner.created.len()).unwrap();
        let mut created = product(id, &request.name, request.price);
        created.description.clone_from(&request.description);
        created.author.clone_from(&request.author);
        created.category_id = request.category_id;
        Ok(created)
    }
}

//! Wire DTOs for the storefront API.
//!
//! DESIGN
//! ======
//! Field names follow the remote API's camelCase JSON. Optional catalog fields
//! default so partially populated products still deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/local`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response of `POST /auth/local`.
///
/// `expires_in` stays a raw string here; it is parsed once by the session
/// manager into a structured lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<String>,
}

/// Body of `POST /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignUpRequest {
    pub fn credentials(&self) -> Credentials {
        Credentials { email: self.email.clone(), password: self.password.clone() }
    }
}

/// The signed-in user as returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub is_on_sale: bool,
    #[serde(default)]
    pub sale_price: Option<f64>,
    /// Maximum interest-free installments, when offered.
    #[serde(default)]
    pub installments: Option<u32>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Product {
    /// Price actually charged: the sale price while the product is on sale.
    pub fn effective_price(&self) -> f64 {
        match self.sale_price {
            Some(sale) if self.is_on_sale => sale,
            _ => self.price,
        }
    }

    /// Effective price in integer cents.
    #[allow(clippy::cast_possible_truncation)]
    pub fn price_cents(&self) -> i64 {
        (self.effective_price() * 100.0).round() as i64
    }
}

/// A catalog category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Paged list envelope returned by list endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMany<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_count: u32,
}

impl<T> Default for GetMany<T> {
    fn default() -> Self {
        Self { data: Vec::new(), count: 0, total: 0, page: 0, page_count: 0 }
    }
}

impl<T> GetMany<T> {
    /// Whether another page exists after this one.
    pub fn has_more(&self) -> bool {
        self.page < self.page_count
    }
}

/// Body of `POST /products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductRequest {
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

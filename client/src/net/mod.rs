//! Networking modules for the storefront REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the endpoint traits and their HTTP implementation, `query`
//! builds catalog listing parameters, `error` classifies failures, and `types`
//! defines the wire schema.

pub mod api;
pub mod error;
#[cfg(test)]
pub mod mock;
pub mod query;
pub mod types;

//! Shared client state provided through the Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each state type lives in an `RwSignal` created by the root `App`.
//! `auth` mirrors the session manager, `cart` and `consent` persist to
//! `localStorage`.

pub mod auth;
pub mod cart;
pub mod consent;

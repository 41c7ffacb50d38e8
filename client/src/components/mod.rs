//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and catalog listings while reading
//! and writing shared state from Leptos context providers.

pub mod categories_bar;
pub mod cookie_bar;
pub mod header;
pub mod product_card;
pub mod product_list;

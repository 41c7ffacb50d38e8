//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form state, cart
//! updates) and delegates rendering details to `components`. Pages never
//! decide access themselves; `app::RouteOutlet` only renders them after the
//! guard allows it.

pub mod cart;
pub mod home;
pub mod identification;
pub mod login;
pub mod new_product;
pub mod not_found;
pub mod payment;
pub mod product;
pub mod search;
pub mod signup;

//! Route table and auth guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `table` declares every storefront path with its protection level, `guard`
//! decides per navigation whether the matched view renders, waits or
//! redirects, and `navigation` carries the attempted path across a login
//! redirect. All three are pure; `app` wires them to `leptos_router`.

pub mod guard;
pub mod navigation;
pub mod table;

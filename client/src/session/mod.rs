//! Authentication session: token lifetime parsing, persistence, and the
//! manager that owns the in-memory session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` is the leaf persistence capability, `expiry` parses the lifetime
//! returned by the credential exchange, and `manager` coordinates both with
//! the remote auth API.

pub mod expiry;
pub mod manager;
pub mod store;

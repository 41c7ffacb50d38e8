//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep browser concerns (storage, timers, spawning) and pure
//! helpers (formatting, validation) out of page and component code.

pub mod auth;
pub mod cancel;
pub mod format;
pub mod timeout;
pub mod ui_persistence;
pub mod validation;

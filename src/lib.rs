//! Tripfolio Core - Domain models and the expense-entry form.
//!
//! This crate contains the core business logic for Tripfolio.
//! It is UI-agnostic: the form model defined here holds draft state and
//! derives previews, while the presentation layer renders that state and
//! relays user edits back into the public fields.

pub mod constants;
pub mod expenses;
pub mod fx;
pub mod utils;

// Re-export common types from the expenses and fx modules
pub use expenses::*;
pub use fx::*;

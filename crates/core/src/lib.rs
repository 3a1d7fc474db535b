//! `storefront-core` — shared building blocks for the storefront client.
//!
//! This crate contains **pure domain** primitives (no network or view
//! concerns): strongly-typed identifiers and the shared error model.

pub mod error;
pub mod id;

pub use error::{StoreError, StoreResult};
pub use id::{CategoryId, ProductId};

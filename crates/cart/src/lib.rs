//! `storefront-cart` — shopping-cart reconciliation.

pub mod cart;

pub use cart::{Cart, CartLine};

//! `storefront-gateway` — remote catalog boundary.
//!
//! Defines the fetch abstraction the client core depends on without
//! making any transport assumptions: an HTTP implementation for the
//! real catalog service and an in-memory twin for tests/dev.

pub mod http;
pub mod in_memory;
pub mod r#trait;

pub use http::HttpCatalogGateway;
pub use in_memory::InMemoryCatalog;
pub use r#trait::{CatalogGateway, GatewayError};

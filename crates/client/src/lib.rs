//! `storefront-client` — application facade over the client core.
//!
//! Wires the listing controller, cart reconciler and session to a
//! [`CatalogGateway`](storefront_gateway::CatalogGateway): each listing
//! operation obtains a fetch ticket from the controller, performs the
//! gateway call, and feeds the outcome back through the staleness-checked
//! apply step. The view layer holds read snapshots and issues intents
//! through this facade only.

pub mod client;
pub mod error;
pub mod telemetry;

pub use client::StorefrontClient;
pub use error::ClientError;

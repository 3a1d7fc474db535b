use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use storefront_catalog::{Category, FilterCriteria, PageCursor, Product};
use storefront_core::ProductId;

/// Catalog fetch failure.
///
/// These are **network-layer errors** as opposed to the deterministic
/// `StoreError`s of the client core. They are surfaced upward unchanged
/// so the view layer can render a "no results / retry" affordance; the
/// core never retries on its own and never corrupts listing state over
/// one of these.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The catalog service was unreachable (DNS, connect, timeout).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The catalog service answered with a non-2xx status.
    #[error("catalog responded with status {status}")]
    Status { status: u16 },

    /// The response body did not decode into the expected shape.
    #[error("response decoding failed: {0}")]
    Decode(String),

    /// The requested product does not exist.
    #[error("product not found")]
    NotFound,
}

/// Read-only boundary to the remote product catalog.
///
/// Page fetches take the exact `(criteria, cursor)` pair the listing
/// controller issued, so a response can be applied back against the
/// state it was requested for. Implementations make no ordering
/// guarantees across overlapping requests; staleness is resolved by the
/// caller at apply time.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Fetch one page of products matching the criteria.
    ///
    /// A result shorter than `cursor.limit` (including empty) means the
    /// listing is exhausted under these criteria.
    async fn fetch_product_page(
        &self,
        criteria: &FilterCriteria,
        cursor: PageCursor,
    ) -> Result<Vec<Product>, GatewayError>;

    /// Fetch a single product by id.
    async fn fetch_product_by_id(&self, id: ProductId) -> Result<Product, GatewayError>;

    /// Fetch the category list.
    async fn fetch_categories(&self) -> Result<Vec<Category>, GatewayError>;
}

#[async_trait]
impl<G> CatalogGateway for Arc<G>
where
    G: CatalogGateway + ?Sized,
{
    async fn fetch_product_page(
        &self,
        criteria: &FilterCriteria,
        cursor: PageCursor,
    ) -> Result<Vec<Product>, GatewayError> {
        (**self).fetch_product_page(criteria, cursor).await
    }

    async fn fetch_product_by_id(&self, id: ProductId) -> Result<Product, GatewayError> {
        (**self).fetch_product_by_id(id).await
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, GatewayError> {
        (**self).fetch_categories().await
    }
}

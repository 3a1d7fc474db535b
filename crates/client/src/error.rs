//! Facade-level error mapping.

use thiserror::Error;

use storefront_core::StoreError;
use storefront_gateway::GatewayError;

/// Failure surfaced by the storefront facade.
///
/// `Store` covers deterministic, locally-resolved failures (rejected
/// filter input, invalid load-more); `Fetch` carries a network failure
/// upward unchanged for the view layer to render a retry affordance.
/// Nothing here is fatal — every failure is recoverable by a subsequent
/// user-initiated action.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("catalog fetch failed: {0}")]
    Fetch(#[from] GatewayError),
}

impl ClientError {
    /// Whether retrying the same action could succeed (network-class
    /// failures), as opposed to input that will fail again as-is.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Fetch(_))
    }
}

//! HTTP implementation of the catalog gateway.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use storefront_catalog::{Category, FilterCriteria, PageCursor, Product};
use storefront_core::ProductId;

use crate::r#trait::{CatalogGateway, GatewayError};

/// Public catalog service the storefront ships against.
pub const DEFAULT_BASE_URL: &str = "https://api.escuelajs.co/api/v1";

/// Catalog gateway backed by the remote HTTP API.
///
/// No retry, timeout or cancellation policy lives here; a hung request
/// resolves or errors at the transport's discretion and the caller's
/// staleness check handles whatever arrives late.
#[derive(Debug, Clone)]
pub struct HttpCatalogGateway {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalogGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> Result<T, GatewayError> {
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound);
        }
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

impl Default for HttpCatalogGateway {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl CatalogGateway for HttpCatalogGateway {
    async fn fetch_product_page(
        &self,
        criteria: &FilterCriteria,
        cursor: PageCursor,
    ) -> Result<Vec<Product>, GatewayError> {
        let mut query: Vec<(&str, String)> = vec![
            ("categoryId", criteria.category_id.to_string()),
            ("offset", cursor.offset.to_string()),
            ("limit", cursor.limit.to_string()),
        ];
        // 0 means unbounded; an empty title means no filter. Neither is
        // sent upstream.
        if !criteria.title.is_empty() {
            query.push(("title", criteria.title.clone()));
        }
        if criteria.price_min > 0 {
            query.push(("price_min", criteria.price_min.to_string()));
        }
        if criteria.price_max > 0 {
            query.push(("price_max", criteria.price_max.to_string()));
        }

        tracing::debug!(
            category = %criteria.category_id,
            offset = cursor.offset,
            limit = cursor.limit,
            "fetching product page"
        );
        self.get_json(self.url("/products"), &query).await
    }

    async fn fetch_product_by_id(&self, id: ProductId) -> Result<Product, GatewayError> {
        self.get_json(self.url(&format!("/products/{id}")), &[]).await
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.get_json(self.url("/categories"), &[]).await
    }
}

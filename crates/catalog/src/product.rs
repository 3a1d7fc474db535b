use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, ProductId};

/// Product category as served by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Catalog product record.
///
/// Mirrors the upstream payload; the client core only interprets `id`,
/// `price` and `category`, the rest is carried for the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Price in the catalog's currency unit (non-negative by type).
    pub price: u64,
    #[serde(default)]
    pub description: String,
    /// Ordered image URLs, may be empty.
    #[serde(default)]
    pub images: Vec<String>,
    pub category: Category,
    #[serde(rename = "creationAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// First image URL, if the catalog provided any.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

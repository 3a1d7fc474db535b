use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use storefront_catalog::{Category, FilterCriteria, PageCursor, Product};
use storefront_core::ProductId;

use crate::r#trait::{CatalogGateway, GatewayError};

/// In-memory catalog gateway.
///
/// Intended for tests/dev. Applies the same filter semantics the HTTP
/// gateway delegates to the server (category match, case-insensitive
/// title substring, inclusive price bounds with 0 = unbounded) plus
/// offset/limit slicing, so paging behaves like the real service.
/// Failure injection exercises the error paths.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<Vec<Product>>,
    failing: AtomicBool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            failing: AtomicBool::new(false),
        }
    }

    pub fn insert(&self, product: Product) {
        if let Ok(mut products) = self.products.write() {
            products.push(product);
        }
    }

    /// When set, every fetch fails with a transport error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_failure(&self) -> Result<(), GatewayError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(GatewayError::Transport("injected failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogGateway for InMemoryCatalog {
    async fn fetch_product_page(
        &self,
        criteria: &FilterCriteria,
        cursor: PageCursor,
    ) -> Result<Vec<Product>, GatewayError> {
        self.check_failure()?;
        let products = self
            .products
            .read()
            .map_err(|_| GatewayError::Transport("lock poisoned".to_string()))?;

        Ok(products
            .iter()
            .filter(|p| criteria.matches(p))
            .skip(cursor.offset as usize)
            .take(cursor.limit as usize)
            .cloned()
            .collect())
    }

    async fn fetch_product_by_id(&self, id: ProductId) -> Result<Product, GatewayError> {
        self.check_failure()?;
        let products = self
            .products
            .read()
            .map_err(|_| GatewayError::Transport("lock poisoned".to_string()))?;

        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(GatewayError::NotFound)
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.check_failure()?;
        let products = self
            .products
            .read()
            .map_err(|_| GatewayError::Transport("lock poisoned".to_string()))?;

        // Distinct categories in first-seen order.
        let mut categories: Vec<Category> = Vec::new();
        for product in products.iter() {
            if !categories.iter().any(|c| c.id == product.category.id) {
                categories.push(product.category.clone());
            }
        }
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use storefront_core::CategoryId;

    fn product(id: u64, category: u64, title: &str, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price,
            description: String::new(),
            images: vec![],
            category: Category {
                id: CategoryId::new(category),
                name: format!("Category {category}"),
                image: None,
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn fixture() -> InMemoryCatalog {
        InMemoryCatalog::with_products(
            (0..12)
                .map(|i| product(i, 1 + i % 2, &format!("Sneaker {i}"), 10 * i))
                .collect(),
        )
    }

    #[tokio::test]
    async fn pages_slice_by_offset_and_limit() {
        let catalog = fixture();
        let criteria = FilterCriteria::default_for(CategoryId::new(1));

        let first = catalog
            .fetch_product_page(&criteria, PageCursor { offset: 0, limit: 4 })
            .await
            .unwrap();
        let second = catalog
            .fetch_product_page(&criteria, PageCursor { offset: 4, limit: 4 })
            .await
            .unwrap();

        assert_eq!(first.len(), 4);
        assert_eq!(second.len(), 2, "category 1 holds 6 of 12 fixtures");
        assert!(first.iter().all(|p| !second.contains(p)));
    }

    #[tokio::test]
    async fn price_and_title_filters_apply() {
        let catalog = fixture();
        let mut criteria = FilterCriteria::default_for(CategoryId::new(1));
        criteria.title = "sneaker".to_string();
        criteria.price_min = 40;

        let page = catalog
            .fetch_product_page(&criteria, PageCursor { offset: 0, limit: 10 })
            .await
            .unwrap();
        assert!(!page.is_empty());
        assert!(page.iter().all(|p| p.price >= 40));
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let catalog = fixture();
        let err = catalog
            .fetch_product_by_id(ProductId::new(999))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::NotFound));
    }

    #[tokio::test]
    async fn categories_are_distinct_in_first_seen_order() {
        let catalog = fixture();
        let categories = catalog.fetch_categories().await.unwrap();
        let ids: Vec<u64> = categories.iter().map(|c| c.id.as_u64()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn failure_injection_turns_every_fetch_into_a_transport_error() {
        let catalog = fixture();
        catalog.set_failing(true);

        let criteria = FilterCriteria::default_for(CategoryId::new(1));
        let err = catalog
            .fetch_product_page(&criteria, PageCursor { offset: 0, limit: 5 })
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));

        catalog.set_failing(false);
        assert!(
            catalog
                .fetch_product_page(&criteria, PageCursor { offset: 0, limit: 5 })
                .await
                .is_ok()
        );
    }
}

//! The storefront facade: listing, cart and session behind one surface.

use storefront_cart::Cart;
use storefront_catalog::{
    ApplyOutcome, Category, DraftField, ListingController, PageRequest, Product,
};
use storefront_core::{CategoryId, ProductId};
use storefront_gateway::CatalogGateway;
use storefront_session::Session;

use crate::error::ClientError;

/// Client-side storefront state, driven by one logical event loop.
///
/// Owns the three state containers exclusively; suspension happens only
/// at gateway boundaries, every state transition in between is
/// synchronous and atomic. Overlapping responses are resolved by the
/// controller's `(criteria, cursor)` staleness check, never here.
pub struct StorefrontClient<G> {
    gateway: G,
    listing: ListingController,
    cart: Cart,
    session: Session,
}

impl<G: CatalogGateway> StorefrontClient<G> {
    /// Facade for a category, starting with an empty listing. No fetch
    /// is performed until an operation asks for one.
    pub fn new(gateway: G, category_id: CategoryId) -> Self {
        Self {
            gateway,
            listing: ListingController::new(category_id),
            cart: Cart::new(),
            session: Session::new(),
        }
    }

    /// Switch to a category and load its first page.
    pub async fn open_category(&mut self, category_id: CategoryId) -> Result<(), ClientError> {
        tracing::info!(category = %category_id, "opening category");
        self.listing.set_category(category_id);
        let request = self.listing.first_page();
        self.run_fetch(request).await
    }

    /// Stage a filter form edit. Rejected input (non-numeric price)
    /// resolves locally: the previous draft value is retained.
    pub fn update_filter(&mut self, field: DraftField, raw: &str) -> Result<(), ClientError> {
        self.listing.update_draft(field, raw).map_err(ClientError::from)
    }

    /// Commit the staged filter and load the first page under it.
    pub async fn submit_filter(&mut self) -> Result<(), ClientError> {
        let request = self.listing.submit_filter();
        self.run_fetch(request).await
    }

    /// Drop the filter back to category defaults and reload.
    pub async fn reset_filter(&mut self) -> Result<(), ClientError> {
        let request = self.listing.reset_filter();
        self.run_fetch(request).await
    }

    /// Load the next page and append it to the listing.
    pub async fn load_more(&mut self) -> Result<(), ClientError> {
        let request = self.listing.load_more()?;
        self.run_fetch(request).await
    }

    /// Single-product lookup (detail page).
    pub async fn product(&self, id: ProductId) -> Result<Product, ClientError> {
        Ok(self.gateway.fetch_product_by_id(id).await?)
    }

    /// Category list (navigation).
    pub async fn load_categories(&self) -> Result<Vec<Category>, ClientError> {
        Ok(self.gateway.fetch_categories().await?)
    }

    /// "Add to cart" intent: merge, never duplicate.
    pub fn add_to_cart(&mut self, product: Product) {
        self.cart.add(product);
    }

    /// Quantity-stepper intent: absolute set, floor-clamped to 1.
    pub fn set_cart_quantity(&mut self, product: Product, quantity: u32) {
        self.cart.set_quantity(product, quantity);
    }

    /// Explicit line removal. Permitted regardless of login state, like
    /// every cart operation — anonymous carts are allowed.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.remove(id);
    }

    pub fn listing(&self) -> &ListingController {
        &self.listing
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    async fn run_fetch(&mut self, request: PageRequest) -> Result<(), ClientError> {
        match self
            .gateway
            .fetch_product_page(&request.criteria, request.cursor)
            .await
        {
            Ok(records) => {
                if self.listing.apply_page(&request, records) == ApplyOutcome::Stale {
                    tracing::debug!(
                        offset = request.cursor.offset,
                        "discarded product page issued under superseded state"
                    );
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, offset = request.cursor.offset, "product page fetch failed");
                self.listing.fetch_failed(&request);
                Err(err.into())
            }
        }
    }
}

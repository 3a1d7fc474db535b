//! Cart reconciler: merge-not-duplicate line-item semantics.
//!
//! The source UI funneled both "add to cart" clicks and quantity-stepper
//! changes through one overloaded action whose behavior depended on
//! whether an explicit quantity was passed. That contract is kept but
//! split into two named operations, [`Cart::add`] (increment) and
//! [`Cart::set_quantity`] (absolute set), so callers state their intent.

use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::ProductId;

/// One product-quantity pair in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    /// Never below 1; setting 0 clamps, it does not remove the line.
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal: price × quantity.
    pub fn subtotal(&self) -> u64 {
        self.product.price * u64::from(self.quantity)
    }
}

/// Authoritative cart contents.
///
/// At most one line per product id; insertion order is preserved for
/// display (a nicety, not a correctness invariant). Owned exclusively by
/// this reconciler — the view layer reads snapshots and issues intents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product: increments an existing line by 1, otherwise
    /// inserts a new line with quantity 1.
    pub fn add(&mut self, product: Product) {
        match self.line_mut(product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product,
                quantity: 1,
            }),
        }
    }

    /// Set the quantity for a product to `max(1, quantity)`, inserting
    /// the line if absent. Removal is only ever explicit via
    /// [`remove`](Self::remove).
    pub fn set_quantity(&mut self, product: Product, quantity: u32) {
        let quantity = quantity.max(1);
        match self.line_mut(product.id) {
            Some(line) => line.quantity = quantity,
            None => self.lines.push(CartLine { product, quantity }),
        }
    }

    /// Remove the line for a product. Silent no-op when absent.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product.id != id);
    }

    /// Sum of price × quantity over all lines; 0 for an empty cart.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn quantity_of(&self, id: ProductId) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.product.id == id)
            .map(|line| line.quantity)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use storefront_catalog::Category;
    use storefront_core::CategoryId;

    fn product(id: u64, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price,
            description: String::new(),
            images: vec![],
            category: Category {
                id: CategoryId::new(1),
                name: "Shoes".to_string(),
                image: None,
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn adding_the_same_product_twice_merges_into_one_line() {
        let mut cart = Cart::new();
        cart.add(product(1, 10));
        cart.add(product(1, 10));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(1)), Some(2));
    }

    #[test]
    fn set_quantity_zero_clamps_to_one_and_keeps_the_line() {
        let mut cart = Cart::new();
        cart.add(product(1, 10));
        cart.set_quantity(product(1, 10), 0);

        assert_eq!(cart.quantity_of(ProductId::new(1)), Some(1));
    }

    #[test]
    fn set_quantity_on_a_missing_product_inserts_the_line() {
        let mut cart = Cart::new();
        cart.set_quantity(product(7, 30), 3);
        assert_eq!(cart.quantity_of(ProductId::new(7)), Some(3));
    }

    #[test]
    fn remove_of_an_absent_product_is_a_silent_no_op() {
        let mut cart = Cart::new();
        cart.add(product(1, 10));
        cart.remove(ProductId::new(99));

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn remove_deletes_only_the_named_line() {
        let mut cart = Cart::new();
        cart.add(product(1, 10));
        cart.add(product(2, 20));
        cart.remove(ProductId::new(1));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].product.id, ProductId::new(2));
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let mut cart = Cart::new();
        cart.set_quantity(product(1, 10), 2);
        cart.add(product(2, 5));

        assert_eq!(cart.total(), 25);
    }

    #[test]
    fn total_of_empty_cart_is_zero() {
        assert_eq!(Cart::new().total(), 0);
    }

    #[test]
    fn insertion_order_is_preserved_across_updates() {
        let mut cart = Cart::new();
        cart.add(product(3, 10));
        cart.add(product(1, 10));
        cart.add(product(2, 10));
        cart.set_quantity(product(1, 10), 5);

        let order: Vec<u64> = cart.lines().iter().map(|l| l.product.id.as_u64()).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Intent {
            Add(u64),
            SetQuantity(u64, u32),
            Remove(u64),
        }

        fn intent() -> impl Strategy<Value = Intent> {
            prop_oneof![
                (0u64..6).prop_map(Intent::Add),
                ((0u64..6), (0u32..10)).prop_map(|(id, q)| Intent::SetQuantity(id, q)),
                (0u64..6).prop_map(Intent::Remove),
            ]
        }

        proptest! {
            /// Property: no sequence of intents can duplicate a product
            /// id or drive a quantity below 1.
            #[test]
            fn ids_stay_unique_and_quantities_stay_positive(
                intents in proptest::collection::vec(intent(), 0..40)
            ) {
                let mut cart = Cart::new();
                for i in intents {
                    match i {
                        Intent::Add(id) => cart.add(product(id, 10)),
                        Intent::SetQuantity(id, q) => cart.set_quantity(product(id, 10), q),
                        Intent::Remove(id) => cart.remove(ProductId::new(id)),
                    }
                }

                let mut seen = std::collections::HashSet::new();
                for line in cart.lines() {
                    prop_assert!(seen.insert(line.product.id));
                    prop_assert!(line.quantity >= 1);
                }
            }
        }
    }
}

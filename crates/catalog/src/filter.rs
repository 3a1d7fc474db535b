//! Filter criteria and the staged draft that feeds them.
//!
//! The draft holds uncommitted form edits; a submit produces a fresh
//! [`FilterCriteria`] snapshot. Committed criteria are never edited in
//! place, so an in-flight fetch always refers to an immutable snapshot.

use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, StoreError, StoreResult};

use crate::product::Product;

/// Committed filter snapshot for one category.
///
/// `title` is a substring match (empty = no filter). `price_min` /
/// `price_max` of 0 mean unbounded on that side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category_id: CategoryId,
    pub title: String,
    pub price_min: u64,
    pub price_max: u64,
}

impl FilterCriteria {
    /// Unfiltered criteria for a category.
    pub fn default_for(category_id: CategoryId) -> Self {
        Self {
            category_id,
            title: String::new(),
            price_min: 0,
            price_max: 0,
        }
    }

    /// Whether a product satisfies these criteria.
    ///
    /// Shared with the in-memory gateway so test paging agrees with the
    /// query parameters the HTTP gateway sends.
    pub fn matches(&self, product: &Product) -> bool {
        if product.category.id != self.category_id {
            return false;
        }
        if !self.title.is_empty()
            && !product
                .title
                .to_lowercase()
                .contains(&self.title.to_lowercase())
        {
            return false;
        }
        if self.price_min > 0 && product.price < self.price_min {
            return false;
        }
        if self.price_max > 0 && product.price > self.price_max {
            return false;
        }
        true
    }
}

/// Editable filter form field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DraftField {
    Title,
    PriceMin,
    PriceMax,
}

/// Staged, uncommitted filter edits.
///
/// Edits never touch committed criteria and never trigger a fetch on
/// their own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterDraft {
    title: String,
    price_min: u64,
    price_max: u64,
}

impl FilterDraft {
    /// Stage a raw form value into a field.
    ///
    /// Numeric fields reject non-numeric input (previous value retained)
    /// and clamp negatives to 0. A cleared numeric field means unbounded.
    pub fn update(&mut self, field: DraftField, raw: &str) -> StoreResult<()> {
        match field {
            DraftField::Title => {
                self.title = raw.to_string();
            }
            DraftField::PriceMin => {
                self.price_min = parse_price(raw)?;
            }
            DraftField::PriceMax => {
                self.price_max = parse_price(raw)?;
            }
        }
        Ok(())
    }

    /// Commit the draft into a fresh criteria snapshot.
    pub fn commit(&self, category_id: CategoryId) -> FilterCriteria {
        FilterCriteria {
            category_id,
            title: self.title.clone(),
            price_min: self.price_min,
            price_max: self.price_max,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price_min(&self) -> u64 {
        self.price_min
    }

    pub fn price_max(&self) -> u64 {
        self.price_max
    }
}

fn parse_price(raw: &str) -> StoreResult<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| StoreError::validation(format!("not a number: {trimmed:?}")))?;
    Ok(value.max(0) as u64)
}

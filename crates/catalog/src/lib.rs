//! `storefront-catalog` — catalog data model and listing state machine.
//!
//! Holds the wire-facing `Product`/`Category` records, the filter
//! criteria/draft pair, and the [`ListingController`]: a paginated,
//! filterable view over one category of the remote catalog at a time.

pub mod filter;
pub mod listing;
pub mod product;

pub use filter::{DraftField, FilterCriteria, FilterDraft};
pub use listing::{ApplyOutcome, ListingController, PageCursor, PageRequest};
pub use product::{Category, Product};

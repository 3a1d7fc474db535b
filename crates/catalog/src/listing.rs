//! Paginated, filterable listing state machine.
//!
//! One [`ListingController`] owns the listing for one category at a
//! time: committed criteria, the page cursor, the accumulated result
//! buffer and the end-of-results flag. Fetch triggers hand out a
//! [`PageRequest`] ticket; the response is applied back against that
//! ticket, and a ticket that no longer matches current state is
//! discarded. That staleness check is the sole ordering/cancellation
//! mechanism: there is no cancellation token, only a guard at
//! response-apply time.

use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, StoreError, StoreResult};

use crate::filter::{DraftField, FilterCriteria, FilterDraft};
use crate::product::Product;

/// Offset/limit pair describing the next page to fetch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    pub offset: u32,
    pub limit: u32,
}

impl PageCursor {
    /// Page size used when none is configured.
    pub const DEFAULT_LIMIT: u32 = 5;

    /// Cursor for the first page.
    pub fn first(limit: u32) -> Self {
        Self { offset: 0, limit }
    }

    /// Cursor for the next page (offset advanced by one page).
    pub fn advanced(self) -> Self {
        Self {
            offset: self.offset + self.limit,
            ..self
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.offset == 0
    }
}

/// Fetch ticket: the exact criteria/cursor a page was requested for.
///
/// Responses carry their ticket back so the controller can tell a live
/// response from one issued under superseded state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub criteria: FilterCriteria,
    pub cursor: PageCursor,
}

/// Result of feeding a fetch response back into the controller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The page was merged into the listing.
    Applied,
    /// The response was issued under superseded criteria/cursor and was
    /// discarded without touching state.
    Stale,
}

/// Listing state machine for one category.
#[derive(Debug, Clone)]
pub struct ListingController {
    criteria: FilterCriteria,
    draft: FilterDraft,
    cursor: PageCursor,
    items: Vec<Product>,
    exhausted: bool,
    in_flight: Option<PageRequest>,
}

impl ListingController {
    pub fn new(category_id: CategoryId) -> Self {
        Self::with_limit(category_id, PageCursor::DEFAULT_LIMIT)
    }

    /// Controller with an explicit page size (fixed for its lifetime).
    pub fn with_limit(category_id: CategoryId, limit: u32) -> Self {
        debug_assert!(limit > 0, "page limit must be positive");
        Self {
            criteria: FilterCriteria::default_for(category_id),
            draft: FilterDraft::default(),
            cursor: PageCursor::first(limit),
            items: Vec::new(),
            exhausted: false,
            in_flight: None,
        }
    }

    /// Switch the active category.
    ///
    /// Clears items, resets the cursor and exhaustion flag, restores
    /// default criteria/draft and drops any in-flight lineage. No fetch
    /// is implied; callers request the first page explicitly via
    /// [`first_page`](Self::first_page).
    pub fn set_category(&mut self, category_id: CategoryId) {
        self.criteria = FilterCriteria::default_for(category_id);
        self.draft = FilterDraft::default();
        self.reset_pages();
    }

    /// Issue a fetch ticket for the first page under current criteria.
    pub fn first_page(&mut self) -> PageRequest {
        self.issue()
    }

    /// Stage an uncommitted filter edit. Never touches committed
    /// criteria and never triggers a fetch.
    pub fn update_draft(&mut self, field: DraftField, raw: &str) -> StoreResult<()> {
        self.draft.update(field, raw)
    }

    /// Commit the draft into a fresh criteria snapshot and start a new
    /// criteria lifetime. Returns the ticket for the first page; filter
    /// changes are all-or-nothing, so the fetch layer only ever sees
    /// the complete snapshot.
    pub fn submit_filter(&mut self) -> PageRequest {
        self.criteria = self.draft.commit(self.criteria.category_id);
        self.reset_pages();
        self.issue()
    }

    /// Restore draft and criteria to the category defaults and start a
    /// new criteria lifetime.
    pub fn reset_filter(&mut self) -> PageRequest {
        self.draft = FilterDraft::default();
        self.criteria = FilterCriteria::default_for(self.criteria.category_id);
        self.reset_pages();
        self.issue()
    }

    /// Advance the cursor by one page and issue a fetch ticket whose
    /// results will be appended.
    ///
    /// Rejected while exhausted or while a fetch is in flight.
    pub fn load_more(&mut self) -> StoreResult<PageRequest> {
        if self.exhausted {
            return Err(StoreError::invariant("listing is exhausted"));
        }
        if self.in_flight.is_some() {
            return Err(StoreError::invariant("a fetch is already in flight"));
        }
        self.cursor = self.cursor.advanced();
        Ok(self.issue())
    }

    /// Feed a successful fetch response back into the listing.
    ///
    /// Applies only when the ticket still matches current criteria and
    /// cursor; anything else is a superseded response and is discarded.
    /// A first-page response replaces `items`, any other page appends.
    /// A short page (fewer records than the limit, including zero)
    /// marks the listing exhausted — a heuristic, the upstream catalog
    /// provides no reliable total count.
    pub fn apply_page(&mut self, request: &PageRequest, records: Vec<Product>) -> ApplyOutcome {
        if request.criteria != self.criteria || request.cursor != self.cursor {
            return ApplyOutcome::Stale;
        }
        if self.in_flight.as_ref() == Some(request) {
            self.in_flight = None;
        }

        self.exhausted = (records.len() as u32) < self.cursor.limit;
        if self.cursor.is_first_page() {
            self.items = records;
        } else {
            self.items.extend(records);
        }
        ApplyOutcome::Applied
    }

    /// Record a failed fetch. Items and cursor stay untouched; only the
    /// matching in-flight marker is cleared. No automatic retry —
    /// recovery is a user-initiated resubmit or reset.
    pub fn fetch_failed(&mut self, request: &PageRequest) {
        if self.in_flight.as_ref() == Some(request) {
            self.in_flight = None;
        }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn draft(&self) -> &FilterDraft {
        &self.draft
    }

    fn reset_pages(&mut self) {
        self.items.clear();
        self.cursor = PageCursor::first(self.cursor.limit);
        self.exhausted = false;
        self.in_flight = None;
    }

    fn issue(&mut self) -> PageRequest {
        let request = PageRequest {
            criteria: self.criteria.clone(),
            cursor: self.cursor,
        };
        self.in_flight = Some(request.clone());
        request
    }
}

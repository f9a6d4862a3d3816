//! Listing view — category filter, ordering and pagination over a served
//! collection. Pure and recomputed on every call; nothing here is cached.

use crate::merge::{sort_newest_first, sort_oldest_first};
use crate::types::ContentEntry;

/// Pseudo-category meaning "no filter".
pub const ALL_CATEGORIES: &str = "All";
pub const DEFAULT_PER_PAGE: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub category: String,
    pub order: SortOrder,
    /// 1-based.
    pub page: usize,
    pub per_page: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            order: SortOrder::Newest,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// One page of a filtered, ordered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub entries: Vec<ContentEntry>,
    pub page: usize,
    pub total_pages: usize,
    /// Size of the filtered collection across all pages.
    pub total: usize,
}

impl Listing {
    /// 1-based index range of `entries` within the filtered collection, or
    /// `None` for an empty page.
    pub fn showing(&self, per_page: usize) -> Option<(usize, usize)> {
        if self.entries.is_empty() {
            return None;
        }
        let first = (self.page - 1) * per_page + 1;
        Some((first, first + self.entries.len() - 1))
    }
}

/// `"All"` followed by every distinct category, in first-seen order.
pub fn categories(entries: &[ContentEntry]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for cat in entries.iter().flat_map(|e| e.categories.iter()) {
        if !out.contains(cat) {
            out.push(cat.clone());
        }
    }
    out
}

/// Apply `query` to `entries`. Out-of-range pages clamp into `1..=total_pages`.
pub fn list(entries: &[ContentEntry], query: &ListingQuery) -> Listing {
    let mut filtered: Vec<ContentEntry> = entries
        .iter()
        .filter(|e| query.category == ALL_CATEGORIES || e.has_category(&query.category))
        .cloned()
        .collect();

    match query.order {
        SortOrder::Newest => sort_newest_first(&mut filtered),
        SortOrder::Oldest => sort_oldest_first(&mut filtered),
    }

    let per_page = query.per_page.max(1);
    let total = filtered.len();
    let total_pages = total.div_ceil(per_page).max(1);
    let page = query.page.clamp(1, total_pages);
    let entries = filtered
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    Listing { entries, page, total_pages, total }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Merge policy: de-duplication by link and newest-first ordering.

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::types::ContentEntry;

/// Concatenate `primary` and `secondary`, keeping the first entry seen for
/// each link. Primary entries therefore win over secondary ones.
pub fn merge_by_link(primary: Vec<ContentEntry>, secondary: Vec<ContentEntry>) -> Vec<ContentEntry> {
    let mut seen = HashSet::new();
    primary
        .into_iter()
        .chain(secondary)
        .filter(|e| seen.insert(e.link.clone()))
        .collect()
}

/// Drop entries from `entries` whose link appears in `taken`.
pub fn exclude_links(entries: Vec<ContentEntry>, taken: &[ContentEntry]) -> Vec<ContentEntry> {
    let taken: HashSet<&str> = taken.iter().map(|e| e.link.as_str()).collect();
    entries
        .into_iter()
        .filter(|e| !taken.contains(e.link.as_str()))
        .collect()
}

/// Stable newest-first sort. Entries with indeterminate dates sort after
/// every dated entry and keep their relative order.
pub fn sort_newest_first(entries: &mut [ContentEntry]) {
    entries.sort_by_key(|e| Reverse(e.published()));
}

/// Stable oldest-first sort; indeterminate dates still go last.
pub fn sort_oldest_first(entries: &mut [ContentEntry]) {
    entries.sort_by_key(|e| (e.published().is_none(), e.published()));
}

/// The two collections produced by one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    /// Entries from the remote feed, newest first.
    pub recent: Vec<ContentEntry>,
    /// Local entries whose link is not already in `recent`, newest first.
    pub library: Vec<ContentEntry>,
    /// Whether the remote fetch failed (network, status, parse or timeout).
    pub remote_failed: bool,
}

impl Aggregation {
    /// Single-collection view: recent and library merged, remote first.
    pub fn merged(&self) -> Vec<ContentEntry> {
        let mut items = merge_by_link(self.recent.clone(), self.library.clone());
        sort_newest_first(&mut items);
        items
    }

    /// Neither source produced usable data.
    pub fn is_total_failure(&self) -> bool {
        self.remote_failed && self.library.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Domain-specific assertion macros for folio harnesses.
//!
//! These add context-rich failure messages that make it clear which
//! collection invariant was violated.

/// Assert the exact link sequence of a collection.
///
/// ```rust
/// assert_links!(agg.recent, ["https://a", "https://b"]);
/// ```
#[macro_export]
macro_rules! assert_links {
    ($entries:expr, [$($link:expr),* $(,)?]) => {{
        let entries: &[folio_core::ContentEntry] = &$entries;
        let actual: Vec<&str> = entries.iter().map(|e| e.link.as_str()).collect();
        let expected: Vec<&str> = vec![$($link),*];
        pretty_assertions::assert_eq!(actual, expected, "collection links differ");
    }};
}

/// Assert no two entries share a link.
#[macro_export]
macro_rules! assert_unique_links {
    ($entries:expr) => {{
        let entries: &[folio_core::ContentEntry] = &$entries;
        let mut seen = std::collections::HashSet::new();
        for e in entries {
            if !seen.insert(e.link.as_str()) {
                panic!("assert_unique_links! failed: {:?} appears more than once", e.link);
            }
        }
    }};
}

/// Assert dated entries are newest first and undated entries trail.
#[macro_export]
macro_rules! assert_newest_first {
    ($entries:expr) => {{
        let entries: &[folio_core::ContentEntry] = &$entries;
        for pair in entries.windows(2) {
            let (a, b) = (pair[0].published(), pair[1].published());
            if a < b {
                panic!(
                    "assert_newest_first! failed: {:?} ({:?}) precedes {:?} ({:?})",
                    pair[0].link, a, pair[1].link, b
                );
            }
        }
    }};
}

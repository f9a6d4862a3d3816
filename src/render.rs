//! Plain-text rendering of a listing page for `folio list`.

use std::fmt::Write;

use folio_core::view::Listing;
use folio_core::ContentEntry;

/// `Mar 8, 2024`, or the raw source text for indeterminate dates.
pub fn display_date(entry: &ContentEntry) -> String {
    match entry.published() {
        Some(ts) => ts.format("%b %-d, %Y").to_string(),
        None if entry.pub_date.to_wire().is_empty() => "undated".to_string(),
        None => entry.pub_date.to_wire(),
    }
}

pub fn render_listing(listing: &Listing, per_page: usize, categories: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "categories: {}", categories.join(" | "));
    for entry in &listing.entries {
        let tags = entry.categories.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
        let _ = writeln!(out, "{:<13} {} [{}]", display_date(entry), entry.title, tags);
        let _ = writeln!(out, "{:<13} {}", "", entry.link);
    }
    match listing.showing(per_page) {
        Some((first, last)) => {
            let _ = writeln!(
                out,
                "showing {first}-{last} of {} (page {}/{})",
                listing.total, listing.page, listing.total_pages
            );
        }
        None => {
            let _ = writeln!(out, "no articles found");
        }
    }
    out
}

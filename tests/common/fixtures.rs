//! Static feed and library fixtures used across harnesses.

use super::builders::{rss_feed, RssItem};

/// A URL nothing listens on; connections are refused immediately.
pub const UNREACHABLE_FEED: &str = "http://127.0.0.1:9/feed";

/// Three remote stories, newest first, one without categories.
pub fn medium_feed() -> String {
    rss_feed(&[
        RssItem {
            title: "Automating Reports with Scripts",
            link: "https://medium.com/@example/automating-reports-1a2b",
            pub_date: "Mon, 15 Jan 2024 10:30:00 GMT",
            categories: &[],
            content: r#"<figure><img alt="" src="https://cdn-images.example/reports.png"></figure><p>How I stopped copy-pasting.</p>"#,
        },
        RssItem {
            title: "Notes on Leadership",
            link: "https://medium.com/@example/leadership-5e6f",
            pub_date: "Sun, 10 Dec 2023 09:00:00 GMT",
            categories: &["leadership", "career"],
            content: "<p>No pictures here.</p>",
        },
        RssItem {
            title: "What I Learned Teaching Excel",
            link: "https://medium.com/@example/teaching-excel-7a8b",
            pub_date: "Wed, 01 Nov 2023 12:00:00 GMT",
            categories: &[],
            content: "<p>Spreadsheets.</p>",
        },
    ])
}

/// Static fallback list: one link shared with [`medium_feed`], one older.
pub const STATIC_LIST: &str = r#"[
  {
    "title": "Automating Reports (old copy)",
    "link": "https://medium.com/@example/automating-reports-1a2b",
    "thumbnail": "",
    "pubDate": "2024-01-15T10:30:00.000Z",
    "categories": ["Stale"],
    "description": ""
  },
  {
    "title": "My First Article",
    "link": "https://medium.com/@example/my-first-article-abc123",
    "thumbnail": "",
    "pubDate": "2022-01-15T00:00:00.000Z",
    "categories": ["Writing"],
    "description": ""
  }
]"#;

//! Test builders — ergonomic constructors for entries, feeds, documents and
//! aggregators.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use folio_core::config::Config;
use folio_core::{ContentEntry, PublishedAt};
use folio_feeds::Aggregator;
use std::path::Path;

// ---------------------------------------------------------------------------
// ContentEntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`ContentEntry`] fixtures.
///
/// ```rust
/// let entry = ContentEntryBuilder::new("https://blog.example/a")
///     .title("Automating Reports with Scripts")
///     .date("2024-01-15")
///     .tag("Python")
///     .build();
/// ```
pub struct ContentEntryBuilder {
    entry: ContentEntry,
}

impl ContentEntryBuilder {
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            entry: ContentEntry {
                title: "Untitled".to_string(),
                link: link.into(),
                thumbnail: String::new(),
                pub_date: PublishedAt::default(),
                categories: Vec::new(),
                description: String::new(),
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entry.title = title.into();
        self
    }

    pub fn date(mut self, raw: &str) -> Self {
        self.entry.pub_date = PublishedAt::parse(raw);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.entry.categories.push(tag.into());
        self
    }

    pub fn build(self) -> ContentEntry {
        self.entry
    }
}

// ---------------------------------------------------------------------------
// Feed XML
// ---------------------------------------------------------------------------

/// One `<item>` for [`rss_feed`].
pub struct RssItem<'a> {
    pub title: &'a str,
    pub link: &'a str,
    pub pub_date: &'a str,
    pub categories: &'a [&'a str],
    pub content: &'a str,
}

/// Render an RSS 2.0 document with `content:encoded` bodies.
pub fn rss_feed(items: &[RssItem<'_>]) -> String {
    let items: String = items
        .iter()
        .map(|i| {
            let cats: String = i
                .categories
                .iter()
                .map(|c| format!("<category>{c}</category>"))
                .collect();
            format!(
                "<item><title><![CDATA[{}]]></title><link>{}</link>{}<pubDate>{}</pubDate>\
                 <content:encoded><![CDATA[{}]]></content:encoded></item>",
                i.title, i.link, cats, i.pub_date, i.content
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
<channel><title>Stories</title><link>https://medium.com/@example</link><description>Stories</description>
{items}
</channel></rss>"#
    )
}

// ---------------------------------------------------------------------------
// Exported documents
// ---------------------------------------------------------------------------

/// Render an exported post. `None` fields are omitted from the markup.
pub fn export_document(
    title: Option<&str>,
    published: Option<&str>,
    link: Option<&str>,
    tags: &[&str],
) -> String {
    let title = title.map(|t| format!(r#"<h1 class="p-name">{t}</h1>"#)).unwrap_or_default();
    let time = published
        .map(|d| format!(r#"<time class="dt-published" datetime="{d}">{d}</time>"#))
        .unwrap_or_default();
    let link = link
        .map(|l| format!(r#"<a href="{l}" class="p-canonical">Canonical link</a>"#))
        .unwrap_or_default();
    let tags: String = tags
        .iter()
        .map(|t| format!(r#"<a href="https://blog.example/tag/{t}" class="p-category">{t}</a>"#))
        .collect();
    format!(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"></head><body><article>
<header>{title}</header>
<section data-field="body"><p>Exported body.</p></section>
<footer>{tags}{time}{link}</footer>
</article></body></html>"#
    )
}

/// Write `(file name, contents)` pairs into `dir`.
pub fn write_documents(dir: &Path, docs: &[(&str, String)]) {
    for (name, contents) in docs {
        std::fs::write(dir.join(name), contents).unwrap();
    }
}

// ---------------------------------------------------------------------------
// Aggregator wiring
// ---------------------------------------------------------------------------

/// Sources for [`test_config`]. Unset fields leave that source unconfigured.
#[derive(Default)]
pub struct Sources<'a> {
    pub remote_url: Option<&'a str>,
    pub documents_dir: Option<&'a Path>,
    pub static_file: Option<&'a Path>,
    pub timeout_ms: Option<u64>,
    pub shape: Option<&'a str>,
}

/// Default config with the given sources layered on top.
pub fn test_config(sources: &Sources<'_>) -> Config {
    let mut toml = format!(
        "[remote]\nurl = '{}'\ntimeout_ms = {}\n[cache]\nttl_secs = 60\n",
        sources.remote_url.unwrap_or(""),
        sources.timeout_ms.unwrap_or(2_000),
    );
    toml.push_str("[library]\n");
    if let Some(dir) = sources.documents_dir {
        toml.push_str(&format!("documents_dir = '{}'\n", dir.display()));
    }
    if let Some(file) = sources.static_file {
        toml.push_str(&format!("static_file = '{}'\n", file.display()));
    }
    if let Some(shape) = sources.shape {
        toml.push_str(&format!("[response]\nshape = '{shape}'\n"));
    }
    Config::from_toml(&toml).unwrap()
}

pub fn aggregator(sources: &Sources<'_>) -> Aggregator {
    Aggregator::from_config(&test_config(sources)).unwrap()
}

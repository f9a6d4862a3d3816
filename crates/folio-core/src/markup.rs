//! Structural markup scraping for locally stored documents.
//!
//! The selector logic lives behind [`MarkupScraper`] so the parsing contract
//! ("given raw markup, return optional title, date, link and an ordered set
//! of tags") can be tested and swapped independently of the library loader.

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::config::SelectorConfig;
use crate::types::dedup_tags;

#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("invalid `{name}` selector {selector:?}: {reason}")]
    InvalidSelector {
        name: &'static str,
        selector: String,
        reason: String,
    },
}

/// What could be recovered from one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrapedDocument {
    pub title: Option<String>,
    /// Publish timestamp text exactly as found in the document.
    pub published: Option<String>,
    pub link: Option<String>,
    pub thumbnail: Option<String>,
    pub body: Option<String>,
    pub tags: Vec<String>,
}

pub trait MarkupScraper: Send + Sync {
    fn scrape(&self, markup: &str) -> ScrapedDocument;
}

/// [`MarkupScraper`] driven by CSS selectors.
#[derive(Debug, Clone)]
pub struct SelectorScraper {
    title: [Selector; 2],
    published: Selector,
    link: Selector,
    thumbnail: Selector,
    body: Selector,
    // Tried in order; the first group that yields anything wins.
    tag_sources: [Selector; 3],
}

fn compile(name: &'static str, selector: &str) -> Result<Selector, MarkupError> {
    Selector::parse(selector).map_err(|e| MarkupError::InvalidSelector {
        name,
        selector: selector.to_string(),
        reason: format!("{e:?}"),
    })
}

impl SelectorScraper {
    pub fn from_config(cfg: &SelectorConfig) -> Result<Self, MarkupError> {
        Ok(Self {
            title: [
                compile("title", &cfg.title)?,
                compile("title_fallback", &cfg.title_fallback)?,
            ],
            published: compile("published", &cfg.published)?,
            link: compile("link", &cfg.link)?,
            thumbnail: compile("thumbnail", &cfg.thumbnail)?,
            body: compile("body", &cfg.body)?,
            tag_sources: [
                compile("category", &cfg.category)?,
                compile("tag_list", &cfg.tag_list)?,
                compile("tag_link", &cfg.tag_link)?,
            ],
        })
    }

    fn tags(&self, doc: &Html) -> Vec<String> {
        self.tag_sources
            .iter()
            .map(|sel| dedup_tags(doc.select(sel).map(|el| element_text(&el))))
            .find(|tags| !tags.is_empty())
            .unwrap_or_default()
    }
}

impl MarkupScraper for SelectorScraper {
    fn scrape(&self, markup: &str) -> ScrapedDocument {
        let doc = Html::parse_document(markup);

        let title = self.title.iter().find_map(|sel| {
            doc.select(sel)
                .map(|el| element_text(&el))
                .find(|t| !t.is_empty())
        });
        let published = doc
            .select(&self.published)
            .filter_map(|el| {
                el.value()
                    .attr("datetime")
                    .map(|v| v.trim().to_string())
                    .or_else(|| Some(element_text(&el)))
            })
            .find(|t| !t.is_empty());
        let link = first_attr(&doc, &self.link, "href");
        let thumbnail = first_attr(&doc, &self.thumbnail, "src");
        let body = doc.select(&self.body).next().map(|el| el.inner_html());

        ScrapedDocument {
            title,
            published,
            link,
            thumbnail,
            body,
            tags: self.tags(&doc),
        }
    }
}

fn first_attr(doc: &Html, sel: &Selector, attr: &str) -> Option<String> {
    doc.select(sel)
        .filter_map(|el| el.value().attr(attr))
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

/// Text content with internal whitespace collapsed.
fn element_text(el: &ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

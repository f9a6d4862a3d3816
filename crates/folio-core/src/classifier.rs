//! Classifier/Normalizer — fills in missing thumbnails and tags.
//!
//! Both heuristics are deterministic and never touch the identity fields
//! (`title`, `link`). Thumbnails come from the first embedded `<img>` when
//! the source gave none; tags come from ordered keyword matching over the
//! lower-cased title when the source gave none.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::ClassifierConfig;
use crate::types::{dedup_tags, ContentEntry, RawEntry};

pub const TECHNICAL_LABEL: &str = "Data & Tech";
pub const EDUCATION_LABEL: &str = "Education";
pub const PERSONAL_LABEL: &str = "Life & Thoughts";
pub const DEFAULT_LABEL: &str = "Archive";

fn img_src_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)<img[^>]+src=["']([^"']+)["']"#).expect("img pattern is valid")
    })
}

/// Use `explicit` when non-empty, otherwise the `src` of the first `<img>`
/// in `markup`, otherwise an empty string.
pub fn extract_thumbnail(explicit: Option<&str>, markup: &str) -> String {
    if let Some(url) = explicit.map(str::trim).filter(|u| !u.is_empty()) {
        return url.to_string();
    }
    img_src_pattern()
        .captures(markup)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// One ordered keyword rule: any keyword present in the title selects `label`.
#[derive(Debug, Clone)]
struct Rule {
    label: &'static str,
    keywords: Vec<String>,
}

/// First-match-wins title classifier.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_config(&crate::config::Config::defaults().classifier)
    }
}

impl Classifier {
    pub fn from_config(cfg: &ClassifierConfig) -> Self {
        let rule = |label, words: &[String]| Rule {
            label,
            keywords: words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        };
        Self {
            rules: vec![
                rule(TECHNICAL_LABEL, &cfg.technical),
                rule(EDUCATION_LABEL, &cfg.education),
                rule(PERSONAL_LABEL, &cfg.personal),
            ],
        }
    }

    /// The single synthesized label for `title`.
    pub fn classify(&self, title: &str) -> &'static str {
        let title = title.to_lowercase();
        self.rules
            .iter()
            .find(|r| r.keywords.iter().any(|k| title.contains(k.as_str())))
            .map(|r| r.label)
            .unwrap_or(DEFAULT_LABEL)
    }

    /// Give `entry` a synthesized tag if, and only if, it has none.
    pub fn fill_tags(&self, entry: &mut ContentEntry) {
        if entry.categories.is_empty() {
            entry.categories.push(self.classify(&entry.title).to_string());
        }
    }
}

/// Turn a raw source record into a [`ContentEntry`].
///
/// Records without a link are dropped since the link is the entry's identity.
pub fn normalize(raw: RawEntry, classifier: &Classifier) -> Option<ContentEntry> {
    let link = raw.link.trim();
    if link.is_empty() {
        return None;
    }
    let mut entry = ContentEntry {
        title: raw.title.trim().to_string(),
        link: link.to_string(),
        thumbnail: extract_thumbnail(raw.thumbnail.as_deref(), &raw.body),
        pub_date: raw.published,
        categories: dedup_tags(raw.categories),
        description: raw.body,
    };
    classifier.fill_tags(&mut entry);
    Some(entry)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Local library — a hand-maintained static list and/or a flat directory of
//! exported markup documents.
//!
//! Failures here are per-source or per-document: a broken static list or an
//! unreadable document is logged and skipped, never fatal to the request.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use folio_core::config::LibraryConfig;
use folio_core::markup::{MarkupError, MarkupScraper, ScrapedDocument, SelectorScraper};
use folio_core::merge::merge_by_link;
use folio_core::{normalize, Classifier, ContentEntry, PublishedAt, RawEntry};
use tracing::{debug, warn};

use crate::error::SourceError;

/// Directory of exported documents plus the rules for reading it.
#[derive(Clone)]
pub struct DocumentDir {
    dir: PathBuf,
    draft_marker: String,
    extension: String,
    scraper: Arc<dyn MarkupScraper>,
}

impl std::fmt::Debug for DocumentDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentDir")
            .field("dir", &self.dir)
            .field("draft_marker", &self.draft_marker)
            .field("extension", &self.extension)
            .finish_non_exhaustive()
    }
}

impl DocumentDir {
    pub fn new(
        dir: impl Into<PathBuf>,
        draft_marker: impl Into<String>,
        extension: impl Into<String>,
        scraper: Arc<dyn MarkupScraper>,
    ) -> Self {
        Self {
            dir: dir.into(),
            draft_marker: draft_marker.into(),
            extension: extension.into().trim_start_matches('.').to_string(),
            scraper,
        }
    }

    /// Matching extension and no draft marker prefix.
    pub fn is_candidate(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if !self.draft_marker.is_empty() && name.starts_with(&self.draft_marker) {
            return false;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension))
    }

    /// Read every candidate document, in file-name order.
    pub async fn load(&self, classifier: &Classifier) -> Result<Vec<ContentEntry>, SourceError> {
        let mut dir = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| SourceError::io(&self.dir, e))?;

        let mut paths = Vec::new();
        while let Some(item) = dir.next_entry().await.map_err(|e| SourceError::io(&self.dir, e))? {
            let path = item.path();
            if self.is_candidate(&path) {
                paths.push(path);
            } else {
                debug!(path = %path.display(), "skipping non-candidate file");
            }
        }
        paths.sort();

        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            let markup = match tokio::fs::read_to_string(&path).await {
                Ok(markup) => markup,
                Err(e) => {
                    warn!(error = %SourceError::io(&path, e), "skipping unreadable document");
                    continue;
                }
            };
            match entry_from_document(self.scraper.scrape(&markup), classifier) {
                Some(entry) => entries.push(entry),
                None => debug!(path = %path.display(), "dropping document without title, date or link"),
            }
        }
        Ok(entries)
    }
}

/// Build an entry from scraped fields. `None` unless title, publish
/// timestamp and link are all present.
pub fn entry_from_document(doc: ScrapedDocument, classifier: &Classifier) -> Option<ContentEntry> {
    let (Some(title), Some(published), Some(link)) = (doc.title, doc.published, doc.link) else {
        return None;
    };
    normalize(
        RawEntry {
            title,
            link,
            thumbnail: doc.thumbnail,
            published: PublishedAt::parse(published),
            categories: doc.tags,
            body: doc.body.unwrap_or_default(),
        },
        classifier,
    )
}

/// Read a JSON array of entries. Entries pass through unchanged.
pub async fn load_static(path: &Path) -> Result<Vec<ContentEntry>, SourceError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SourceError::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| SourceError::StaticList {
        path: path.to_path_buf(),
        source,
    })
}

/// All configured local sources.
#[derive(Debug, Clone, Default)]
pub struct Library {
    static_file: Option<PathBuf>,
    documents: Option<DocumentDir>,
}

impl Library {
    pub fn new(static_file: Option<PathBuf>, documents: Option<DocumentDir>) -> Self {
        Self { static_file, documents }
    }

    pub fn from_config(cfg: &LibraryConfig) -> Result<Self, MarkupError> {
        let documents = match &cfg.documents_dir {
            Some(dir) => {
                let scraper = SelectorScraper::from_config(&cfg.selectors)?;
                Some(DocumentDir::new(
                    dir.clone(),
                    cfg.draft_marker.clone(),
                    cfg.extension.clone(),
                    Arc::new(scraper),
                ))
            }
            None => None,
        };
        Ok(Self::new(cfg.static_file.clone(), documents))
    }

    pub fn is_configured(&self) -> bool {
        self.static_file.is_some() || self.documents.is_some()
    }

    /// Static entries followed by document entries, de-duplicated by link.
    /// Unsorted; the aggregator orders the final collection.
    pub async fn load(&self, classifier: &Classifier) -> Vec<ContentEntry> {
        let statics = match &self.static_file {
            Some(path) => load_static(path).await.unwrap_or_else(|e| {
                warn!(error = %e, "static list unavailable");
                Vec::new()
            }),
            None => Vec::new(),
        };
        let documents = match &self.documents {
            Some(dir) => dir.load(classifier).await.unwrap_or_else(|e| {
                warn!(error = %e, "document directory unavailable");
                Vec::new()
            }),
            None => Vec::new(),
        };
        debug!(statics = statics.len(), documents = documents.len(), "library loaded");
        merge_by_link(statics, documents)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

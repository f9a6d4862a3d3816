//! Aggregator — fetches the remote feed and the local library, normalises,
//! de-duplicates and orders them into one [`Aggregation`].

use folio_core::config::Config;
use folio_core::merge::{exclude_links, merge_by_link, sort_newest_first};
use folio_core::{normalize, Aggregation, Classifier, ContentEntry};
use tracing::{info, warn};

use crate::library::Library;
use crate::remote::RemoteFeed;

/// Owns both sources and the classifier. Stateless between calls; every
/// [`aggregate`](Aggregator::aggregate) rebuilds entries from scratch.
#[derive(Debug, Clone)]
pub struct Aggregator {
    remote: Option<RemoteFeed>,
    library: Library,
    classifier: Classifier,
}

impl Aggregator {
    pub fn new(remote: Option<RemoteFeed>, library: Library, classifier: Classifier) -> Self {
        Self { remote, library, classifier }
    }

    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let remote = RemoteFeed::from_config(&cfg.remote)?;
        let library = Library::from_config(&cfg.library)?;
        let classifier = Classifier::from_config(&cfg.classifier);
        if remote.is_none() && !library.is_configured() {
            warn!("neither a remote feed nor a local library is configured");
        }
        Ok(Self::new(remote, library, classifier))
    }

    /// One full pass over both sources. Never fails: a failing remote is
    /// recorded in [`Aggregation::remote_failed`] and contributes nothing.
    pub async fn aggregate(&self) -> Aggregation {
        let ((recent, remote_failed), local) =
            tokio::join!(self.fetch_recent(), self.library.load(&self.classifier));

        let mut library = exclude_links(local, &recent);
        sort_newest_first(&mut library);

        info!(
            recent = recent.len(),
            library = library.len(),
            remote_failed,
            "aggregated content feed"
        );
        Aggregation { recent, library, remote_failed }
    }

    async fn fetch_recent(&self) -> (Vec<ContentEntry>, bool) {
        let Some(remote) = &self.remote else {
            return (Vec::new(), false);
        };
        match remote.fetch().await {
            Ok(raw) => {
                let normalized = raw
                    .into_iter()
                    .filter_map(|r| normalize(r, &self.classifier))
                    .collect();
                let mut recent = merge_by_link(normalized, Vec::new());
                sort_newest_first(&mut recent);
                (recent, false)
            }
            Err(e) => {
                warn!(url = remote.url(), error = %e, "remote feed unavailable, continuing without it");
                (Vec::new(), true)
            }
        }
    }
}

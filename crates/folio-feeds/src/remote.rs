//! Remote syndicated feed (RSS or Atom) fetched over HTTP.

use std::time::Duration;

use feed_rs::model::Entry;
use folio_core::config::RemoteConfig;
use folio_core::{PublishedAt, RawEntry};
use reqwest::Client;

use crate::error::SourceError;

/// HTTP client bound to one feed URL with a bounded timeout.
#[derive(Debug, Clone)]
pub struct RemoteFeed {
    client: Client,
    url: String,
    timeout: Duration,
}

impl RemoteFeed {
    pub fn new(url: impl Into<String>, timeout: Duration, user_agent: &str) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(SourceError::Client)?;
        Ok(Self { client, url: url.into(), timeout })
    }

    /// `None` when no feed URL is configured.
    pub fn from_config(cfg: &RemoteConfig) -> Result<Option<Self>, SourceError> {
        let url = cfg.url.trim();
        if url.is_empty() {
            return Ok(None);
        }
        Self::new(url, Duration::from_millis(cfg.timeout_ms), &cfg.user_agent).map(Some)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One GET of the feed, parsed into raw records in feed order.
    pub async fn fetch(&self) -> Result<Vec<RawEntry>, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(|e| self.request_error(e))?;
        parse_feed(&bytes)
    }

    fn request_error(&self, e: reqwest::Error) -> SourceError {
        if e.is_timeout() {
            SourceError::Timeout(self.timeout)
        } else {
            SourceError::Request(e)
        }
    }
}

/// Parse an RSS/Atom document into raw records.
pub fn parse_feed(bytes: &[u8]) -> Result<Vec<RawEntry>, SourceError> {
    let feed = feed_rs::parser::parse(bytes)?;
    Ok(feed.entries.into_iter().map(raw_entry).collect())
}

fn raw_entry(entry: Entry) -> RawEntry {
    let thumbnail = entry
        .media
        .iter()
        .flat_map(|m| m.thumbnails.iter())
        .map(|t| t.image.uri.clone())
        .find(|uri| !uri.is_empty());
    let published = entry
        .published
        .or(entry.updated)
        .map(PublishedAt::from_instant)
        .unwrap_or_default();
    // content:encoded carries the full post; description is only a teaser.
    let body = entry
        .content
        .and_then(|c| c.body)
        .or_else(|| entry.summary.map(|s| s.content))
        .unwrap_or_default();

    RawEntry {
        title: entry.title.map(|t| t.content).unwrap_or_default(),
        link: entry.links.into_iter().next().map(|l| l.href).unwrap_or_default(),
        thumbnail,
        published,
        categories: entry.categories.into_iter().map(|c| c.term).collect(),
        body,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Core types for folio-core.
//!
//! This module defines the one entity that flows through every layer: the
//! normalised [`ContentEntry`], its [`PublishedAt`] timestamp, and the
//! [`RawEntry`] shape that sources hand to the normalizer.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A normalised article entry as served by the feed endpoint.
///
/// `link` is the identity of an entry: within one served collection no two
/// entries share a link. Entries are built fresh per aggregation and never
/// mutated after the aggregator hands them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    /// Display title. Expected non-empty, not enforced.
    #[serde(default)]
    pub title: String,
    /// Canonical URL; the de-duplication key.
    pub link: String,
    /// Preview image URL, or an empty string when none could be found.
    #[serde(default)]
    pub thumbnail: String,
    #[serde(rename = "pubDate", default)]
    pub pub_date: PublishedAt,
    /// Ordered set of topical tags. Never absent, possibly empty.
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub categories: Vec<String>,
    /// Body markup, kept only as a thumbnail source for the client.
    #[serde(default)]
    pub description: String,
}

impl ContentEntry {
    /// Parsed publish instant, if the source date could be understood.
    pub fn published(&self) -> Option<DateTime<Utc>> {
        self.pub_date.instant()
    }

    pub fn has_category(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c == label)
    }
}

/// A publish timestamp as received from a source.
///
/// Keeps the source-native text so that indeterminate dates still round-trip
/// to the client unchanged, alongside the parsed instant used for ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishedAt {
    raw: String,
    instant: Option<DateTime<Utc>>,
}

impl PublishedAt {
    /// Parse a source date string. Never fails; unknown formats yield an
    /// indeterminate timestamp that still carries the raw text.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let instant = parse_date(&raw);
        Self { raw, instant }
    }

    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self {
            raw: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
            instant: Some(instant),
        }
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.instant
    }

    pub fn is_indeterminate(&self) -> bool {
        self.instant.is_none()
    }

    /// The string sent to clients: ISO-8601 when parsed, raw text otherwise.
    pub fn to_wire(&self) -> String {
        match self.instant {
            Some(ts) => ts.to_rfc3339_opts(SecondsFormat::Millis, true),
            None => self.raw.clone(),
        }
    }
}

impl Serialize for PublishedAt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for PublishedAt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(raw))
    }
}

/// Best-effort date parsing across the formats feeds and exports emit.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Remove duplicate tags, keeping the first occurrence and dropping blanks.
pub fn dedup_tags<I>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || out.iter().any(|t| t == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}

fn deserialize_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let tags = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(dedup_tags(tags.unwrap_or_default()))
}

/// One record as a source delivers it, before thumbnail and tag fallback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEntry {
    pub title: String,
    pub link: String,
    /// Explicit image supplied by the source (media thumbnail, export image).
    pub thumbnail: Option<String>,
    pub published: PublishedAt,
    /// Explicit categories; empty means the classifier decides.
    pub categories: Vec<String>,
    /// Embedded body markup.
    pub body: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

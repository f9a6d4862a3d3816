//! folio-core — data model and pure transformations for the folio feed.
//!
//! Every layer here is a function of its inputs: no I/O, no shared state.
//!
//! # Pipeline
//!
//! ```text
//! RawEntry ──► classifier::normalize ──► ContentEntry
//!                                            │
//! markup::MarkupScraper (local docs) ────────┤
//!                                            ▼
//!                 merge (dedup, sort) ──► Aggregation ──► response / view
//! ```

pub mod classifier;
pub mod config;
pub mod markup;
pub mod merge;
pub mod response;
pub mod types;
pub mod view;

pub use classifier::{extract_thumbnail, normalize, Classifier};
pub use merge::Aggregation;
pub use response::{FeedResponse, ResponseShape};
pub use types::{ContentEntry, PublishedAt, RawEntry};

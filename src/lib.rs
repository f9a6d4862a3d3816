//! folio — article feed aggregation for a personal portfolio site.
//!
//! The binary serves one JSON endpoint that merges a remote syndicated feed
//! with locally stored entries. This crate wires the layers together so the
//! integration harnesses can drive them in-process.
//!
//! # Architecture
//!
//! ```text
//! RemoteFeed ──┐
//!              ├──► Aggregator ──► FeedCache ──► server (axum) ──► JSON
//! Library ─────┘        │
//!                       └──► view ──► render (folio list)
//! ```

pub mod render;
pub mod server;

pub use folio_core::{Aggregation, ContentEntry, FeedResponse, ResponseShape};
pub use folio_feeds::{Aggregator, FeedCache};

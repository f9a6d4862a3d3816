//! folio-feeds — the I/O side of folio.
//!
//! Each source reads raw records (an HTTP feed, a static list, a directory of
//! documents) and hands normalised [`folio_core::ContentEntry`] values to the
//! [`Aggregator`], which combines them into one [`folio_core::Aggregation`].

pub mod aggregator;
pub mod cache;
pub mod error;
pub mod library;
pub mod remote;

pub use aggregator::Aggregator;
pub use cache::FeedCache;
pub use error::SourceError;
pub use library::{DocumentDir, Library};
pub use remote::RemoteFeed;

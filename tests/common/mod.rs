//! Shared test utilities for folio integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod assertions;
pub mod builders;
pub mod fake_feed;
pub mod fixtures;

pub use builders::*;
pub use fake_feed::FakeFeedServer;
pub use fixtures::*;

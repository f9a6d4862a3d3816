//! Response shaping for the content feed endpoint.
//!
//! ```text
//! { "status": "ok", "recent": [...], "library": [...] }   // dual (default)
//! { "status": "ok", "items": [...] }                      // merged (legacy)
//! { "status": "error", "message": "..." }                 // total failure
//! ```

use serde::{Deserialize, Serialize};

use crate::merge::Aggregation;
use crate::types::ContentEntry;

pub const STATUS_OK: u16 = 200;
pub const STATUS_UNAVAILABLE: u16 = 503;

const TOTAL_FAILURE_MESSAGE: &str = "remote feed unavailable and no local entries configured";

/// Which JSON contract the endpoint serves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseShape {
    /// `recent` from the remote feed plus `library` from local sources.
    #[default]
    Dual,
    /// One `items` list with both sources merged.
    Merged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Dual {
        recent: Vec<ContentEntry>,
        library: Vec<ContentEntry>,
    },
    Merged {
        items: Vec<ContentEntry>,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedBody {
    pub status: Status,
    #[serde(flatten)]
    pub payload: Payload,
}

/// HTTP status code plus JSON body, independent of any server framework.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedResponse {
    pub status_code: u16,
    pub body: FeedBody,
}

impl FeedResponse {
    /// Shape one aggregation. Total failure (remote failed and the library
    /// is empty) is an error in both shapes; anything else is a success,
    /// possibly with empty lists.
    pub fn from_aggregation(agg: &Aggregation, shape: ResponseShape) -> Self {
        if agg.is_total_failure() {
            return Self::error(TOTAL_FAILURE_MESSAGE);
        }
        let payload = match shape {
            ResponseShape::Dual => Payload::Dual {
                recent: agg.recent.clone(),
                library: agg.library.clone(),
            },
            ResponseShape::Merged => Payload::Merged { items: agg.merged() },
        };
        Self {
            status_code: STATUS_OK,
            body: FeedBody { status: Status::Ok, payload },
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status_code: STATUS_UNAVAILABLE,
            body: FeedBody {
                status: Status::Error,
                payload: Payload::Error { message: message.into() },
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.body.status == Status::Ok
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

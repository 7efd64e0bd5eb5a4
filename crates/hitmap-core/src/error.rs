//! Error types for hitmap-rs.

use thiserror::Error;

use crate::id::{HitId, PrimitiveId};

/// The main error type for hitmap-rs operations.
#[derive(Error, Debug)]
pub enum HitmapError {
    /// An identifier does not fit in the pick color range.
    #[error("hit id {id} exceeds the pick color range (max {max})")]
    IdOutOfRange { id: HitId, max: HitId },

    /// An allocator returned a different number of ids than requested.
    #[error("allocator returned {actual} ids for primitive {subject}, expected {expected}")]
    AllocationMismatch {
        subject: PrimitiveId,
        expected: usize,
        actual: usize,
    },

    /// The instanced grouping size must be positive.
    #[error("point count per instance must be positive, got {0}")]
    InvalidPointCount(usize),

    /// The per-pass identifier budget cannot satisfy a request.
    #[error("hit id space exhausted: requested {requested}, {remaining} remaining")]
    IdSpaceExhausted { requested: usize, remaining: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for hitmap-rs operations.
pub type Result<T> = std::result::Result<T, HitmapError>;

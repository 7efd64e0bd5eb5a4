//! Core abstractions for hitmap-rs.
//!
//! This crate provides the types shared by every stage of GPU picking:
//! - [`Primitive`] drawable units with a stable [`PrimitiveId`] identity
//! - [`HitId`] per-pass identifiers and the [`IdAllocator`] contract
//! - [`ResolvedElement`] records carried between progressive passes
//! - Configuration options and errors

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod allocator;
pub mod error;
pub mod id;
pub mod options;
pub mod primitive;
pub mod resolved;

pub use allocator::{AllocationRequest, Assignment, IdAllocator, SequentialIdAllocator};
pub use error::{HitmapError, Result};
pub use id::{HitId, PrimitiveId, BACKGROUND_HIT_ID, HIT_ID_BITS, MAX_HIT_ID};
pub use options::HitmapOptions;
pub use primitive::Primitive;
pub use resolved::{is_resolved, resolved_indices, ResolvedElement};

// Re-export glam types for convenience
pub use glam::Vec3;

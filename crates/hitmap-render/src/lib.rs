//! Hit-encoding for hitmap-rs.
//!
//! This crate turns scene primitives into the data drawn by an identification
//! (pick) pass:
//! - [`HitColor`] and the 24-bit pick color codec
//! - [`NonInstancedHitmap`] and [`InstancedHitmap`] transformers
//! - [`Props`] / [`HitmapOutput`] for single-or-batch render commands

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod hitmap;
pub mod instanced;
pub mod non_instanced;
pub mod pick;
pub mod props;

pub use hitmap::{GetHitmap, HitmapMode};
pub use instanced::InstancedHitmap;
pub use non_instanced::NonInstancedHitmap;
pub use pick::{color_to_index, index_to_color, HitColor};
pub use props::{HitPrimitive, HitmapOutput, Props};

//! hitmap-rs: GPU-assisted object picking.
//!
//! Instead of ray casting against the scene, every pickable object is drawn
//! into an offscreen identification pass with a color that encodes its id.
//! Reading back the pixel under the pointer and decoding its color tells you
//! what was clicked.
//!
//! # Quick Start
//!
//! ```no_run
//! use hitmap::*;
//!
//! fn main() -> Result<()> {
//!     init();
//!
//!     let cube = Primitive::new("cube");
//!     let cloud = Primitive::with_points("cloud", vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
//!
//!     let mut session = PickSession::default();
//!     let hits = session.pick_all(|session| {
//!         let cubes = session.non_instanced(&cube)?;
//!         let points = session.instanced(InstancedHitmap::per_point(), &cloud)?;
//!         // Draw `cubes` and `points` into the pick buffer with their colors,
//!         // then read back the pixel under the pointer.
//!         # let _ = (cubes, points);
//!         Ok(Some([0, 0, 0, 255]))
//!     })?;
//!
//!     for hit in hits {
//!         println!("picked {} (instance {:?})", hit.object, hit.instance_index);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Transformers
//!
//! - [`NonInstancedHitmap`] gives each primitive one id.
//! - [`InstancedHitmap`] gives each group of points its own id.
//!
//! Both exclude elements resolved by earlier passes, so overlapping objects
//! can be peeled one layer at a time with a [`PickSession`].

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod init;
mod session;

pub use init::{init, init_from_file};
pub use session::{PickHit, PickSession};

// Re-export core types
pub use hitmap_core::{
    allocator::{AllocationRequest, Assignment, IdAllocator, SequentialIdAllocator},
    error::{HitmapError, Result},
    id::{HitId, PrimitiveId, BACKGROUND_HIT_ID, MAX_HIT_ID},
    options::HitmapOptions,
    primitive::Primitive,
    resolved::ResolvedElement,
    Vec3,
};

// Re-export hit-encoding types
pub use hitmap_render::{
    color_to_index, index_to_color, GetHitmap, HitColor, HitPrimitive, HitmapMode, HitmapOutput,
    InstancedHitmap, NonInstancedHitmap, Props,
};

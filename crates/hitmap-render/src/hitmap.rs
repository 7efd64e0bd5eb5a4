//! Hit-map transformers.
//!
//! A transformer turns the primitives of a render command into copies whose
//! colors identify them, ready to be drawn into the pick buffer. Two shapes
//! are supported:
//!
//! - [`NonInstancedHitmap`]: one id per primitive.
//! - [`InstancedHitmap`]: one id per group of points, so each point (or
//!   fixed-size group of points) picks on its own.
//!
//! Elements resolved by earlier passes are excluded, which lets a caller peel
//! overlapping objects under the pointer one layer at a time.

use hitmap_core::{
    AllocationRequest, HitId, HitmapError, IdAllocator, Primitive, ResolvedElement, Result,
};
use serde::{Deserialize, Serialize};

use crate::instanced::InstancedHitmap;
use crate::non_instanced::NonInstancedHitmap;
use crate::props::{HitPrimitive, HitmapOutput, Props};

/// Maps primitives to hit-colored copies.
pub trait GetHitmap {
    /// Transforms one primitive.
    ///
    /// Returns `Ok(None)` if the primitive is excluded from this pass.
    fn hitmap_primitive<T, A>(
        &self,
        primitive: &Primitive<T>,
        allocator: &mut A,
        resolved: &[ResolvedElement],
    ) -> Result<Option<HitPrimitive<T>>>
    where
        T: Clone,
        A: IdAllocator + ?Sized;

    /// Transforms a single primitive or a batch.
    ///
    /// Output keeps the input order and shape. Any error fails the whole
    /// batch; no partial output is returned.
    fn get_hitmap<'a, T, A>(
        &self,
        props: impl Into<Props<'a, T>>,
        allocator: &mut A,
        resolved: &[ResolvedElement],
    ) -> Result<HitmapOutput<T>>
    where
        T: Clone + 'a,
        A: IdAllocator + ?Sized,
    {
        let props = props.into();
        let primitives = props.as_slice();
        let mut hits = Vec::with_capacity(primitives.len());
        for primitive in primitives {
            if let Some(hit) = self.hitmap_primitive(primitive, allocator, resolved)? {
                hits.push(hit);
            }
        }
        log::debug!(
            "hitmap: kept {} of {} primitives ({} resolved elements)",
            hits.len(),
            primitives.len(),
            resolved.len()
        );
        Ok(props.wrap(hits))
    }
}

/// Requests ids and checks the allocator returned exactly as many as asked.
pub(crate) fn allocate<A>(allocator: &mut A, request: &AllocationRequest) -> Result<Vec<HitId>>
where
    A: IdAllocator + ?Sized,
{
    let ids = allocator.assign_next_ids(request)?;
    if ids.len() != request.count() {
        log::warn!(
            "allocator returned {} ids for {}, expected {}",
            ids.len(),
            request.subject(),
            request.count()
        );
        return Err(HitmapError::AllocationMismatch {
            subject: request.subject(),
            expected: request.count(),
            actual: ids.len(),
        });
    }
    Ok(ids)
}

/// How a render command encodes its primitives for picking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HitmapMode {
    /// One id per primitive.
    #[default]
    NonInstanced,
    /// One id per `point_count_per_instance` points.
    Instanced { point_count_per_instance: usize },
}

impl HitmapMode {
    /// One id per point, as used by grid and point cloud commands.
    pub const PER_POINT: Self = Self::Instanced {
        point_count_per_instance: 1,
    };
}

impl GetHitmap for HitmapMode {
    fn hitmap_primitive<T, A>(
        &self,
        primitive: &Primitive<T>,
        allocator: &mut A,
        resolved: &[ResolvedElement],
    ) -> Result<Option<HitPrimitive<T>>>
    where
        T: Clone,
        A: IdAllocator + ?Sized,
    {
        match *self {
            Self::NonInstanced => NonInstancedHitmap.hitmap_primitive(primitive, allocator, resolved),
            Self::Instanced {
                point_count_per_instance,
            } => InstancedHitmap::new(point_count_per_instance)?
                .hitmap_primitive(primitive, allocator, resolved),
        }
    }
}

//! Hit-map transformer for single-identity primitives.

use hitmap_core::{is_resolved, AllocationRequest, IdAllocator, Primitive, ResolvedElement, Result};

use crate::hitmap::{allocate, GetHitmap};
use crate::pick::HitColor;
use crate::props::HitPrimitive;

/// Gives every primitive one id, whatever its point count.
///
/// A primitive matched by any resolved record is dropped and no id is
/// allocated for it. Primitives with points get a `colors` sequence filled
/// with their single color.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonInstancedHitmap;

impl GetHitmap for NonInstancedHitmap {
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
        if is_resolved(resolved, primitive.id()) {
            log::trace!("hitmap: skipping resolved primitive {}", primitive.id());
            return Ok(None);
        }

        let ids = allocate(
            allocator,
            &AllocationRequest::Single {
                subject: primitive.id(),
            },
        )?;
        let color = HitColor::from_id(ids[0])?;

        let mut hit = HitPrimitive::from_primitive(primitive);
        hit.color = Some(color);
        hit.colors = primitive.points().map(|points| vec![color; points.len()]);
        Ok(Some(hit))
    }
}

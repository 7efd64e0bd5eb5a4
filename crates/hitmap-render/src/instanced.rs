//! Hit-map transformer for instanced primitives.
//!
//! Instance boundaries come purely from position in the flat point sequence:
//! points `[i * n, (i + 1) * n)` make up instance `i`, where `n` is the
//! configured point count per instance. Points past the last whole instance
//! belong to it as well, so a trailing partial group is still pickable.

use std::ops::Range;

use hitmap_core::{
    resolved_indices, AllocationRequest, HitmapError, IdAllocator, Primitive, ResolvedElement,
    Result,
};

use crate::hitmap::{allocate, GetHitmap};
use crate::pick::HitColor;
use crate::props::HitPrimitive;

/// Gives every group of `point_count_per_instance` points its own id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstancedHitmap {
    point_count_per_instance: usize,
}

impl InstancedHitmap {
    /// Creates a transformer grouping `point_count_per_instance` points per id.
    pub fn new(point_count_per_instance: usize) -> Result<Self> {
        if point_count_per_instance == 0 {
            return Err(HitmapError::InvalidPointCount(point_count_per_instance));
        }
        Ok(Self {
            point_count_per_instance,
        })
    }

    /// A transformer giving every point its own id.
    pub fn per_point() -> Self {
        Self {
            point_count_per_instance: 1,
        }
    }

    /// Returns how many consecutive points share one id.
    pub fn point_count_per_instance(&self) -> usize {
        self.point_count_per_instance
    }

    /// Number of ids a primitive with `num_points` points needs.
    ///
    /// Never zero: a primitive with no points, or fewer points than one
    /// instance, still picks as one instance.
    pub fn instance_count(&self, num_points: usize) -> usize {
        (num_points / self.point_count_per_instance).max(1)
    }

    /// Instance owning the point at `point_index`.
    pub fn instance_of(&self, point_index: usize, num_points: usize) -> usize {
        (point_index / self.point_count_per_instance).min(self.instance_count(num_points) - 1)
    }

    /// Flat point indices owned by `instance`, including trailing points for
    /// the last instance.
    pub fn instance_points(&self, instance: usize, num_points: usize) -> Range<usize> {
        let start = (instance * self.point_count_per_instance).min(num_points);
        let end = if instance + 1 >= self.instance_count(num_points) {
            num_points
        } else {
            start + self.point_count_per_instance
        };
        start..end
    }
}

impl Default for InstancedHitmap {
    fn default() -> Self {
        Self::per_point()
    }
}

impl GetHitmap for InstancedHitmap {
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
        let filtered = resolved_indices(resolved, primitive.id());
        let num_points = primitive.num_points();
        let instance_count = self.instance_count(num_points);

        let ids = allocate(
            allocator,
            &AllocationRequest::Instanced {
                count: instance_count,
                subject: primitive.id(),
            },
        )?;
        let instance_colors = ids
            .into_iter()
            .map(HitColor::from_id)
            .collect::<Result<Vec<_>>>()?;

        let mut hit = HitPrimitive::from_primitive(primitive);
        match primitive.points() {
            Some(points) if !points.is_empty() => {
                let (points, colors): (Vec<_>, Vec<_>) = points
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| !filtered.contains(index))
                    .map(|(index, point)| {
                        (*point, instance_colors[self.instance_of(index, num_points)])
                    })
                    .unzip();
                hit.points = Some(points);
                hit.colors = Some(colors);
            }
            _ => {
                hit.color = Some(instance_colors[0]);
                // A primitive without points cannot be partially resolved.
                if !filtered.is_empty() {
                    log::trace!("hitmap: skipping resolved primitive {}", primitive.id());
                    return Ok(None);
                }
            }
        }
        Ok(Some(hit))
    }
}

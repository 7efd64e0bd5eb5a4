//! Drawable primitives as seen by the identification pass.

use glam::Vec3;

use crate::id::PrimitiveId;

/// One drawable unit.
///
/// A primitive may carry an ordered sequence of points. Without one it is
/// atomic and always picks as a single object. `data` is the caller's
/// render payload; it is carried through to the hit-colored copy untouched.
#[derive(Debug, Clone)]
pub struct Primitive<T> {
    id: PrimitiveId,
    /// Render payload (pose, scale, style...).
    pub data: T,
    /// Positional sub-elements, if any.
    pub points: Option<Vec<Vec3>>,
}

impl<T> Primitive<T> {
    /// Creates an atomic primitive with a fresh identity.
    pub fn new(data: T) -> Self {
        Self {
            id: PrimitiveId::next(),
            data,
            points: None,
        }
    }

    /// Creates a primitive carrying points, with a fresh identity.
    pub fn with_points(data: T, points: Vec<Vec3>) -> Self {
        Self {
            id: PrimitiveId::next(),
            data,
            points: Some(points),
        }
    }

    /// Creates a primitive with an explicit identity.
    pub fn with_id(id: PrimitiveId, data: T, points: Option<Vec<Vec3>>) -> Self {
        Self { id, data, points }
    }

    /// Returns this primitive's identity.
    pub fn id(&self) -> PrimitiveId {
        self.id
    }

    /// Returns the points, if this primitive has a point sequence.
    pub fn points(&self) -> Option<&[Vec3]> {
        self.points.as_deref()
    }

    /// Returns the number of points (0 for atomic primitives).
    pub fn num_points(&self) -> usize {
        self.points.as_ref().map_or(0, Vec::len)
    }

    /// Returns true if this primitive has no point sequence.
    pub fn is_atomic(&self) -> bool {
        self.points.is_none()
    }
}

//! Hit-map inputs and outputs.
//!
//! A render command may be drawn with one primitive or with a batch. Hit-map
//! transformers accept either through [`Props`] and answer in the same shape
//! through [`HitmapOutput`].

use glam::Vec3;
use hitmap_core::{Primitive, PrimitiveId};

use crate::pick::HitColor;

/// A copy of a primitive carrying pick colors for the identification pass.
///
/// Atomic primitives get `color`. Primitives with points get `colors`, one
/// per remaining point, aligned with `points`.
#[derive(Debug, Clone)]
pub struct HitPrimitive<T> {
    /// Identity of the source primitive.
    pub id: PrimitiveId,
    /// The source primitive's render payload.
    pub data: T,
    /// Remaining points, aligned with `colors`.
    pub points: Option<Vec<Vec3>>,
    /// Per-primitive pick color.
    pub color: Option<HitColor>,
    /// Per-point pick colors.
    pub colors: Option<Vec<HitColor>>,
}

impl<T: Clone> HitPrimitive<T> {
    /// Copies `primitive` without any pick colors.
    pub fn from_primitive(primitive: &Primitive<T>) -> Self {
        Self {
            id: primitive.id(),
            data: primitive.data.clone(),
            points: primitive.points.clone(),
            color: None,
            colors: None,
        }
    }
}

impl<T> HitPrimitive<T> {
    /// Returns per-point colors as raw RGBA8 bytes for an instance buffer.
    pub fn colors_bytes(&self) -> &[u8] {
        match self.colors.as_deref() {
            Some(colors) => bytemuck::cast_slice(colors),
            None => &[],
        }
    }

    /// Returns per-point colors normalized to `[0, 1]`.
    pub fn colors_f32(&self) -> Option<Vec<[f32; 4]>> {
        self.colors
            .as_ref()
            .map(|colors| colors.iter().map(|c| c.to_rgba_f32()).collect())
    }
}

/// Primitives handed to a hit-map transformer.
#[derive(Debug)]
pub enum Props<'a, T> {
    /// A single primitive.
    One(&'a Primitive<T>),
    /// A batch of primitives.
    Many(&'a [Primitive<T>]),
}

impl<T> Clone for Props<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Props<'_, T> {}

impl<'a, T> Props<'a, T> {
    /// Returns the primitives as a slice.
    pub fn as_slice(&self) -> &'a [Primitive<T>] {
        match *self {
            Self::One(primitive) => std::slice::from_ref(primitive),
            Self::Many(primitives) => primitives,
        }
    }

    /// Wraps transformed primitives in the shape of these props.
    pub fn wrap<U>(&self, hits: Vec<HitPrimitive<U>>) -> HitmapOutput<U> {
        match self {
            Self::One(_) => HitmapOutput::One(hits.into_iter().next()),
            Self::Many(_) => HitmapOutput::Many(hits),
        }
    }
}

impl<'a, T> From<&'a Primitive<T>> for Props<'a, T> {
    fn from(primitive: &'a Primitive<T>) -> Self {
        Self::One(primitive)
    }
}

impl<'a, T> From<&'a [Primitive<T>]> for Props<'a, T> {
    fn from(primitives: &'a [Primitive<T>]) -> Self {
        Self::Many(primitives)
    }
}

impl<'a, T> From<&'a Vec<Primitive<T>>> for Props<'a, T> {
    fn from(primitives: &'a Vec<Primitive<T>>) -> Self {
        Self::Many(primitives)
    }
}

impl<'a, T, const N: usize> From<&'a [Primitive<T>; N]> for Props<'a, T> {
    fn from(primitives: &'a [Primitive<T>; N]) -> Self {
        Self::Many(primitives)
    }
}

/// Result of a hit-map transformer, shaped like its [`Props`].
#[derive(Debug, Clone)]
pub enum HitmapOutput<T> {
    /// Output for a single primitive; `None` if it was excluded.
    One(Option<HitPrimitive<T>>),
    /// Output for a batch, in input order.
    Many(Vec<HitPrimitive<T>>),
}

impl<T> HitmapOutput<T> {
    /// Returns the hit primitives as a vector regardless of shape.
    pub fn into_vec(self) -> Vec<HitPrimitive<T>> {
        match self {
            Self::One(hit) => hit.into_iter().collect(),
            Self::Many(hits) => hits,
        }
    }

    /// Returns the single hit primitive, or the first of a batch.
    pub fn into_single(self) -> Option<HitPrimitive<T>> {
        match self {
            Self::One(hit) => hit,
            Self::Many(hits) => hits.into_iter().next(),
        }
    }

    /// Returns true if the props were a single primitive.
    pub fn is_single(&self) -> bool {
        matches!(self, Self::One(_))
    }

    /// Returns the number of hit primitives.
    pub fn len(&self) -> usize {
        match self {
            Self::One(hit) => usize::from(hit.is_some()),
            Self::Many(hits) => hits.len(),
        }
    }

    /// Returns true if every primitive was excluded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the hit primitives.
    pub fn iter(&self) -> std::slice::Iter<'_, HitPrimitive<T>> {
        match self {
            Self::One(hit) => hit.as_slice().iter(),
            Self::Many(hits) => hits.iter(),
        }
    }
}

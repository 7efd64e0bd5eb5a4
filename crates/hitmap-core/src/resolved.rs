//! Elements resolved by earlier identification passes.

use std::collections::HashSet;

use crate::id::PrimitiveId;

/// A primitive, or one of its points, already matched by a prior pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedElement {
    /// The primitive that was hit.
    pub object: PrimitiveId,
    /// Flat index into the primitive's point sequence, when a specific point
    /// was resolved.
    pub element_index: Option<usize>,
}

impl ResolvedElement {
    /// A whole primitive was resolved.
    pub fn object(object: PrimitiveId) -> Self {
        Self {
            object,
            element_index: None,
        }
    }

    /// A single point of a primitive was resolved.
    pub fn element(object: PrimitiveId, element_index: usize) -> Self {
        Self {
            object,
            element_index: Some(element_index),
        }
    }
}

/// Returns true if any record refers to `object`, with or without an index.
pub fn is_resolved(resolved: &[ResolvedElement], object: PrimitiveId) -> bool {
    resolved.iter().any(|r| r.object == object)
}

/// Collects the point indices of `object` that have been resolved.
pub fn resolved_indices(resolved: &[ResolvedElement], object: PrimitiveId) -> HashSet<usize> {
    resolved
        .iter()
        .filter(|r| r.object == object)
        .filter_map(|r| r.element_index)
        .collect()
}

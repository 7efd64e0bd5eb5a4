//! Identifiers: per-pass hit ids and stable primitive handles.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// An identifier allocated for one identification pass.
///
/// Hit ids are only meaningful within the pass that allocated them.
pub type HitId = u32;

/// Number of bits a hit id can occupy (one byte per RGB channel).
pub const HIT_ID_BITS: u32 = 24;

/// Largest hit id that can be encoded as a pick color.
pub const MAX_HIT_ID: HitId = (1 << HIT_ID_BITS) - 1;

/// Hit id of the cleared background of an identification pass.
pub const BACKGROUND_HIT_ID: HitId = 0;

static PRIMITIVE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a primitive.
///
/// Primitives are plain data, so picking matches them by this handle rather
/// than by value. Handles come from a process-wide monotonic counter and are
/// never reused; clones of a primitive share its handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PrimitiveId(u64);

impl PrimitiveId {
    /// Creates a new unique primitive id.
    pub fn next() -> Self {
        Self(PRIMITIVE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Wraps an externally managed handle (e.g. an arena index).
    ///
    /// Callers mixing raw handles with [`PrimitiveId::next`] are responsible
    /// for keeping the two spaces apart.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw handle value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PrimitiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

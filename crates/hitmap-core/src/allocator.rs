//! Identifier allocation for identification passes.
//!
//! Transformers never create ids themselves; they describe what a primitive
//! needs with an [`AllocationRequest`] and hand it to an [`IdAllocator`].
//! The allocator owns the id -> object bookkeeping that lets a sampled pick
//! color be mapped back to the primitive that produced it.

use crate::error::{HitmapError, Result};
use crate::id::{HitId, PrimitiveId, BACKGROUND_HIT_ID, MAX_HIT_ID};
use crate::options::HitmapOptions;

/// What a primitive needs from the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationRequest {
    /// One id for the whole primitive.
    Single {
        /// The primitive the id identifies.
        subject: PrimitiveId,
    },
    /// One id per instance, in instance order.
    Instanced {
        /// Number of instances; always positive.
        count: usize,
        /// The primitive the ids identify.
        subject: PrimitiveId,
    },
}

impl AllocationRequest {
    /// Returns the primitive this request is for.
    pub fn subject(&self) -> PrimitiveId {
        match *self {
            Self::Single { subject } | Self::Instanced { subject, .. } => subject,
        }
    }

    /// Returns the number of ids the allocator must return.
    pub fn count(&self) -> usize {
        match *self {
            Self::Single { .. } => 1,
            Self::Instanced { count, .. } => count,
        }
    }
}

/// Source of fresh hit ids for one identification pass.
///
/// Implementations must return exactly [`AllocationRequest::count`] ids, in
/// ascending instance order for instanced requests, and never hand out the
/// same id twice within a pass.
pub trait IdAllocator {
    /// Allocates the ids described by `request`.
    fn assign_next_ids(&mut self, request: &AllocationRequest) -> Result<Vec<HitId>>;
}

impl<F> IdAllocator for F
where
    F: FnMut(&AllocationRequest) -> Vec<HitId>,
{
    fn assign_next_ids(&mut self, request: &AllocationRequest) -> Result<Vec<HitId>> {
        Ok(self(request))
    }
}

/// The object an allocated id stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    /// The primitive the id was allocated for.
    pub subject: PrimitiveId,
    /// Instance index for instanced requests.
    pub instance_index: Option<usize>,
}

/// Monotonic allocator handing out consecutive ids.
///
/// Ids start at 1 when the background is reserved, 0 otherwise. Every id is
/// recorded so [`SequentialIdAllocator::lookup`] can reverse-map it.
#[derive(Debug, Clone)]
pub struct SequentialIdAllocator {
    first_id: HitId,
    next_id: HitId,
    budget: usize,
    assignments: Vec<Assignment>,
}

impl SequentialIdAllocator {
    /// Creates an allocator for a fresh pass.
    pub fn new(options: &HitmapOptions) -> Self {
        let first_id = if options.reserve_background {
            BACKGROUND_HIT_ID + 1
        } else {
            BACKGROUND_HIT_ID
        };
        let range = (MAX_HIT_ID - first_id) as usize + 1;
        Self {
            first_id,
            next_id: first_id,
            budget: range.min(options.max_ids_per_pass as usize),
            assignments: Vec::new(),
        }
    }

    /// Forgets all assignments and starts a new pass.
    pub fn reset(&mut self) {
        self.next_id = self.first_id;
        self.assignments.clear();
    }

    /// Returns the id the next allocation will start at.
    pub fn next_id(&self) -> HitId {
        self.next_id
    }

    /// Returns the number of ids allocated in this pass.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns true if nothing has been allocated in this pass.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Returns how many more ids this pass may allocate.
    pub fn remaining(&self) -> usize {
        self.budget - self.assignments.len()
    }

    /// Looks up what an id was allocated for.
    ///
    /// Returns `None` for the background and for ids this pass never issued.
    pub fn lookup(&self, id: HitId) -> Option<Assignment> {
        let offset = id.checked_sub(self.first_id)?;
        self.assignments.get(offset as usize).copied()
    }
}

impl Default for SequentialIdAllocator {
    fn default() -> Self {
        Self::new(&HitmapOptions::default())
    }
}

impl IdAllocator for SequentialIdAllocator {
    fn assign_next_ids(&mut self, request: &AllocationRequest) -> Result<Vec<HitId>> {
        let requested = request.count();
        let remaining = self.remaining();
        let exhausted = || HitmapError::IdSpaceExhausted {
            requested,
            remaining,
        };
        if requested > remaining {
            log::warn!(
                "hit id budget exhausted: {} requested for {}, {} remaining",
                requested,
                request.subject(),
                remaining
            );
            return Err(exhausted());
        }
        let count = HitId::try_from(requested).map_err(|_| exhausted())?;

        let start = self.next_id;
        let subject = request.subject();
        match *request {
            AllocationRequest::Single { .. } => self.assignments.push(Assignment {
                subject,
                instance_index: None,
            }),
            AllocationRequest::Instanced { count: instances, .. } => {
                self.assignments.extend((0..instances).map(|i| Assignment {
                    subject,
                    instance_index: Some(i),
                }));
            }
        }
        self.next_id += count;
        Ok((start..start + count).collect())
    }
}

//! Progressive picking across identification passes.
//!
//! Objects overlapping under the pointer are found one layer at a time: each
//! pass excludes everything resolved so far, so the next sample reveals what
//! was hidden behind it.

use std::collections::HashMap;

use hitmap_core::{
    HitId, HitmapOptions, PrimitiveId, ResolvedElement, Result, SequentialIdAllocator,
};
use hitmap_render::{
    GetHitmap, HitColor, HitmapMode, HitmapOutput, InstancedHitmap, NonInstancedHitmap, Props,
};

/// Result of resolving one sampled pick color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickHit {
    /// The id that was sampled.
    pub hit_id: HitId,
    /// The primitive that drew it.
    pub object: PrimitiveId,
    /// The instance hit, for instanced primitives.
    pub instance_index: Option<usize>,
}

/// State of one pointer query: the pass allocator and everything resolved.
#[derive(Debug)]
pub struct PickSession {
    options: HitmapOptions,
    allocator: SequentialIdAllocator,
    resolved: Vec<ResolvedElement>,
    /// Grouping and point count of instanced primitives drawn this pass.
    instanced: HashMap<PrimitiveId, (InstancedHitmap, usize)>,
}

impl PickSession {
    /// Creates a session with the given options.
    pub fn new(options: HitmapOptions) -> Self {
        Self {
            allocator: SequentialIdAllocator::new(&options),
            options,
            resolved: Vec::new(),
            instanced: HashMap::new(),
        }
    }

    /// Returns the session options.
    pub fn options(&self) -> &HitmapOptions {
        &self.options
    }

    /// Returns the allocator of the current pass.
    pub fn allocator(&self) -> &SequentialIdAllocator {
        &self.allocator
    }

    /// Returns the elements resolved so far.
    pub fn resolved(&self) -> &[ResolvedElement] {
        &self.resolved
    }

    /// Starts a new identification pass. Ids from the previous pass become
    /// invalid; resolved elements are kept.
    pub fn begin_pass(&mut self) {
        self.allocator.reset();
        self.instanced.clear();
    }

    /// Forgets resolved elements and starts a new pointer query.
    pub fn clear(&mut self) {
        self.resolved.clear();
        self.begin_pass();
    }

    /// Hit-maps primitives that pick as a whole.
    pub fn non_instanced<'a, T>(
        &mut self,
        props: impl Into<Props<'a, T>>,
    ) -> Result<HitmapOutput<T>>
    where
        T: Clone + 'a,
    {
        NonInstancedHitmap.get_hitmap(props, &mut self.allocator, &self.resolved)
    }

    /// Hit-maps primitives whose point groups pick individually.
    pub fn instanced<'a, T>(
        &mut self,
        hitmap: InstancedHitmap,
        props: impl Into<Props<'a, T>>,
    ) -> Result<HitmapOutput<T>>
    where
        T: Clone + 'a,
    {
        let props = props.into();
        for primitive in props.as_slice() {
            self.instanced
                .insert(primitive.id(), (hitmap, primitive.num_points()));
        }
        hitmap.get_hitmap(props, &mut self.allocator, &self.resolved)
    }

    /// Hit-maps primitives according to `mode`.
    pub fn hitmap<'a, T>(
        &mut self,
        mode: HitmapMode,
        props: impl Into<Props<'a, T>>,
    ) -> Result<HitmapOutput<T>>
    where
        T: Clone + 'a,
    {
        match mode {
            HitmapMode::NonInstanced => self.non_instanced(props),
            HitmapMode::Instanced {
                point_count_per_instance,
            } => self.instanced(InstancedHitmap::new(point_count_per_instance)?, props),
        }
    }

    /// Decodes a pixel read back from the pick buffer.
    ///
    /// Returns `None` for the background and for ids not issued in the
    /// current pass. Otherwise the hit is recorded as resolved, so the next
    /// pass excludes it, and returned.
    pub fn resolve_pixel(&mut self, pixel: [u8; 4]) -> Option<PickHit> {
        let color = HitColor::from_rgba8(pixel);
        if self.options.reserve_background && color.is_background() {
            return None;
        }
        let hit_id = color.id();
        let Some(assignment) = self.allocator.lookup(hit_id) else {
            log::debug!("pick: id {hit_id} was not issued in this pass");
            return None;
        };
        let object = assignment.subject;

        match assignment.instance_index {
            None => self.resolved.push(ResolvedElement::object(object)),
            Some(instance) => match self.instanced.get(&object) {
                Some(&(hitmap, num_points)) if num_points > 0 => {
                    let points = hitmap.instance_points(instance, num_points);
                    self.resolved
                        .extend(points.map(|index| ResolvedElement::element(object, index)));
                }
                _ => self
                    .resolved
                    .push(ResolvedElement::element(object, instance)),
            },
        }

        Some(PickHit {
            hit_id,
            object,
            instance_index: assignment.instance_index,
        })
    }

    /// Peels every layer under the pointer, front to back.
    ///
    /// `render` draws one identification pass through this session and
    /// returns the sampled pixel, or `None` if there is nothing to sample.
    /// Stops at the background or after `max_pick_depth` layers.
    pub fn pick_all<F>(&mut self, mut render: F) -> Result<Vec<PickHit>>
    where
        F: FnMut(&mut Self) -> Result<Option<[u8; 4]>>,
    {
        self.clear();
        let mut hits = Vec::new();
        while hits.len() < self.options.max_pick_depth {
            self.begin_pass();
            let Some(pixel) = render(self)? else {
                break;
            };
            match self.resolve_pixel(pixel) {
                Some(hit) => hits.push(hit),
                None => break,
            }
        }
        log::debug!("pick: resolved {} layers", hits.len());
        Ok(hits)
    }
}

impl Default for PickSession {
    fn default() -> Self {
        Self::new(HitmapOptions::default())
    }
}

//! Integration tests for hit-map transformers and pick sessions.

use hitmap::*;
use proptest::prelude::*;

/// Allocator handing out consecutive ids from `start`.
fn sequential_from(start: HitId) -> impl FnMut(&AllocationRequest) -> Vec<HitId> {
    let mut next = start;
    move |request: &AllocationRequest| {
        let count = HitId::try_from(request.count()).unwrap();
        let ids: Vec<HitId> = (next..next + count).collect();
        next += count;
        ids
    }
}

fn ids_of(hit: &HitPrimitive<u32>) -> Vec<HitId> {
    hit.colors
        .as_ref()
        .map(|colors| colors.iter().map(|c| c.id()).collect())
        .unwrap_or_default()
}

#[test]
fn test_mixed_batch_keeps_input_order() {
    let batch = vec![
        Primitive::new(0u32),
        Primitive::with_points(1u32, vec![Vec3::ZERO; 3]),
        Primitive::new(2u32),
        Primitive::with_points(3u32, vec![Vec3::ONE; 2]),
    ];
    let resolved = [
        ResolvedElement::object(batch[2].id()),
        ResolvedElement::object(PrimitiveId::next()),
    ];
    let mut allocator = sequential_from(1);
    let hits = NonInstancedHitmap
        .get_hitmap(&batch, &mut allocator, &resolved)
        .unwrap()
        .into_vec();

    let kept: Vec<_> = hits.iter().map(|h| h.data).collect();
    assert_eq!(kept, vec![0, 1, 3]);
    let colors: Vec<_> = hits.iter().map(|h| h.color.unwrap().id()).collect();
    assert_eq!(colors, vec![1, 2, 3]);
    assert_eq!(ids_of(&hits[1]), vec![2, 2, 2]);
}

#[test]
fn test_instanced_batch_with_partial_resolution() {
    let batch = vec![
        Primitive::with_points(0u32, vec![Vec3::ZERO; 6]),
        Primitive::new(1u32),
        Primitive::with_points(2u32, vec![Vec3::X; 5]),
    ];
    let resolved = [
        ResolvedElement::element(batch[0].id(), 2),
        ResolvedElement::element(batch[1].id(), 0),
        ResolvedElement::element(batch[2].id(), 0),
        ResolvedElement::element(batch[2].id(), 4),
    ];
    let mut allocator = sequential_from(10);
    let hits = InstancedHitmap::new(2)
        .unwrap()
        .get_hitmap(&batch, &mut allocator, &resolved)
        .unwrap()
        .into_vec();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].data, 0);
    assert_eq!(ids_of(&hits[0]), vec![10, 10, 11, 12, 12]);
    assert_eq!(hits[0].points.as_ref().unwrap().len(), 5);
    // batch[1] took id 13 and was dropped; batch[2] got 14 and 15.
    assert_eq!(hits[1].data, 2);
    assert_eq!(ids_of(&hits[1]), vec![14, 15, 15]);
}

#[test]
fn test_scalar_symmetry_for_both_transformers() {
    let prim = Primitive::with_points(9u32, vec![Vec3::ZERO; 2]);
    let mut allocator = SequentialIdAllocator::default();

    let single = NonInstancedHitmap
        .get_hitmap(&prim, &mut allocator, &[])
        .unwrap();
    assert!(single.is_single());
    assert_eq!(single.len(), 1);

    let instanced = InstancedHitmap::per_point()
        .get_hitmap(&prim, &mut allocator, &[])
        .unwrap();
    assert!(instanced.is_single());
    assert_eq!(ids_of(&instanced.into_single().unwrap()), vec![2, 3]);
}

#[test]
fn test_decoded_pixel_maps_back_to_object() {
    let mut session = PickSession::default();
    let cloud = Primitive::with_points(0u32, vec![Vec3::ZERO; 4]);
    let cube = Primitive::new(1u32);

    session.non_instanced(&cube).unwrap();
    let output = session
        .hitmap(
            HitmapMode::Instanced {
                point_count_per_instance: 2,
            },
            &cloud,
        )
        .unwrap()
        .into_single()
        .unwrap();

    let sampled = output.colors.as_ref().unwrap()[3];
    let pixel = HitColor::from_rgba_f32(sampled.to_rgba_f32()).to_rgba8();
    let hit = session.resolve_pixel(pixel).unwrap();
    assert_eq!(hit.object, cloud.id());
    assert_eq!(hit.instance_index, Some(1));
    assert_eq!(
        session.allocator().lookup(hit.hit_id).unwrap().subject,
        cloud.id()
    );
}

#[test]
fn test_exhausted_budget_fails_the_pass() {
    let options = HitmapOptions {
        max_ids_per_pass: 3,
        ..HitmapOptions::default()
    };
    let mut session = PickSession::new(options);
    let cloud = Primitive::with_points(0u32, vec![Vec3::ZERO; 4]);
    let err = session
        .instanced(InstancedHitmap::per_point(), &cloud)
        .unwrap_err();
    assert!(matches!(
        err,
        HitmapError::IdSpaceExhausted {
            requested: 4,
            remaining: 3
        }
    ));
}

#[test]
fn test_init_from_file() {
    let path = std::env::temp_dir().join(format!("hitmap-options-{}.json", std::process::id()));
    let options = HitmapOptions {
        reserve_background: true,
        max_ids_per_pass: 64,
        max_pick_depth: 2,
    };
    options.save(&path).unwrap();

    let session = init_from_file(&path).unwrap();
    assert_eq!(session.options(), &options);
    assert_eq!(session.allocator().remaining(), 64);

    std::fs::remove_file(&path).unwrap();
    assert!(matches!(
        init_from_file(&path),
        Err(HitmapError::IoError(_))
    ));
}

#[test]
fn test_options_reject_bad_json() {
    let value = serde_json::json!({ "max_pick_depth": "deep" });
    assert!(HitmapOptions::from_json(&value.to_string()).is_err());
}

fn batch_strategy() -> impl Strategy<Value = (Vec<Option<usize>>, Vec<bool>)> {
    prop::collection::vec(prop::option::of(0usize..8), 0..12).prop_flat_map(|shapes| {
        let len = shapes.len();
        (Just(shapes), prop::collection::vec(any::<bool>(), len))
    })
}

fn build_batch(shapes: &[Option<usize>]) -> Vec<Primitive<u32>> {
    shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            let data = u32::try_from(i).unwrap();
            match shape {
                Some(n) => Primitive::with_points(data, vec![Vec3::ZERO; *n]),
                None => Primitive::new(data),
            }
        })
        .collect()
}

fn is_subsequence(output: &[u32], len: usize) -> bool {
    output.windows(2).all(|w| w[0] < w[1]) && output.iter().all(|&i| (i as usize) < len)
}

proptest! {
    #[test]
    fn prop_non_instanced_filters_without_reordering((shapes, flags) in batch_strategy()) {
        let batch = build_batch(&shapes);
        let resolved: Vec<_> = batch
            .iter()
            .zip(&flags)
            .filter(|(_, flag)| **flag)
            .map(|(p, _)| ResolvedElement::object(p.id()))
            .collect();
        let mut allocator = SequentialIdAllocator::default();
        let hits = NonInstancedHitmap
            .get_hitmap(&batch, &mut allocator, &resolved)
            .unwrap()
            .into_vec();

        let kept: Vec<u32> = hits.iter().map(|h| h.data).collect();
        let expected: Vec<u32> = batch
            .iter()
            .zip(&flags)
            .filter(|(_, flag)| !**flag)
            .map(|(p, _)| p.data)
            .collect();
        prop_assert_eq!(&kept, &expected);
        prop_assert!(is_subsequence(&kept, batch.len()));
        prop_assert_eq!(allocator.len(), expected.len());
    }

    #[test]
    fn prop_instanced_colors_stay_aligned(
        (shapes, flags) in batch_strategy(),
        group in 1usize..4
    ) {
        let batch = build_batch(&shapes);
        // Resolve point 0 of every flagged primitive.
        let resolved: Vec<_> = batch
            .iter()
            .zip(&flags)
            .filter(|(_, flag)| **flag)
            .map(|(p, _)| ResolvedElement::element(p.id(), 0))
            .collect();
        let mut allocator = SequentialIdAllocator::default();
        let hitmap = InstancedHitmap::new(group).unwrap();
        let hits = hitmap
            .get_hitmap(&batch, &mut allocator, &resolved)
            .unwrap()
            .into_vec();

        let kept: Vec<u32> = hits.iter().map(|h| h.data).collect();
        prop_assert!(is_subsequence(&kept, batch.len()));
        for hit in &hits {
            let source = &batch[hit.data as usize];
            let flagged = flags[hit.data as usize];
            match source.points() {
                Some(points) if !points.is_empty() => {
                    let remaining = hit.points.as_ref().unwrap().len();
                    prop_assert_eq!(remaining, points.len() - usize::from(flagged));
                    prop_assert_eq!(hit.colors.as_ref().unwrap().len(), remaining);
                }
                _ => {
                    prop_assert!(!flagged);
                    prop_assert!(hit.color.is_some());
                }
            }
        }
        let requested: usize = batch
            .iter()
            .map(|p| hitmap.instance_count(p.num_points()))
            .sum();
        prop_assert_eq!(allocator.len(), requested);
    }
}

//! Integration tests for frustum culling
//!
//! Builds frustums from real projection matrices and culls small scenes of
//! boxes and spheres, the way a renderer's visibility pass would.
//!
//! Run with: cargo test --test culling_integration_tests

use galaxy_3d_geometry::galaxy3d::camera::{Frustum, FrustumPlane};
use galaxy_3d_geometry::galaxy3d::glam::{Mat4, Vec3};
use galaxy_3d_geometry::galaxy3d::intersect::{self, Intersect, PlaneResult};
use galaxy_3d_geometry::galaxy3d::volume::{BoundingBox, BoundingSphere, BoundingVolume};

fn perspective_view_projection(eye: Vec3, target: Vec3) -> Mat4 {
    let projection = Mat4::perspective_rh(
        std::f32::consts::FRAC_PI_4, // 45° FOV
        16.0 / 9.0,                  // aspect ratio
        0.1,                         // near
        100.0,                       // far
    );
    let view = Mat4::look_at_rh(eye, target, Vec3::Y);
    projection * view
}

fn orthographic_view_projection() -> Mat4 {
    let projection = Mat4::orthographic_rh(
        -10.0, 10.0, // left, right
        -10.0, 10.0, // bottom, top
        0.1, 100.0,  // near, far
    );
    let view = Mat4::look_at_rh(Vec3::new(0.0, 20.0, 0.0), Vec3::ZERO, Vec3::Z);
    projection * view
}

/// A row of unit boxes along X, one every 10 units, plus a sphere per box.
fn scene() -> Vec<BoundingVolume> {
    let mut volumes = Vec::new();
    for i in -10..=10 {
        let center = Vec3::new(i as f32 * 10.0, 0.0, 0.0);
        volumes.push(BoundingBox::new(center - Vec3::splat(0.5), center + Vec3::splat(0.5)).into());
        volumes.push(BoundingSphere::new(center + Vec3::new(0.0, 0.0, -30.0), 0.5).into());
    }
    volumes
}

// ============================================================================
// FOCAL POINT ROUND TRIP
// ============================================================================

#[test]
fn test_integration_focus_inside_perspective_frustum() {
    let frustum = Frustum::from_matrix(&perspective_view_projection(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO));

    assert_eq!(frustum.test_point(Vec3::ZERO), PlaneResult::Inside);
    for plane in frustum.planes() {
        assert_eq!(intersect::test(plane, &Vec3::ZERO), PlaneResult::Inside);
    }
}

#[test]
fn test_integration_focus_inside_orthographic_frustum() {
    let frustum = Frustum::from_matrix(&orthographic_view_projection());

    assert_eq!(frustum.test_point(Vec3::ZERO), PlaneResult::Inside);
    for plane in frustum.planes() {
        assert_eq!(intersect::test(plane, &Vec3::ZERO), PlaneResult::Inside);
    }
}

#[test]
fn test_integration_orthographic_planes_face_inward() {
    // Looking down -Y from y = 20: near plane at y = 19.9, far at y = -80
    let frustum = Frustum::from_matrix(&orthographic_view_projection());

    let near = frustum.plane(FrustumPlane::Near);
    let far = frustum.plane(FrustumPlane::Far);
    assert!((near.normal() - -Vec3::Y).length() < 1e-4);
    assert!((far.normal() - Vec3::Y).length() < 1e-4);
    assert!((near.distance(Vec3::ZERO) - 19.9).abs() < 1e-3);
    assert!((far.distance(Vec3::ZERO) - 80.0).abs() < 1e-3);
}

// ============================================================================
// SCENE CULLING
// ============================================================================

#[test]
fn test_integration_cull_scene_from_perspective() {
    // Camera at z = 40 looking down -Z: 45° vertical FOV, 16:9
    let frustum = Frustum::from_matrix(&perspective_view_projection(Vec3::new(0.0, 0.0, 40.0), Vec3::ZERO));
    let volumes = scene();

    let visible: Vec<&BoundingVolume> = volumes.iter().filter(|volume| frustum.is_visible(**volume)).collect();

    // Origin box and its sphere are dead ahead
    assert!(visible.iter().any(|volume| volume.center() == Vec3::ZERO));
    assert!(visible.iter().any(|volume| volume.center() == Vec3::new(0.0, 0.0, -30.0)));
    // x = ±100 is far outside the horizontal half-angle at these depths
    assert!(visible.iter().all(|volume| volume.center().x.abs() < 100.0));
    assert!(visible.len() < volumes.len());
}

#[test]
fn test_integration_cull_results_are_consistent() {
    let frustum = Frustum::from_matrix(&perspective_view_projection(Vec3::new(0.0, 0.0, 40.0), Vec3::ZERO));

    for volume in scene() {
        let result = frustum.test(volume);
        let outside_any = frustum.planes().iter().any(|plane| plane.test(&volume) == PlaneResult::Outside);
        let inside_all = frustum.planes().iter().all(|plane| plane.test(&volume) == PlaneResult::Inside);

        match result {
            PlaneResult::Outside => assert!(outside_any),
            PlaneResult::Inside => assert!(inside_all),
            PlaneResult::Intersects => assert!(!outside_any && !inside_all),
        }
    }
}

#[test]
fn test_integration_merged_volume_straddles_frustum() {
    let frustum = Frustum::from_matrix(&perspective_view_projection(Vec3::new(0.0, 0.0, 40.0), Vec3::ZERO));

    let boxes: Vec<BoundingBox> = scene()
        .into_iter()
        .filter_map(|volume| match volume {
            BoundingVolume::Box(bounds) => Some(bounds),
            BoundingVolume::Sphere(_) => None,
        })
        .collect();
    let merged = BoundingBox::compute_containing_box_of(boxes.iter().copied());

    // The row of boxes is wider than the view: visible in part only
    assert_eq!(frustum.test(merged), PlaneResult::Intersects);
    assert!(boxes.iter().any(|bounds| frustum.test(*bounds) == PlaneResult::Outside));
    assert!(boxes.iter().any(|bounds| frustum.test(*bounds) == PlaneResult::Inside));
}

#[test]
fn test_integration_world_space_volume() {
    let frustum = Frustum::from_matrix(&perspective_view_projection(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO));
    let local = BoundingVolume::from(BoundingBox::new(Vec3::splat(-0.5), Vec3::splat(0.5)));

    let in_view = local.transformed(&Mat4::from_translation(Vec3::new(0.0, 0.0, -2.0)));
    let behind = local.transformed(&Mat4::from_translation(Vec3::new(0.0, 0.0, 20.0)));

    assert_eq!(frustum.test(in_view), PlaneResult::Inside);
    assert_eq!(frustum.test(behind), PlaneResult::Outside);
}

// ============================================================================
// CONCURRENCY
// ============================================================================

#[test]
fn test_integration_parallel_culling_matches_serial() {
    let frustum = Frustum::from_matrix(&perspective_view_projection(Vec3::new(0.0, 0.0, 40.0), Vec3::ZERO));
    let volumes = scene();
    let serial: Vec<PlaneResult> = volumes.iter().map(|volume| frustum.test(*volume)).collect();

    let frustum = &frustum;
    let parallel: Vec<PlaneResult> = std::thread::scope(|scope| {
        let handles: Vec<_> = volumes
            .chunks(8)
            .map(|chunk| scope.spawn(move || chunk.iter().map(|volume| frustum.test(*volume)).collect::<Vec<_>>()))
            .collect();
        handles.into_iter().flat_map(|handle| handle.join().unwrap()).collect()
    });

    assert_eq!(parallel, serial);
}

use glam::{Mat4, Vec3};
use super::*;

// ============================================================================
// Construction and setters
// ============================================================================

#[test]
fn test_new_takes_absolute_radius() {
    let sphere = BoundingSphere::new(Vec3::ONE, -3.0);

    assert_eq!(sphere.center(), Vec3::ONE);
    assert_eq!(sphere.radius(), 3.0);
}

#[test]
fn test_setters_keep_radius_non_negative() {
    let mut sphere = BoundingSphere::default();

    sphere.set(Vec3::new(1.0, 2.0, 3.0), -2.0);
    assert_eq!(sphere.radius(), 2.0);

    sphere.set_radius(-7.5);
    assert_eq!(sphere.radius(), 7.5);

    sphere.set_center(Vec3::Z);
    assert_eq!(sphere.center(), Vec3::Z);
    assert_eq!(sphere.radius(), 7.5);
}

#[test]
fn test_is_empty() {
    assert!(BoundingSphere::default().is_empty());
    assert!(BoundingSphere::new(Vec3::ONE, 1e-9).is_empty());
    assert!(!BoundingSphere::new(Vec3::ONE, 0.01).is_empty());
}

#[test]
fn test_from_box_reaches_corners() {
    let bounds = BoundingBox::new(Vec3::ZERO, Vec3::new(2.0, 2.0, 2.0));
    let sphere = BoundingSphere::from_box(&bounds);

    assert_eq!(sphere.center(), Vec3::ONE);
    assert!((sphere.radius() - 3.0_f32.sqrt()).abs() < 1e-6);
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_contains_boundary_inclusive() {
    let sphere = BoundingSphere::new(Vec3::ZERO, 2.0);

    assert!(sphere.contains(Vec3::ZERO));
    assert!(sphere.contains(Vec3::new(0.0, 2.0, 0.0)));
    assert!(!sphere.contains(Vec3::new(1.5, 1.5, 0.0)));
}

#[test]
fn test_bounding_box() {
    let sphere = BoundingSphere::new(Vec3::new(1.0, 0.0, -1.0), 2.0);
    let bounds = sphere.bounding_box();

    assert_eq!(bounds.minimum(), Vec3::new(-1.0, -2.0, -3.0));
    assert_eq!(bounds.maximum(), Vec3::new(3.0, 2.0, 1.0));
}

#[test]
fn test_transformed_scales_by_largest_axis() {
    let matrix = Mat4::from_translation(Vec3::new(0.0, 5.0, 0.0))
        * Mat4::from_scale(Vec3::new(3.0, 1.0, 2.0));
    let sphere = BoundingSphere::new(Vec3::X, 1.0).transformed(&matrix);

    assert!((sphere.center() - Vec3::new(3.0, 5.0, 0.0)).length() < 1e-6);
    assert!((sphere.radius() - 3.0).abs() < 1e-6);
}

// ============================================================================
// compute_containing_sphere
// ============================================================================

#[test]
fn test_containing_sphere_returns_container() {
    let big = BoundingSphere::new(Vec3::ZERO, 5.0);
    let small = BoundingSphere::new(Vec3::new(1.0, 0.0, 0.0), 1.0);

    assert_eq!(BoundingSphere::compute_containing_sphere(&big, &small), big);
    assert_eq!(BoundingSphere::compute_containing_sphere(&small, &big), big);
    assert_eq!(BoundingSphere::compute_containing_sphere(&big, &big), big);
}

#[test]
fn test_containing_sphere_disjoint() {
    let a = BoundingSphere::new(Vec3::ZERO, 1.0);
    let b = BoundingSphere::new(Vec3::new(10.0, 0.0, 0.0), 1.0);
    let merged = BoundingSphere::compute_containing_sphere(&a, &b);

    assert!((merged.center() - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-5);
    assert!((merged.radius() - 6.0).abs() < 1e-5);
}

#[test]
fn test_containing_sphere_overlapping_unequal() {
    let a = BoundingSphere::new(Vec3::ZERO, 2.0);
    let b = BoundingSphere::new(Vec3::new(0.0, 3.0, 0.0), 1.0);
    let merged = BoundingSphere::compute_containing_sphere(&a, &b);

    // Spans y = -2 .. 4
    assert!((merged.center() - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-5);
    assert!((merged.radius() - 3.0).abs() < 1e-5);
}

#[test]
fn test_containing_sphere_of_sequence() {
    let spheres = [
        BoundingSphere::new(Vec3::ZERO, 1.0),
        BoundingSphere::new(Vec3::new(4.0, 0.0, 0.0), 1.0),
        BoundingSphere::new(Vec3::new(0.0, 4.0, 0.0), 0.5),
    ];
    let merged = BoundingSphere::compute_containing_sphere_of(spheres);
    let grown = BoundingSphere::new(merged.center(), merged.radius() + 1e-4);

    for sphere in spheres {
        for direction in [Vec3::X, -Vec3::X, Vec3::Y, -Vec3::Y, Vec3::Z, -Vec3::Z] {
            assert!(grown.contains(sphere.center() + direction * sphere.radius()));
        }
    }
}

#[test]
fn test_containing_sphere_of_empty_and_single() {
    assert_eq!(
        BoundingSphere::compute_containing_sphere_of(Vec::<BoundingSphere>::new()),
        BoundingSphere::default()
    );

    let single = BoundingSphere::new(Vec3::ONE, 2.0);
    assert_eq!(BoundingSphere::compute_containing_sphere_of([single]), single);
}

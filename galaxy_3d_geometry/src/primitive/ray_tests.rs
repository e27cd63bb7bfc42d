use glam::Vec3;
use crate::error::Error;
use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_default_ray_looks_down_z() {
    let ray = Ray::default();

    assert_eq!(ray.origin(), Vec3::ZERO);
    assert_eq!(ray.direction(), Vec3::Z);
}

#[test]
fn test_new_normalizes_direction() {
    let ray = Ray::new(Vec3::ONE, Vec3::new(0.0, 0.0, -8.0));

    assert_eq!(ray.origin(), Vec3::ONE);
    assert_eq!(ray.direction(), Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn test_try_new_rejects_zero_direction() {
    let result = Ray::try_new(Vec3::ZERO, Vec3::ZERO);
    assert!(matches!(result, Err(Error::DegenerateGeometry(_))));

    assert!(Ray::try_new(Vec3::ZERO, Vec3::X).is_ok());
}

// ============================================================================
// Setters
// ============================================================================

#[test]
fn test_set_direction_renormalizes() {
    let mut ray = Ray::default();
    ray.set_direction(Vec3::new(3.0, 4.0, 0.0));

    assert!((ray.direction().length() - 1.0).abs() < 1e-6);
    assert!((ray.direction() - Vec3::new(0.6, 0.8, 0.0)).length() < 1e-6);
}

#[test]
fn test_set_origin() {
    let mut ray = Ray::default();
    ray.set_origin(Vec3::new(1.0, 2.0, 3.0));

    assert_eq!(ray.origin(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(ray.direction(), Vec3::Z);
}

// ============================================================================
// point_at
// ============================================================================

#[test]
fn test_point_at_zero_is_origin() {
    let ray = Ray::new(Vec3::new(4.0, -2.0, 1.0), Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(ray.point_at(0.0), ray.origin());
}

#[test]
fn test_point_at_lies_on_ray() {
    let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 2.0));

    for i in 0..10 {
        let t = i as f32 * 0.75;
        let offset = ray.point_at(t) - ray.origin();
        // Collinear with the direction and at distance t
        assert!(offset.cross(ray.direction()).length() < 1e-5);
        assert!((offset.length() - t).abs() < 1e-5);
    }
}

#[test]
fn test_mul_operators_match_point_at() {
    let ray = Ray::new(Vec3::ZERO, Vec3::Y);

    assert_eq!(ray * 3.0, Vec3::new(0.0, 3.0, 0.0));
    assert_eq!(3.0 * ray, ray.point_at(3.0));
}

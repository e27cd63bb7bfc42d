/// Bounding sphere — center plus a non-negative radius.
///
/// Every write of the radius stores its absolute value, so intersection
/// tests never see a negative radius.

use glam::{Mat4, Vec3};
use crate::intersect::{self, VolumeResult};
use crate::primitive::Line;
use super::bounding_box::BoundingBox;

/// Radius at or below which a sphere counts as empty.
pub const EMPTY_RADIUS_EPSILON: f32 = f32::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingSphere {
    center: Vec3,
    radius: f32,
}

impl BoundingSphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius: radius.abs() }
    }

    /// Smallest sphere around a box: centered on it, reaching its corners.
    pub fn from_box(bounds: &BoundingBox) -> Self {
        Self { center: bounds.center(), radius: bounds.extents().length() }
    }

    pub fn set(&mut self, center: Vec3, radius: f32) {
        self.center = center;
        self.radius = radius.abs();
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.abs();
    }

    pub fn is_empty(&self) -> bool {
        self.radius <= EMPTY_RADIUS_EPSILON
    }

    /// Squared-distance point test (no square root).
    pub fn contains(&self, point: Vec3) -> bool {
        (self.center - point).length_squared() <= self.radius * self.radius
    }

    /// Axis-aligned box around the sphere.
    pub fn bounding_box(&self) -> BoundingBox {
        let extent = Vec3::splat(self.radius);
        BoundingBox::new(self.center - extent, self.center + extent)
    }

    /// Transform the sphere by an affine matrix.
    ///
    /// The center is transformed as a point; the radius is scaled by the
    /// largest axis scale so non-uniform scaling still yields an enclosing
    /// sphere.
    pub fn transformed(&self, matrix: &Mat4) -> BoundingSphere {
        let max_scale = (0..3)
            .map(|i| matrix.col(i).truncate().length())
            .fold(0.0_f32, f32::max);

        BoundingSphere {
            center: matrix.transform_point3(self.center),
            radius: self.radius * max_scale,
        }
    }

    /// Sphere enclosing both `a` and `b`.
    ///
    /// If one sphere already contains the other it is returned as-is.
    /// Otherwise the segment between the centers is stretched outward by each
    /// radius and the result spans that segment.
    pub fn compute_containing_sphere(a: &BoundingSphere, b: &BoundingSphere) -> BoundingSphere {
        match intersect::test(a, b) {
            VolumeResult::Contains | VolumeResult::Identical => return *a,
            VolumeResult::Contained => return *b,
            VolumeResult::Intersect | VolumeResult::Disjoint => {}
        }

        let mut line = Line::new(a.center, b.center);
        line.extend(a.radius, b.radius);
        BoundingSphere::new(line.mid_point(), line.length() * 0.5)
    }

    /// Left-fold `compute_containing_sphere` over a sequence.
    ///
    /// A single sphere is returned unchanged; an empty sequence yields the
    /// default sphere (origin, radius 0).
    pub fn compute_containing_sphere_of<I>(spheres: I) -> BoundingSphere
    where
        I: IntoIterator<Item = BoundingSphere>,
    {
        let mut iter = spheres.into_iter();
        match iter.next() {
            Some(first) => iter.fold(first, |bounds, next| Self::compute_containing_sphere(&bounds, &next)),
            None => BoundingSphere::default(),
        }
    }
}

#[cfg(test)]
#[path = "bounding_sphere_tests.rs"]
mod tests;

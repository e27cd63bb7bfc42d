/// Closed set of bounding volumes accepted by frustum culling and plane
/// classification.

use glam::{Mat4, Vec3};
use super::bounding_box::BoundingBox;
use super::bounding_sphere::BoundingSphere;

/// A box or a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundingVolume {
    Box(BoundingBox),
    Sphere(BoundingSphere),
}

impl BoundingVolume {
    /// Closed point-containment test for either shape.
    pub fn contains(&self, point: Vec3) -> bool {
        match self {
            BoundingVolume::Box(bounds) => bounds.contains(point),
            BoundingVolume::Sphere(sphere) => sphere.contains(point),
        }
    }

    pub fn center(&self) -> Vec3 {
        match self {
            BoundingVolume::Box(bounds) => bounds.center(),
            BoundingVolume::Sphere(sphere) => sphere.center(),
        }
    }

    /// Transform into world space (see `BoundingBox::transformed` and
    /// `BoundingSphere::transformed`).
    pub fn transformed(&self, matrix: &Mat4) -> BoundingVolume {
        match self {
            BoundingVolume::Box(bounds) => BoundingVolume::Box(bounds.transformed(matrix)),
            BoundingVolume::Sphere(sphere) => BoundingVolume::Sphere(sphere.transformed(matrix)),
        }
    }

    /// Merge two volumes of the same kind. Mixed kinds return `None`.
    pub fn compute_containing(a: &BoundingVolume, b: &BoundingVolume) -> Option<BoundingVolume> {
        match (a, b) {
            (BoundingVolume::Box(a), BoundingVolume::Box(b)) => {
                Some(BoundingVolume::Box(BoundingBox::compute_containing_box(a, b)))
            }
            (BoundingVolume::Sphere(a), BoundingVolume::Sphere(b)) => {
                Some(BoundingVolume::Sphere(BoundingSphere::compute_containing_sphere(a, b)))
            }
            _ => None,
        }
    }
}

impl From<BoundingBox> for BoundingVolume {
    fn from(bounds: BoundingBox) -> Self {
        BoundingVolume::Box(bounds)
    }
}

impl From<BoundingSphere> for BoundingVolume {
    fn from(sphere: BoundingSphere) -> Self {
        BoundingVolume::Sphere(sphere)
    }
}

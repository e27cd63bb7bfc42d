/// Plane-side classification of points, spheres, and boxes.

use glam::Vec3;
use crate::primitive::Plane;
use crate::volume::{BoundingBox, BoundingSphere, BoundingVolume};
use super::{Intersect, PlaneResult};

impl Intersect<Vec3> for Plane {
    type Output = PlaneResult;

    fn test(&self, point: &Vec3) -> PlaneResult {
        let distance = self.distance(*point);
        if distance > 0.0 {
            PlaneResult::Inside
        } else if distance < 0.0 {
            PlaneResult::Outside
        } else {
            PlaneResult::Intersects
        }
    }
}

impl Intersect<BoundingSphere> for Plane {
    type Output = PlaneResult;

    fn test(&self, sphere: &BoundingSphere) -> PlaneResult {
        let distance = self.distance(sphere.center());
        let radius = sphere.radius();
        if distance > radius {
            PlaneResult::Inside
        } else if distance < -radius {
            PlaneResult::Outside
        } else {
            PlaneResult::Intersects
        }
    }
}

impl Intersect<BoundingBox> for Plane {
    type Output = PlaneResult;

    /// A corner exactly on the plane counts as inside, so a box touching
    /// the plane is never reported as outside. A degenerate plane has every
    /// point on it and reports `Intersects`.
    fn test(&self, bounds: &BoundingBox) -> PlaneResult {
        if self.is_degenerate() {
            return PlaneResult::Intersects;
        }

        let corners = bounds.get_all_corners();
        let outside_count = corners
            .iter()
            .filter(|corner| self.distance(**corner) < 0.0)
            .count();

        match outside_count {
            0 => PlaneResult::Inside,
            n if n == corners.len() => PlaneResult::Outside,
            _ => PlaneResult::Intersects,
        }
    }
}

impl Intersect<BoundingVolume> for Plane {
    type Output = PlaneResult;

    fn test(&self, volume: &BoundingVolume) -> PlaneResult {
        match volume {
            BoundingVolume::Box(bounds) => self.test(bounds),
            BoundingVolume::Sphere(sphere) => self.test(sphere),
        }
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;

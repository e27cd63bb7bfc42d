/// Five-way classification between bounding spheres and boxes.
///
/// Box comparisons are strict and component-wise on all three axes: boxes
/// that only share a face are disjoint, and a box flush against its
/// container's face is intersecting, not contained.

use crate::volume::{BoundingBox, BoundingSphere};
use super::{Intersect, VolumeResult};

impl Intersect<BoundingSphere> for BoundingSphere {
    type Output = VolumeResult;

    fn test(&self, other: &BoundingSphere) -> VolumeResult {
        if self == other {
            return VolumeResult::Identical;
        }

        let distance = (other.center() - self.center()).length();
        let radius_a = self.radius();
        let radius_b = other.radius();

        if distance > radius_a + radius_b {
            VolumeResult::Disjoint
        } else if distance + radius_b <= radius_a {
            VolumeResult::Contains
        } else if distance + radius_a <= radius_b {
            VolumeResult::Contained
        } else {
            VolumeResult::Intersect
        }
    }
}

impl Intersect<BoundingBox> for BoundingSphere {
    type Output = VolumeResult;

    fn test(&self, bounds: &BoundingBox) -> VolumeResult {
        let center = self.center();
        let radius = self.radius();
        let radius_squared = radius * radius;
        let box_min = bounds.minimum();
        let box_max = bounds.maximum();

        // Axes where the center is inside the box's range contribute nothing
        let closest = center.clamp(box_min, box_max);
        if (center - closest).length_squared() > radius_squared {
            return VolumeResult::Disjoint;
        }

        let sphere_bounds = self.bounding_box();
        if box_min.cmple(sphere_bounds.minimum()).all() && sphere_bounds.maximum().cmple(box_max).all() {
            return VolumeResult::Contained;
        }

        let all_corners_inside = bounds
            .get_all_corners()
            .iter()
            .all(|corner| (*corner - center).length_squared() <= radius_squared);

        if all_corners_inside {
            VolumeResult::Contains
        } else {
            VolumeResult::Intersect
        }
    }
}

impl Intersect<BoundingSphere> for BoundingBox {
    type Output = VolumeResult;

    fn test(&self, sphere: &BoundingSphere) -> VolumeResult {
        sphere.test(self).inverse()
    }
}

impl Intersect<BoundingBox> for BoundingBox {
    type Output = VolumeResult;

    fn test(&self, other: &BoundingBox) -> VolumeResult {
        if self == other {
            return VolumeResult::Identical;
        }

        let (min_a, max_a) = (self.minimum(), self.maximum());
        let (min_b, max_b) = (other.minimum(), other.maximum());

        if !(min_a.cmplt(max_b).all() && min_b.cmplt(max_a).all()) {
            return VolumeResult::Disjoint;
        }

        if min_a.cmplt(min_b).all() && max_b.cmplt(max_a).all() {
            VolumeResult::Contains
        } else if min_b.cmplt(min_a).all() && max_a.cmplt(max_b).all() {
            VolumeResult::Contained
        } else {
            VolumeResult::Intersect
        }
    }
}

#[cfg(test)]
#[path = "volume_tests.rs"]
mod tests;

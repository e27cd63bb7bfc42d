/// Ray and line tests against planes, spheres, and boxes.

use glam::Vec3;
use crate::primitive::{Line, Plane, Ray};
use crate::volume::{BoundingBox, BoundingSphere};
use super::{Intersect, LinearResult, PARALLEL_EPSILON};

/// Smallest non-negative root of `a t² + b t + c = 0`.
///
/// Uses the cancellation-free form `q = -½ (b + sign(b) √(b² - 4ac))`
/// with roots `q / a` and `c / q`. `None` if both roots are negative or the
/// discriminant is negative. `a` must be positive.
fn nearest_non_negative_root(a: f32, b: f32, c: f32) -> Option<f32> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let q = if b < 0.0 { -0.5 * (b - root) } else { -0.5 * (b + root) };
    if q == 0.0 {
        // b == 0 and c == 0: the start point sits on the surface
        return Some(0.0);
    }

    let (r0, r1) = (q / a, c / q);
    let (near, far) = if r0 <= r1 { (r0, r1) } else { (r1, r0) };

    if far < 0.0 {
        None
    } else if near >= 0.0 {
        Some(near)
    } else {
        Some(far)
    }
}

/// Slab test for a ray starting at `origin` along `direction`.
///
/// An axis produces a candidate only when the origin is outside that slab
/// and the direction points back toward it. The candidate is kept if the
/// hit point lies within the box on the other two axes.
fn ray_box_distance(origin: Vec3, direction: Vec3, bounds: &BoundingBox) -> Option<f32> {
    if bounds.contains(origin) {
        return Some(0.0);
    }

    let minimum = bounds.minimum();
    let maximum = bounds.maximum();
    let mut nearest: Option<f32> = None;

    for axis in 0..3 {
        let t = if origin[axis] < minimum[axis] && direction[axis] > 0.0 {
            (minimum[axis] - origin[axis]) / direction[axis]
        } else if origin[axis] > maximum[axis] && direction[axis] < 0.0 {
            (maximum[axis] - origin[axis]) / direction[axis]
        } else {
            continue;
        };

        let hit = origin + direction * t;
        let within = [(axis + 1) % 3, (axis + 2) % 3]
            .iter()
            .all(|&other| minimum[other] <= hit[other] && hit[other] <= maximum[other]);

        if within && nearest.map_or(true, |best| t < best) {
            nearest = Some(t);
        }
    }

    nearest
}

// ===== RAY =====

impl Intersect<Plane> for Ray {
    type Output = LinearResult;

    fn test(&self, plane: &Plane) -> LinearResult {
        let denom = plane.dot(self.direction());
        if denom.abs() < PARALLEL_EPSILON {
            return LinearResult::MISS;
        }

        let t = -(plane.distance(self.origin()) / denom);
        LinearResult::new(t >= 0.0, t)
    }
}

impl Intersect<BoundingSphere> for Ray {
    type Output = LinearResult;

    fn test(&self, sphere: &BoundingSphere) -> LinearResult {
        let origin = self.origin() - sphere.center();
        let radius_squared = sphere.radius() * sphere.radius();

        if origin.length_squared() <= radius_squared {
            return LinearResult::hit(0.0);
        }

        // Unit direction, so the leading coefficient is 1
        let b = 2.0 * origin.dot(self.direction());
        let c = origin.length_squared() - radius_squared;

        match nearest_non_negative_root(1.0, b, c) {
            Some(t) => LinearResult::hit(t),
            None => LinearResult::MISS,
        }
    }
}

impl Intersect<BoundingBox> for Ray {
    type Output = LinearResult;

    fn test(&self, bounds: &BoundingBox) -> LinearResult {
        match ray_box_distance(self.origin(), self.direction(), bounds) {
            Some(t) => LinearResult::hit(t),
            None => LinearResult::MISS,
        }
    }
}

// ===== LINE =====

impl Intersect<Plane> for Line {
    type Output = LinearResult;

    fn test(&self, plane: &Plane) -> LinearResult {
        let denom = plane.dot(self.vector());
        if denom.abs() < PARALLEL_EPSILON {
            return LinearResult::MISS;
        }

        let t = -(plane.distance(self.start) / denom);
        LinearResult::new((0.0..=1.0).contains(&t), t)
    }
}

impl Intersect<BoundingSphere> for Line {
    type Output = LinearResult;

    fn test(&self, sphere: &BoundingSphere) -> LinearResult {
        let direction = self.vector();
        let origin = self.start - sphere.center();
        let radius_squared = sphere.radius() * sphere.radius();

        if origin.length_squared() <= radius_squared {
            return LinearResult::hit(0.0);
        }

        let a = direction.length_squared();
        if a <= 0.0 {
            return LinearResult::MISS;
        }

        // The infinite line already passes too far from the center
        if direction.cross(origin).length_squared() / a > radius_squared {
            return LinearResult::MISS;
        }

        let b = 2.0 * origin.dot(direction);
        let c = origin.length_squared() - radius_squared;

        match nearest_non_negative_root(a, b, c) {
            Some(t) if t <= 1.0 => LinearResult::hit(t),
            _ => LinearResult::MISS,
        }
    }
}

impl Intersect<BoundingBox> for Line {
    type Output = LinearResult;

    fn test(&self, bounds: &BoundingBox) -> LinearResult {
        let vector = self.vector();
        let length = vector.length();

        if length <= 0.0 {
            return if bounds.contains(self.start) {
                LinearResult::hit(0.0)
            } else {
                LinearResult::MISS
            };
        }

        let ray = Ray::new(self.start, vector);
        match ray.test(bounds).hit_distance() {
            Some(distance) if distance <= length => LinearResult::hit(distance / length),
            _ => LinearResult::MISS,
        }
    }
}

#[cfg(test)]
#[path = "linear_tests.rs"]
mod tests;

/// Ray — origin plus a unit direction, infinite in one direction.
///
/// The fields are private so the direction stays normalized through every
/// write.

use std::ops::Mul;
use glam::Vec3;
use crate::error::{log_and_return_error, Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Default for Ray {
    /// Ray at the origin looking down +Z.
    fn default() -> Self {
        Self { origin: Vec3::ZERO, direction: Vec3::Z }
    }
}

impl Ray {
    /// Create a ray. `direction` is normalized; a zero direction stays zero
    /// and such a ray never hits anything.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction: direction.normalize_or_zero() }
    }

    /// Create a ray, rejecting a direction that cannot be normalized.
    pub fn try_new(origin: Vec3, direction: Vec3) -> Result<Self> {
        match direction.try_normalize() {
            Some(direction) => Ok(Self { origin, direction }),
            None => Err(log_and_return_error(
                "galaxy3d::Ray",
                Error::DegenerateGeometry(format!("ray direction {} cannot be normalized", direction)),
            )),
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }

    /// Unit direction.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Set the direction, re-normalizing it.
    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction.normalize_or_zero();
    }

    /// `origin + direction * t`.
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

impl Mul<f32> for Ray {
    type Output = Vec3;

    fn mul(self, t: f32) -> Vec3 {
        self.point_at(t)
    }
}

impl Mul<Ray> for f32 {
    type Output = Vec3;

    fn mul(self, ray: Ray) -> Vec3 {
        ray.point_at(self)
    }
}

#[cfg(test)]
#[path = "ray_tests.rs"]
mod tests;

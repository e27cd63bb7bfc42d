/// Line — finite segment between two points.
///
/// Zero-length segments are allowed; `direction()` is then `Vec3::ZERO`.

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    pub start: Vec3,
    pub end: Vec3,
}

impl Line {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// Unnormalized segment vector `end - start`.
    #[inline]
    pub fn vector(&self) -> Vec3 {
        self.end - self.start
    }

    pub fn length(&self) -> f32 {
        self.vector().length()
    }

    pub fn length_squared(&self) -> f32 {
        self.vector().length_squared()
    }

    /// Unit vector from start to end (`Vec3::ZERO` for a zero-length line).
    pub fn direction(&self) -> Vec3 {
        self.vector().normalize_or_zero()
    }

    pub fn mid_point(&self) -> Vec3 {
        (self.start + self.end) * 0.5
    }

    /// Linear interpolation between the endpoints. `t` is not clamped.
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.start.lerp(self.end, t)
    }

    /// Push the endpoints outward along the line's direction.
    ///
    /// `start` moves back by `start_amount`, `end` moves forward by
    /// `end_amount`. Negative amounts pull the endpoints inward.
    pub fn extend(&mut self, start_amount: f32, end_amount: f32) {
        let direction = self.direction();
        self.start -= direction * start_amount;
        self.end += direction * end_amount;
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;

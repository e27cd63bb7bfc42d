/// Plane — oriented half-space boundary.
///
/// Stored as a unit normal and a signed offset so that the plane is the set
/// of points `p` where `normal · p + offset = 0`. Points with a positive
/// signed distance lie in front of the plane (the "inside" half-space for
/// frustum planes).

use glam::{Vec3, Vec4};
use crate::error::{log_and_return_error, Error, Result};

/// Oriented plane with a unit-length normal.
///
/// Every constructor normalizes. A normal that cannot be normalized (all
/// coefficients zero) is kept as `Vec3::ZERO`; such a plane reports
/// `is_degenerate() == true` and classifies everything as on-plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vec3,
    offset: f32,
}

impl Default for Plane {
    fn default() -> Self {
        Self::XZ_PLANE
    }
}

impl Plane {
    /// The XZ plane through the origin, facing +Y.
    pub const XZ_PLANE: Plane = Plane { normal: Vec3::Y, offset: 0.0 };
    /// The XY plane through the origin, facing +Z.
    pub const XY_PLANE: Plane = Plane { normal: Vec3::Z, offset: 0.0 };
    /// The YZ plane through the origin, facing +X.
    pub const YZ_PLANE: Plane = Plane { normal: Vec3::X, offset: 0.0 };

    /// Plane from the coefficients of `ax + by + cz + d = 0`, normalized.
    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self::from_vec4(Vec4::new(a, b, c, d))
    }

    /// Plane from packed `(a, b, c, d)` coefficients, normalized.
    pub fn from_vec4(coefficients: Vec4) -> Self {
        let length = coefficients.truncate().length();
        if length > 0.0 {
            let normalized = coefficients / length;
            Self { normal: normalized.truncate(), offset: normalized.w }
        } else {
            Self { normal: Vec3::ZERO, offset: 0.0 }
        }
    }

    /// Like `from_vec4`, but rejects coefficients whose normal part is zero.
    pub fn try_from_vec4(coefficients: Vec4) -> Result<Self> {
        if coefficients.truncate().length_squared() > 0.0 {
            Ok(Self::from_vec4(coefficients))
        } else {
            Err(log_and_return_error(
                "galaxy3d::Plane",
                Error::DegenerateGeometry(format!("plane {} has a zero normal", coefficients)),
            ))
        }
    }

    /// Plane through `point` facing along `normal` (normalized here).
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self { normal, offset: -normal.dot(point) }
    }

    /// Plane through three points. The normal is `(b - a) × (c - a)`, so the
    /// front side is the one from which `a, b, c` wind counter-clockwise.
    ///
    /// # Errors
    ///
    /// `Error::DegenerateGeometry` if the points are collinear or coincident.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Result<Self> {
        match (b - a).cross(c - a).try_normalize() {
            Some(normal) => Ok(Self { normal, offset: -normal.dot(a) }),
            None => Err(log_and_return_error(
                "galaxy3d::Plane",
                Error::DegenerateGeometry(format!(
                    "points {}, {}, {} are collinear", a, b, c
                )),
            )),
        }
    }

    /// Unit normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Signed offset along the normal (`d` in `n · p + d = 0`).
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Packed `(a, b, c, d)` coefficients.
    pub fn to_vec4(&self) -> Vec4 {
        self.normal.extend(self.offset)
    }

    /// True when the plane was built from a zero normal.
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vec3::ZERO
    }

    /// Signed distance from `point` to the plane, positive in front.
    #[inline]
    pub fn distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.offset
    }

    /// `normal · vector`, ignoring the offset. Treats the plane as a direction.
    #[inline]
    pub fn dot(&self, vector: Vec3) -> f32 {
        self.normal.dot(vector)
    }

    /// `normal · point + offset`. Same as `distance`.
    #[inline]
    pub fn dot_coord(&self, point: Vec3) -> f32 {
        self.distance(point)
    }

    /// Full 4D dot product with homogeneous `v`.
    #[inline]
    pub fn dot_vec4(&self, v: Vec4) -> f32 {
        self.to_vec4().dot(v)
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;

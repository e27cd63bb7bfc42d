/// Frustum — six clipping planes for visibility culling.
///
/// Each plane faces inward: a point is inside the frustum when its signed
/// distance to every plane is non-negative. Planes are derived from the rows
/// of a combined view-projection matrix using the `[0, 1]` clip depth range,
/// and must be re-derived whenever that matrix changes.

use glam::{Mat4, Vec3, Vec4};
use crate::error::{log_and_return_error, Error, Result};
use crate::intersect::{Intersect, PlaneResult};
use crate::primitive::Plane;
use crate::volume::BoundingVolume;

/// Frustum plane indices
pub const PLANE_NEAR: usize = 0;
pub const PLANE_FAR: usize = 1;
pub const PLANE_LEFT: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_RIGHT: usize = 4;
pub const PLANE_BOTTOM: usize = 5;

/// Named frustum plane, usable as an index into `Frustum::planes()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrustumPlane {
    Near,
    Far,
    Left,
    Top,
    Right,
    Bottom,
}

impl FrustumPlane {
    /// All planes in storage order.
    pub const ALL: [FrustumPlane; 6] = [
        FrustumPlane::Near,
        FrustumPlane::Far,
        FrustumPlane::Left,
        FrustumPlane::Top,
        FrustumPlane::Right,
        FrustumPlane::Bottom,
    ];

    /// Position of this plane in `Frustum::planes()`.
    pub fn index(self) -> usize {
        match self {
            FrustumPlane::Near => PLANE_NEAR,
            FrustumPlane::Far => PLANE_FAR,
            FrustumPlane::Left => PLANE_LEFT,
            FrustumPlane::Top => PLANE_TOP,
            FrustumPlane::Right => PLANE_RIGHT,
            FrustumPlane::Bottom => PLANE_BOTTOM,
        }
    }
}

/// Six inward-facing frustum planes.
///
/// Works with both perspective and orthographic projections. A default
/// frustum has six copies of `Plane::default()` and is only meaningful once
/// `set_from()` has been called.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frustum {
    planes: [Plane; 6],
}

/// Raw plane coefficients in storage order (near, far, left, top, right,
/// bottom), before normalization.
fn plane_coefficients(matrix: &Mat4) -> [Vec4; 6] {
    let x = matrix.row(0);
    let y = matrix.row(1);
    let z = matrix.row(2);
    let w = matrix.row(3);

    [
        z,      // Near:   0 <= z
        w - z,  // Far:    z <= w
        w + x,  // Left:  -w <= x
        w - y,  // Top:    y <= w
        w - x,  // Right:  x <= w
        w + y,  // Bottom: -w <= y
    ]
}

impl Frustum {
    /// Build a frustum from a view-projection matrix.
    ///
    /// Degenerate planes are kept (see `set_from`); use `try_from_matrix`
    /// to reject them instead.
    pub fn from_matrix(matrix: &Mat4) -> Self {
        let mut frustum = Self::default();
        frustum.set_from(matrix);
        frustum
    }

    /// Like `from_matrix`, but fails if any derived plane has a zero normal.
    ///
    /// # Errors
    ///
    /// `Error::DegenerateGeometry` naming the first degenerate plane.
    pub fn try_from_matrix(matrix: &Mat4) -> Result<Self> {
        let coefficients = plane_coefficients(matrix);

        if let Some(which) = FrustumPlane::ALL
            .iter()
            .find(|which| coefficients[which.index()].truncate().length_squared() == 0.0)
        {
            return Err(log_and_return_error(
                "galaxy3d::Frustum",
                Error::DegenerateGeometry(format!("{:?} plane has a zero normal", which)),
            ));
        }

        Ok(Self { planes: coefficients.map(Plane::from_vec4) })
    }

    /// Re-derive all six planes from a view-projection matrix.
    ///
    /// A plane whose normal part is zero is stored as a degenerate plane
    /// (every point lies on it) and a warning is logged.
    pub fn set_from(&mut self, matrix: &Mat4) {
        self.planes = plane_coefficients(matrix).map(Plane::from_vec4);

        for which in FrustumPlane::ALL {
            if self.planes[which.index()].is_degenerate() {
                crate::geometry_warn!(
                    "galaxy3d::Frustum",
                    "{:?} plane derived from a degenerate matrix", which
                );
            }
        }
    }

    /// One plane by name.
    pub fn plane(&self, which: FrustumPlane) -> &Plane {
        &self.planes[which.index()]
    }

    /// All six planes, indexed by the `PLANE_*` constants.
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Classify a box or sphere against the frustum.
    ///
    /// - `Outside` as soon as one plane reports outside (exact rejection)
    /// - `Inside` only if every plane reports inside (exact acceptance)
    /// - `Intersects` otherwise (cannot decide, treat as visible)
    pub fn test<V: Into<BoundingVolume>>(&self, volume: V) -> PlaneResult {
        let volume = volume.into();
        self.classify(|plane| plane.test(&volume))
    }

    /// Classify a point against the frustum, with the same rules as `test`.
    pub fn test_point(&self, point: Vec3) -> PlaneResult {
        self.classify(|plane| plane.test(&point))
    }

    /// `true` unless the volume is fully outside.
    pub fn is_visible<V: Into<BoundingVolume>>(&self, volume: V) -> bool {
        self.test(volume) != PlaneResult::Outside
    }

    fn classify<F>(&self, side: F) -> PlaneResult
    where
        F: Fn(&Plane) -> PlaneResult,
    {
        let mut all_inside = true;

        for plane in &self.planes {
            match side(plane) {
                PlaneResult::Outside => return PlaneResult::Outside,
                PlaneResult::Intersects => all_inside = false,
                PlaneResult::Inside => {}
            }
        }

        if all_inside { PlaneResult::Inside } else { PlaneResult::Intersects }
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;

/// Axis-Aligned Bounding Box
///
/// Defined by its minimum and maximum corners. The constructor and `set`
/// take the component-wise min/max of their inputs, so `minimum <= maximum`
/// holds on every axis no matter which order the corners are passed in.

use glam::{Mat4, Vec3};
use crate::error::{log_and_return_error, Error, Result};

/// Named box corners.
///
/// The discriminant is a 3-bit selector: bit 0 picks max X (right),
/// bit 1 picks max Y (top), bit 2 picks max Z (far).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BoxCorner {
    NearBottomLeft = 0,
    NearBottomRight = 1,
    NearTopLeft = 2,
    NearTopRight = 3,
    FarBottomLeft = 4,
    FarBottomRight = 5,
    FarTopLeft = 6,
    FarTopRight = 7,
}

impl BoxCorner {
    /// All corners, in selector order.
    pub const ALL: [BoxCorner; 8] = [
        BoxCorner::NearBottomLeft,
        BoxCorner::NearBottomRight,
        BoxCorner::NearTopLeft,
        BoxCorner::NearTopRight,
        BoxCorner::FarBottomLeft,
        BoxCorner::FarBottomRight,
        BoxCorner::FarTopLeft,
        BoxCorner::FarTopRight,
    ];
}

impl TryFrom<u8> for BoxCorner {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self> {
        BoxCorner::ALL.get(index as usize).copied().ok_or_else(|| {
            log_and_return_error(
                "galaxy3d::BoundingBox",
                Error::InvalidArgument(format!("box corner index {} is out of range 0..8", index)),
            )
        })
    }
}

/// The eight corners of a box, indexed by `BoxCorner as usize`.
pub type CornerArray = [Vec3; 8];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    minimum: Vec3,
    maximum: Vec3,
}

impl BoundingBox {
    /// Create a box spanning two opposite corners, in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self { minimum: a.min(b), maximum: a.max(b) }
    }

    /// Replace both corners, re-ordering them component-wise.
    pub fn set(&mut self, a: Vec3, b: Vec3) {
        self.minimum = a.min(b);
        self.maximum = a.max(b);
    }

    /// Minimum corner (x, y, z)
    pub fn minimum(&self) -> Vec3 {
        self.minimum
    }

    /// Maximum corner (x, y, z)
    pub fn maximum(&self) -> Vec3 {
        self.maximum
    }

    pub fn center(&self) -> Vec3 {
        (self.minimum + self.maximum) * 0.5
    }

    /// Half-size along each axis.
    pub fn extents(&self) -> Vec3 {
        (self.maximum - self.minimum) * 0.5
    }

    /// A box collapsed to a single point.
    pub fn is_empty(&self) -> bool {
        self.minimum == self.maximum
    }

    /// Closed-interval point test on all three axes.
    pub fn contains(&self, point: Vec3) -> bool {
        self.minimum.cmple(point).all() && point.cmple(self.maximum).all()
    }

    pub fn get_corner(&self, corner: BoxCorner) -> Vec3 {
        let selector = corner as u8;
        Vec3::new(
            if selector & 1 != 0 { self.maximum.x } else { self.minimum.x },
            if selector & 2 != 0 { self.maximum.y } else { self.minimum.y },
            if selector & 4 != 0 { self.maximum.z } else { self.minimum.z },
        )
    }

    /// All eight corners, near-bottom-left first.
    pub fn get_all_corners(&self) -> CornerArray {
        BoxCorner::ALL.map(|corner| self.get_corner(corner))
    }

    /// Transform this box by a matrix, returning the tight axis-aligned box
    /// around the result.
    ///
    /// Uses the Arvo method: projects each matrix axis onto the box extents
    /// instead of transforming all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> BoundingBox {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.minimum[i];
            let b = axis * self.maximum[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        BoundingBox { minimum: new_min, maximum: new_max }
    }

    /// Smallest box enclosing both `a` and `b`.
    pub fn compute_containing_box(a: &BoundingBox, b: &BoundingBox) -> BoundingBox {
        BoundingBox {
            minimum: a.minimum.min(b.minimum),
            maximum: a.maximum.max(b.maximum),
        }
    }

    /// Left-fold `compute_containing_box` over a sequence.
    ///
    /// A single box is returned unchanged; an empty sequence yields the
    /// default box (both corners at the origin).
    pub fn compute_containing_box_of<I>(boxes: I) -> BoundingBox
    where
        I: IntoIterator<Item = BoundingBox>,
    {
        let mut iter = boxes.into_iter();
        match iter.next() {
            Some(first) => iter.fold(first, |bounds, next| Self::compute_containing_box(&bounds, &next)),
            None => BoundingBox::default(),
        }
    }
}

#[cfg(test)]
#[path = "bounding_box_tests.rs"]
mod tests;

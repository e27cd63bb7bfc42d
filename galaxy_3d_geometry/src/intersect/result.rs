//! Result kinds returned by the intersection tests.

/// Outcome of a ray or line test.
///
/// For rays `distance` is the parametric distance along the unit direction.
/// For lines it is the normalized position along the segment (`0` at the
/// start, `1` at the end).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearResult {
    intersects: bool,
    distance: f32,
}

impl LinearResult {
    /// No intersection.
    pub const MISS: LinearResult = LinearResult { intersects: false, distance: 0.0 };

    pub fn new(intersects: bool, distance: f32) -> Self {
        Self { intersects, distance }
    }

    /// Intersection at `distance`.
    pub fn hit(distance: f32) -> Self {
        Self { intersects: true, distance }
    }

    pub fn intersects(&self) -> bool {
        self.intersects
    }

    /// Distance of the hit. Only meaningful when `intersects()` is true.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// `Some(distance)` on a hit, `None` otherwise.
    pub fn hit_distance(&self) -> Option<f32> {
        self.intersects.then_some(self.distance)
    }
}

/// Relation between two volumes A and B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeResult {
    /// A and B are completely separate
    Disjoint,
    /// A and B touch or partially overlap
    Intersect,
    /// A contains B
    Contains,
    /// B contains A
    Contained,
    /// A == B
    Identical,
}

impl VolumeResult {
    /// The same relation seen from B's side: swaps `Contains` and
    /// `Contained`, leaves the symmetric results alone.
    pub fn inverse(self) -> Self {
        match self {
            VolumeResult::Contains => VolumeResult::Contained,
            VolumeResult::Contained => VolumeResult::Contains,
            other => other,
        }
    }
}

/// Side of a plane an object lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum PlaneResult {
    /// Entirely behind the plane (negative side)
    Outside = -1,
    /// On the plane or straddling it
    Intersects = 0,
    /// Entirely in front of the plane (positive side)
    Inside = 1,
}

//! Intersect module — pairwise tests between primitives and volumes.
//!
//! Every test is a pure function of its two operands. Three result kinds:
//! - `LinearResult` for ray/line against plane, sphere, and box
//! - `VolumeResult` for sphere/box pairs (five-way classification)
//! - `PlaneResult` for plane against point, sphere, and box
//!
//! Call either `a.test(&b)` through the `Intersect` trait or the free
//! function `intersect::test(&a, &b)`.

mod linear;
mod plane;
mod result;
mod volume;

pub use result::{LinearResult, PlaneResult, VolumeResult};

/// Below this magnitude a ray/line direction is treated as parallel to a
/// plane.
pub const PARALLEL_EPSILON: f32 = f32::EPSILON;

/// Pairwise intersection test.
///
/// Implemented for each supported `(Self, Rhs)` pair; `Output` is the result
/// kind for that pair.
pub trait Intersect<Rhs: ?Sized> {
    type Output;

    fn test(&self, other: &Rhs) -> Self::Output;
}

/// Run the intersection test between `a` and `b`.
///
/// # Example
///
/// ```
/// use galaxy_3d_geometry::galaxy3d::glam::Vec3;
/// use galaxy_3d_geometry::galaxy3d::intersect::{self, VolumeResult};
/// use galaxy_3d_geometry::galaxy3d::volume::BoundingBox;
///
/// let a = BoundingBox::new(Vec3::ZERO, Vec3::splat(2.0));
/// let b = BoundingBox::new(Vec3::ONE, Vec3::splat(3.0));
/// assert_eq!(intersect::test(&a, &b), VolumeResult::Intersect);
/// ```
#[inline]
pub fn test<A, B>(a: &A, b: &B) -> A::Output
where
    A: Intersect<B> + ?Sized,
    B: ?Sized,
{
    a.test(b)
}

//! Volume module — bounding boxes and bounding spheres.
//!
//! The two bounding volumes used for culling and broad-phase queries, plus
//! `BoundingVolume`, the closed enum that lets the frustum and plane tests
//! accept either one.

mod bounding_box;
mod bounding_sphere;
mod bounding_volume;

pub use bounding_box::{BoundingBox, BoxCorner, CornerArray};
pub use bounding_sphere::{BoundingSphere, EMPTY_RADIUS_EPSILON};
pub use bounding_volume::BoundingVolume;

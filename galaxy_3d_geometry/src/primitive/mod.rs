//! Primitive module — planes, line segments, and rays.
//!
//! Small value types consumed by the intersection tests. None of them own
//! another; all are `Copy`.

mod line;
mod plane;
mod ray;

pub use line::Line;
pub use plane::Plane;
pub use ray::Ray;

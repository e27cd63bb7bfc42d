/*!
# Galaxy 3D Geometry

Geometric queries for real-time 3D: primitives, bounding volumes, view
frustums, and the pairwise intersection tests between them.

Every type is a small `Copy` value and every test is a pure function of its
operands, so queries can run from any number of threads without locking.

## Architecture

- **Primitives**: `Plane`, `Line` (finite segment), `Ray` (unit direction)
- **Volumes**: `BoundingBox`, `BoundingSphere`, and the closed `BoundingVolume` enum
- **Frustum**: six inward planes extracted from a view-projection matrix
- **Intersect**: the `Intersect<Rhs>` trait with three result kinds
  (`LinearResult`, `VolumeResult`, `PlaneResult`)

Vector math comes from `glam`, re-exported at the crate root.
*/

// Internal modules
mod error;
pub mod log;
pub mod primitive;
pub mod volume;
pub mod camera;
pub mod intersect;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and logger slot, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        pub use crate::log::{set_logger, reset_logger, log, log_detailed};
    }

    // Plane, line, ray
    pub mod primitive {
        pub use crate::primitive::*;
    }

    // Bounding boxes and spheres
    pub mod volume {
        pub use crate::volume::*;
    }

    // View frustum
    pub mod camera {
        pub use crate::camera::*;
    }

    // Pairwise tests and result kinds
    pub mod intersect {
        pub use crate::intersect::*;
    }

    pub use glam;
}

// Re-export math library at crate root
pub use glam;

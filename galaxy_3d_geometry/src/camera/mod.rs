//! Camera module — view frustum for visibility culling.
//!
//! A `Frustum` is a plain value rebuilt by the caller whenever the
//! view-projection matrix changes; nothing here tracks cameras.

mod frustum;

pub use frustum::{
    Frustum,
    FrustumPlane,
    PLANE_NEAR, PLANE_FAR, PLANE_LEFT, PLANE_TOP, PLANE_RIGHT, PLANE_BOTTOM,
};

//! # Frame Conversion
//!
//! The middleware publishes in a right-handed Z-up frame (X forward, Y left).
//! The engine viewport is Y-up with -Z forward. A point `(x, y, z)` maps to
//! `(x, z, -y)`.

use config::constants::PARALLEL_POINT_THRESHOLD;
use glam::Vec3;
use rayon::prelude::*;

/// Converts one middleware point into the engine frame.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use rviz_mesh::frame::to_engine_frame;
///
/// assert_eq!(to_engine_frame(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 3.0, -2.0));
/// ```
#[inline]
pub fn to_engine_frame(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.z, -v.y)
}

/// Inverse of [`to_engine_frame`].
#[inline]
pub fn from_engine_frame(v: Vec3) -> Vec3 {
    Vec3::new(v.x, -v.z, v.y)
}

/// Converts a whole point cloud into the engine frame.
///
/// Large clouds are split across the rayon thread pool. Point order is
/// preserved either way.
pub fn convert_point_cloud(points: &[Vec3]) -> Vec<Vec3> {
    if points.len() < PARALLEL_POINT_THRESHOLD {
        points.iter().copied().map(to_engine_frame).collect()
    } else {
        points.par_iter().copied().map(to_engine_frame).collect()
    }
}

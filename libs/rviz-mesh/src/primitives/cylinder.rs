//! # Cylinder Primitive
//!
//! Prism over a regular polygon approximating a circle.

use crate::error::GeometryResult;
use crate::mesh::Mesh;
use crate::ops::extrude::extrude;
use crate::polygon::Polygon2D;
use crate::transform::RigidTransform;
use config::constants::DEFAULT_CYLINDER_SEGMENTS;
use glam::Vec2;
use std::f64::consts::PI;

/// Clockwise `segments`-gon inscribed in a circle of `radius`.
///
/// Point `i` sits at angle `(segments - i) / segments * 2π + π / segments`,
/// so the ring walks the circle with decreasing angle, half a segment off
/// the X axis.
///
/// The segment fraction is taken in f32; the angle, the trigonometry and the
/// radius scaling run in f64 and are rounded to f32 once per coordinate.
pub fn cylinder_footprint(radius: f32, segments: u32) -> Polygon2D {
    let n = segments as f32;
    let radius = f64::from(radius);
    (0..segments)
        .map(|i| {
            let fraction = (n - i as f32) / n;
            let angle = f64::from(fraction) * 2.0 * PI + PI / f64::from(n);
            let (sin, cos) = angle.sin_cos();
            Vec2::new((cos * radius) as f32, (sin * radius) as f32)
        })
        .collect()
}

/// Creates a cylinder mesh.
///
/// # Arguments
///
/// * `radius` - Circle radius
/// * `height` - Extent along local Z, split evenly above and below the pose
/// * `transform` - Pose of the cylinder center
/// * `segments` - Footprint resolution
///
/// # Errors
///
/// Fewer than three segments is rejected with `TooFewVertices`; a zero
/// or negative radius is rejected with `NotClockwise`.
///
/// # Example
///
/// ```rust
/// use rviz_mesh::{primitives::cylinder, RigidTransform};
///
/// let mesh = cylinder(1.0, 1.0, &RigidTransform::IDENTITY, 12).unwrap();
/// assert_eq!(mesh.vertex_count(), 132);
/// ```
pub fn cylinder(
    radius: f32,
    height: f32,
    transform: &RigidTransform,
    segments: u32,
) -> GeometryResult<Mesh> {
    extrude(&cylinder_footprint(radius, segments), height, transform)
}

/// [`cylinder`] at the default resolution of
/// [`DEFAULT_CYLINDER_SEGMENTS`] segments.
pub fn cylinder_default(radius: f32, height: f32, transform: &RigidTransform) -> GeometryResult<Mesh> {
    cylinder(radius, height, transform, DEFAULT_CYLINDER_SEGMENTS)
}

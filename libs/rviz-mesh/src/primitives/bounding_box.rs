//! # Bounding Box Primitive
//!
//! Oriented box around a detected object, centered on its pose.

use crate::error::GeometryResult;
use crate::mesh::Mesh;
use crate::ops::extrude::extrude;
use crate::polygon::Polygon2D;
use crate::transform::RigidTransform;
use glam::Vec2;

/// Clockwise rectangular footprint of `width` along X and `length` along Y,
/// centered on the origin.
pub fn bounding_box_footprint(width: f32, length: f32) -> Polygon2D {
    let (hw, hl) = (width / 2.0, length / 2.0);
    Polygon2D::new(vec![
        Vec2::new(hw, hl),
        Vec2::new(hw, -hl),
        Vec2::new(-hw, -hl),
        Vec2::new(-hw, hl),
    ])
}

/// Creates a box mesh.
///
/// # Arguments
///
/// * `width` - Extent along local X
/// * `height` - Extent along local Z, split evenly above and below the pose
/// * `length` - Extent along local Y
/// * `transform` - Pose of the box center
///
/// # Errors
///
/// A zero or negative `width` or `length` gives a footprint that is not
/// clockwise and is rejected with [`GeometryError::NotClockwise`](crate::GeometryError).
///
/// # Example
///
/// ```rust
/// use rviz_mesh::{primitives::bounding_box, RigidTransform};
///
/// let mesh = bounding_box(2.0, 4.0, 2.0, &RigidTransform::IDENTITY).unwrap();
/// assert_eq!(mesh.vertex_count(), 36);
/// ```
pub fn bounding_box(
    width: f32,
    height: f32,
    length: f32,
    transform: &RigidTransform,
) -> GeometryResult<Mesh> {
    extrude(&bounding_box_footprint(width, length), height, transform)
}

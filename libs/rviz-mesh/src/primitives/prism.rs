//! Prisms over footprints carried in middleware polygon messages.

use crate::error::GeometryResult;
use crate::mesh::Mesh;
use crate::ops::extrude::extrude;
use crate::polygon::Polygon2D;
use crate::transform::RigidTransform;
use glam::Vec3;

/// Extrudes a polygon message's points, ignoring their z coordinate.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use rviz_mesh::{primitives::polygon_prism, RigidTransform};
///
/// let shape = [Vec3::new(0.0, 1.0, 0.3), Vec3::new(1.0, 0.0, 0.3), Vec3::ZERO];
/// let mesh = polygon_prism(&shape, 1.0, &RigidTransform::IDENTITY).unwrap();
/// assert_eq!(mesh.vertex_count(), 24);
/// ```
pub fn polygon_prism(points: &[Vec3], height: f32, transform: &RigidTransform) -> GeometryResult<Mesh> {
    extrude(&Polygon2D::from_xyz(points), height, transform)
}

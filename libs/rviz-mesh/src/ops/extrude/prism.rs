//! # Prism Extrusion
//!
//! Extrudes a footprint symmetrically about its local XY plane.
//!
//! Normals are raw cross products of world-space edge vectors. They are not
//! normalized, so their length scales with the face size. The cap normal is
//! taken from the first fan triangle and reused for the whole cap, which is
//! exact only for convex footprints.

use crate::error::{GeometryError, GeometryResult};
use crate::mesh::Mesh;
use crate::polygon::Polygon2D;
use crate::transform::RigidTransform;
use config::constants::MIN_POLYGON_VERTICES;
use glam::{Mat4, Vec2, Vec3};
use tracing::{debug, warn};

/// Number of vertices emitted for an `n`-point footprint.
///
/// # Example
///
/// ```rust
/// use rviz_mesh::ops::extrude::prism_vertex_count;
///
/// assert_eq!(prism_vertex_count(4), 36);
/// assert_eq!(prism_vertex_count(12), 132);
/// ```
pub fn prism_vertex_count(n: usize) -> usize {
    if n < MIN_POLYGON_VERTICES {
        return 0;
    }
    12 * n - 12
}

/// Extrudes `polygon` into a prism of total height `height`, centered on the
/// footprint plane, and places it with `transform`.
///
/// # Arguments
///
/// * `polygon` - Clockwise footprint with at least three points
/// * `height` - Total extrusion height; zero or negative values are accepted
/// * `transform` - Pose of the footprint's local frame in the target frame
///
/// # Errors
///
/// * [`GeometryError::TooFewVertices`] - fewer than three points
/// * [`GeometryError::NotClockwise`] - footprint wound the wrong way
///
/// # Example
///
/// ```rust
/// use glam::Vec2;
/// use rviz_mesh::{extrude, GeometryError, Polygon2D, RigidTransform};
///
/// let triangle = Polygon2D::new(vec![Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0), Vec2::ZERO]);
/// let mesh = extrude(&triangle, 2.0, &RigidTransform::IDENTITY).unwrap();
/// assert_eq!(mesh.vertex_count(), 24);
///
/// let err = extrude(&triangle.reversed(), 2.0, &RigidTransform::IDENTITY).unwrap_err();
/// assert_eq!(err, GeometryError::NotClockwise);
/// ```
pub fn extrude(
    polygon: &Polygon2D,
    height: f32,
    transform: &RigidTransform,
) -> GeometryResult<Mesh> {
    let points = polygon.points();
    let n = points.len();

    if n < MIN_POLYGON_VERTICES {
        warn!(vertices = n, "Rejecting footprint with too few vertices");
        return Err(GeometryError::too_few_vertices(n));
    }
    if !polygon.is_clockwise() {
        warn!(vertices = n, "Rejecting footprint that is not clockwise");
        return Err(GeometryError::NotClockwise);
    }

    let placer = Placer::new(transform.to_matrix(), height / 2.0);
    let mut mesh = Mesh::with_capacity(prism_vertex_count(n) / 3);

    // Top cap
    let top_normal = face_normal(
        placer.top(points[0]),
        placer.top(points[1]),
        placer.top(points[2]),
    );
    for i in 2..n {
        let corners = [
            placer.top(points[0]),
            placer.top(points[i - 1]),
            placer.top(points[i]),
        ];
        mesh.push_triangle(corners, top_normal);
    }

    // Side walls
    for i in 0..n {
        let j = (i + 1) % n;
        let top_i = placer.top(points[i]);
        let bottom_i = placer.bottom(points[i]);
        let bottom_j = placer.bottom(points[j]);
        let top_j = placer.top(points[j]);

        let normal = face_normal(top_i, bottom_i, bottom_j);
        mesh.push_triangle([top_i, bottom_i, bottom_j], normal);
        mesh.push_triangle([top_i, bottom_j, top_j], normal);
    }

    // Bottom cap
    let bottom_normal = -top_normal;
    for i in 2..n {
        let corners = [
            placer.bottom(points[0]),
            placer.bottom(points[i]),
            placer.bottom(points[i - 1]),
        ];
        mesh.push_triangle(corners, bottom_normal);
    }

    debug!(
        footprint = n,
        vertices = mesh.vertex_count(),
        height,
        "Extruded footprint"
    );

    Ok(mesh)
}

/// Lifts footprint points onto the two cap planes and into the target frame.
struct Placer {
    matrix: Mat4,
    half_height: f32,
}

impl Placer {
    fn new(matrix: Mat4, half_height: f32) -> Self {
        Self {
            matrix,
            half_height,
        }
    }

    #[inline]
    fn top(&self, p: Vec2) -> Vec3 {
        self.matrix.transform_point3(p.extend(self.half_height))
    }

    #[inline]
    fn bottom(&self, p: Vec2) -> Vec3 {
        self.matrix.transform_point3(p.extend(-self.half_height))
    }
}

/// Unnormalized normal of triangle `(a, b, c)` for the clockwise footprint
/// convention: `(c - a) × (b - a)`.
#[inline]
fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (c - a).cross(b - a)
}

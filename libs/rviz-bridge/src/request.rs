//! Shape requests carried from the middleware feed to the geometry core.

use config::constants::GlobalConfig;
use rviz_mesh::primitives::{bounding_box, cylinder};
use rviz_mesh::{extrude, GeometryResult, Mesh, Polygon2D, RigidTransform};
use serde::{Deserialize, Serialize};

/// One shape to mesh, as decoded from a middleware message.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// use rviz_bridge::ShapeRequest;
/// use rviz_mesh::RigidTransform;
///
/// let request = ShapeRequest::Cylinder {
///     radius: 1.0,
///     height: 1.0,
///     transform: RigidTransform::IDENTITY,
/// };
/// let mesh = request.build(&GlobalConfig::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 132);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeRequest {
    /// Arbitrary clockwise footprint.
    Polygon {
        footprint: Polygon2D,
        height: f32,
        transform: RigidTransform,
    },
    /// Oriented box: `width` along X, `length` along Y, `height` along Z.
    BoundingBox {
        width: f32,
        height: f32,
        length: f32,
        transform: RigidTransform,
    },
    /// Upright cylinder at the configured resolution.
    Cylinder {
        radius: f32,
        height: f32,
        transform: RigidTransform,
    },
}

impl ShapeRequest {
    /// Short name used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeRequest::Polygon { .. } => "polygon",
            ShapeRequest::BoundingBox { .. } => "bounding_box",
            ShapeRequest::Cylinder { .. } => "cylinder",
        }
    }

    /// Pose the shape is placed with.
    pub fn transform(&self) -> &RigidTransform {
        match self {
            ShapeRequest::Polygon { transform, .. }
            | ShapeRequest::BoundingBox { transform, .. }
            | ShapeRequest::Cylinder { transform, .. } => transform,
        }
    }

    /// Builds the mesh for this request.
    pub fn build(&self, config: &GlobalConfig) -> GeometryResult<Mesh> {
        match self {
            ShapeRequest::Polygon {
                footprint,
                height,
                transform,
            } => extrude(footprint, *height, transform),
            ShapeRequest::BoundingBox {
                width,
                height,
                length,
                transform,
            } => bounding_box(*width, *height, *length, transform),
            ShapeRequest::Cylinder {
                radius,
                height,
                transform,
            } => cylinder(*radius, *height, transform, config.cylinder_segments),
        }
    }
}

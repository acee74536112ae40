//! # rviz Mesh
//!
//! Engine-agnostic geometry for drawing middleware data in a 3D viewport.
//! Footprints published by the middleware (object shapes, lanes, vehicle
//! outlines) are extruded into flat-shaded prisms ready for upload.
//!
//! ## Architecture
//!
//! ```text
//! Polygon2D + height + RigidTransform → extrude → Mesh (vertices, normals)
//!        ↑
//! primitives (bounding_box, cylinder, polygon_prism)
//! ```
//!
//! ## Conventions
//!
//! - Footprints must be wound clockwise (y up) and have at least 3 points
//! - Normals are raw cross products, one per vertex, not unit length
//! - All functions are pure and allocate a fresh mesh per call
//!
//! ## Usage
//!
//! ```rust
//! use rviz_mesh::{primitives::bounding_box, RigidTransform};
//!
//! let mesh = bounding_box(2.0, 4.0, 2.0, &RigidTransform::IDENTITY)?;
//! assert_eq!(mesh.vertex_count(), 36);
//! # Ok::<(), rviz_mesh::GeometryError>(())
//! ```

pub mod error;
pub mod frame;
pub mod mesh;
pub mod ops;
pub mod polygon;
pub mod primitives;
pub mod trajectory;
pub mod transform;

pub use error::{GeometryError, GeometryResult};
pub use mesh::Mesh;
pub use ops::extrude::extrude;
pub use polygon::{is_clockwise, Polygon2D};
pub use transform::RigidTransform;

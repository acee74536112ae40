//! # Geometry Errors
//!
//! Error types for mesh generation. Both variants are precondition
//! violations detected before any geometry is computed.

use thiserror::Error;

/// Errors that can occur while building a mesh from a footprint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The footprint is not wound clockwise.
    ///
    /// Reversing the vertex order (`Polygon2D::reversed`) fixes it.
    #[error("Polygon is not clockwise")]
    NotClockwise,

    /// The footprint has fewer than three vertices.
    #[error("Polygon has {count} vertices, at least {min} are required")]
    TooFewVertices { count: usize, min: usize },
}

impl GeometryError {
    /// Creates a too-few-vertices error for a footprint of `count` points.
    pub fn too_few_vertices(count: usize) -> Self {
        Self::TooFewVertices {
            count,
            min: config::constants::MIN_POLYGON_VERTICES,
        }
    }
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

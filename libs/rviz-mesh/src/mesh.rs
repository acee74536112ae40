//! # Mesh Data Structure
//!
//! Flat-shaded triangle soup: one position and one normal per emitted vertex,
//! three vertices per triangle, in draw order.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A triangle mesh stored as parallel vertex and normal arrays.
///
/// Vertices are not shared between triangles, so every face carries its own
/// normal. Normals are raw cross products and are not unit length; use
/// [`Mesh::normalized_normals`] when a consumer needs unit vectors.
///
/// # Example
///
/// ```rust
/// use rviz_mesh::Mesh;
/// use glam::Vec3;
///
/// let mut mesh = Mesh::new();
/// mesh.push_triangle([Vec3::ZERO, Vec3::Y, Vec3::X], Vec3::Z);
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions, three per triangle
    vertices: Vec<Vec3>,
    /// Face normal repeated for each vertex of its triangle
    normals: Vec<Vec3>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with room for `triangle_count` triangles.
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangle_count * 3),
            normals: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Returns the number of emitted vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends one triangle whose three vertices all carry `normal`.
    pub fn push_triangle(&mut self, corners: [Vec3; 3], normal: Vec3) {
        self.vertices.extend_from_slice(&corners);
        self.normals.extend_from_slice(&[normal; 3]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Returns a reference to the per-vertex normals.
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Returns the corners of the triangle at `index`, if it exists.
    pub fn triangle(&self, index: usize) -> Option<[Vec3; 3]> {
        let start = index.checked_mul(3)?;
        match self.vertices.get(start..start.checked_add(3)?)? {
            [a, b, c] => Some([*a, *b, *c]),
            _ => None,
        }
    }

    /// Returns the normal shared by the triangle at `index`, if it exists.
    pub fn triangle_normal(&self, index: usize) -> Option<Vec3> {
        self.normals.get(index.checked_mul(3)?).copied()
    }

    /// Consumes the mesh and returns `(vertices, normals)`.
    pub fn into_parts(self) -> (Vec<Vec3>, Vec<Vec3>) {
        (self.vertices, self.normals)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Returns unit-length copies of the normals.
    ///
    /// Zero-length normals (degenerate faces) stay zero.
    pub fn normalized_normals(&self) -> Vec<Vec3> {
        self.normals.iter().map(|n| n.normalize_or_zero()).collect()
    }

    /// Exports vertices as a flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    /// Exports normals as a flattened [x, y, z, ...] array.
    pub fn normals_f32(&self) -> Vec<f32> {
        self.normals.iter().flat_map(|n| n.to_array()).collect()
    }
}

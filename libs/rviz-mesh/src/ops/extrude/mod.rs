//! # Extrusion Operations
//!
//! Turns a clockwise 2D footprint into a closed, flat-shaded prism placed by
//! a rigid transform.
//!
//! ## Output Layout
//!
//! Triangles are emitted in three runs, each vertex paired with its face
//! normal:
//!
//! 1. top cap, fan from point 0 at `z = +height/2`
//! 2. side walls, two triangles per footprint edge
//! 3. bottom cap, reversed fan at `z = -height/2`
//!
//! An `n`-point footprint yields `12n - 12` vertices.

mod prism;

#[cfg(test)]
mod tests;

pub use prism::{extrude, prism_vertex_count};

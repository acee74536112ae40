//! # Mesh Operations
//!
//! Operations that build meshes from footprints.

pub mod extrude;

pub use extrude::extrude;

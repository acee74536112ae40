//! # Primitives
//!
//! Shape factories that synthesize a clockwise footprint and hand it to
//! [`extrude`](crate::ops::extrude::extrude).

pub mod bounding_box;
pub mod cylinder;
pub mod prism;

pub use bounding_box::{bounding_box, bounding_box_footprint};
pub use cylinder::{cylinder, cylinder_default, cylinder_footprint};
pub use prism::polygon_prism;

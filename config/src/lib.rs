//! # Config Crate
//!
//! Centralized configuration constants for the rviz mesh bridge.
//! Tessellation defaults, validation limits and the shared test tolerance are
//! defined here so the geometry and bridge crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CYLINDER_SEGMENTS, MIN_POLYGON_VERTICES};
//!
//! // A cylinder footprint is a regular polygon and must stay extrudable
//! assert!(DEFAULT_CYLINDER_SEGMENTS as usize >= MIN_POLYGON_VERTICES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Engine-Agnostic**: No values tied to a particular renderer
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;

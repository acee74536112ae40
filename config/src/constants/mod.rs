//! Centralized configuration values shared across the rviz mesh bridge.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Absolute tolerance used when comparing generated geometry in tests and
/// downstream consumers.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-3);
/// ```
pub const EPSILON_TOLERANCE: f32 = 1.0e-5;

/// Number of footprint segments used to approximate a cylinder when the
/// caller does not ask for a specific resolution.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CYLINDER_SEGMENTS;
/// assert_eq!(DEFAULT_CYLINDER_SEGMENTS, 12);
/// ```
pub const DEFAULT_CYLINDER_SEGMENTS: u32 = 12;

/// Smallest footprint that encloses an area.
///
/// # Examples
/// ```
/// use config::constants::MIN_POLYGON_VERTICES;
/// assert_eq!(MIN_POLYGON_VERTICES, 3);
/// ```
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Point clouds with at least this many points are converted to the engine
/// frame on the rayon thread pool; smaller clouds stay on the caller's thread.
///
/// # Examples
/// ```
/// use config::constants::PARALLEL_POINT_THRESHOLD;
/// assert!(PARALLEL_POINT_THRESHOLD >= 1024);
/// ```
pub const PARALLEL_POINT_THRESHOLD: usize = 16 * 1024;

/// Immutable snapshot of configuration settings that can be shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert_eq!(config.cylinder_segments, 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Segment count used for cylinder footprints.
    pub cylinder_segments: u32,
}

impl GlobalConfig {
    /// Builds a configuration, rejecting a cylinder resolution too coarse to
    /// form a polygon.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(24).expect("valid config");
    /// assert_eq!(cfg.cylinder_segments, 24);
    /// ```
    pub fn new(cylinder_segments: u32) -> Result<Self, ConfigError> {
        if (cylinder_segments as usize) < MIN_POLYGON_VERTICES {
            return Err(ConfigError::InvalidSegments(cylinder_segments));
        }
        Ok(Self { cylinder_segments })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            cylinder_segments: DEFAULT_CYLINDER_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the requested segment count is too small to form a polygon.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSegments(value) => {
                write!(f, "cylinder_segments must be >= {MIN_POLYGON_VERTICES}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

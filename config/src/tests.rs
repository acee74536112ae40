//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON_TOLERANCE < 1e-3, "EPSILON_TOLERANCE should be small for precision");
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_default_cylinder_segments() {
    // Matches the viewer's historical 12-gon cylinder approximation
    assert_eq!(DEFAULT_CYLINDER_SEGMENTS, 12);
}

#[test]
fn test_cylinder_segments_form_a_polygon() {
    assert!(DEFAULT_CYLINDER_SEGMENTS as usize >= MIN_POLYGON_VERTICES);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_parallel_threshold_is_large() {
    // Small clouds are cheaper to convert without scheduling overhead
    assert!(PARALLEL_POINT_THRESHOLD >= 1024);
}

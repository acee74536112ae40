//! # Trajectory Ribbon
//!
//! Planned trajectories are drawn as a flat ribbon following the path. Each
//! trajectory point contributes a left and a right edge vertex, giving a
//! triangle strip that the engine shades by longitudinal velocity.

use crate::frame::to_engine_frame;
use crate::transform::RigidTransform;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One sample of a planned trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Vehicle pose at this sample.
    pub pose: RigidTransform,
    /// Planned speed along the heading, in m/s.
    pub longitudinal_velocity_mps: f32,
}

impl TrajectoryPoint {
    pub fn new(pose: RigidTransform, longitudinal_velocity_mps: f32) -> Self {
        Self {
            pose,
            longitudinal_velocity_mps,
        }
    }
}

/// Ribbon vertex in the engine frame, tagged with the sample's velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripVertex {
    pub velocity: f32,
    pub position: Vec3,
}

/// Builds a triangle strip of total `width` along `points`.
///
/// For every point the edge at `-width/2` along the pose's local Y comes
/// first, then the edge at `+width/2`. Positions are converted to the engine
/// frame.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use rviz_mesh::trajectory::{triangle_strip_with_velocity, TrajectoryPoint};
/// use rviz_mesh::RigidTransform;
///
/// let path = [TrajectoryPoint::new(RigidTransform::IDENTITY, 3.0)];
/// let strip = triangle_strip_with_velocity(&path, 2.0);
/// assert_eq!(strip.len(), 2);
/// assert_eq!(strip[0].position, Vec3::new(0.0, 0.0, 1.0));
/// assert_eq!(strip[1].position, Vec3::new(0.0, 0.0, -1.0));
/// ```
pub fn triangle_strip_with_velocity(points: &[TrajectoryPoint], width: f32) -> Vec<StripVertex> {
    let half = width / 2.0;
    let mut strip = Vec::with_capacity(points.len() * 2);

    for point in points {
        for side in [-half, half] {
            let offset = point.pose.rotation * Vec3::new(0.0, side, 0.0);
            strip.push(StripVertex {
                velocity: point.longitudinal_velocity_mps,
                position: to_engine_frame(point.pose.translation + offset),
            });
        }
    }

    strip
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_empty_trajectory() {
        assert!(triangle_strip_with_velocity(&[], 1.0).is_empty());
    }

    #[test]
    fn test_two_vertices_per_point() {
        let path: Vec<TrajectoryPoint> = (0..5)
            .map(|i| {
                TrajectoryPoint::new(
                    RigidTransform::from_translation(Vec3::new(i as f32, 0.0, 0.0)),
                    i as f32 * 0.5,
                )
            })
            .collect();
        let strip = triangle_strip_with_velocity(&path, 1.0);
        assert_eq!(strip.len(), 10);
        assert_eq!(strip[6].velocity, 1.5);
        assert_eq!(strip[7].velocity, 1.5);
        assert_eq!(strip[6].position, Vec3::new(3.0, 0.0, 0.5));
        assert_eq!(strip[7].position, Vec3::new(3.0, 0.0, -0.5));
    }

    #[test]
    fn test_ribbon_follows_heading() {
        // Heading along +Y: the ribbon spreads along X
        let pose = RigidTransform::new(Vec3::new(1.0, 2.0, 0.5), Quat::from_rotation_z(FRAC_PI_2));
        let strip = triangle_strip_with_velocity(&[TrajectoryPoint::new(pose, 0.0)], 4.0);

        assert!(strip[0].position.abs_diff_eq(Vec3::new(3.0, 0.5, -2.0), 1e-5));
        assert!(strip[1].position.abs_diff_eq(Vec3::new(-1.0, 0.5, -2.0), 1e-5));
    }
}

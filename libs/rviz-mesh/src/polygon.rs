//! # Footprint Polygons
//!
//! A footprint is an ordered ring of 2D points in the local XY plane of a
//! shape. Only clockwise footprints can be extruded.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A closed 2D footprint.
///
/// The ring is implicit: the last point connects back to the first.
///
/// # Example
///
/// ```rust
/// use glam::Vec2;
/// use rviz_mesh::Polygon2D;
///
/// let square = Polygon2D::new(vec![
///     Vec2::new(1.0, 1.0),
///     Vec2::new(1.0, -1.0),
///     Vec2::new(-1.0, -1.0),
///     Vec2::new(-1.0, 1.0),
/// ]);
/// assert!(square.is_clockwise());
/// assert!(!square.reversed().is_clockwise());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon2D {
    points: Vec<Vec2>,
}

impl Polygon2D {
    /// Creates a footprint from its ring of points.
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Creates a footprint from 3D points, dropping their z coordinate.
    ///
    /// Middleware polygon messages carry 3D points even for planar shapes.
    pub fn from_xyz(points: &[Vec3]) -> Self {
        Self::new(points.iter().map(|p| p.truncate()).collect())
    }

    /// Returns the footprint points.
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the footprint has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the ring is wound clockwise. See [`is_clockwise`].
    pub fn is_clockwise(&self) -> bool {
        is_clockwise(&self.points)
    }

    /// Returns a copy with the point order inverted, flipping the winding.
    pub fn reversed(&self) -> Self {
        Self::new(self.points.iter().rev().copied().collect())
    }
}

impl From<Vec<Vec2>> for Polygon2D {
    fn from(points: Vec<Vec2>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Vec2> for Polygon2D {
    fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Returns true if `ring` is wound clockwise (y up).
///
/// The shoelace sum is taken relative to the first point, which keeps the
/// products small for footprints far from the origin. The sum is accumulated
/// in f64. Rings with fewer than two distinct edges have zero area and are
/// not clockwise.
pub fn is_clockwise(ring: &[Vec2]) -> bool {
    let Some(origin) = ring.first() else {
        return false;
    };
    let (x0, y0) = (f64::from(origin.x), f64::from(origin.y));

    let sum: f64 = ring
        .iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(a, b)| {
            let (ax, ay) = (f64::from(a.x) - x0, f64::from(a.y) - y0);
            let (bx, by) = (f64::from(b.x) - x0, f64::from(b.y) - y0);
            ax * by - ay * bx
        })
        .sum();

    sum < 0.0
}

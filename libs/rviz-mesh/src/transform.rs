//! Rigid transforms for placing local footprint geometry in the target frame.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Translation plus rotation, applied as `translation ∘ rotation`.
///
/// A local point `p` maps to `rotation * p + translation`.
///
/// # Examples
/// ```
/// use glam::{Quat, Vec3};
/// use rviz_mesh::RigidTransform;
///
/// let pose = RigidTransform::new(Vec3::new(1.0, 0.0, 0.0), Quat::IDENTITY);
/// assert_eq!(pose.apply(Vec3::Z), Vec3::new(1.0, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform {
    /// Offset applied after rotation.
    pub translation: Vec3,
    /// Unit quaternion orientation.
    pub rotation: Quat,
}

impl RigidTransform {
    /// The transform that leaves every point where it is.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Creates a transform from a translation and a rotation.
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Pure translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Quat::IDENTITY)
    }

    /// Pure rotation.
    pub fn from_rotation(rotation: Quat) -> Self {
        Self::new(Vec3::ZERO, rotation)
    }

    /// Builds a transform from middleware pose fields; the quaternion is
    /// given in `(w, x, y, z)` order as pose messages carry it.
    pub fn from_pose(position: [f32; 3], orientation_wxyz: [f32; 4]) -> Self {
        let [w, x, y, z] = orientation_wxyz;
        Self::new(Vec3::from_array(position), Quat::from_xyzw(x, y, z, w))
    }

    /// Homogeneous 4×4 matrix of this transform.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }

    /// Maps a local point into the target frame.
    pub fn apply(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.translation
    }
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

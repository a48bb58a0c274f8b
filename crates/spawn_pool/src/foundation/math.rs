//! Math utilities and types
//!
//! Provides the fundamental math types used by the pooling engine and its
//! consumers. All types are thin aliases over nalgebra.

pub use nalgebra::{Quaternion, Unit, Vector2, Vector3};

use crate::host::GroupId;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Position and orientation of a managed object, plus its scene grouping.
///
/// Plays the role a transform handle plays in the host engine: the pool
/// mutates it on reuse and reparents it when a pool is grouped under a
/// holder. Scale is deliberately absent; pooled objects keep the scale they
/// were instantiated with.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// World space position
    pub position: Vec3,

    /// World space rotation quaternion
    pub rotation: Quat,

    /// Scene group this object is parented under, if any
    pub parent: Option<GroupId>,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            parent: None,
        }
    }
}

impl Placement {
    /// Create an identity placement at the origin, unparented
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a placement with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a placement with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_placement_is_identity() {
        let placement = Placement::default();
        assert_relative_eq!(placement.position, Vec3::zeros());
        assert_eq!(placement.rotation, Quat::identity());
        assert!(placement.parent.is_none());
    }

    #[test]
    fn test_from_position_keeps_identity_rotation() {
        let placement = Placement::from_position(Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(placement.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(placement.rotation, Quat::identity());
    }
}

//! Direction and orientation helpers.

use crate::{DQuat, Vector3};

/// Forward axis of a posed object in its local frame.
pub const LOCAL_FORWARD: Vector3 = Vector3::Z;

/// Rotation that turns [`LOCAL_FORWARD`] onto `forward`.
///
/// A zero `forward` yields the identity rotation.
pub fn facing_rotation(forward: Vector3) -> DQuat {
    let dir = forward.normalize_or_zero();
    if dir == Vector3::ZERO {
        return DQuat::IDENTITY;
    }
    DQuat::from_rotation_arc(LOCAL_FORWARD, dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::dvec3;

    #[test]
    fn test_facing_rotation_is_unit() {
        let q = facing_rotation(dvec3(3.0, -2.0, 0.5));
        assert_abs_diff_eq!(q.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_facing_rotation_maps_forward() {
        let target = dvec3(-1.0, 0.0, 0.0);
        let q = facing_rotation(target);
        let mapped = q * LOCAL_FORWARD;
        assert!((mapped - target).length() < 1e-10);
    }

    #[test]
    fn test_facing_rotation_opposite_axis() {
        let q = facing_rotation(-LOCAL_FORWARD);
        let mapped = q * LOCAL_FORWARD;
        assert!((mapped + LOCAL_FORWARD).length() < 1e-10);
    }

    #[test]
    fn test_facing_rotation_zero_is_identity() {
        assert_eq!(facing_rotation(Vector3::ZERO), DQuat::IDENTITY);
    }
}

//! Object that travels along a path while a move input is held.

use log::{debug, trace};
use pw_curve::PathQuery;
use pw_math::{facing_rotation, DQuat, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Default progress gained per second.
pub const DEFAULT_SPEED: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FollowerState {
    /// Progress is zero and the object is hidden.
    Idle,
    /// Progress grows each tick.
    Advancing,
}

/// Where the follower is and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Point3,
    /// Unit vector the object faces: opposite to the direction of travel.
    pub facing: Vector3,
    /// Rotation turning the object's local +Z onto `facing`.
    pub rotation: DQuat,
}

#[derive(Debug, Clone)]
pub struct Follower {
    state: FollowerState,
    progress: f64,
    speed: f64,
    easing: Easing,
}

impl Follower {
    pub fn new(speed: f64, easing: Easing) -> Self {
        Self {
            state: FollowerState::Idle,
            progress: 0.0,
            speed,
            easing,
        }
    }

    pub fn state(&self) -> FollowerState {
        self.state
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Progress after easing; the value passed to the path query.
    pub fn eased_progress(&self) -> f64 {
        self.easing.apply(self.progress)
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Switch easing; takes effect on the next update, mid-traversal included.
    pub fn set_easing(&mut self, easing: Easing) {
        if easing != self.easing {
            debug!("Easing switched to {easing:?}");
        }
        self.easing = easing;
    }

    /// Advance one tick of `dt` seconds.
    ///
    /// Releasing `move_held` returns to [`FollowerState::Idle`] and resets
    /// progress. While advancing, the pose is `None` only when the path
    /// cannot be queried yet.
    pub fn update<Q: PathQuery + ?Sized>(
        &mut self,
        move_held: bool,
        dt: f64,
        path: &Q,
    ) -> Option<Pose> {
        if !move_held {
            if self.state == FollowerState::Advancing {
                debug!("Follower stopped at progress {:.3}", self.progress);
            }
            self.state = FollowerState::Idle;
            self.progress = 0.0;
            return None;
        }

        if self.state == FollowerState::Idle {
            debug!("Follower started");
            self.state = FollowerState::Advancing;
        }

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.progress = (self.progress + dt * self.speed).clamp(0.0, 1.0);

        let eased = self.eased_progress();
        match path.at(eased) {
            Ok(point) => {
                let facing = -point.tangent;
                trace!("Follower at {eased:.4}: {}", point.position);
                Some(Pose {
                    position: point.position,
                    facing,
                    rotation: facing_rotation(facing),
                })
            }
            Err(err) => {
                trace!("Follower has no pose: {err}");
                None
            }
        }
    }
}

impl Default for Follower {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED, Easing::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pw_curve::CurveModel;
    use pw_math::{dvec3, orient::LOCAL_FORWARD};

    fn straight_curve() -> CurveModel {
        let mut model = CurveModel::new();
        model.add_anchor(dvec3(0.0, 0.0, 0.0)).unwrap();
        model.add_anchor(dvec3(3.0, 0.0, 0.0)).unwrap();
        model
    }

    #[test]
    fn test_linear_progress_sequence() {
        let curve = straight_curve();
        let mut follower = Follower::new(1.0, Easing::Linear);
        assert_eq!(follower.state(), FollowerState::Idle);

        for expected in [0.25, 0.5, 0.75, 1.0, 1.0, 1.0] {
            follower.update(true, 0.25, &curve).unwrap();
            assert_eq!(follower.state(), FollowerState::Advancing);
            assert_abs_diff_eq!(follower.progress(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_release_resets_progress() {
        let curve = straight_curve();
        let mut follower = Follower::new(1.0, Easing::Linear);
        follower.update(true, 0.25, &curve);
        follower.update(true, 0.25, &curve);
        assert!(follower.update(false, 0.25, &curve).is_none());
        assert_eq!(follower.state(), FollowerState::Idle);
        assert_eq!(follower.progress(), 0.0);

        follower.update(true, 0.25, &curve);
        assert_abs_diff_eq!(follower.progress(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_pose_faces_backwards() {
        let curve = straight_curve();
        let mut follower = Follower::new(1.0, Easing::Linear);
        let pose = follower.update(true, 0.5, &curve).unwrap();
        assert!((pose.position - dvec3(1.5, 0.0, 0.0)).length() < 1e-9);
        assert!((pose.facing - dvec3(-1.0, 0.0, 0.0)).length() < 1e-9);
        assert!((pose.rotation * LOCAL_FORWARD - pose.facing).length() < 1e-9);
    }

    #[test]
    fn test_easing_applies_to_query() {
        let curve = straight_curve();
        let mut follower = Follower::new(1.0, Easing::QuarticOut);
        let pose = follower.update(true, 0.5, &curve).unwrap();
        // QuarticOut(0.5) = 0.9375 of the 3-unit line.
        assert!((pose.position.x - 2.8125).abs() < 1e-9);
    }

    #[test]
    fn test_switch_easing_mid_traversal() {
        let curve = straight_curve();
        let mut follower = Follower::new(1.0, Easing::Linear);
        follower.update(true, 0.25, &curve);
        follower.set_easing(Easing::CubicInOut);
        let pose = follower.update(true, 0.5, &curve).unwrap();
        assert_abs_diff_eq!(follower.progress(), 0.75, epsilon = 1e-12);
        assert!((pose.position.x - 3.0 * 0.9375).abs() < 1e-9);
    }

    #[test]
    fn test_empty_path_advances_without_pose() {
        let curve = CurveModel::new();
        let mut follower = Follower::new(1.0, Easing::Linear);
        assert!(follower.update(true, 0.25, &curve).is_none());
        assert_eq!(follower.state(), FollowerState::Advancing);
        assert_abs_diff_eq!(follower.progress(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_bad_dt_is_ignored() {
        let curve = straight_curve();
        let mut follower = Follower::new(1.0, Easing::Linear);
        follower.update(true, -1.0, &curve);
        follower.update(true, f64::NAN, &curve);
        assert_eq!(follower.progress(), 0.0);
    }
}

//! Pathwright follower: eased traversal of a curve by normalized progress.

pub mod easing;
pub mod follower;

pub use easing::Easing;
pub use follower::{Follower, FollowerState, Pose, DEFAULT_SPEED};

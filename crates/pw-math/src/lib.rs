pub mod orient;

pub use glam::{dvec3, DQuat, DVec3};
pub use orient::facing_rotation;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;

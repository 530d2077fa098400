//! Pathwright curve model: control points, cubic segments, sampled
//! arc-length lookups.

pub mod curve;
pub mod model;
pub mod query;
pub mod sampling;
pub mod store;
mod validate;

pub use curve::{CubicBezier, Curve};
pub use model::{CurveEdit, CurveModel, EditOutcome, SAMPLES_PER_SEGMENT};
pub use query::{PathPoint, PathQuery};
pub use store::{ControlPoint, ControlPointStore, ControlRole};

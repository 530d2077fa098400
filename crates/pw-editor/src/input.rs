//! Per-tick input, resolved by the host before the session sees it.

use pw_core::error::Result;
use pw_math::Point3;
use serde::{Deserialize, Serialize};

/// Everything the session reads in one tick.
///
/// Scene picking happens outside the core: `hover_position` is the surface
/// point under the pointer and `picked_point` is the position of the control
/// point marker under the pointer, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputSnapshot {
    /// Seconds since the previous tick.
    pub dt: f64,
    pub hover_position: Option<Point3>,
    pub picked_point: Option<Point3>,
    /// Placement mode; while active, dragging is disabled.
    pub edit_mode: bool,
    /// Place an anchor at the hover position (edge-triggered).
    pub place_pressed: bool,
    /// Drag the selected control point (level-triggered).
    pub drag_held: bool,
    /// Remove the trailing anchor (edge-triggered).
    pub undo_pressed: bool,
    /// Number key choosing an easing (1, 2 or 3).
    pub easing_key: Option<u8>,
    /// Advance the follower (level-triggered).
    pub move_held: bool,
}

/// Parse a replay script: a JSON array of snapshots, one per tick.
///
/// Keys that are not snapshot fields are rejected rather than ignored.
pub fn parse_script(text: &str) -> Result<Vec<InputSnapshot>> {
    Ok(serde_json::from_str(text)?)
}

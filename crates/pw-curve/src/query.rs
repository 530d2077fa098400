//! Arc-length parameterized lookups over a sampled curve.

use pw_core::error::{PathError, Result};
use pw_core::Tolerance;
use pw_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::model::CurveModel;

/// Position and unit travel direction at some distance along a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub position: Point3,
    /// Unit direction of travel, or zero where no direction is defined.
    pub tangent: Vector3,
}

/// Read access to a curve by normalized progress.
pub trait PathQuery {
    /// Point at fraction `t` of the total length; `t` is clamped to `[0, 1]`.
    fn at(&self, t: f64) -> Result<PathPoint>;

    /// Total arc length.
    fn total_length(&self) -> f64;
}

impl PathQuery for CurveModel {
    fn at(&self, t: f64) -> Result<PathPoint> {
        locate(self.samples(), self.cumulative_lengths(), t, self.tolerance())
    }

    fn total_length(&self) -> f64 {
        self.length()
    }
}

/// Find the point at fraction `t` of the length of the polyline `samples`,
/// whose running lengths are `cumulative`.
///
/// The bracketing gap is the first one whose end lies at or beyond the
/// target distance; the position is interpolated linearly inside it. A
/// zero-length gap keeps its end sample and takes the direction of the
/// nearest non-degenerate gap before it.
pub fn locate(
    samples: &[Point3],
    cumulative: &[f64],
    t: f64,
    tolerance: Tolerance,
) -> Result<PathPoint> {
    if samples.len() < 2 || cumulative.len() != samples.len() {
        return Err(PathError::InsufficientPoints {
            required: 2,
            found: samples.len().min(cumulative.len()),
        });
    }

    let last = samples.len() - 1;
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let target = cumulative[last] * t;

    let i = cumulative.partition_point(|&d| d < target).clamp(1, last);
    let gap = samples[i] - samples[i - 1];
    let gap_len = gap.length();

    if tolerance.is_zero(gap_len) {
        return Ok(PathPoint {
            position: samples[i],
            tangent: previous_direction(samples, i - 1, tolerance),
        });
    }

    let remaining = target - cumulative[i];
    let fraction = (remaining / gap_len).clamp(-1.0, 0.0);
    Ok(PathPoint {
        position: samples[i] + gap * fraction,
        tangent: gap / gap_len,
    })
}

/// Direction of the last non-degenerate gap ending at or before `end`.
fn previous_direction(samples: &[Point3], end: usize, tolerance: Tolerance) -> Vector3 {
    (1..=end)
        .rev()
        .map(|j| samples[j] - samples[j - 1])
        .find(|gap| !tolerance.is_zero(gap.length()))
        .map(|gap| gap.normalize())
        .unwrap_or(Vector3::ZERO)
}

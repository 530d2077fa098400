//! Cubic Bezier segment.

use pw_math::Point3;
use serde::{Deserialize, Serialize};

use super::Curve;

/// One cubic Bezier arc over `[0, 1]`.
///
/// `p0` and `p3` are the anchors the curve passes through; `p1` and `p2`
/// are handles shaping the tangents at either end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub p0: Point3,
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
}

impl CubicBezier {
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Segment from `start` to `end` with handles at 1/3 and 2/3 of the
    /// displacement. The result traces the straight line at uniform speed.
    pub fn straight(start: Point3, end: Point3) -> Self {
        let diff = end - start;
        Self::new(start, start + diff * (1.0 / 3.0), start + diff * (2.0 / 3.0), end)
    }
}

/// `B(t) = (1-t)^3 P0 + 3(1-t)^2 t P1 + 3(1-t) t^2 P2 + t^3 P3`
pub fn evaluate(t: f64, p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Point3 {
    let u = 1.0 - t;
    let tt = t * t;
    let uu = u * u;

    p0 * (uu * u) + p1 * (3.0 * uu * t) + p2 * (3.0 * u * tt) + p3 * (tt * t)
}

impl Curve for CubicBezier {
    fn point_at(&self, t: f64) -> Point3 {
        evaluate(t, self.p0, self.p1, self.p2, self.p3)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

//! Easing strategies mapping linear progress to perceived speed.

use serde::{Deserialize, Serialize};

/// Selectable easing curve. Every variant maps `0 -> 0` and `1 -> 1` and is
/// monotonic non-decreasing on `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Slow start and finish.
    CubicInOut,
    /// Fast start, long slow finish.
    QuarticOut,
}

impl Easing {
    pub const ALL: [Easing; 3] = [Easing::Linear, Easing::CubicInOut, Easing::QuarticOut];

    /// Strategy bound to number key `key` (1, 2 or 3).
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            1 => Some(Easing::Linear),
            2 => Some(Easing::CubicInOut),
            3 => Some(Easing::QuarticOut),
            _ => None,
        }
    }

    /// Map `x` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        match self {
            Easing::Linear => x,
            Easing::CubicInOut => {
                if x < 0.5 {
                    4.0 * x * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
                }
            }
            Easing::QuarticOut => 1.0 - (1.0 - x).powi(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fixed_endpoints() {
        for easing in Easing::ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_range_and_monotonic() {
        for easing in Easing::ALL {
            let mut prev = easing.apply(0.0);
            for i in 1..=1000 {
                let y = easing.apply(i as f64 / 1000.0);
                assert!((0.0..=1.0).contains(&y), "{easing:?} left [0, 1]: {y}");
                assert!(y >= prev, "{easing:?} decreased at step {i}");
                prev = y;
            }
        }
    }

    #[test]
    fn test_known_values() {
        assert_abs_diff_eq!(Easing::Linear.apply(0.3), 0.3);
        assert_abs_diff_eq!(Easing::CubicInOut.apply(0.25), 0.0625);
        assert_abs_diff_eq!(Easing::CubicInOut.apply(0.5), 0.5);
        assert_abs_diff_eq!(Easing::CubicInOut.apply(0.75), 0.9375);
        assert_abs_diff_eq!(Easing::QuarticOut.apply(0.5), 0.9375);
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::QuarticOut.apply(-1.0), 0.0);
        assert_eq!(Easing::CubicInOut.apply(2.0), 1.0);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Easing::from_key(1), Some(Easing::Linear));
        assert_eq!(Easing::from_key(2), Some(Easing::CubicInOut));
        assert_eq!(Easing::from_key(3), Some(Easing::QuarticOut));
        assert_eq!(Easing::from_key(4), None);
        assert_eq!(Easing::from_key(0), None);
    }
}

/// Distance tolerance for geometric comparisons.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for distance comparisons (in world units)
    pub linear: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;

    pub fn new(linear: f64) -> Self {
        Self { linear }
    }

    pub fn default_precision() -> Self {
        Self::new(Self::DEFAULT_LINEAR)
    }

    /// Tolerance for matching picked positions against stored points.
    pub fn pick(radius: f64) -> Self {
        Self::new(radius)
    }

    /// Check if a length is zero within tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() <= self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

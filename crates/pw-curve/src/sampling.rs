//! Uniform sampling of curves into polylines and polyline length tables.

use pw_math::Point3;

use crate::curve::Curve;

/// Parameter of sample `i` out of `count` uniformly spaced samples over
/// `[t_min, t_max]`, both ends included.
///
/// Computed per index so the last sample lands exactly on `t_max`.
pub fn parameter_at(i: usize, count: usize, (t_min, t_max): (f64, f64)) -> f64 {
    if count < 2 {
        return t_min;
    }
    if i + 1 == count {
        return t_max;
    }
    t_min + (t_max - t_min) * i as f64 / (count - 1) as f64
}

/// Evaluate `curve` at `count` uniformly spaced parameters.
pub fn sample_uniform(curve: &dyn Curve, count: usize) -> Vec<Point3> {
    let mut points = vec![Point3::ZERO; count];
    sample_into(curve, &mut points);
    points
}

/// Overwrite `out` with `out.len()` uniformly spaced samples of `curve`.
pub fn sample_into(curve: &dyn Curve, out: &mut [Point3]) {
    let domain = curve.domain();
    let count = out.len();
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = curve.point_at(parameter_at(i, count, domain));
    }
}

/// Rebuild `out` as the running sum of distances along `points`.
///
/// `out[0]` is zero and `out[i]` is the polyline length up to `points[i]`.
pub fn cumulative_lengths(points: &[Point3], out: &mut Vec<f64>) {
    out.clear();
    out.reserve(points.len());

    let mut total = 0.0;
    let mut prev = match points.first() {
        Some(&p) => p,
        None => return,
    };
    out.push(0.0);
    for &p in &points[1..] {
        total += (p - prev).length();
        out.push(total);
        prev = p;
    }
}

/// Total length of a polyline.
pub fn polyline_length(points: &[Point3]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).length()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CubicBezier;
    use pw_math::DVec3;

    #[test]
    fn test_parameter_at_hits_both_ends() {
        assert_eq!(parameter_at(0, 100, (0.0, 1.0)), 0.0);
        assert_eq!(parameter_at(99, 100, (0.0, 1.0)), 1.0);
        assert!((parameter_at(33, 100, (0.0, 1.0)) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_uniform_counts_and_ends() {
        let c = CubicBezier::new(
            DVec3::ZERO,
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(2.0, -1.0, 0.0),
            DVec3::new(3.0, 0.0, 0.0),
        );
        let points = sample_uniform(&c, 100);
        assert_eq!(points.len(), 100);
        assert_eq!(points[0], c.p0);
        assert_eq!(points[99], c.p3);
    }

    #[test]
    fn test_cumulative_lengths_line() {
        let points: Vec<_> = (0..5).map(|i| DVec3::new(i as f64, 0.0, 0.0)).collect();
        let mut table = Vec::new();
        cumulative_lengths(&points, &mut table);
        assert_eq!(table, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(polyline_length(&points), 4.0);
    }

    #[test]
    fn test_cumulative_lengths_empty() {
        let mut table = vec![1.0, 2.0];
        cumulative_lengths(&[], &mut table);
        assert!(table.is_empty());
    }
}

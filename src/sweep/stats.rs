//! Per-frame curve summaries.

/// Trapezoid-rule integral of `ys` sampled at `xs`.
pub fn trapezoid(xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    xs.windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| 0.5 * (x[1] - x[0]) * (y[0] + y[1]))
        .sum()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
    pub peak_x: f64,
    pub peak_y: f64,
    /// Area under the curve over the grid.
    pub area: f64,
}

impl FrameStats {
    pub fn of(xs: &[f64], ys: &[f64]) -> Self {
        let (peak_x, peak_y) = xs
            .iter()
            .copied()
            .zip(ys.iter().copied())
            .filter(|(_, y)| y.is_finite())
            .fold((f64::NAN, f64::NEG_INFINITY), |best, (x, y)| {
                if y > best.1 { (x, y) } else { best }
            });
        Self {
            peak_x,
            peak_y,
            area: trapezoid(xs, ys),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trapezoid_exact_for_lines() {
        let xs = [0.0, 0.5, 1.0];
        let ys = [0.0, 1.0, 2.0];
        assert!((trapezoid(&xs, &ys) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn peak_skips_non_finite() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [f64::INFINITY, 3.0, 1.0];
        let s = FrameStats::of(&xs, &ys);
        assert_eq!(s.peak_x, 1.0);
        assert_eq!(s.peak_y, 3.0);
    }

    #[test]
    fn empty_input() {
        let s = FrameStats::of(&[], &[]);
        assert_eq!(s.area, 0.0);
        assert!(s.peak_x.is_nan());
    }
}

//! Sample grids and parameter sequences.
//!
//! A `SampleGrid` is built once per sweep and shared by every frame, so all
//! curves of a sweep are evaluated at exactly the same x coordinates.

use super::SweepError;

/// Evenly spaced evaluation points over `[lo, hi]` (both endpoints included).
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGrid {
    lo: f64,
    hi: f64,
    xs: Vec<f64>,
}

impl SampleGrid {
    pub fn linspace(lo: f64, hi: f64, n: usize) -> Result<Self, SweepError> {
        if n == 0 {
            return Err(SweepError::EmptyGrid);
        }
        if !lo.is_finite() || !hi.is_finite() || hi < lo {
            return Err(SweepError::InvalidGridRange { lo, hi });
        }
        let xs = if n == 1 {
            vec![lo]
        } else {
            let step = (hi - lo) / (n - 1) as f64;
            // pin the last point so float drift never moves the right edge
            (0..n)
                .map(|i| if i + 1 == n { hi } else { lo + i as f64 * step })
                .collect()
        };
        Ok(Self { lo, hi, xs })
    }

    #[inline]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Spacing between neighbouring points (0 for a single-point grid).
    pub fn step(&self) -> f64 {
        if self.xs.len() < 2 {
            0.0
        } else {
            (self.hi - self.lo) / (self.xs.len() - 1) as f64
        }
    }

    #[inline]
    pub fn assert_curve_len(&self, curve: &[f64]) {
        debug_assert_eq!(curve.len(), self.len(), "curve length must match grid");
    }
}

/// `count` values `start, start + step, ...`.
///
/// Computed by index rather than accumulation, so `stepped(0.1, 0.1, 10)`
/// ends at 1.0 without drift.
pub fn stepped(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| start + i as f64 * step).collect()
}

/// Inclusive integer range `lo..=hi` with stride `step`, as floats.
/// A zero stride yields an empty range.
pub fn int_range(lo: i64, hi: i64, step: usize) -> Vec<f64> {
    if step == 0 {
        return Vec::new();
    }
    (lo..=hi).step_by(step).map(|v| v as f64).collect()
}

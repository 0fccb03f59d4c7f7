//! Density parameter tuples and their evaluation over a sample grid.
//!
//! The densities themselves come from statrs. A distribution is built
//! per frame from its parameter tuple; invalid tuples are not screened
//! beforehand and surface as `SweepError::Density` when the frame is drawn.

use std::fmt::Display;

use statrs::distribution::{Beta, ChiSquared, Continuous, FisherSnedecor, Normal, StudentsT};
use statrs::function::beta::ln_beta;

use super::SweepError;
use super::grid::SampleGrid;

/// One parameter tuple of a sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Density {
    Normal { mean: f64, std_dev: f64 },
    StudentT { dof: f64 },
    Beta { alpha: f64, beta: f64 },
    ChiSquared { dof: f64 },
    F { d1: f64, d2: f64 },
}

fn density_err(family: &'static str, err: impl Display) -> SweepError {
    SweepError::Density {
        family,
        reason: err.to_string(),
    }
}

/// F density in log space.
///
/// The closed form raises `d1 * x` to the power `d1`, which overflows long
/// before the degrees of freedom reach the hundreds.
#[derive(Clone, Copy, Debug)]
struct LogSpaceF {
    d1: f64,
    d2: f64,
    ln_norm: f64,
}

impl LogSpaceF {
    fn new(d1: f64, d2: f64) -> Result<Self, SweepError> {
        // statrs does the parameter screening
        FisherSnedecor::new(d1, d2).map_err(|e| density_err("F", e))?;
        Ok(Self {
            d1,
            d2,
            ln_norm: 0.5 * d2 * d2.ln() - ln_beta(0.5 * d1, 0.5 * d2),
        })
    }

    fn pdf(&self, x: f64) -> f64 {
        let (d1, d2) = (self.d1, self.d2);
        if x.is_nan() {
            return f64::NAN;
        }
        if x < 0.0 || x.is_infinite() {
            return 0.0;
        }
        if x == 0.0 {
            return if d1 < 2.0 {
                f64::INFINITY
            } else if d1 == 2.0 {
                // F(2, d2) starts at 1 for every d2
                1.0
            } else {
                0.0
            };
        }
        let d1x = d1 * x;
        let ln_pdf =
            0.5 * (d1 * d1x.ln() - (d1 + d2) * (d1x + d2).ln()) + self.ln_norm - x.ln();
        ln_pdf.exp()
    }
}

enum Evaluator {
    Dist(Box<dyn Continuous<f64, f64>>),
    F(LogSpaceF),
}

impl Evaluator {
    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        match self {
            Evaluator::Dist(d) => d.pdf(x),
            Evaluator::F(f) => f.pdf(x),
        }
    }
}

impl Density {
    pub fn family(&self) -> &'static str {
        match self {
            Density::Normal { .. } => "normal",
            Density::StudentT { .. } => "t",
            Density::Beta { .. } => "beta",
            Density::ChiSquared { .. } => "chi-squared",
            Density::F { .. } => "F",
        }
    }

    fn evaluator(&self) -> Result<Evaluator, SweepError> {
        let family = self.family();
        let dist: Box<dyn Continuous<f64, f64>> = match *self {
            Density::Normal { mean, std_dev } => {
                Box::new(Normal::new(mean, std_dev).map_err(|e| density_err(family, e))?)
            }
            Density::StudentT { dof } => {
                Box::new(StudentsT::new(0.0, 1.0, dof).map_err(|e| density_err(family, e))?)
            }
            Density::Beta { alpha, beta } => {
                Box::new(Beta::new(alpha, beta).map_err(|e| density_err(family, e))?)
            }
            Density::ChiSquared { dof } => {
                Box::new(ChiSquared::new(dof).map_err(|e| density_err(family, e))?)
            }
            Density::F { d1, d2 } => return Ok(Evaluator::F(LogSpaceF::new(d1, d2)?)),
        };
        Ok(Evaluator::Dist(dist))
    }

    /// Density at a single point.
    pub fn pdf(&self, x: f64) -> Result<f64, SweepError> {
        Ok(self.evaluator()?.pdf(x))
    }

    /// Density evaluated at every grid point, in grid order.
    pub fn curve(&self, grid: &SampleGrid) -> Result<Vec<f64>, SweepError> {
        let eval = self.evaluator()?;
        let curve: Vec<f64> = grid.xs().iter().map(|&x| eval.pdf(x)).collect();
        grid.assert_curve_len(&curve);
        Ok(curve)
    }
}

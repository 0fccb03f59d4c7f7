//! The five density sweeps, with their fixed ranges, limits and styling.

use clap::ValueEnum;

use super::SweepError;
use super::animator::{Animation, Epilogue, LegendPolicy, LineStyle, Mode, Sweep, SweepAnimator};
use super::density::Density;
use super::dual::DualPanelAnimator;
use super::grid::{SampleGrid, int_range, stepped};
use super::palette::{Colormap, Palette, Rgb};
use super::surface::{Annotation, AxisLimits};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SweepKind {
    Normal,
    T,
    Beta,
    ChiSquared,
    F,
}

impl SweepKind {
    pub fn build(self, samples: usize) -> Result<Box<dyn Animation>, SweepError> {
        Ok(match self {
            SweepKind::Normal => {
                let (top, bottom) = normal_panels(samples)?;
                Box::new(DualPanelAnimator::new("Normal Distributions", top, bottom))
            }
            SweepKind::T => Box::new(SweepAnimator::new(t_sweep(samples)?)),
            SweepKind::Beta => Box::new(SweepAnimator::new(beta_sweep(samples)?)),
            SweepKind::ChiSquared => Box::new(SweepAnimator::new(chi_squared_sweep(samples)?)),
            SweepKind::F => Box::new(SweepAnimator::new(f_sweep(samples)?)),
        })
    }
}

/// Shortest decimal form with at most two fractional digits.
pub fn format_compact(x: f64) -> String {
    let mut s = format!("{:.2}", x);
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" { "0".to_string() } else { s }
}

fn sigma_label(d: &Density) -> String {
    match d {
        Density::Normal { std_dev, .. } => format!("σ = {}", format_compact(*std_dev)),
        other => format!("{other:?}"),
    }
}

fn mu_label(d: &Density) -> String {
    match d {
        Density::Normal { mean, .. } => format!("μ = {}", format_compact(*mean)),
        other => format!("{other:?}"),
    }
}

fn dof_label(d: &Density) -> String {
    match d {
        Density::StudentT { dof } | Density::ChiSquared { dof } => {
            format!("ν = {}", format_compact(*dof))
        }
        other => format!("{other:?}"),
    }
}

fn beta_label(d: &Density) -> String {
    match d {
        Density::Beta { alpha, beta } => format!(
            "α = {}, β = {}",
            format_compact(*alpha),
            format_compact(*beta)
        ),
        other => format!("{other:?}"),
    }
}

fn f_label(d: &Density) -> String {
    match d {
        Density::F { d1, d2 } => format!("n₁ = {}, n₂ = {}", format_compact(*d1), format_compact(*d2)),
        other => format!("{other:?}"),
    }
}

/// σ sweep on top (μ = 0), μ sweep below (σ = 1).
pub fn normal_panels(samples: usize) -> Result<(Sweep, Sweep), SweepError> {
    let sigmas = int_range(1, 5, 1)
        .into_iter()
        .map(|std_dev| Density::Normal { mean: 0.0, std_dev })
        .collect();
    let mut top = Sweep::new(
        "σ sweep (μ = 0)",
        SampleGrid::linspace(-15.0, 15.0, samples)?,
        sigmas,
        sigma_label,
        AxisLimits::new([-15.0, 15.0], [-0.02, 0.43]),
        Mode::Replace,
    );
    top.style = LineStyle::width(3.0);

    let means = int_range(0, 4, 1)
        .into_iter()
        .map(|mean| Density::Normal { mean, std_dev: 1.0 })
        .collect();
    let mut bottom = Sweep::new(
        "μ sweep (σ = 1)",
        SampleGrid::linspace(-3.0, 7.0, samples)?,
        means,
        mu_label,
        AxisLimits::new([-3.0, 7.0], [-0.02, 0.45]),
        Mode::Replace,
    );
    bottom.style = LineStyle::width(3.0);
    Ok((top, bottom))
}

/// Degrees of freedom below one, then up to 30, then past 30 where the t
/// curve is hard to tell from the standard normal drawn at the end.
pub fn t_dofs() -> Vec<f64> {
    let mut dofs = stepped(0.1, 0.1, 10);
    dofs.extend(int_range(3, 30, 3));
    dofs.extend(int_range(33, 60, 3));
    dofs
}

pub fn t_sweep(samples: usize) -> Result<Sweep, SweepError> {
    let dofs = t_dofs();
    let (first, last) = (dofs[0], dofs[dofs.len() - 1]);
    let mut sweep = Sweep::new(
        "T Distributions",
        SampleGrid::linspace(-6.0, 6.0, samples)?,
        dofs.into_iter().map(|dof| Density::StudentT { dof }).collect(),
        dof_label,
        AxisLimits::new([-6.0, 6.0], [0.0, 0.41]),
        Mode::Overlay,
    );
    sweep.legend = LegendPolicy::Latest;
    sweep.palette = Palette::gradient(Colormap::YlGnBu, 0.3, 1.0);
    sweep.style = LineStyle::width(2.0);
    sweep.epilogue = Some(Epilogue {
        density: Density::Normal {
            mean: 0.0,
            std_dev: 1.0,
        },
        label: "Z Distribution".into(),
        color: Rgb::RED,
        width: 2.5,
    });
    sweep.annotation = Some(Annotation::centered(
        4.0,
        0.25,
        format!("{} ≤ d.f. ≤ {}", format_compact(first), format_compact(last)),
    ));
    Ok(sweep)
}

pub const BETA_ALPHA: f64 = 9.0;

pub fn beta_sweep(samples: usize) -> Result<Sweep, SweepError> {
    let betas = int_range(1, 30, 1);
    let (first, last) = (betas[0], betas[betas.len() - 1]);
    let mut sweep = Sweep::new(
        "β Distributions",
        SampleGrid::linspace(0.0, 1.0, samples)?,
        betas
            .into_iter()
            .map(|beta| Density::Beta {
                alpha: BETA_ALPHA,
                beta,
            })
            .collect(),
        beta_label,
        AxisLimits::new([0.0, 1.0], [0.0, 8.8]),
        Mode::Overlay,
    );
    sweep.palette = Palette::gradient(Colormap::Oranges, 0.3, 1.0);
    sweep.style = LineStyle::width(1.5);
    sweep.annotation = Some(Annotation::centered(
        0.5,
        6.5,
        format!(
            "α = {}, {} ≤ β ≤ {}",
            format_compact(BETA_ALPHA),
            format_compact(first),
            format_compact(last)
        ),
    ));
    Ok(sweep)
}

pub fn chi_squared_sweep(samples: usize) -> Result<Sweep, SweepError> {
    let dofs = int_range(4, 31, 1);
    let (first, last) = (dofs[0], dofs[dofs.len() - 1]);
    let mut sweep = Sweep::new(
        "χ² Distributions",
        SampleGrid::linspace(0.0, 50.0, samples)?,
        dofs.into_iter().map(|dof| Density::ChiSquared { dof }).collect(),
        dof_label,
        AxisLimits::new([0.0, 50.0], [0.0, 0.21]),
        Mode::Overlay,
    );
    sweep.palette = Palette::gradient(Colormap::Blues, 0.5, 1.0);
    sweep.style = LineStyle::width(1.5);
    sweep.annotation = Some(Annotation::centered(
        30.0,
        0.15,
        format!("{} ≤ d.f. ≤ {}", format_compact(first), format_compact(last)),
    ));
    Ok(sweep)
}

pub const F_NUMERATOR_DOF: f64 = 750.0;

/// Numerator dof fixed, denominator dof grows; the curve narrows around 1.
pub fn f_sweep(samples: usize) -> Result<Sweep, SweepError> {
    let d2s = int_range(150, 1500, 50);
    let (first, last) = (d2s[0], d2s[d2s.len() - 1]);
    let mut sweep = Sweep::new(
        "F Distributions",
        SampleGrid::linspace(0.0, 2.0, samples)?,
        d2s.into_iter()
            .map(|d2| Density::F {
                d1: F_NUMERATOR_DOF,
                d2,
            })
            .collect(),
        f_label,
        AxisLimits::new([0.5, 1.5], [0.0, 7.5]),
        Mode::Overlay,
    );
    sweep.palette = Palette::gradient(Colormap::Twilight, 0.3, 0.9);
    sweep.style = LineStyle {
        width: 1.8,
        alpha: 0.8,
    };
    // left-aligned, starting at x = 0.8
    sweep.annotation = Some(Annotation::left(
        0.8,
        6.7,
        format!(
            "n₁ = {}, {} ≤ n₂ ≤ {}",
            format_compact(F_NUMERATOR_DOF),
            format_compact(first),
            format_compact(last)
        ),
    ));
    Ok(sweep)
}

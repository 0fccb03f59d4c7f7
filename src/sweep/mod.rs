//! Animated sweeps over density parameters.

pub mod animator;
pub mod density;
pub mod dual;
pub mod grid;
pub mod palette;
pub mod presets;
pub mod stats;
pub mod surface;

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SweepError {
    #[error("{family} density rejected its parameters: {reason}")]
    Density { family: &'static str, reason: String },
    #[error("sample grid needs at least one point")]
    EmptyGrid,
    #[error("invalid sample grid range [{lo}, {hi}]")]
    InvalidGridRange { lo: f64, hi: f64 },
}

pub use animator::{Animation, Frame, Mode, StepReport, Sweep, SweepAnimator};
pub use density::Density;
pub use dual::DualPanelAnimator;
pub use grid::SampleGrid;
pub use presets::SweepKind;
pub use surface::{AxisLimits, LegendState, RenderSurface};

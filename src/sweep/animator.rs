//! Sweep animator: one frame per parameter tuple, pulled by the host.
//!
//! The host (GUI repaint loop or headless timer) decides when to call
//! `step`. Each call evaluates one curve, writes it to the owned
//! `RenderSurface`, refreshes the legend and flushes. Once the sequence is
//! exhausted the optional epilogue curve and annotation are drawn exactly
//! once; they are not frames.

use super::SweepError;
use super::density::Density;
use super::grid::SampleGrid;
use super::palette::{Palette, Rgb};
use super::stats::FrameStats;
use super::surface::{Annotation, AxisLimits, LegendEntry, LegendState, PlotLine, RenderSurface};

pub type LabelFn = fn(&Density) -> String;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// One line, overwritten every frame.
    Replace,
    /// Every frame adds a line that stays.
    Overlay,
}

/// Legend behaviour in overlay mode. Replace mode always shows one entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendPolicy {
    /// Only the newest curve is listed.
    #[default]
    Latest,
    /// Every curve drawn so far is listed.
    Cumulative,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub width: f32,
    pub alpha: f32,
}

impl LineStyle {
    pub const fn width(width: f32) -> Self {
        Self { width, alpha: 1.0 }
    }
}

/// Extra curve drawn after the last frame.
#[derive(Clone, Debug)]
pub struct Epilogue {
    pub density: Density,
    pub label: String,
    pub color: Rgb,
    pub width: f32,
}

#[derive(Clone)]
pub struct Sweep {
    pub title: String,
    pub x_label: String,
    pub grid: SampleGrid,
    pub params: Vec<Density>,
    pub label: LabelFn,
    pub limits: AxisLimits,
    pub mode: Mode,
    pub legend: LegendPolicy,
    pub palette: Palette,
    pub style: LineStyle,
    pub epilogue: Option<Epilogue>,
    pub annotation: Option<Annotation>,
}

impl Sweep {
    pub fn new(
        title: impl Into<String>,
        grid: SampleGrid,
        params: Vec<Density>,
        label: LabelFn,
        limits: AxisLimits,
        mode: Mode,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: "x".into(),
            grid,
            params,
            label,
            limits,
            mode,
            legend: LegendPolicy::default(),
            palette: Palette::Cycle,
            style: LineStyle::width(2.0),
            epilogue: None,
            annotation: None,
        }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// One rendered step of a sweep.
#[derive(Clone, Debug)]
pub struct Frame {
    pub index: usize,
    pub params: Density,
    pub label: String,
    pub curve: Vec<f64>,
    pub stats: FrameStats,
}

/// What one host tick produced.
#[derive(Clone, Debug)]
pub struct StepReport {
    pub index: usize,
    pub frames: Vec<Frame>,
}

/// The seam between hosts and animators.
pub trait Animation {
    fn title(&self) -> &str;
    /// Number of host ticks needed to play everything.
    fn frame_count(&self) -> usize;
    fn frames_done(&self) -> usize;
    fn is_finished(&self) -> bool;
    fn surfaces(&self) -> Vec<&RenderSurface>;
    /// Advance by one tick. `Ok(None)` once playback is complete.
    fn step(&mut self) -> Result<Option<StepReport>, SweepError>;
}

pub struct SweepAnimator {
    sweep: Sweep,
    surface: RenderSurface,
    cursor: usize,
    finished: bool,
    halted: bool,
}

impl SweepAnimator {
    pub fn new(sweep: Sweep) -> Self {
        let surface = RenderSurface::new(sweep.title.clone(), sweep.limits)
            .with_labels(sweep.x_label.clone(), "Density");
        Self {
            sweep,
            surface,
            cursor: 0,
            finished: false,
            halted: false,
        }
    }

    pub fn sweep(&self) -> &Sweep {
        &self.sweep
    }

    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    pub fn remaining(&self) -> usize {
        self.sweep.len().saturating_sub(self.cursor)
    }

    fn points(&self, curve: &[f64]) -> Vec<[f64; 2]> {
        self.sweep
            .grid
            .xs()
            .iter()
            .zip(curve)
            .map(|(&x, &y)| [x, y])
            .collect()
    }

    fn next_legend(&self, entry: LegendEntry) -> LegendState {
        match (self.sweep.mode, self.sweep.legend) {
            (Mode::Overlay, LegendPolicy::Cumulative) => self.surface.legend().appended(entry),
            _ => LegendState::single(entry),
        }
    }

    /// Produce the next frame, or `None` when the sequence is exhausted.
    ///
    /// An error halts the animator; later calls return `Ok(None)`.
    pub fn next_frame(&mut self) -> Result<Option<Frame>, SweepError> {
        if self.halted {
            return Ok(None);
        }
        if self.cursor >= self.sweep.len() {
            self.finish()?;
            return Ok(None);
        }
        match self.render_frame() {
            Ok(frame) => Ok(Some(frame)),
            Err(err) => {
                self.halted = true;
                Err(err)
            }
        }
    }

    fn render_frame(&mut self) -> Result<Frame, SweepError> {
        let index = self.cursor;
        let params = self.sweep.params[index];
        let count = self.sweep.len();

        if self.sweep.mode == Mode::Replace {
            self.surface.clear_legend();
        }

        let curve = params.curve(&self.sweep.grid)?;
        let label = (self.sweep.label)(&params);
        let color = self.sweep.palette.color(index, count);
        let line = PlotLine {
            name: label.clone(),
            points: self.points(&curve),
            color,
            width: self.sweep.style.width,
            alpha: self.sweep.style.alpha,
        };
        match self.sweep.mode {
            Mode::Replace => self.surface.replace_line(line),
            Mode::Overlay => self.surface.push_line(line),
        }

        let legend = self.next_legend(LegendEntry {
            text: label.clone(),
            color,
        });
        self.surface.set_legend(legend);
        self.surface.flush();
        self.cursor += 1;

        let stats = FrameStats::of(self.sweep.grid.xs(), &curve);
        Ok(Frame {
            index,
            params,
            label,
            curve,
            stats,
        })
    }

    /// Draw the epilogue curve and annotation. Runs once.
    pub(crate) fn finish(&mut self) -> Result<(), SweepError> {
        if self.finished || self.halted {
            return Ok(());
        }
        if let Some(epi) = self.sweep.epilogue.clone() {
            let curve = epi.density.curve(&self.sweep.grid).inspect_err(|_| {
                self.halted = true;
            })?;
            self.surface.push_line(PlotLine {
                name: epi.label.clone(),
                points: self.points(&curve),
                color: epi.color,
                width: epi.width,
                alpha: 1.0,
            });
            let legend = self.next_legend(LegendEntry {
                text: epi.label,
                color: epi.color,
            });
            self.surface.set_legend(legend);
        }
        if let Some(note) = self.sweep.annotation.clone() {
            self.surface.annotate(note);
        }
        self.finished = true;
        Ok(())
    }
}

impl Animation for SweepAnimator {
    fn title(&self) -> &str {
        &self.sweep.title
    }

    fn frame_count(&self) -> usize {
        self.sweep.len()
    }

    fn frames_done(&self) -> usize {
        self.cursor
    }

    fn is_finished(&self) -> bool {
        self.finished || self.halted
    }

    fn surfaces(&self) -> Vec<&RenderSurface> {
        vec![&self.surface]
    }

    fn step(&mut self) -> Result<Option<StepReport>, SweepError> {
        Ok(self.next_frame()?.map(|frame| StepReport {
            index: frame.index,
            frames: vec![frame],
        }))
    }
}

impl Iterator for SweepAnimator {
    type Item = Result<Frame, SweepError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_frame().transpose()
    }
}

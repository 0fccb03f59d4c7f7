//! Two sweeps sharing one frame index.
//!
//! Both panels advance on the same tick. When one sequence is shorter, its
//! panel is left as is for the remaining ticks while the other keeps going.

use super::SweepError;
use super::animator::{Animation, StepReport, Sweep, SweepAnimator};
use super::surface::RenderSurface;

pub struct DualPanelAnimator {
    title: String,
    panels: [SweepAnimator; 2],
    index: usize,
    finished: bool,
    halted: bool,
}

impl DualPanelAnimator {
    pub fn new(title: impl Into<String>, top: Sweep, bottom: Sweep) -> Self {
        Self {
            title: title.into(),
            panels: [SweepAnimator::new(top), SweepAnimator::new(bottom)],
            index: 0,
            finished: false,
            halted: false,
        }
    }

    pub fn panel(&self, i: usize) -> &SweepAnimator {
        &self.panels[i]
    }

    fn total(&self) -> usize {
        self.panels.iter().map(|p| p.sweep().len()).max().unwrap_or(0)
    }

    fn try_step(&mut self) -> Result<Option<StepReport>, SweepError> {
        if self.index >= self.total() {
            for panel in &mut self.panels {
                panel.finish()?;
            }
            self.finished = true;
            return Ok(None);
        }
        let mut frames = Vec::with_capacity(2);
        for panel in &mut self.panels {
            if panel.remaining() == 0 {
                continue;
            }
            if let Some(frame) = panel.next_frame()? {
                frames.push(frame);
            }
        }
        let report = StepReport {
            index: self.index,
            frames,
        };
        self.index += 1;
        Ok(Some(report))
    }
}

impl Animation for DualPanelAnimator {
    fn title(&self) -> &str {
        &self.title
    }

    fn frame_count(&self) -> usize {
        self.total()
    }

    fn frames_done(&self) -> usize {
        self.index
    }

    fn is_finished(&self) -> bool {
        self.finished || self.halted
    }

    fn surfaces(&self) -> Vec<&RenderSurface> {
        self.panels.iter().map(|p| p.surface()).collect()
    }

    fn step(&mut self) -> Result<Option<StepReport>, SweepError> {
        if self.is_finished() {
            return Ok(None);
        }
        self.try_step().inspect_err(|_| self.halted = true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::animator::Mode;
    use crate::sweep::density::Density;
    use crate::sweep::grid::SampleGrid;
    use crate::sweep::surface::AxisLimits;

    fn label(d: &Density) -> String {
        format!("{d:?}")
    }

    fn sweep(n: usize) -> Sweep {
        let grid = SampleGrid::linspace(-3.0, 7.0, 100).unwrap();
        let params = (0..n)
            .map(|m| Density::Normal {
                mean: m as f64,
                std_dev: 1.0,
            })
            .collect();
        Sweep::new(
            "panel",
            grid,
            params,
            label,
            AxisLimits::new([-3.0, 7.0], [-0.02, 0.45]),
            Mode::Replace,
        )
    }

    #[test]
    fn equal_lengths_step_together() {
        let mut anim = DualPanelAnimator::new("dual", sweep(5), sweep(5));
        let mut ticks = 0;
        while let Some(report) = anim.step().unwrap() {
            assert_eq!(report.frames.len(), 2);
            ticks += 1;
        }
        assert_eq!(ticks, 5);
        assert!(anim.is_finished());
    }

    #[test]
    fn shorter_panel_is_skipped_once_exhausted() {
        let mut anim = DualPanelAnimator::new("dual", sweep(2), sweep(4));
        assert_eq!(anim.frame_count(), 4);
        let sizes: Vec<usize> = std::iter::from_fn(|| anim.step().unwrap())
            .map(|r| r.frames.len())
            .collect();
        assert_eq!(sizes, vec![2, 2, 1, 1]);
        assert_eq!(anim.panel(0).surface().flushes(), 2);
        assert_eq!(anim.panel(1).surface().flushes(), 4);
        // the short panel still shows its last frame
        assert_eq!(anim.panel(0).surface().lines().len(), 1);
        assert_eq!(anim.panel(0).surface().lines()[0].name, label(&Density::Normal {
            mean: 1.0,
            std_dev: 1.0,
        }));
    }

    #[test]
    fn failing_panel_halts_both() {
        let mut bad = sweep(3);
        bad.params[1] = Density::Normal {
            mean: 0.0,
            std_dev: 0.0,
        };
        let mut anim = DualPanelAnimator::new("dual", sweep(3), bad);
        assert!(anim.step().is_ok());
        assert!(anim.step().is_err());
        assert!(anim.is_finished());
        assert!(anim.step().unwrap().is_none());
    }
}

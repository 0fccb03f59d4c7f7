//! Render surface: the canvas a sweep draws into.
//!
//! The animator owns its surface for the whole run and is the only writer.
//! Hosts read it after each step to paint the current frame.

use super::palette::Rgb;

/// Axis range fixed for the lifetime of a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLimits {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisLimits {
    pub const fn new(x: [f64; 2], y: [f64; 2]) -> Self {
        Self {
            x_min: x[0],
            x_max: x[1],
            y_min: y[0],
            y_max: y[1],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotLine {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub color: Rgb,
    pub width: f32,
    pub alpha: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub text: String,
    pub color: Rgb,
}

/// Legend contents. Replaced as a whole on every frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegendState {
    entries: Vec<LegendEntry>,
}

impl LegendState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(entry: LegendEntry) -> Self {
        Self {
            entries: vec![entry],
        }
    }

    /// New legend holding this one's entries followed by `entry`.
    pub fn appended(&self, entry: LegendEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|e| e.text == text)
    }
}

/// Which point of the text box sits at the annotation coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Center,
    Left,
}

/// Free text placed in data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: TextAnchor,
}

impl Annotation {
    pub fn centered(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            anchor: TextAnchor::Center,
        }
    }

    /// Text starting at `x`.
    pub fn left(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            anchor: TextAnchor::Left,
            ..Self::centered(x, y, text)
        }
    }
}

#[derive(Clone, Debug)]
pub struct RenderSurface {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    limits: AxisLimits,
    lines: Vec<PlotLine>,
    legend: LegendState,
    annotation: Option<Annotation>,
    flushes: usize,
}

impl RenderSurface {
    pub fn new(title: impl Into<String>, limits: AxisLimits) -> Self {
        Self {
            title: title.into(),
            x_label: "x".into(),
            y_label: "Density".into(),
            limits,
            lines: Vec::new(),
            legend: LegendState::empty(),
            annotation: None,
            flushes: 0,
        }
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    #[inline]
    pub fn limits(&self) -> AxisLimits {
        self.limits
    }

    #[inline]
    pub fn lines(&self) -> &[PlotLine] {
        &self.lines
    }

    #[inline]
    pub fn legend(&self) -> &LegendState {
        &self.legend
    }

    #[inline]
    pub fn annotation(&self) -> Option<&Annotation> {
        self.annotation.as_ref()
    }

    /// Number of frames flushed to this surface so far.
    #[inline]
    pub fn flushes(&self) -> usize {
        self.flushes
    }

    /// Overwrite the single active line.
    pub fn replace_line(&mut self, line: PlotLine) {
        self.lines.clear();
        self.lines.push(line);
    }

    /// Add a line that stays for the rest of the run.
    pub fn push_line(&mut self, line: PlotLine) {
        self.lines.push(line);
    }

    pub fn set_legend(&mut self, legend: LegendState) {
        self.legend = legend;
    }

    pub fn clear_legend(&mut self) {
        self.legend = LegendState::empty();
    }

    pub fn annotate(&mut self, annotation: Annotation) {
        self.annotation = Some(annotation);
    }

    /// Mark the current contents as a completed frame.
    pub fn flush(&mut self) {
        self.flushes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str) -> PlotLine {
        PlotLine {
            name: name.into(),
            points: vec![[0.0, 0.0], [1.0, 1.0]],
            color: Rgb::RED,
            width: 1.0,
            alpha: 1.0,
        }
    }

    #[test]
    fn replace_keeps_one_line() {
        let mut s = RenderSurface::new("t", AxisLimits::new([0.0, 1.0], [0.0, 1.0]));
        s.replace_line(line("a"));
        s.replace_line(line("b"));
        assert_eq!(s.lines().len(), 1);
        assert_eq!(s.lines()[0].name, "b");
    }

    #[test]
    fn push_accumulates() {
        let mut s = RenderSurface::new("t", AxisLimits::new([0.0, 1.0], [0.0, 1.0]));
        s.push_line(line("a"));
        s.push_line(line("b"));
        assert_eq!(s.lines().len(), 2);
    }

    #[test]
    fn appended_legend_leaves_original_untouched() {
        let first = LegendState::single(LegendEntry {
            text: "a".into(),
            color: Rgb::RED,
        });
        let second = first.appended(LegendEntry {
            text: "b".into(),
            color: Rgb::RED,
        });
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
        assert!(second.contains("a") && second.contains("b"));
    }
}

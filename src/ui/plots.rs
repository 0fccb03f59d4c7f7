use egui::{Align2, Color32, RichText};
use egui_plot::{Corner, Legend, Line, Plot, PlotBounds, PlotPoint, PlotPoints, Text};

use crate::sweep::palette::Rgb;
use crate::sweep::surface::{PlotLine, RenderSurface, TextAnchor};

pub fn color32(c: Rgb, alpha: f32) -> Color32 {
    Color32::from_rgb(c.0, c.1, c.2).gamma_multiply(alpha.clamp(0.0, 1.0))
}

pub fn text_align(anchor: TextAnchor) -> Align2 {
    match anchor {
        TextAnchor::Center => Align2::CENTER_CENTER,
        TextAnchor::Left => Align2::LEFT_CENTER,
    }
}

/// Lines not listed in the surface legend get an empty name, which keeps
/// them out of the plot legend.
fn to_line(surface: &RenderSurface, line: &PlotLine) -> Line<'static> {
    let name = if surface.legend().contains(&line.name) {
        line.name.clone()
    } else {
        String::new()
    };
    Line::new(name, PlotPoints::from(line.points.clone()))
        .color(color32(line.color, line.alpha))
        .width(line.width)
}

/// Draw one surface with its fixed axis range; zoom and drag are disabled
/// so the range never changes mid-sweep.
pub fn surface_plot(ui: &mut egui::Ui, id: &str, surface: &RenderSurface, height: f32) {
    let limits = surface.limits();

    Plot::new(id)
        .height(height)
        .legend(Legend::default().position(Corner::RightTop))
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .x_axis_label(surface.x_label.clone())
        .y_axis_label(surface.y_label.clone())
        .y_axis_formatter(|mark, _range| format!("{:.2}", mark.value))
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [limits.x_min, limits.y_min],
                [limits.x_max, limits.y_max],
            ));
            for line in surface.lines() {
                plot_ui.line(to_line(surface, line));
            }
            if let Some(note) = surface.annotation() {
                plot_ui.text(Text::new(
                    "",
                    PlotPoint::new(note.x, note.y),
                    RichText::new(note.text.as_str()).size(15.0).strong(),
                )
                .anchor(text_align(note.anchor)));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_map_to_egui_alignment() {
        assert_eq!(text_align(TextAnchor::Center), Align2::CENTER_CENTER);
        assert_eq!(text_align(TextAnchor::Left), Align2::LEFT_CENTER);
    }
}

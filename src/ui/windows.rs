use egui::{Align, CentralPanel, Layout, TopBottomPanel};

use crate::sweep::Animation;
use crate::ui::plots::surface_plot;
use crate::ui::viewdata::{PlaybackMeta, PlaybackState, UiAction};

/// === Main window ===
pub fn main_window(ctx: &egui::Context, anim: &dyn Animation, meta: &PlaybackMeta) -> UiAction {
    let mut action = UiAction::None;

    TopBottomPanel::top("top").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(anim.title());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                match meta.state {
                    PlaybackState::NotStarted => {
                        if ui.button("Start").clicked() {
                            action = UiAction::Start;
                        }
                    }
                    PlaybackState::Finished | PlaybackState::Failed(_) => {
                        if ui.button("Close").clicked() {
                            action = UiAction::Close;
                        }
                    }
                    PlaybackState::Playing => {}
                }
                ui.label(meta.progress_text());
            });
        });
    });

    CentralPanel::default().show(ctx, |ui| {
        let surfaces = anim.surfaces();
        let n = surfaces.len().max(1) as f32;
        let spacing = 28.0;
        let height = ((ui.available_height() - spacing * n) / n).max(120.0);
        for (i, surface) in surfaces.iter().enumerate() {
            if surfaces.len() > 1 {
                ui.label(surface.title.as_str());
            }
            surface_plot(ui, &format!("surface_{i}"), surface, height);
            if i + 1 < surfaces.len() {
                ui.separator();
            }
        }
    });

    action
}

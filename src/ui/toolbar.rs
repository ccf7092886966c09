//! Toolbar mit szenenspezifischen Bedienelementen.

use crate::app::{AppIntent, AppState, SceneKind};
use crate::core::EvalStrategy;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.active_scene {
                SceneKind::Bezier => {
                    ui.label("Auswertung:");
                    let current = state.bezier.strategy();
                    for (strategy, label) in [
                        (EvalStrategy::Matrix, "Matrix (SIMD)"),
                        (EvalStrategy::Bernstein, "Bernstein"),
                    ] {
                        if ui
                            .add(egui::Button::new(label).selected(current == strategy))
                            .clicked()
                        {
                            events.push(AppIntent::EvalStrategySelected { strategy });
                        }
                    }
                }
                SceneKind::KeyFrames => {
                    let playing = state.keyframes.playback().is_playing();
                    let label = if playing { "Pause (Space)" } else { "Play (Space)" };
                    if ui.add(egui::Button::new(label).selected(playing)).clicked() {
                        events.push(AppIntent::PlaybackToggleRequested);
                    }
                    if ui.button("Restart (←)").clicked() {
                        events.push(AppIntent::PlaybackRestartRequested);
                    }
                }
            }
        });
    });

    events
}

//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, SceneKind};
use crate::core::DragState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(state.active_scene.label());

            ui.separator();

            match state.active_scene {
                SceneKind::Bezier => {
                    let drag = match state.bezier.drag_state() {
                        DragState::Idle => "Idle".to_string(),
                        DragState::Dragging(index) => format!("Dragging p{}", index),
                    };
                    ui.label(format!("Drag: {}", drag));

                    ui.separator();

                    let tessellation = state.bezier.tessellation();
                    ui.label(format!(
                        "Vertices: {} | Segmente: {}",
                        tessellation.vertex_count(),
                        tessellation.segment_count()
                    ));
                }
                SceneKind::KeyFrames => {
                    let playback = state.keyframes.playback();
                    ui.label(format!(
                        "Milliseconds {:.0} / {:.0}",
                        playback.time_ms(),
                        playback.duration_ms()
                    ));

                    ui.separator();

                    ui.label(if playback.is_playing() { "▶" } else { "⏸" });

                    ui.separator();

                    ui.label(format!(
                        "Key-Frames: {}",
                        state.keyframes.track().frames().len()
                    ));
                }
            }

            ui.separator();

            ui.label(format!(
                "Viewport: {:.0}x{:.0}",
                state.camera.viewport_size.x, state.camera.viewport_size.y
            ));
        });
    });
}

//! Handler für Viewport und Szenenwahl.

use crate::app::scenes::{KeyFrameScene, SceneKind};
use crate::app::AppState;
use glam::Vec2;

/// Aktualisiert die Viewport-Größe der Kamera.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.camera.resize(Vec2::from_array(size));
}

/// Wechselt die aktive Szene.
pub fn set_active_scene(state: &mut AppState, kind: SceneKind) {
    if state.active_scene != kind {
        log::info!("Szene: {}", kind.label());
        state.active_scene = kind;
    }
}

/// Setzt die aktive Szene auf den Startzustand der Optionen zurück.
pub fn reset_active_scene(state: &mut AppState) -> anyhow::Result<()> {
    match state.active_scene {
        SceneKind::Bezier => state.bezier.reset(&state.options)?,
        SceneKind::KeyFrames => state.keyframes = KeyFrameScene::new(&state.options),
    }
    log::info!("Szene zurückgesetzt: {}", state.active_scene.label());
    Ok(())
}

//! Handler für die Wiedergabe der Key-Frame-Szene.

use crate::app::AppState;

pub fn toggle(state: &mut AppState) {
    state.keyframes.toggle_playback();
}

pub fn restart(state: &mut AppState) {
    log::debug!("Key-Frame-Wiedergabe zurückgesetzt");
    state.keyframes.restart();
}

/// Rückt die Animation vor. Läuft auch, wenn die Bézier-Szene sichtbar ist.
pub fn advance(state: &mut AppState, dt_ms: f32) {
    state.keyframes.advance(dt_ms);
}

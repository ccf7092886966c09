//! Handler für die Bézier-Szene (Kontrollpunkt-Drag, Auswertungsstrategie).

use crate::app::AppState;
use crate::core::EvalStrategy;
use glam::Vec2;

/// Pointer-Down: greift den nächsten Kontrollpunkt innerhalb des Pick-Radius.
pub fn begin_drag(state: &mut AppState, world_pos: Vec2) {
    if !state.bezier.pointer_pressed(world_pos) {
        log::debug!(
            "Kein Kontrollpunkt in Reichweite von ({:.2}, {:.2})",
            world_pos.x,
            world_pos.y
        );
    }
}

/// Zieht den gegriffenen Kontrollpunkt nach.
pub fn drag_to(state: &mut AppState, world_pos: Vec2) {
    state.bezier.pointer_moved(world_pos);
}

/// Beendet einen Drag (no-op im Idle-Zustand).
pub fn end_drag(state: &mut AppState) {
    state.bezier.pointer_released();
}

/// Tastet die Kurve neu ab (einmal pro Frame).
pub fn refresh(state: &mut AppState) {
    state.bezier.refresh();
}

/// Setzt die Auswertungsstrategie und übernimmt sie in die Optionen.
pub fn set_strategy(state: &mut AppState, strategy: EvalStrategy) {
    state.bezier.set_strategy(strategy);
    state.options.eval_strategy = strategy;
}

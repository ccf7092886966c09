//! Handler für Optionen und Anwendungs-Lebenszyklus.

use crate::app::AppState;

/// Schreibt die aktuellen Optionen in die Konfigurationsdatei.
pub fn save(state: &AppState) -> anyhow::Result<()> {
    state.options.save_to_file(&state.options_path)
}

pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

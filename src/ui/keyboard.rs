//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Leertaste: Wiedergabe starten/pausieren, Pfeil links: Wiedergabe zurücksetzen,
/// R: Szene zurücksetzen, Ctrl+S: Optionen speichern.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, space, left, key_r, key_s) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Space),
            i.key_pressed(egui::Key::ArrowLeft),
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::S),
        )
    });

    if space {
        events.push(AppIntent::PlaybackToggleRequested);
    }

    if left {
        events.push(AppIntent::PlaybackRestartRequested);
    }

    if key_r && !modifiers.command {
        events.push(AppIntent::ResetSceneRequested);
    }

    if modifiers.command && key_s {
        events.push(AppIntent::SaveOptionsRequested);
    }

    events
}

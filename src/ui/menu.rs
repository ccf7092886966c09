//! Top-Menü (Datei, Szene).

use crate::app::{AppIntent, AppState, SceneKind};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Save Options (Ctrl+S)").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Scene", |ui| {
                for kind in SceneKind::ALL {
                    if ui
                        .add(egui::Button::new(kind.label()).selected(state.active_scene == kind))
                        .clicked()
                    {
                        events.push(AppIntent::SceneSelected { kind });
                        ui.close();
                    }
                }

                ui.separator();

                if ui.button("Reset Scene (R)").clicked() {
                    events.push(AppIntent::ResetSceneRequested);
                    ui.close();
                }
            });
        });
    });

    events
}

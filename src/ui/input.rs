//! Viewport-Input-Handling: Maus-Events → AppIntent.

use super::keyboard;
use crate::app::AppIntent;
use glam::Vec2;

/// Verwaltet den Input-Zustand für das Viewport.
///
/// Ein Druck im Viewport "fängt" den Zeiger: Bewegungen werden danach auch
/// außerhalb des Viewports gemeldet, bis die Taste losgelassen wird.
#[derive(Default)]
pub struct InputState {
    pointer_captured: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Maus und Tastatur im Viewport.
    /// Screen-Positionen werden relativ zur linken oberen Viewport-Ecke übergeben.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
    ) -> Vec<AppIntent> {
        let mut events = vec![AppIntent::ViewportResized {
            size: viewport_size,
        }];

        events.extend(keyboard::collect_keyboard_intents(ui));

        let (pressed, released, press_origin, latest_pos, delta) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
                i.pointer.delta(),
            )
        });

        // press_origin() liefert die exakte Klickposition vor der Drag-Schwelle
        if pressed && response.hovered() {
            if let Some(pointer_pos) = press_origin {
                events.push(AppIntent::PointerPressed {
                    screen_pos: to_viewport_local(pointer_pos, response),
                });
                self.pointer_captured = true;
            }
        }

        if self.pointer_captured && delta != egui::Vec2::ZERO {
            if let Some(pointer_pos) = latest_pos {
                events.push(AppIntent::PointerMoved {
                    screen_pos: to_viewport_local(pointer_pos, response),
                });
            }
        }

        // Loslassen beendet den Drag immer, auch ohne vorherigen Treffer
        if released {
            events.push(AppIntent::PointerReleased);
            self.pointer_captured = false;
        }

        events
    }
}

/// Rechnet eine egui-Bildschirmposition in Viewport-lokale Pixel um.
fn to_viewport_local(pointer_pos: egui::Pos2, response: &egui::Response) -> Vec2 {
    let local = pointer_pos - response.rect.min;
    Vec2::new(local.x, local.y)
}

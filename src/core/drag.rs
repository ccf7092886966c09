//! Drag-Zustandsmaschine für Kontrollpunkte (Idle ↔ Dragging).

use glam::{Vec2, Vec3};

/// Welcher Kontrollpunkt wird gerade per Drag verschoben?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Kein Punkt gegriffen
    #[default]
    Idle,
    /// Kontrollpunkt mit Index 0..4 folgt dem Zeiger
    Dragging(usize),
}

/// Findet den Kontrollpunkt mit dem kleinsten quadrierten Abstand zu `pos` (nur x/y).
///
/// Bei Gleichstand gewinnt der kleinere Index. Gibt `None` für leere Slices zurück.
pub fn nearest_control_point(points: &[Vec3], pos: Vec2) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (index, point) in points.iter().enumerate() {
        let dist_sq = point.truncate().distance_squared(pos);
        match best {
            Some((_, best_sq)) if dist_sq >= best_sq => {}
            _ => best = Some((index, dist_sq)),
        }
    }
    best
}

/// Verwaltet den Drag eines Kontrollpunkts mit festem Pick-Radius.
#[derive(Debug, Clone)]
pub struct ControlPointDrag {
    state: DragState,
    pick_radius: f32,
}

impl ControlPointDrag {
    /// Erstellt einen neuen Drag-Zustand (Idle) mit Pick-Radius in Welteinheiten.
    pub fn new(pick_radius: f32) -> Self {
        Self {
            state: DragState::Idle,
            pick_radius,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Index des gegriffenen Punkts, falls ein Drag läuft.
    pub fn dragged_index(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging(index) => Some(index),
            DragState::Idle => None,
        }
    }

    /// Pointer-Down: greift den nächsten Punkt, wenn er strikt innerhalb des Pick-Radius liegt.
    ///
    /// Ein laufender Drag wird nicht umgehängt. Gibt `true` zurück, wenn ein
    /// Drag gestartet wurde.
    pub fn pointer_down(&mut self, points: &[Vec3], world_pos: Vec2) -> bool {
        if self.state != DragState::Idle {
            return false;
        }

        let radius_sq = self.pick_radius * self.pick_radius;
        match nearest_control_point(points, world_pos) {
            Some((index, dist_sq)) if dist_sq < radius_sq => {
                log::debug!("Drag gestartet: Kontrollpunkt {} (d²={:.3})", index, dist_sq);
                self.state = DragState::Dragging(index);
                true
            }
            _ => false,
        }
    }

    /// Zieht den gegriffenen Punkt auf `world_pos`; z bleibt erhalten.
    pub fn pointer_moved(&self, points: &mut [Vec3], world_pos: Vec2) {
        let Some(index) = self.dragged_index() else {
            return;
        };
        if let Some(point) = points.get_mut(index) {
            point.x = world_pos.x;
            point.y = world_pos.y;
        }
    }

    /// Pointer-Up: zurück nach Idle, unabhängig vom vorherigen Zustand.
    pub fn pointer_up(&mut self) {
        if let DragState::Dragging(index) = self.state {
            log::debug!("Drag beendet: Kontrollpunkt {}", index);
        }
        self.state = DragState::Idle;
    }
}

//! Interaktive Bézier-Szene: Kurve, Tessellierung und Kontrollpunkt-Drag.

use crate::core::{
    ControlPointDrag, CubicBezier, CurveTessellation, DragState, EvalStrategy, TessellationError,
};
use crate::shared::SceneOptions;
use glam::Vec2;

/// Zustand der Bézier-Demo.
///
/// Die Polylinie wird pro Frame ([`BezierScene::refresh`]) und sofort nach
/// jeder Änderung an der Kurve neu abgetastet; die Puffer werden dabei in
/// place überschrieben.
#[derive(Debug, Clone)]
pub struct BezierScene {
    curve: CubicBezier,
    tessellation: CurveTessellation,
    drag: ControlPointDrag,
    strategy: EvalStrategy,
}

impl BezierScene {
    /// Erstellt die Szene aus den Optionen (Kontrollpunkte, Stützpunkte, Pick-Radius).
    pub fn new(options: &SceneOptions) -> Result<Self, TessellationError> {
        let curve = options.initial_curve();
        let strategy = options.eval_strategy;
        let tessellation = CurveTessellation::from_curve(&curve, options.vertex_count, strategy)?;

        Ok(Self {
            curve,
            tessellation,
            drag: ControlPointDrag::new(options.pick_radius_world),
            strategy,
        })
    }

    pub fn curve(&self) -> &CubicBezier {
        &self.curve
    }

    pub fn tessellation(&self) -> &CurveTessellation {
        &self.tessellation
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.drag.dragged_index()
    }

    pub fn strategy(&self) -> EvalStrategy {
        self.strategy
    }

    /// Wechselt die Auswertungsstrategie und tastet neu ab.
    pub fn set_strategy(&mut self, strategy: EvalStrategy) {
        if self.strategy == strategy {
            return;
        }
        log::info!("Auswertung: {:?} → {:?}", self.strategy, strategy);
        self.strategy = strategy;
        self.retessellate();
    }

    /// Pointer-Down in Welt-Koordinaten. `true`, wenn ein Drag gestartet wurde.
    pub fn pointer_pressed(&mut self, world_pos: Vec2) -> bool {
        self.drag.pointer_down(self.curve.control_points(), world_pos)
    }

    /// Pointer-Move in Welt-Koordinaten. `true`, wenn sich die Kurve geändert hat.
    pub fn pointer_moved(&mut self, world_pos: Vec2) -> bool {
        if self.drag.dragged_index().is_none() {
            return false;
        }
        self.drag.pointer_moved(&mut self.curve.points, world_pos);
        self.retessellate();
        true
    }

    pub fn pointer_released(&mut self) {
        self.drag.pointer_up();
    }

    /// Setzt Kurve und Drag auf den Startzustand der Optionen zurück.
    pub fn reset(&mut self, options: &SceneOptions) -> Result<(), TessellationError> {
        *self = Self::new(options)?;
        Ok(())
    }

    /// Tastet die Polylinie aus den aktuellen Kontrollpunkten neu ab.
    pub fn refresh(&mut self) {
        self.retessellate();
    }

    fn retessellate(&mut self) {
        self.tessellation.update(&self.curve, self.strategy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec3;

    fn scene() -> BezierScene {
        BezierScene::new(&SceneOptions::default()).expect("Standard-Optionen sind gültig")
    }

    #[test]
    fn test_new_tessellates_initial_curve() {
        let scene = scene();
        assert_eq!(scene.tessellation().vertex_count(), 100);
        assert_eq!(scene.tessellation().positions()[0], Vec3::new(-4.0, -4.0, 0.0));
    }

    #[test]
    fn test_new_rejects_too_few_vertices() {
        let options = SceneOptions {
            vertex_count: 1,
            ..SceneOptions::default()
        };
        assert!(BezierScene::new(&options).is_err());
    }

    #[test]
    fn test_drag_moves_curve_endpoint() {
        let mut scene = scene();
        assert!(scene.pointer_pressed(Vec2::new(4.1, 3.9)));
        assert_eq!(scene.drag_state(), DragState::Dragging(3));

        assert!(scene.pointer_moved(Vec2::new(2.0, 1.0)));
        let last = *scene
            .tessellation()
            .positions()
            .last()
            .expect("Polylinie nicht leer");
        assert_relative_eq!(last.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(last.y, 1.0, epsilon = 1e-5);

        scene.pointer_released();
        assert_eq!(scene.drag_state(), DragState::Idle);
        assert!(!scene.pointer_moved(Vec2::new(0.0, 0.0)));
        assert_eq!(scene.curve().points[3], Vec3::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn test_strategy_switch_keeps_geometry() {
        let mut scene = scene();
        let before = scene.tessellation().positions().to_vec();
        scene.set_strategy(EvalStrategy::Bernstein);
        for (a, b) in before.iter().zip(scene.tessellation().positions()) {
            assert!((*a - *b).length() < 1e-5);
        }
    }

    #[test]
    fn test_reset_restores_initial_curve() {
        let mut scene = scene();
        scene.pointer_pressed(Vec2::new(-4.0, -4.0));
        scene.pointer_moved(Vec2::new(0.0, 0.0));
        scene
            .reset(&SceneOptions::default())
            .expect("Standard-Optionen sind gültig");
        assert_eq!(*scene.curve(), CubicBezier::default());
        assert_eq!(scene.drag_state(), DragState::Idle);
    }
}

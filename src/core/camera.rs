//! Orthografische Szenen-Kamera mit festem Welt-Ausschnitt.

use glam::{Mat4, Vec2};

/// Orthografische Kamera: der Viewport zeigt immer `[-extent, extent]²` in Welt-Koordinaten.
///
/// Screen-Koordinaten laufen von oben links `(0, 0)` nach unten rechts
/// `(width, height)`, Welt-y zeigt nach oben.
#[derive(Debug, Clone)]
pub struct SceneCamera {
    /// Sichtbare Welt-Halbbreite (und -höhe)
    pub world_extent: f32,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: Vec2,
}

impl SceneCamera {
    /// Sichtbare Welt-Halbbreite der Demos (Welt = [-5, 5]²).
    pub const DEFAULT_WORLD_EXTENT: f32 = 5.0;
    /// Near-/Far-Ebene der Projektion.
    pub const DEPTH_RANGE: f32 = 100.0;

    /// Erstellt eine Kamera für einen Viewport in Pixeln.
    pub fn new(world_extent: f32, viewport_size: Vec2) -> Self {
        let mut camera = Self {
            world_extent,
            viewport_size: Vec2::ONE,
        };
        camera.resize(viewport_size);
        camera
    }

    /// Übernimmt neue Viewport-Ausmaße (kleiner als 1 Pixel wird auf 1 begrenzt).
    pub fn resize(&mut self, viewport_size: Vec2) {
        let sanitized = Vec2::new(
            sanitize_extent(viewport_size.x),
            sanitize_extent(viewport_size.y),
        );
        if sanitized != self.viewport_size {
            log::debug!(
                "Viewport: {}x{} → {}x{}",
                self.viewport_size.x,
                self.viewport_size.y,
                sanitized.x,
                sanitized.y
            );
        }
        self.viewport_size = sanitized;
    }

    /// Konvertiert Screen-Koordinaten (Pixel, lokal zum Viewport) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        // Screen-Koordinaten zentrieren (-1 bis 1)
        let ndc = (screen_pos / self.viewport_size) * 2.0 - Vec2::ONE;
        // Y negieren: Screen-y wächst nach unten, Welt-y nach oben
        Vec2::new(ndc.x, -ndc.y) * self.world_extent
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (Umkehrung von `screen_to_world`).
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        let ndc = world_pos / self.world_extent;
        (Vec2::new(ndc.x, -ndc.y) + Vec2::ONE) * 0.5 * self.viewport_size
    }

    /// Welt-Einheiten pro Screen-Pixel (horizontal).
    pub fn world_per_pixel(&self) -> f32 {
        2.0 * self.world_extent / self.viewport_size.x
    }

    /// Projektionsmatrix: Welt-Box → Clip-Space (orthografisch, rechtshändig).
    pub fn view_projection(&self) -> Mat4 {
        let e = self.world_extent;
        Mat4::orthographic_rh(-e, e, -e, e, -Self::DEPTH_RANGE, Self::DEPTH_RANGE)
    }
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WORLD_EXTENT, Vec2::new(800.0, 600.0))
    }
}

fn sanitize_extent(value: f32) -> f32 {
    if value.is_finite() {
        value.max(1.0)
    } else {
        1.0
    }
}

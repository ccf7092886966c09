//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use crate::core::SceneCamera;
use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Vertex einer Linienliste: Position (xyz) + Farbe (rgb), 24 Byte.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl LineVertex {
    pub fn new(position: Vec3, color: [f32; 3]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// Read-only Daten für einen Render-Frame: indizierte Linienliste + Kamera.
///
/// Die Puffer werden pro Frame mit [`RenderScene::clear`] geleert und neu
/// befüllt; ihre Kapazität bleibt erhalten.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Vertices aller Linien dieses Frames
    pub vertices: Vec<LineVertex>,
    /// Index-Paare (LineList), je zwei Indizes pro Segment
    pub indices: Vec<u32>,
    /// Kamera-Zustand für diesen Frame
    pub camera: SceneCamera,
}

impl RenderScene {
    /// Leert Vertices und Indizes, behält Kapazität und Kamera.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Anzahl der Liniensegmente.
    pub fn segment_count(&self) -> usize {
        self.indices.len() / 2
    }

    /// Hängt eine bereits indizierte Polylinie an (Indizes relativ zu `positions`).
    pub fn push_indexed(&mut self, positions: &[Vec3], indices: &[u32], color: [f32; 3]) {
        let base = self.vertices.len() as u32;
        self.vertices
            .extend(positions.iter().map(|&p| LineVertex::new(p, color)));
        self.indices.extend(indices.iter().map(|&i| base + i));
    }

    /// Einzelnes Segment `a`–`b`.
    pub fn push_segment(&mut self, a: Vec3, b: Vec3, color: [f32; 3]) {
        self.push_indexed(&[a, b], &[0, 1], color);
    }

    /// Offene Polylinie durch alle Punkte.
    pub fn push_polyline(&mut self, points: &[Vec3], color: [f32; 3]) {
        let base = self.vertices.len() as u32;
        self.vertices
            .extend(points.iter().map(|&p| LineVertex::new(p, color)));
        for i in 1..points.len() as u32 {
            self.indices.extend_from_slice(&[base + i - 1, base + i]);
        }
    }

    /// Achsenparalleles Quadrat (Umriss) um `center` mit Kantenlänge `size`.
    pub fn push_square(&mut self, center: Vec3, size: f32, color: [f32; 3]) {
        let h = size * 0.5;
        let corners = square_corners(center, h);
        self.push_indexed(&corners, &[0, 1, 1, 2, 2, 3, 3, 0], color);
    }

    /// Kreuz (x) um `center` mit halber Armlänge `size / 2`.
    pub fn push_cross(&mut self, center: Vec3, size: f32, color: [f32; 3]) {
        let corners = square_corners(center, size * 0.5);
        self.push_indexed(&corners, &[0, 2, 1, 3], color);
    }
}

/// Ecken gegen den Uhrzeigersinn, beginnend unten links.
fn square_corners(center: Vec3, half: f32) -> [Vec3; 4] {
    [
        Vec2::new(-half, -half),
        Vec2::new(half, -half),
        Vec2::new(half, half),
        Vec2::new(-half, half),
    ]
    .map(|offset| center + offset.extend(0.0))
}

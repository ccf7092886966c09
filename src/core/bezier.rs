//! Kubische Bézier-Kurve mit Matrix-Auswertung (SIMD über glam) und Bernstein-Form.

use glam::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Basismatrix für kubische Bézier-Kurven (Potenzbasis → Bernstein-Gewichte).
///
/// Zeilenweise gelesen:
///
/// ```text
///  1  0  0  0
/// -3  3  0  0
///  3 -6  3  0
/// -1  3 -3  1
/// ```
///
/// In glam sind Matrizen spaltenweise abgelegt, daher stehen die Zeilen
/// oben als Spalten: `BEZIER_BASIS * T` entspricht dem Zeilenvektor-Produkt `T·M`.
pub const BEZIER_BASIS: Mat4 = Mat4::from_cols(
    Vec4::new(1.0, 0.0, 0.0, 0.0),
    Vec4::new(-3.0, 3.0, 0.0, 0.0),
    Vec4::new(3.0, -6.0, 3.0, 0.0),
    Vec4::new(-1.0, 3.0, -3.0, 1.0),
);

/// Ausführungsstrategie der Kurvenauswertung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EvalStrategy {
    /// `T·M·P` über `Mat4`/`Vec4` (vektorisiert)
    #[default]
    Matrix,
    /// Direkte Bernstein-Polynome (skalar)
    Bernstein,
}

/// Potenzbasis `(1, t, t², t³)`.
#[inline]
pub fn power_basis(t: f32) -> Vec4 {
    let t2 = t * t;
    Vec4::new(1.0, t, t2, t2 * t)
}

/// Bernstein-Gewichte `W = T·M` für Parameter `t`.
#[inline]
pub fn bernstein_weights(t: f32) -> Vec4 {
    BEZIER_BASIS * power_basis(t)
}

/// Kubische Bézier-Kurve aus vier Kontrollpunkten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    /// Kontrollpunkte p0..p3
    pub points: [Vec3; 4],
}

impl CubicBezier {
    /// Erstellt eine Kurve aus vier Kontrollpunkten.
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Gibt alle Kontrollpunkte zurück.
    pub fn control_points(&self) -> &[Vec3; 4] {
        &self.points
    }

    /// Setzt Kontrollpunkt `index`. Indizes ausserhalb 0..4 werden ignoriert.
    pub fn set_control_point(&mut self, index: usize, position: Vec3) {
        if let Some(point) = self.points.get_mut(index) {
            *point = position;
        }
    }

    /// Punkt auf der Kurve bei `t` in Matrixform.
    ///
    /// `W = T·M`, danach `W·[p0; p1; p2; p3]`. Beide Produkte laufen
    /// über `Mat4 * Vec4` und damit über die SIMD-Pfade von glam.
    pub fn evaluate(&self, t: f32) -> Vec3 {
        let weights = bernstein_weights(t);
        let [p0, p1, p2, p3] = self.points;
        let control = Mat4::from_cols(
            p0.extend(0.0),
            p1.extend(0.0),
            p2.extend(0.0),
            p3.extend(0.0),
        );
        (control * weights).truncate()
    }

    /// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
    pub fn evaluate_bernstein(&self, t: f32) -> Vec3 {
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        let [p0, p1, p2, p3] = self.points;
        inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
    }

    /// Wertet die Kurve mit der gewählten Strategie aus.
    pub fn evaluate_with(&self, strategy: EvalStrategy, t: f32) -> Vec3 {
        match strategy {
            EvalStrategy::Matrix => self.evaluate(t),
            EvalStrategy::Bernstein => self.evaluate_bernstein(t),
        }
    }
}

impl Default for CubicBezier {
    /// S-Kurve der Bezier-Demo: (-4,-4) → (4,4) mit gekreuzten Handles.
    fn default() -> Self {
        Self::new(
            Vec3::new(-4.0, -4.0, 0.0),
            Vec3::new(-4.0, 4.0, 0.0),
            Vec3::new(4.0, -4.0, 0.0),
            Vec3::new(4.0, 4.0, 0.0),
        )
    }
}

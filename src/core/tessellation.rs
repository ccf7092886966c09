//! Abtastung einer Bézier-Kurve zu einer Polylinie (Line-List-Indizes).

use super::bezier::{CubicBezier, EvalStrategy};
use glam::Vec3;
use thiserror::Error;

/// Fehler beim Anlegen einer Tessellierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TessellationError {
    /// Weniger als zwei Stützpunkte ergeben kein Segment
    #[error("Tessellierung braucht mindestens 2 Vertices, erhalten: {0}")]
    TooFewVertices(usize),
}

/// Abgetastete Kurve mit fester Vertex-Anzahl.
///
/// Die Puffer gehören der Szene und werden pro Frame in-place neu befüllt;
/// die Indizes ändern sich bei fester Vertex-Anzahl nie.
#[derive(Debug, Clone)]
pub struct CurveTessellation {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
}

impl CurveTessellation {
    /// Legt die Puffer für `vertex_count` Stützpunkte an.
    pub fn new(vertex_count: usize) -> Result<Self, TessellationError> {
        if vertex_count < 2 {
            return Err(TessellationError::TooFewVertices(vertex_count));
        }

        let mut indices = Vec::with_capacity((vertex_count - 1) * 2);
        for i in 0..(vertex_count - 1) as u32 {
            indices.push(i);
            indices.push(i + 1);
        }

        Ok(Self {
            positions: vec![Vec3::ZERO; vertex_count],
            indices,
        })
    }

    /// Tessellierung anlegen und sofort aus `curve` befüllen.
    pub fn from_curve(
        curve: &CubicBezier,
        vertex_count: usize,
        strategy: EvalStrategy,
    ) -> Result<Self, TessellationError> {
        let mut tessellation = Self::new(vertex_count)?;
        tessellation.update(curve, strategy);
        Ok(tessellation)
    }

    /// Tastet `curve` neu ab: Punkt i = B(i / (N-1)).
    pub fn update(&mut self, curve: &CubicBezier, strategy: EvalStrategy) {
        let last = (self.positions.len() - 1) as f32;
        for (i, position) in self.positions.iter_mut().enumerate() {
            let t = i as f32 / last;
            *position = curve.evaluate_with(strategy, t);
        }
    }

    /// Abgetastete Positionen.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Line-List-Indizes, je zwei pro Segment.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn segment_count(&self) -> usize {
        self.indices.len() / 2
    }

    /// Iteriert über alle Segmente als (Start, Ende).
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.indices
            .chunks_exact(2)
            .map(|pair| (self.positions[pair[0] as usize], self.positions[pair[1] as usize]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_fewer_than_two_vertices() {
        assert_eq!(
            CurveTessellation::new(1).unwrap_err(),
            TessellationError::TooFewVertices(1)
        );
        assert!(CurveTessellation::new(0).is_err());
        assert!(CurveTessellation::new(2).is_ok());
    }

    #[test]
    fn test_segment_count_and_indices() {
        let tess = CurveTessellation::new(100).expect("100 Vertices sind gültig");
        assert_eq!(tess.vertex_count(), 100);
        assert_eq!(tess.segment_count(), 99);
        assert_eq!(tess.indices().len(), 198);
        for (segment, pair) in tess.indices().chunks_exact(2).enumerate() {
            assert_eq!(pair[0] as usize, segment);
            assert_eq!(pair[1] as usize, segment + 1);
        }
    }

    #[test]
    fn test_first_and_last_sample_hit_endpoints() {
        let curve = CubicBezier::default();
        let tess = CurveTessellation::from_curve(&curve, 100, EvalStrategy::Matrix)
            .expect("Tessellierung muss gelingen");
        let first = tess.positions()[0];
        let last = tess.positions()[tess.vertex_count() - 1];
        assert!((first - curve.points[0]).length() < 1e-5);
        assert!((last - curve.points[3]).length() < 1e-5);
    }

    #[test]
    fn test_segments_connect_consecutive_samples() {
        let curve = CubicBezier::default();
        let tess = CurveTessellation::from_curve(&curve, 5, EvalStrategy::Bernstein)
            .expect("Tessellierung muss gelingen");
        let segments: Vec<_> = tess.segments().collect();
        assert_eq!(segments.len(), 4);
        for (i, (start, end)) in segments.iter().enumerate() {
            assert_eq!(*start, tess.positions()[i]);
            assert_eq!(*end, tess.positions()[i + 1]);
        }
        // Mittlerer Sample bei t = 0.5 liegt im Ursprung
        assert_relative_eq!(tess.positions()[2].x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(tess.positions()[2].y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_update_follows_moved_control_point() {
        let mut curve = CubicBezier::default();
        let mut tess = CurveTessellation::from_curve(&curve, 10, EvalStrategy::Matrix)
            .expect("Tessellierung muss gelingen");
        curve.set_control_point(3, Vec3::new(2.0, -3.0, 0.0));
        tess.update(&curve, EvalStrategy::Matrix);
        assert!((tess.positions()[9] - Vec3::new(2.0, -3.0, 0.0)).length() < 1e-5);
    }
}

//! Die beiden Demo-Szenen.

mod bezier;
mod keyframe;

pub use bezier::BezierScene;
pub use keyframe::KeyFrameScene;

/// Welche Szene ist aktiv?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneKind {
    /// Interaktive Bézier-Kurve
    #[default]
    Bezier,
    /// Key-Frame-Animation
    KeyFrames,
}

impl SceneKind {
    pub const ALL: [SceneKind; 2] = [SceneKind::Bezier, SceneKind::KeyFrames];

    /// Anzeigename (Menü, Fenstertitel).
    pub fn label(self) -> &'static str {
        match self {
            SceneKind::Bezier => "SIMD Bezier",
            SceneKind::KeyFrames => "Key Frame Sample",
        }
    }
}

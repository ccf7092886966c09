//! Zentrale Konfiguration für die Bézier- und Key-Frame-Szenen.
//!
//! `SceneOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{CubicBezier, EvalStrategy, KeyFrame, KeyFrameTrack};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Fenster ─────────────────────────────────────────────────────────

/// Standard-Fenstergröße in Pixeln.
pub const WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

// ── Kamera ──────────────────────────────────────────────────────────

/// Sichtbare Welt-Halbbreite (Welt = [-5, 5]²).
pub const WORLD_EXTENT: f32 = 5.0;

// ── Kurve ───────────────────────────────────────────────────────────

/// Anzahl der Stützpunkte der Kurven-Polylinie.
pub const VERTEX_COUNT: usize = 100;
/// Pick-Radius in Welteinheiten: Pointer-Down innerhalb greift den Kontrollpunkt.
pub const PICK_RADIUS_WORLD: f32 = 0.5;
/// Kantenlänge der Kontrollpunkt-Handles in Welteinheiten.
pub const HANDLE_SIZE_WORLD: f32 = 0.25;
/// Start-Kontrollpunkte der Bezier-Demo.
pub const CONTROL_POINTS: [[f32; 3]; 4] = [
    [-4.0, -4.0, 0.0],
    [-4.0, 4.0, 0.0],
    [4.0, -4.0, 0.0],
    [4.0, 4.0, 0.0],
];

// ── Farben (RGB) ────────────────────────────────────────────────────

/// Kurvenfarbe (Gelb).
pub const CURVE_COLOR: [f32; 3] = [1.0, 1.0, 0.0];
/// Farbe des Kontrollpolygons p0–p1 / p2–p3 (Grau).
pub const CONTROL_POLYGON_COLOR: [f32; 3] = [0.55, 0.55, 0.55];
/// Farbe der Kontrollpunkt-Handles (Cyan).
pub const HANDLE_COLOR: [f32; 3] = [0.0, 0.8, 1.0];
/// Farbe des gerade gezogenen Handles (Magenta).
pub const HANDLE_ACTIVE_COLOR: [f32; 3] = [1.0, 0.0, 1.0];
/// Hintergrundfarbe (RGBA).
pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
/// Farbe des Key-Frame-Pfads (Dunkelgrün).
pub const KEYFRAME_PATH_COLOR: [f32; 3] = [0.2, 0.6, 0.2];
/// Farbe des animierten Objekts (Gelb).
pub const ANIMATED_OBJECT_COLOR: [f32; 3] = [1.0, 1.0, 0.0];

// ── Animation ───────────────────────────────────────────────────────

/// Animationsdauer in Millisekunden (20 Sekunden).
pub const ANIMATION_DURATION_MS: f32 = 20_000.0;
/// Kantenlänge des animierten Objekts in Welteinheiten.
pub const ANIMATED_OBJECT_SIZE: f32 = 1.0;

/// Fehler bei der Validierung der Optionen.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("vertex_count muss mindestens 2 sein (ist {0})")]
    VertexCountTooSmall(usize),
    #[error("world_extent muss endlich und > 0 sein (ist {0})")]
    InvalidWorldExtent(f32),
    #[error("pick_radius_world muss endlich und > 0 sein (ist {0})")]
    InvalidPickRadius(f32),
    #[error("Key-Frame {index} liegt zeitlich vor seinem Vorgänger ({time_ms} ms)")]
    KeyFramesUnsorted { index: usize, time_ms: f32 },
    #[error("Key-Frame {index} hat keine endliche Zeit ({time_ms} ms)")]
    NonFiniteKeyFrameTime { index: usize, time_ms: f32 },
}

/// Ein Key-Frame in Konfigurationsform (Achse + Winkel in Grad).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyFrameOptions {
    /// Zeitpunkt in Millisekunden
    pub time_ms: f32,
    /// Position in Welt-Koordinaten
    pub position: [f32; 3],
    /// Rotationsachse (wird normalisiert; Nullvektor = keine Rotation)
    pub axis: [f32; 3],
    /// Rotationswinkel in Grad
    pub angle_degrees: f32,
}

impl KeyFrameOptions {
    fn new(time_ms: f32, position: [f32; 3], axis: [f32; 3], angle_degrees: f32) -> Self {
        Self {
            time_ms,
            position,
            axis,
            angle_degrees,
        }
    }

    /// Konvertiert in einen Core-Key-Frame.
    pub fn to_key_frame(&self) -> KeyFrame {
        KeyFrame::from_axis_angle_degrees(
            self.time_ms,
            Vec3::from_array(self.position),
            Vec3::from_array(self.axis),
            self.angle_degrees,
        )
    }
}

/// Standard-Key-Frames: ein Umlauf durch die vier Quadranten mit Drehung um Z.
fn default_key_frames() -> Vec<KeyFrameOptions> {
    vec![
        KeyFrameOptions::new(0.0, [-3.0, -3.0, 0.0], [0.0, 0.0, 1.0], 0.0),
        KeyFrameOptions::new(5_000.0, [3.0, -3.0, 0.0], [0.0, 0.0, 1.0], 90.0),
        KeyFrameOptions::new(10_000.0, [3.0, 3.0, 0.0], [0.0, 0.0, 1.0], 180.0),
        KeyFrameOptions::new(15_000.0, [-3.0, 3.0, 0.0], [0.0, 0.0, 1.0], 270.0),
        KeyFrameOptions::new(20_000.0, [-3.0, -3.0, 0.0], [0.0, 0.0, 1.0], 359.0),
    ]
}

fn default_looping() -> bool {
    true
}

/// Alle zur Laufzeit änderbaren Szenen-Optionen.
/// Wird als `bezier_scenes.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneOptions {
    // ── Fenster & Kamera ────────────────────────────────────────
    /// Start-Fenstergröße [Breite, Höhe]
    pub window_size: [f32; 2],
    /// Sichtbare Welt-Halbbreite
    pub world_extent: f32,
    /// Hintergrundfarbe (RGBA)
    pub clear_color: [f32; 4],

    // ── Kurve ───────────────────────────────────────────────────
    /// Stützpunkte der Polylinie (≥ 2)
    pub vertex_count: usize,
    /// Auswertungsstrategie (Matrix oder Bernstein)
    #[serde(default)]
    pub eval_strategy: EvalStrategy,
    /// Start-Kontrollpunkte p0..p3
    pub control_points: [[f32; 3]; 4],
    /// Pick-Radius in Welteinheiten
    pub pick_radius_world: f32,
    /// Kantenlänge der Handles in Welteinheiten
    pub handle_size_world: f32,
    pub curve_color: [f32; 3],
    pub control_polygon_color: [f32; 3],
    pub handle_color: [f32; 3],
    pub handle_active_color: [f32; 3],

    // ── Animation ───────────────────────────────────────────────
    /// Animationsdauer in Millisekunden
    pub animation_duration_ms: f32,
    /// Wiedergabe am Ende von vorn beginnen
    #[serde(default = "default_looping")]
    pub animation_looping: bool,
    /// Kantenlänge des animierten Objekts
    pub animated_object_size: f32,
    pub keyframe_path_color: [f32; 3],
    pub animated_object_color: [f32; 3],
    /// Key-Frames der Animation
    #[serde(default = "default_key_frames")]
    pub key_frames: Vec<KeyFrameOptions>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            world_extent: WORLD_EXTENT,
            clear_color: CLEAR_COLOR,

            vertex_count: VERTEX_COUNT,
            eval_strategy: EvalStrategy::default(),
            control_points: CONTROL_POINTS,
            pick_radius_world: PICK_RADIUS_WORLD,
            handle_size_world: HANDLE_SIZE_WORLD,
            curve_color: CURVE_COLOR,
            control_polygon_color: CONTROL_POLYGON_COLOR,
            handle_color: HANDLE_COLOR,
            handle_active_color: HANDLE_ACTIVE_COLOR,

            animation_duration_ms: ANIMATION_DURATION_MS,
            animation_looping: true,
            animated_object_size: ANIMATED_OBJECT_SIZE,
            keyframe_path_color: KEYFRAME_PATH_COLOR,
            animated_object_color: ANIMATED_OBJECT_COLOR,
            key_frames: default_key_frames(),
        }
    }
}

impl SceneOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst und validiert Optionen aus einem TOML-String.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_scenes"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_scenes.toml")
    }

    /// Prüft die Werte, die Szenen und Kamera voraussetzen.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.vertex_count < 2 {
            return Err(OptionsError::VertexCountTooSmall(self.vertex_count));
        }
        if !self.world_extent.is_finite() || self.world_extent <= 0.0 {
            return Err(OptionsError::InvalidWorldExtent(self.world_extent));
        }
        if !self.pick_radius_world.is_finite() || self.pick_radius_world <= 0.0 {
            return Err(OptionsError::InvalidPickRadius(self.pick_radius_world));
        }
        if let Some((index, frame)) = self
            .key_frames
            .iter()
            .enumerate()
            .find(|(_, frame)| !frame.time_ms.is_finite())
        {
            return Err(OptionsError::NonFiniteKeyFrameTime {
                index,
                time_ms: frame.time_ms,
            });
        }
        for (index, pair) in self.key_frames.windows(2).enumerate() {
            if pair[1].time_ms < pair[0].time_ms {
                return Err(OptionsError::KeyFramesUnsorted {
                    index: index + 1,
                    time_ms: pair[1].time_ms,
                });
            }
        }
        Ok(())
    }

    /// Start-Kurve aus den konfigurierten Kontrollpunkten.
    pub fn initial_curve(&self) -> CubicBezier {
        let [p0, p1, p2, p3] = self.control_points.map(Vec3::from_array);
        CubicBezier::new(p0, p1, p2, p3)
    }

    /// Key-Frame-Track aus den konfigurierten Key-Frames.
    pub fn key_frame_track(&self) -> KeyFrameTrack {
        KeyFrameTrack::new(self.key_frames.iter().map(KeyFrameOptions::to_key_frame).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(SceneOptions::default().validate(), Ok(()));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut opts = SceneOptions::default();
        opts.vertex_count = 42;
        opts.eval_strategy = EvalStrategy::Bernstein;
        let content = toml::to_string_pretty(&opts).expect("Serialisierung muss gelingen");
        let parsed = SceneOptions::from_toml_str(&content).expect("Parsen muss gelingen");
        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let mut opts = SceneOptions::default();
        opts.key_frames.clear();
        let mut table: toml::Table =
            toml::from_str(&toml::to_string(&opts).expect("Serialisierung")).expect("Tabelle");
        table.remove("eval_strategy");
        table.remove("animation_looping");
        table.remove("key_frames");

        let parsed =
            SceneOptions::from_toml_str(&toml::to_string(&table).expect("Serialisierung"))
                .expect("Parsen muss gelingen");
        assert_eq!(parsed.eval_strategy, EvalStrategy::Matrix);
        assert!(parsed.animation_looping);
        assert_eq!(parsed.key_frames.len(), default_key_frames().len());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let opts = SceneOptions {
            vertex_count: 1,
            ..SceneOptions::default()
        };
        assert_eq!(opts.validate(), Err(OptionsError::VertexCountTooSmall(1)));

        let opts = SceneOptions {
            world_extent: 0.0,
            ..SceneOptions::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(OptionsError::InvalidWorldExtent(_))
        ));

        let opts = SceneOptions {
            pick_radius_world: f32::NAN,
            ..SceneOptions::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(OptionsError::InvalidPickRadius(_))
        ));

        let mut opts = SceneOptions::default();
        opts.key_frames.swap(0, 1);
        assert!(matches!(
            opts.validate(),
            Err(OptionsError::KeyFramesUnsorted { index: 1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_key_frame_time() {
        let mut opts = SceneOptions::default();
        opts.key_frames[2].time_ms = -f32::NAN;
        assert!(matches!(
            opts.validate(),
            Err(OptionsError::NonFiniteKeyFrameTime { index: 2, .. })
        ));

        let mut opts = SceneOptions::default();
        opts.key_frames[4].time_ms = f32::INFINITY;
        assert!(matches!(
            opts.validate(),
            Err(OptionsError::NonFiniteKeyFrameTime { index: 4, .. })
        ));
    }

    #[test]
    fn test_nan_key_frame_time_in_toml_is_rejected() {
        let mut table: toml::Table =
            toml::from_str(&toml::to_string(&SceneOptions::default()).expect("Serialisierung"))
                .expect("Tabelle");
        table.remove("key_frames");
        let base = toml::to_string(&table).expect("Serialisierung");
        let with_frame = |time: &str| {
            format!(
                "{base}\n[[key_frames]]\ntime_ms = {time}\nposition = [0.0, 0.0, 0.0]\n\
                 axis = [0.0, 0.0, 1.0]\nangle_degrees = 0.0\n"
            )
        };

        assert!(SceneOptions::from_toml_str(&with_frame("0.0")).is_ok());
        assert!(SceneOptions::from_toml_str(&with_frame("-nan")).is_err());
        assert!(SceneOptions::from_toml_str(&with_frame("inf")).is_err());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(SceneOptions::from_toml_str("vertex_count = \"viele\"").is_err());
    }

    #[test]
    fn test_initial_curve_uses_configured_points() {
        let curve = SceneOptions::default().initial_curve();
        assert_eq!(curve, CubicBezier::default());
    }

    #[test]
    fn test_key_frame_track_from_options() {
        let track = SceneOptions::default().key_frame_track();
        assert_eq!(track.frames().len(), 5);
        assert_eq!(track.end_time(), 20_000.0);
    }
}

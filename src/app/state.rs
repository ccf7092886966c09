//! Application State: zentrale Datenhaltung.

use super::scenes::{BezierScene, KeyFrameScene, SceneKind};
use crate::core::SceneCamera;
use crate::shared::SceneOptions;
use glam::Vec2;
use std::path::PathBuf;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell angezeigte Szene
    pub active_scene: SceneKind,
    /// Bézier-Demo
    pub bezier: BezierScene,
    /// Key-Frame-Demo
    pub keyframes: KeyFrameScene,
    /// Kamera (Welt-Ausschnitt + Viewport-Größe), von beiden Szenen geteilt
    pub camera: SceneCamera,
    /// Laufzeit-Optionen
    pub options: SceneOptions,
    /// Zielpfad für "Optionen speichern"
    pub options_path: PathBuf,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den State aus validierten Optionen.
    pub fn new(options: SceneOptions) -> anyhow::Result<Self> {
        options.validate()?;
        let camera = SceneCamera::new(options.world_extent, Vec2::from_array(options.window_size));

        Ok(Self {
            active_scene: SceneKind::default(),
            bezier: BezierScene::new(&options)?,
            keyframes: KeyFrameScene::new(&options),
            camera,
            options,
            options_path: SceneOptions::config_path(),
            should_exit: false,
        })
    }

    /// Titelzeile für das Fenster, analog zur Beschriftung der Demos.
    pub fn window_title(&self) -> String {
        match self.active_scene {
            SceneKind::Bezier => SceneKind::Bezier.label().to_string(),
            SceneKind::KeyFrames => {
                format!("Milliseconds {:.0}", self.keyframes.playback().time_ms())
            }
        }
    }
}

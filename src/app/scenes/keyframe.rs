//! Key-Frame-Szene: abgetastete Pose eines Objekts über die Zeit.

use crate::core::{KeyFrameTrack, Playback, Pose};
use crate::shared::SceneOptions;
use glam::{Vec2, Vec3};

/// Zustand der Key-Frame-Demo.
#[derive(Debug, Clone)]
pub struct KeyFrameScene {
    track: KeyFrameTrack,
    playback: Playback,
    object_size: f32,
}

impl KeyFrameScene {
    pub fn new(options: &SceneOptions) -> Self {
        let track = options.key_frame_track();
        if track.is_empty() {
            log::warn!("Keine Key-Frames konfiguriert, Objekt bleibt im Ursprung");
        }
        Self {
            track,
            playback: Playback::new(options.animation_duration_ms, options.animation_looping),
            object_size: options.animated_object_size,
        }
    }

    pub fn track(&self) -> &KeyFrameTrack {
        &self.track
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn toggle_playback(&mut self) {
        self.playback.toggle();
        log::debug!(
            "Wiedergabe {} bei {:.0} ms",
            if self.playback.is_playing() { "läuft" } else { "pausiert" },
            self.playback.time_ms()
        );
    }

    /// Zurück auf 0 ms, Wiedergabe angehalten.
    pub fn restart(&mut self) {
        self.playback.restart();
    }

    pub fn advance(&mut self, dt_ms: f32) {
        self.playback.advance(dt_ms);
    }

    /// Pose zur aktuellen Wiedergabezeit.
    pub fn current_pose(&self) -> Pose {
        self.track.sample(self.playback.time_ms())
    }

    /// Ecken des animierten Quadrats in Welt-Koordinaten (gegen den Uhrzeigersinn).
    pub fn object_corners(&self) -> [Vec3; 4] {
        let world = self.current_pose().to_matrix();
        let h = self.object_size * 0.5;
        [
            Vec2::new(-h, -h),
            Vec2::new(h, -h),
            Vec2::new(h, h),
            Vec2::new(-h, h),
        ]
        .map(|corner| world.transform_point3(corner.extend(0.0)))
    }
}

//! Key-Frames (Zeit, Position, Rotation), Track-Abtastung und Wiedergabe.

use glam::{Mat4, Quat, Vec3};

/// Quaternion aus Achse und Winkel (Radiant), normalisiert.
///
/// Achsen der Länge 0 (oder nicht-endliche Achsen) ergeben die Identität.
pub fn axis_angle_quat(axis: Vec3, angle_radians: f32) -> Quat {
    let Some(axis) = axis.try_normalize() else {
        return Quat::IDENTITY;
    };
    if !angle_radians.is_finite() {
        return Quat::IDENTITY;
    }
    Quat::from_axis_angle(axis, angle_radians).normalize()
}

/// Ein Key-Frame der Animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyFrame {
    /// Zeitpunkt in Millisekunden
    pub time_ms: f32,
    pub position: Vec3,
    /// Orientierung (Einheitsquaternion)
    pub rotation: Quat,
}

impl KeyFrame {
    pub fn new(time_ms: f32, position: Vec3, rotation: Quat) -> Self {
        Self {
            time_ms,
            position,
            rotation,
        }
    }

    /// Key-Frame aus Achse + Winkel in Grad (Eingabekonvention der Key-Frame-Daten).
    pub fn from_axis_angle_degrees(time_ms: f32, position: Vec3, axis: Vec3, degrees: f32) -> Self {
        Self::new(time_ms, position, axis_angle_quat(axis, degrees.to_radians()))
    }
}

/// Interpolierte Pose (Position + Orientierung).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Welt-Matrix (erst Rotation, dann Translation).
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

impl From<&KeyFrame> for Pose {
    fn from(frame: &KeyFrame) -> Self {
        Self {
            position: frame.position,
            rotation: frame.rotation,
        }
    }
}

/// Zeitlich sortierte Folge von Key-Frames.
#[derive(Debug, Clone, Default)]
pub struct KeyFrameTrack {
    frames: Vec<KeyFrame>,
}

impl KeyFrameTrack {
    /// Erstellt einen Track; die Frames werden stabil nach Zeit sortiert.
    ///
    /// Frames mit nicht-endlicher Zeit werden verworfen.
    pub fn new(mut frames: Vec<KeyFrame>) -> Self {
        let before = frames.len();
        frames.retain(|f| f.time_ms.is_finite());
        if frames.len() < before {
            log::warn!(
                "{} Key-Frame(s) mit ungültiger Zeit verworfen",
                before - frames.len()
            );
        }
        frames.sort_by(|a, b| a.time_ms.total_cmp(&b.time_ms));
        Self { frames }
    }

    pub fn frames(&self) -> &[KeyFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Zeit des letzten Key-Frames (0 bei leerem Track).
    pub fn end_time(&self) -> f32 {
        self.frames.last().map_or(0.0, |f| f.time_ms)
    }

    /// Pose zum Zeitpunkt `time_ms`.
    ///
    /// Vor dem ersten Frame gilt der erste, nach dem letzten der letzte Frame.
    /// Dazwischen: Position linear, Rotation per Slerp.
    pub fn sample(&self, time_ms: f32) -> Pose {
        let (Some(first), Some(last)) = (self.frames.first(), self.frames.last()) else {
            return Pose::IDENTITY;
        };
        if time_ms.is_nan() || time_ms <= first.time_ms {
            return first.into();
        }
        if time_ms >= last.time_ms {
            return last.into();
        }

        // Erster Frame mit time > time_ms
        let upper = self.frames.partition_point(|f| f.time_ms <= time_ms);
        let (Some(a), Some(b)) = (
            upper.checked_sub(1).and_then(|i| self.frames.get(i)),
            self.frames.get(upper),
        ) else {
            return first.into();
        };
        let span = (b.time_ms - a.time_ms).max(f32::EPSILON);
        let t = ((time_ms - a.time_ms) / span).clamp(0.0, 1.0);

        Pose {
            position: a.position.lerp(b.position, t),
            rotation: a.rotation.slerp(b.rotation, t).normalize(),
        }
    }
}

/// Wiedergabe-Zustand einer Animation.
#[derive(Debug, Clone)]
pub struct Playback {
    time_ms: f32,
    playing: bool,
    duration_ms: f32,
    looping: bool,
}

impl Playback {
    /// Neue, gestoppte Wiedergabe bei 0 ms.
    pub fn new(duration_ms: f32, looping: bool) -> Self {
        Self {
            time_ms: 0.0,
            playing: false,
            duration_ms: duration_ms.max(0.0),
            looping,
        }
    }

    pub fn time_ms(&self) -> f32 {
        self.time_ms
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Startet die Wiedergabe; am Ende angekommen beginnt sie wieder bei 0 ms.
    pub fn play(&mut self) {
        if self.time_ms >= self.duration_ms {
            self.time_ms = 0.0;
        }
        self.playing = true;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.playing = false;
        } else {
            self.play();
        }
    }

    /// Zurück auf 0 ms und anhalten.
    pub fn restart(&mut self) {
        self.time_ms = 0.0;
        self.playing = false;
    }

    /// Rückt die Zeit um `dt_ms` vor, solange die Wiedergabe läuft.
    ///
    /// Mit `looping` wird modulo Dauer umgebrochen, sonst am Ende gestoppt.
    pub fn advance(&mut self, dt_ms: f32) {
        if !self.playing || !dt_ms.is_finite() || dt_ms <= 0.0 {
            return;
        }
        if self.duration_ms <= 0.0 {
            self.time_ms = 0.0;
            return;
        }

        let next = self.time_ms + dt_ms;
        if next < self.duration_ms {
            self.time_ms = next;
        } else if self.looping {
            self.time_ms = next.rem_euclid(self.duration_ms);
        } else {
            self.time_ms = self.duration_ms;
            self.playing = false;
        }
    }
}

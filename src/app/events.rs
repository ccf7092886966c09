//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use super::scenes::SceneKind;
use crate::core::EvalStrategy;
use glam::Vec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primäre Maustaste im Viewport gedrückt (Pixel, lokal zum Viewport)
    PointerPressed { screen_pos: Vec2 },
    /// Zeiger im Viewport bewegt (Pixel, lokal zum Viewport)
    PointerMoved { screen_pos: Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Andere Szene im Menü gewählt
    SceneSelected { kind: SceneKind },
    /// Auswertungsstrategie der Bézier-Kurve gewählt
    EvalStrategySelected { strategy: EvalStrategy },
    /// Aktive Szene auf den Startzustand zurücksetzen
    ResetSceneRequested,
    /// Wiedergabe starten/pausieren (Leertaste)
    PlaybackToggleRequested,
    /// Wiedergabe auf 0 zurücksetzen (Pfeil links)
    PlaybackRestartRequested,
    /// Ein Frame ist vergangen
    FrameAdvanced { dt_seconds: f32 },
    /// Aktuelle Optionen in die Konfigurationsdatei schreiben
    SaveOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}

/// App-Commands: mutierende Schritte, die der Controller ausführt.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Drag eines Kontrollpunkts an Welt-Position beginnen
    BeginControlPointDrag { world_pos: Vec2 },
    /// Gegriffenen Kontrollpunkt auf Welt-Position ziehen
    DragControlPoint { world_pos: Vec2 },
    /// Drag beenden (immer zurück nach Idle)
    EndControlPointDrag,
    SetViewportSize { size: [f32; 2] },
    SetActiveScene { kind: SceneKind },
    SetEvalStrategy { strategy: EvalStrategy },
    ResetActiveScene,
    TogglePlayback,
    RestartPlayback,
    /// Polylinie aus den aktuellen Kontrollpunkten neu abtasten
    RefreshCurve,
    /// Animation um `dt_ms` Millisekunden vorrücken
    AdvancePlayback { dt_ms: f32 },
    SaveOptions,
    RequestExit,
}

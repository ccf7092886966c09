//! Bezier Scenes Library.
//! Core-Funktionalität als Library exportiert für Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, SceneKind};
pub use core::{
    ControlPointDrag, CubicBezier, CurveTessellation, DragState, EvalStrategy, KeyFrame,
    KeyFrameTrack, Playback, Pose, SceneCamera,
};
pub use shared::{LineVertex, RenderScene, SceneOptions};

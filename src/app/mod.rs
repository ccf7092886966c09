//! Application-Layer: Controller, State, Events und Szenen.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
pub mod scenes;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Szenen, Kamera, Optionen).
pub mod state;

pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use scenes::{BezierScene, KeyFrameScene, SceneKind};
pub use state::AppState;

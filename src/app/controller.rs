//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events auf den AppState.
///
/// Hält die Render-Szene, deren Puffer von Frame zu Frame wiederverwendet werden.
#[derive(Default)]
pub struct AppController {
    render_scene: RenderScene,
}

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Bézier ===
            AppCommand::BeginControlPointDrag { world_pos } => {
                handlers::curve::begin_drag(state, world_pos)
            }
            AppCommand::DragControlPoint { world_pos } => {
                handlers::curve::drag_to(state, world_pos)
            }
            AppCommand::EndControlPointDrag => handlers::curve::end_drag(state),
            AppCommand::SetEvalStrategy { strategy } => {
                handlers::curve::set_strategy(state, strategy)
            }
            AppCommand::RefreshCurve => handlers::curve::refresh(state),

            // === Viewport & Szenen ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::SetActiveScene { kind } => handlers::view::set_active_scene(state, kind),
            AppCommand::ResetActiveScene => handlers::view::reset_active_scene(state)?,

            // === Wiedergabe ===
            AppCommand::TogglePlayback => handlers::playback::toggle(state),
            AppCommand::RestartPlayback => handlers::playback::restart(state),
            AppCommand::AdvancePlayback { dt_ms } => handlers::playback::advance(state, dt_ms),

            // === Optionen & Lebenszyklus ===
            AppCommand::SaveOptions => handlers::options::save(state)?,
            AppCommand::RequestExit => handlers::options::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame (Puffer werden in place befüllt).
    pub fn build_render_scene(&mut self, state: &AppState) -> &RenderScene {
        render_scene::build_into(state, &mut self.render_scene);
        &self.render_scene
    }
}

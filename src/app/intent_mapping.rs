//! Mapping von UI-Intents auf mutierende App-Commands.

use super::scenes::SceneKind;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Zeiger-Intents werden hier in Welt-Koordinaten umgerechnet und nur
/// in der Bézier-Szene weitergegeben.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { screen_pos } => {
            if state.active_scene != SceneKind::Bezier {
                return Vec::new();
            }
            vec![AppCommand::BeginControlPointDrag {
                world_pos: state.camera.screen_to_world(screen_pos),
            }]
        }
        AppIntent::PointerMoved { screen_pos } => {
            if state.active_scene != SceneKind::Bezier || state.bezier.dragged_index().is_none() {
                return Vec::new();
            }
            vec![AppCommand::DragControlPoint {
                world_pos: state.camera.screen_to_world(screen_pos),
            }]
        }
        AppIntent::PointerReleased => vec![AppCommand::EndControlPointDrag],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::SceneSelected { kind } => {
            // Szenenwechsel beendet einen laufenden Drag
            vec![
                AppCommand::EndControlPointDrag,
                AppCommand::SetActiveScene { kind },
            ]
        }
        AppIntent::EvalStrategySelected { strategy } => {
            vec![AppCommand::SetEvalStrategy { strategy }]
        }
        AppIntent::ResetSceneRequested => vec![AppCommand::ResetActiveScene],
        AppIntent::PlaybackToggleRequested => vec![AppCommand::TogglePlayback],
        AppIntent::PlaybackRestartRequested => vec![AppCommand::RestartPlayback],
        AppIntent::FrameAdvanced { dt_seconds } => {
            let mut commands = Vec::new();
            if state.active_scene == SceneKind::Bezier {
                commands.push(AppCommand::RefreshCurve);
            }
            if dt_seconds.is_finite() && dt_seconds > 0.0 {
                commands.push(AppCommand::AdvancePlayback {
                    dt_ms: dt_seconds * 1000.0,
                });
            }
            commands
        }
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::SceneOptions;
    use glam::Vec2;

    fn state() -> AppState {
        AppState::new(SceneOptions::default()).expect("Standard-Optionen sind gültig")
    }

    #[test]
    fn test_pointer_pressed_maps_to_world_coordinates() {
        let state = state();
        // Standard-Viewport 800x600: Mitte = Welt-Ursprung
        let commands = map_intent_to_commands(
            &state,
            AppIntent::PointerPressed {
                screen_pos: Vec2::new(400.0, 300.0),
            },
        );
        assert_eq!(
            commands,
            vec![AppCommand::BeginControlPointDrag {
                world_pos: Vec2::ZERO
            }]
        );
    }

    #[test]
    fn test_pointer_ignored_in_key_frame_scene() {
        let mut state = state();
        state.active_scene = SceneKind::KeyFrames;
        let commands = map_intent_to_commands(
            &state,
            AppIntent::PointerPressed {
                screen_pos: Vec2::ZERO,
            },
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn test_pointer_moved_without_drag_is_dropped() {
        let state = state();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::PointerMoved {
                screen_pos: Vec2::new(10.0, 10.0),
            },
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn test_frame_advanced_refreshes_curve_and_converts_to_milliseconds() {
        let state = state();
        let commands =
            map_intent_to_commands(&state, AppIntent::FrameAdvanced { dt_seconds: 0.5 });
        assert_eq!(
            commands,
            vec![
                AppCommand::RefreshCurve,
                AppCommand::AdvancePlayback { dt_ms: 500.0 }
            ]
        );

        let commands =
            map_intent_to_commands(&state, AppIntent::FrameAdvanced { dt_seconds: -1.0 });
        assert_eq!(commands, vec![AppCommand::RefreshCurve]);
    }

    #[test]
    fn test_frame_advanced_in_key_frame_scene_skips_curve() {
        let mut state = state();
        state.active_scene = SceneKind::KeyFrames;
        let commands =
            map_intent_to_commands(&state, AppIntent::FrameAdvanced { dt_seconds: 0.1 });
        assert_eq!(commands, vec![AppCommand::AdvancePlayback { dt_ms: 100.0 }]);
    }

    #[test]
    fn test_scene_switch_ends_drag_first() {
        let state = state();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::SceneSelected {
                kind: SceneKind::KeyFrames,
            },
        );
        assert_eq!(commands[0], AppCommand::EndControlPointDrag);
        assert_eq!(
            commands[1],
            AppCommand::SetActiveScene {
                kind: SceneKind::KeyFrames
            }
        );
    }
}

use approx::assert_relative_eq;
use bezier_scenes::{AppController, AppIntent, AppState, DragState, SceneKind, SceneOptions};
use glam::{Vec2, Vec3};

fn setup() -> (AppController, AppState) {
    let state = AppState::new(SceneOptions::default()).expect("Standard-Optionen sind gültig");
    (AppController::new(), state)
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

#[test]
fn test_drag_via_intents_moves_control_point() {
    let (mut controller, mut state) = setup();

    // 800x600, Welt [-5, 5]²: p3 = (4, 4) liegt bei (720, 60)
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(720.0, 60.0),
        },
    );
    assert_eq!(state.bezier.drag_state(), DragState::Dragging(3));

    // Bildschirmmitte = Welt-Ursprung
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(400.0, 300.0),
        },
    );
    assert_eq!(state.bezier.curve().points[3], Vec3::ZERO);

    let end = *state
        .bezier
        .tessellation()
        .positions()
        .last()
        .expect("Polylinie nicht leer");
    assert_relative_eq!(end.x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(end.y, 0.0, epsilon = 1e-5);

    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert_eq!(state.bezier.drag_state(), DragState::Idle);

    // Bewegung nach dem Loslassen ändert nichts mehr
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(0.0, 0.0),
        },
    );
    assert_eq!(state.bezier.curve().points[3], Vec3::ZERO);
}

#[test]
fn test_press_outside_pick_radius_stays_idle() {
    let (mut controller, mut state) = setup();
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(400.0, 300.0),
        },
    );
    assert_eq!(state.bezier.drag_state(), DragState::Idle);
}

#[test]
fn test_resize_changes_screen_to_world_mapping() {
    let (mut controller, mut state) = setup();
    send(
        &mut controller,
        &mut state,
        AppIntent::ViewportResized {
            size: [400.0, 400.0],
        },
    );

    // p0 = (-4, -4) liegt jetzt bei (40, 360)
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(40.0, 360.0),
        },
    );
    assert_eq!(state.bezier.drag_state(), DragState::Dragging(0));
}

#[test]
fn test_scene_switch_releases_drag_and_blocks_pointer() {
    let (mut controller, mut state) = setup();
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(80.0, 540.0),
        },
    );
    assert_eq!(state.bezier.drag_state(), DragState::Dragging(0));

    send(
        &mut controller,
        &mut state,
        AppIntent::SceneSelected {
            kind: SceneKind::KeyFrames,
        },
    );
    assert_eq!(state.active_scene, SceneKind::KeyFrames);
    assert_eq!(state.bezier.drag_state(), DragState::Idle);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(80.0, 540.0),
        },
    );
    assert_eq!(state.bezier.drag_state(), DragState::Idle);
}

#[test]
fn test_playback_toggle_advance_and_restart() {
    let (mut controller, mut state) = setup();
    send(
        &mut controller,
        &mut state,
        AppIntent::SceneSelected {
            kind: SceneKind::KeyFrames,
        },
    );

    // Angehalten: Zeit bleibt stehen
    send(
        &mut controller,
        &mut state,
        AppIntent::FrameAdvanced { dt_seconds: 1.0 },
    );
    assert_relative_eq!(state.keyframes.playback().time_ms(), 0.0);

    send(&mut controller, &mut state, AppIntent::PlaybackToggleRequested);
    send(
        &mut controller,
        &mut state,
        AppIntent::FrameAdvanced { dt_seconds: 2.5 },
    );
    assert_relative_eq!(state.keyframes.playback().time_ms(), 2500.0);
    assert_eq!(state.window_title(), "Milliseconds 2500");

    let pose = state.keyframes.current_pose();
    assert_relative_eq!(pose.position.x, 0.0, epsilon = 1e-4);

    send(&mut controller, &mut state, AppIntent::PlaybackRestartRequested);
    assert_relative_eq!(state.keyframes.playback().time_ms(), 0.0);
    assert!(!state.keyframes.playback().is_playing());
}

#[test]
fn test_reset_scene_restores_initial_curve() {
    let (mut controller, mut state) = setup();
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(80.0, 540.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(400.0, 300.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert_eq!(state.bezier.curve().points[0], Vec3::ZERO);

    send(&mut controller, &mut state, AppIntent::ResetSceneRequested);
    assert_eq!(state.bezier.curve().points[0], Vec3::new(-4.0, -4.0, 0.0));
}

#[test]
fn test_exit_requested_sets_exit_flag() {
    let (mut controller, mut state) = setup();
    assert!(!state.should_exit);
    send(&mut controller, &mut state, AppIntent::ExitRequested);
    assert!(state.should_exit);
}

#[test]
fn test_render_scene_reflects_active_scene() {
    let (mut controller, mut state) = setup();
    let bezier_segments = controller.build_render_scene(&state).segment_count();

    send(
        &mut controller,
        &mut state,
        AppIntent::SceneSelected {
            kind: SceneKind::KeyFrames,
        },
    );
    let keyframe_segments = controller.build_render_scene(&state).segment_count();
    assert_ne!(bezier_segments, keyframe_segments);
}

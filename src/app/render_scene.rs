//! Builder für Render-Szenen aus dem AppState.

use crate::app::scenes::SceneKind;
use crate::app::AppState;
use crate::shared::RenderScene;

/// Befüllt `scene` aus dem aktuellen AppState neu.
pub fn build_into(state: &AppState, scene: &mut RenderScene) {
    scene.clear();
    scene.camera = state.camera.clone();

    match state.active_scene {
        SceneKind::Bezier => push_bezier(state, scene),
        SceneKind::KeyFrames => push_keyframes(state, scene),
    }
}

/// Kurve, Kontrollpolygon (p0–p1, p2–p3) und Handles.
fn push_bezier(state: &AppState, scene: &mut RenderScene) {
    let opts = &state.options;
    let tessellation = state.bezier.tessellation();
    let [p0, p1, p2, p3] = *state.bezier.curve().control_points();

    scene.push_segment(p0, p1, opts.control_polygon_color);
    scene.push_segment(p2, p3, opts.control_polygon_color);
    scene.push_indexed(
        tessellation.positions(),
        tessellation.indices(),
        opts.curve_color,
    );

    let active = state.bezier.dragged_index();
    for (index, &point) in [p0, p1, p2, p3].iter().enumerate() {
        let color = if active == Some(index) {
            opts.handle_active_color
        } else {
            opts.handle_color
        };
        scene.push_square(point, opts.handle_size_world, color);
    }
}

/// Pfad durch alle Key-Frames, Kreuze an den Key-Frames und das animierte Objekt.
fn push_keyframes(state: &AppState, scene: &mut RenderScene) {
    let opts = &state.options;
    let frames = state.keyframes.track().frames();
    let path: Vec<_> = frames.iter().map(|f| f.position).collect();

    scene.push_polyline(&path, opts.keyframe_path_color);
    for &position in &path {
        scene.push_cross(position, opts.handle_size_world, opts.keyframe_path_color);
    }

    // Quadrat mit Diagonale, damit die Rotation sichtbar ist
    let corners = state.keyframes.object_corners();
    scene.push_indexed(
        &corners,
        &[0, 1, 1, 2, 2, 3, 3, 0, 0, 2],
        opts.animated_object_color,
    );
}

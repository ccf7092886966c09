//! Core-Domänentypen: Bézier-Kurve, Tessellierung, Drag, Kamera, Key-Frames.
//!
//! Host-unabhängig: keine Abhängigkeit zu egui oder wgpu.

pub mod bezier;
pub mod camera;
pub mod drag;
pub mod keyframe;
pub mod tessellation;

pub use bezier::{bernstein_weights, power_basis, CubicBezier, EvalStrategy, BEZIER_BASIS};
pub use camera::SceneCamera;
pub use drag::{nearest_control_point, ControlPointDrag, DragState};
pub use keyframe::{axis_angle_quat, KeyFrame, KeyFrameTrack, Playback, Pose};
pub use tessellation::{CurveTessellation, TessellationError};

//! UI-Komponenten: Menü, Toolbar, Status-Bar, Input-Handling.

pub mod input;
mod keyboard;
pub mod menu;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use menu::render_menu;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;

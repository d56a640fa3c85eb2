//! Render state - data structure sent from App layer to UI for rendering

use crate::components::RegistrationRender;

/// Complete state needed by the UI to render
///
/// Only built from `AppState::to_render_state`, so the first frame already
/// carries the configured username.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub registration: RegistrationRender,

    // Popups
    pub show_help: bool,
}

//! Command handlers - business logic for processing UI events

use crate::app::AppState;

impl AppState {
    pub fn login(&mut self) {
        self.registration.trigger_login();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        tracing::debug!(show_help = self.show_help, "Help toggled");
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_sets_message() {
        let mut state = AppState::default();
        state.login();
        assert_eq!(
            state.to_render_state().registration.login_message.as_deref(),
            Some("User 'Uttam' logged in successfully!")
        );
    }

    #[test]
    fn test_help_toggle() {
        let mut state = AppState::default();
        state.toggle_help();
        assert!(state.show_help);
        state.toggle_help();
        assert!(!state.show_help);

        state.toggle_help();
        state.close_help();
        assert!(!state.show_help);
    }
}

//! App state - pure data structure with no I/O logic

use crate::components::RegistrationView;
use crate::config::Config;
use crate::messages::RenderState;

/// Main application state - pure data, no I/O
pub struct AppState {
    /// Root component; owns the user login view
    pub registration: RegistrationView,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            registration: RegistrationView::new(config.username.clone()),
            show_help: false,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            registration: self.registration.render(),
            show_help: self.show_help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_default_username() {
        let render = AppState::default().to_render_state();
        assert_eq!(render.registration.user_login.username, "Uttam");
        assert_eq!(render.registration.login_message, None);
        assert!(!render.show_help);
    }

    #[test]
    fn test_config_username_is_bound() {
        let config = Config {
            username: String::from("Priya"),
            ..Config::default()
        };
        let state = AppState::new(&config);
        assert_eq!(state.to_render_state().registration.user_login.username, "Priya");
    }
}

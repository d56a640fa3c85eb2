//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Trigger the login action of the user login view
    Login,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Any key closes the help popup
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('l') | KeyCode::Enter => Some(UiEvent::Login),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('q') => Some(UiEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_login_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('l')), false), Some(UiEvent::Login));
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), false), Some(UiEvent::Login));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), false), Some(UiEvent::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(ctrl_c, false), Some(UiEvent::Quit));
        assert_eq!(key_to_ui_event(ctrl_c, true), Some(UiEvent::Quit));
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('?')), false), Some(UiEvent::ToggleHelp));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('l')), true), Some(UiEvent::CloseHelp));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), true), Some(UiEvent::CloseHelp));
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = press(KeyCode::Char('l'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_ui_event(key, false), None);
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('x')), false), None);
    }
}

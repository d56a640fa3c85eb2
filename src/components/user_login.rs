//! User login view - the child component
//!
//! Displays the username received from its owner and, when the login action
//! is triggered, emits a success message. It holds no state of its own beyond
//! the bound input.

use crate::components::binding::{EventEmitter, Input};

/// Build the message emitted on login
pub fn login_message(username: &str) -> String {
    format!("User '{}' logged in successfully!", username)
}

/// Everything the UI needs to draw the login view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserLoginRender {
    pub username: String,
}

/// Child view, generic over the owner's message type `M`
#[derive(Debug)]
pub struct UserLoginView<M> {
    /// Bound by the owner
    pub username: Input<String>,
    /// Fired with the login message each time the action is triggered
    pub login_event: EventEmitter<String, M>,
}

impl<M> Default for UserLoginView<M> {
    fn default() -> Self {
        UserLoginView {
            username: Input::default(),
            login_event: EventEmitter::new(),
        }
    }
}

impl<M> UserLoginView<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> UserLoginRender {
        UserLoginRender {
            username: self.username.get().clone(),
        }
    }

    /// Login action. Returns the owner's message, if an owner is subscribed.
    pub fn login(&self) -> Option<M> {
        let message = login_message(self.username.get());
        tracing::info!(username = %self.username.get(), "Login triggered");

        let msg = self.login_event.emit(message);
        if msg.is_none() {
            tracing::debug!("Login event has no subscriber");
        }
        msg
    }
}

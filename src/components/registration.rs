//! Registration view - the parent component
//!
//! Owns the username and the status message. The username is pushed into the
//! embedded [`UserLoginView`]; the login event comes back as a
//! [`RegistrationMsg`] and lands in [`RegistrationView::handle_login`].

use crate::components::user_login::{UserLoginRender, UserLoginView};

/// Messages the registration view reacts to
#[derive(Clone, Debug, PartialEq)]
pub enum RegistrationMsg {
    /// The login view reported a successful login
    Login(String),
}

/// Everything the UI needs to draw the registration view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationRender {
    pub user_login: UserLoginRender,
    /// Present only when the status message is non-empty
    pub login_message: Option<String>,
}

#[derive(Debug)]
pub struct RegistrationView {
    username: String,
    login_message: String,
    user_login: UserLoginView<RegistrationMsg>,
}

impl RegistrationView {
    pub fn new(username: impl Into<String>) -> Self {
        let mut view = RegistrationView {
            username: username.into(),
            login_message: String::new(),
            user_login: UserLoginView::new(),
        };
        view.bind_user_login();
        view
    }

    /// Wire the child: username in, login event out
    fn bind_user_login(&mut self) {
        if self.user_login.username.set(self.username.clone()) {
            tracing::debug!(username = %self.username, "Bound username to login view");
        }
        self.user_login.login_event.subscribe(RegistrationMsg::Login);
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn login_message(&self) -> &str {
        &self.login_message
    }

    pub fn update(&mut self, msg: RegistrationMsg) {
        match msg {
            RegistrationMsg::Login(message) => self.handle_login(message),
        }
    }

    /// Store the child's notification verbatim
    pub fn handle_login(&mut self, message: String) {
        tracing::info!(message = %message, "Login message received");
        self.login_message = message;
    }

    /// Forward the user's login action to the child and dispatch what it emits
    pub fn trigger_login(&mut self) {
        if let Some(msg) = self.user_login.login() {
            self.update(msg);
        }
    }

    pub fn render(&self) -> RegistrationRender {
        RegistrationRender {
            user_login: self.user_login.render(),
            login_message: if self.login_message.is_empty() {
                None
            } else {
                Some(self.login_message.clone())
            },
        }
    }
}

//! # Registration TUI
//!
//! Two terminal components wired together: a registration view (parent) and
//! a user login view (child).
//!
//! ## Features
//! - Username passed from parent to child through an input slot
//! - Login message passed from child to parent through an event emitter
//! - Status message shown only once the child has reported a login
//! - YAML config for the initial username and the log file
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (component tree, owned by one actor task)

pub mod app;
pub mod components;
pub mod config;
pub mod constants;
pub mod messages;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use components::{
    login_message, EventEmitter, Input, RegistrationMsg, RegistrationView, UserLoginView,
};
pub use config::Config;
pub use messages::{RenderState, UiEvent};

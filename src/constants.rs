//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Username the registration view starts with when no config overrides it
pub const DEFAULT_USERNAME: &str = "Uttam";

/// Application name
pub const APP_NAME: &str = "Registration TUI";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory (under the home directory) holding the config file
pub const CONFIG_DIR_NAME: &str = ".registration-tui";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Default log file, written to the working directory
pub const DEFAULT_LOG_FILE: &str = "registration.log";

pub const REGISTRATION_HEADING: &str = "Registration Component (Parent)";
pub const USER_LOGIN_HEADING: &str = "User Login Component (Child)";
pub const USERNAME_LABEL: &str = "Username from parent: ";
pub const LOGIN_BUTTON_LABEL: &str = "Login";

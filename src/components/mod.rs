//! Components - the registration (parent) and user login (child) views
//!
//! Data flows down through input slots, events flow up through emitters.

pub mod binding;
pub mod registration;
pub mod user_login;

pub use binding::{EventEmitter, Input};
pub use registration::{RegistrationMsg, RegistrationRender, RegistrationView};
pub use user_login::{login_message, UserLoginRender, UserLoginView};

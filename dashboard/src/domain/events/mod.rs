pub mod auth_event;

pub use auth_event::{AuthEvent, AuthNotice};

//! Application services
//!
//! Client-side service wrappers wired to the resolved API base URL.

mod auth;
mod user_config;

pub use auth::{AuthError, AuthService, AuthSession};
pub use user_config::new_user_config_client;

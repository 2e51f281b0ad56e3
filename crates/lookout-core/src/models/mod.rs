//! Data models for Lookout
//!
//! Records mirror the backend's JSON shapes verbatim. The backend is the only
//! authority; the client never derives or recomputes fields.

mod brand;
mod credential;
mod intent;
mod user;

pub use brand::{Brand, NewBrand};
pub use credential::{NewCredential, Provider, StoredCredential};
pub use intent::{Intent, NewIntent};
pub use user::SessionUser;

//! Session user profile, read-only to the client.

use serde::{Deserialize, Serialize};

/// The authenticated account as reported by `/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub email: String,
    pub created_at: String,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn session_user_round_trips() {
        let user = SessionUser {
            username: "mara".to_string(),
            email: "mara@example.com".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            is_active: true,
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: SessionUser = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}

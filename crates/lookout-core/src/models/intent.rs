//! Saved search intent records.

use serde::{Deserialize, Serialize};

/// A named question the product asks LLMs on the user's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub id: i64,
    /// User-chosen identifier; uniqueness is enforced by the backend only.
    pub intent_alias: String,
    pub prompt: String,
    pub created_at: String,
}

/// Request body for adding an intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIntent {
    pub intent_alias: String,
    pub prompt: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn intent_deserializes_from_backend_shape() {
        let intent: Intent = serde_json::from_str(
            r#"{"id":7,"intent_alias":"pricing","prompt":"What does Acme cost?","created_at":"2024-03-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(intent.intent_alias, "pricing");
        assert_eq!(intent.prompt, "What does Acme cost?");
    }
}

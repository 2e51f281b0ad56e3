//! Stored third-party API credential records.

use serde::{Deserialize, Serialize};

/// LLM providers a credential can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Groq,
}

impl Provider {
    /// Every provider, in picker order.
    pub const ALL: [Self; 2] = [Self::Google, Self::Groq];

    /// Human-facing label shown in credential rows and the provider picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Google => "Google Gemini",
            Self::Groq => "Groq",
        }
    }

    /// Wire value, as serialized in request and response bodies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Groq => "groq",
        }
    }

    /// Parses a wire value back into a provider.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "google" => Some(Self::Google),
            "groq" => Some(Self::Groq),
            _ => None,
        }
    }
}

/// A stored API credential as reported by the backend.
///
/// Raw key material is never present in any response; only metadata about
/// the stored key is exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredential {
    pub id: i64,
    pub provider: Provider,
    pub key_name: Option<String>,
    pub created_at: String,
    pub last_used_at: Option<String>,
}

/// Request body for storing a new credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCredential {
    pub provider: Provider,
    pub api_key: String,
    pub key_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn provider_round_trips_wire_values() {
        for provider in Provider::ALL {
            assert_eq!(Provider::parse(provider.as_str()), Some(provider));
        }
        assert_eq!(Provider::parse("openai"), None);
    }

    #[test]
    fn provider_serializes_lowercase() {
        let json = serde_json::to_string(&Provider::Google).unwrap();
        assert_eq!(json, r#""google""#);
    }

    #[test]
    fn credential_deserializes_with_null_optionals() {
        let credential: StoredCredential = serde_json::from_str(
            r#"{"id":1,"provider":"google","key_name":null,"created_at":"2024-01-01T00:00:00Z","last_used_at":null}"#,
        )
        .unwrap();
        assert_eq!(credential.provider, Provider::Google);
        assert_eq!(credential.key_name, None);
        assert_eq!(credential.last_used_at, None);
    }

    #[test]
    fn new_credential_serializes_null_key_name() {
        let body = NewCredential {
            provider: Provider::Groq,
            api_key: "gsk_test".to_string(),
            key_name: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["provider"], "groq");
        assert!(json["key_name"].is_null());
    }
}

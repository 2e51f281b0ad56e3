//! Tracked brand records (mine vs. competitor).

use serde::{Deserialize, Serialize};

/// A brand the user watches for in LLM answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub brand_name: String,
    /// `true` for the user's own brand, `false` for a competitor.
    pub is_mine: bool,
    pub created_at: String,
}

/// Request body for adding a brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBrand {
    pub brand_name: String,
    pub is_mine: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn brand_deserializes_from_backend_shape() {
        let brand: Brand = serde_json::from_str(
            r#"{"id":3,"brand_name":"Acme","is_mine":true,"created_at":"2024-02-10 08:30:00"}"#,
        )
        .unwrap();
        assert_eq!(brand.brand_name, "Acme");
        assert!(brand.is_mine);
    }
}

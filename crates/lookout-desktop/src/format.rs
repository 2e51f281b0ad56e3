//! Display formatting for server-provided timestamps and credential rows.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use lookout_core::models::StoredCredential;

/// Formats a backend timestamp as `M/D/YYYY` (no zero padding).
///
/// Accepts RFC 3339 and the SQLite `YYYY-MM-DD HH:MM:SS` shape the backend
/// emits; anything else passes through unchanged rather than guessing.
#[must_use]
pub fn format_short_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.date_naive().format("%-m/%-d/%Y").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return parsed.date().format("%-m/%-d/%Y").to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.format("%-m/%-d/%Y").to_string();
    }
    raw.to_string()
}

/// Credential row title: provider label, with the key name in parentheses
/// when one was given.
#[must_use]
pub fn credential_title(credential: &StoredCredential) -> String {
    match credential.key_name.as_deref() {
        Some(name) if !name.trim().is_empty() => {
            format!("{} ({name})", credential.provider.label())
        }
        _ => credential.provider.label().to_string(),
    }
}

/// Credential row meta line. The "Last used" clause is omitted entirely for
/// keys that have never been used.
#[must_use]
pub fn credential_meta(credential: &StoredCredential) -> String {
    let mut line = format!("Added {}", format_short_date(&credential.created_at));
    if let Some(last_used) = credential.last_used_at.as_deref() {
        line.push_str(" • Last used ");
        line.push_str(&format_short_date(last_used));
    }
    line
}

#[cfg(test)]
mod tests {
    use lookout_core::models::Provider;
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_credential() -> StoredCredential {
        StoredCredential {
            id: 1,
            provider: Provider::Google,
            key_name: Some("Prod".to_string()),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            last_used_at: None,
        }
    }

    #[test]
    fn short_date_from_rfc3339() {
        assert_eq!(format_short_date("2024-01-01T00:00:00Z"), "1/1/2024");
        assert_eq!(format_short_date("2024-11-23T09:15:00+02:00"), "11/23/2024");
    }

    #[test]
    fn short_date_from_sqlite_timestamp() {
        assert_eq!(format_short_date("2024-03-04 08:30:00"), "3/4/2024");
        assert_eq!(format_short_date("2024-03-04"), "3/4/2024");
    }

    #[test]
    fn short_date_passes_garbage_through() {
        assert_eq!(format_short_date("yesterday"), "yesterday");
    }

    #[test]
    fn title_includes_key_name_when_present() {
        assert_eq!(credential_title(&sample_credential()), "Google Gemini (Prod)");

        let unnamed = StoredCredential {
            key_name: None,
            ..sample_credential()
        };
        assert_eq!(credential_title(&unnamed), "Google Gemini");

        let blank = StoredCredential {
            key_name: Some("   ".to_string()),
            ..sample_credential()
        };
        assert_eq!(credential_title(&blank), "Google Gemini");
    }

    #[test]
    fn meta_omits_last_used_clause_when_never_used() {
        assert_eq!(credential_meta(&sample_credential()), "Added 1/1/2024");
    }

    #[test]
    fn meta_appends_last_used_clause_when_present() {
        let used = StoredCredential {
            last_used_at: Some("2024-03-04T10:00:00Z".to_string()),
            ..sample_credential()
        };
        assert_eq!(
            credential_meta(&used),
            "Added 1/1/2024 • Last used 3/4/2024"
        );
    }
}

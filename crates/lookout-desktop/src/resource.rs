//! Per-manager view state for remotely-owned lists.
//!
//! Each list manager (credentials, brands, intents) owns one `RemoteList`
//! slot and one `Notice` slot. Nothing is shared across managers; the
//! presentation layer merges the slots by rendering each inside its own
//! section.

/// View state for one remotely-owned list.
///
/// The server is the only authority: a successful fetch replaces the list
/// wholesale, and `prior` keeps the last successful read visible while a
/// refresh is in flight or after one fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteList<T> {
    /// No fetch attempted yet.
    Idle,
    /// A fetch is outstanding; `None` prior means this is the first one.
    Loading { prior: Option<Vec<T>> },
    /// Last fetch succeeded.
    Loaded(Vec<T>),
    /// Last fetch failed; `prior` items stay on screen.
    Failed { message: String, prior: Vec<T> },
}

impl<T: Clone> RemoteList<T> {
    /// Items to render, regardless of fetch state.
    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            Self::Idle | Self::Loading { prior: None } => &[],
            Self::Loading {
                prior: Some(items),
            }
            | Self::Loaded(items)
            | Self::Failed { prior: items, .. } => items,
        }
    }

    /// Message of the last failed fetch, if the slot is in that state.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// True only while the very first fetch is outstanding.
    #[must_use]
    pub const fn is_initial_loading(&self) -> bool {
        matches!(self, Self::Loading { prior: None })
    }

    /// Transition into a fetch, carrying the last successful read along.
    #[must_use]
    pub fn to_loading(&self) -> Self {
        match self {
            Self::Idle | Self::Loading { prior: None } => Self::Loading { prior: None },
            Self::Loading {
                prior: Some(items),
            }
            | Self::Loaded(items)
            | Self::Failed { prior: items, .. } => Self::Loading {
                prior: Some(items.clone()),
            },
        }
    }

    /// Folds a fetch result back into view state.
    #[must_use]
    pub fn resolve(self, result: Result<Vec<T>, String>) -> Self {
        match result {
            Ok(items) => Self::Loaded(items),
            Err(message) => Self::Failed {
                message,
                prior: self.items().to_vec(),
            },
        }
    }
}

/// One manager's transient outcome message; last write wins within the
/// manager that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::Error(text.into())
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Shared pre-submit check. Any blank required field aborts the submission
/// before a request is made.
pub fn validate_required(fields: &[&str]) -> Result<(), Notice> {
    if fields.iter().any(|field| field.trim().is_empty()) {
        Err(Notice::error("Please fill in all fields"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_fetch_is_initial_loading() {
        let list = RemoteList::<i64>::Idle.to_loading();
        assert!(list.is_initial_loading());
        assert_eq!(list.items(), &[] as &[i64]);
    }

    #[test]
    fn refresh_keeps_prior_items_visible() {
        let loaded = RemoteList::Loaded(vec![1, 2]);
        let refreshing = loaded.to_loading();
        assert!(!refreshing.is_initial_loading());
        assert_eq!(refreshing.items(), &[1, 2]);
    }

    #[test]
    fn failed_fetch_retains_stale_data() {
        let refreshing = RemoteList::Loaded(vec![5]).to_loading();
        let failed = refreshing.resolve(Err("boom".to_string()));
        assert_eq!(failed.items(), &[5]);
        assert_eq!(failed.error(), Some("boom"));
    }

    #[test]
    fn successful_fetch_replaces_list_wholesale() {
        let failed = RemoteList::Failed {
            message: "old".to_string(),
            prior: vec![1],
        };
        let reloaded = failed.to_loading().resolve(Ok(vec![7, 8, 9]));
        assert_eq!(reloaded, RemoteList::Loaded(vec![7, 8, 9]));
        assert_eq!(reloaded.error(), None);
    }

    #[test]
    fn validate_required_rejects_blank_fields() {
        let invalid = validate_required(&["Acme", "   "]).unwrap_err();
        assert_eq!(invalid, Notice::error("Please fill in all fields"));
        assert!(invalid.is_error());
        assert!(validate_required(&["Acme", "pricing"]).is_ok());
    }
}

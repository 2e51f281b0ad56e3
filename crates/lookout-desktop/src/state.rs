//! Application state management
//!
//! Global state accessible via Dioxus context providers. List state lives in
//! the section components that own it; only cross-cutting state is here.

use std::sync::Arc;

use dioxus::prelude::*;

use lookout_core::UserConfigClient;

use crate::services::{AuthService, AuthSession};
use crate::theme::{ResolvedTheme, ThemeMode};

/// A process-wide banner, used for background failures that would otherwise
/// be silently discarded (e.g. sign-out teardown).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub text: String,
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Active session, if signed in
    pub session: Signal<Option<AuthSession>>,
    /// Last auth initialization/restore error for UI display
    pub auth_error: Signal<Option<String>>,
    /// Whether the persisted session is still being restored at startup
    pub restoring_session: Signal<bool>,
    /// Selected theme mode
    pub theme_mode: Signal<ThemeMode>,
    /// Resolved theme (light/dark based on mode and system preference)
    pub theme: Signal<ResolvedTheme>,
    /// Auth service (None when construction failed)
    pub auth_service: Signal<Option<Arc<AuthService>>>,
    /// User-configuration API client (None when construction failed)
    pub user_config: Signal<Option<Arc<UserConfigClient>>>,
    /// Process-wide notification feed
    pub notifications: Signal<Vec<Notification>>,
    /// Monotonic id source for notifications
    pub next_notification_id: Signal<u64>,
}

impl AppState {
    /// Bearer token of the active session, if any.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        (self.session)().map(|session| session.access_token)
    }

    /// Token and client pair for an API call.
    ///
    /// `None` means the call is skipped entirely; no request is sent without
    /// a token.
    #[must_use]
    pub fn api_handles(&self) -> Option<(String, Arc<UserConfigClient>)> {
        let token = self.access_token()?;
        let client = (self.user_config)()?;
        Some((token, client))
    }

    /// Appends a banner to the notification feed.
    pub fn push_notification(&mut self, text: impl Into<String>) {
        let id = (self.next_notification_id)();
        self.next_notification_id.set(id + 1);
        self.notifications.write().push(Notification {
            id,
            text: text.into(),
        });
    }

    /// Removes a banner by id.
    pub fn dismiss_notification(&mut self, id: u64) {
        self.notifications
            .write()
            .retain(|notification| notification.id != id);
    }
}

//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use lookout_core::UserConfigClient;

use crate::components::ui::{ButtonVariant, UiButton, UI_STYLES};
use crate::services::{new_user_config_client, AuthService, AuthSession};
use crate::state::{AppState, Notification};
use crate::theme::{resolve_theme, ResolvedTheme, ThemeMode};
use crate::views::{ProfilePage, SignIn};

const APP_STYLES: &str = r"
.app-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 18px 24px;
    border-bottom: 1px solid var(--border);
}

.app-title {
    margin: 0;
    font-size: 20px;
    font-weight: 700;
}

.app-subtitle {
    margin: 2px 0 0;
    font-size: 12px;
    color: var(--text-secondary);
}

.app-loading {
    padding: 48px 24px;
    text-align: center;
    color: var(--text-secondary);
}

.app-notification {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 12px;
    margin: 12px 24px 0;
    padding: 10px 14px;
    border: 1px solid var(--error);
    border-radius: 8px;
    background: var(--error-soft);
    font-size: 13px;
}

.profile-page {
    max-width: 760px;
    margin: 0 auto;
    padding: 24px;
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.section-card {
    border: 1px solid var(--border);
    border-radius: 12px;
    background: var(--bg-secondary);
    padding: 16px 18px;
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.section-card-header {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    gap: 12px;
}

.section-card-title {
    margin: 0;
    font-size: 15px;
    font-weight: 700;
}

.section-card-description {
    margin: 2px 0 0;
    font-size: 12px;
    color: var(--text-secondary);
}

.notice {
    border-radius: 8px;
    padding: 8px 12px;
    font-size: 13px;
}

.notice--success {
    color: var(--success);
    border: 1px solid var(--success);
}

.notice--error {
    color: var(--error);
    border: 1px solid var(--error);
}

.section-hint {
    font-size: 12px;
    color: var(--text-muted);
}

.empty-state {
    font-size: 13px;
    color: var(--text-muted);
    padding: 8px 0;
}

.list-rows {
    display: flex;
    flex-direction: column;
}

.list-row {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 12px;
    padding: 10px 0;
    border-top: 1px solid var(--border);
}

.list-row-info {
    display: flex;
    flex-direction: column;
    gap: 2px;
    min-width: 0;
}

.list-row-title {
    font-size: 14px;
    font-weight: 600;
    display: flex;
    align-items: center;
    gap: 8px;
}

.list-row-meta {
    font-size: 12px;
    color: var(--text-muted);
}

.list-row-prompt {
    margin: 0;
    font-size: 13px;
    color: var(--text-secondary);
    white-space: pre-wrap;
}

.badge {
    font-size: 11px;
    font-weight: 600;
    border-radius: 999px;
    padding: 2px 8px;
}

.badge--mine {
    color: var(--accent-text);
    background: var(--accent);
}

.badge--competitor {
    color: var(--text-secondary);
    background: var(--bg-tertiary);
}

.form-grid {
    display: flex;
    flex-direction: column;
    gap: 8px;
    padding: 12px;
    border: 1px solid var(--border);
    border-radius: 8px;
    background: var(--bg-tertiary);
}

.field-label {
    font-size: 12px;
    font-weight: 600;
    color: var(--text-secondary);
}

.field-inline {
    display: flex;
    gap: 8px;
    align-items: center;
}

.field-check {
    display: flex;
    gap: 8px;
    align-items: center;
    font-size: 13px;
}

.form-actions {
    display: flex;
    gap: 8px;
    margin-top: 4px;
}

.account-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 10px 16px;
}

.account-field-label {
    font-size: 11px;
    font-weight: 700;
    color: var(--text-muted);
    text-transform: uppercase;
    letter-spacing: 0.04em;
}

.account-field-value {
    font-size: 14px;
}

.sign-in-wrap {
    display: flex;
    justify-content: center;
    padding: 64px 24px;
}

.sign-in-card {
    width: 340px;
    display: flex;
    flex-direction: column;
    gap: 10px;
    border: 1px solid var(--border);
    border-radius: 12px;
    background: var(--bg-secondary);
    padding: 22px;
}

.sign-in-title {
    margin: 0;
    font-size: 17px;
}

.sign-in-subtitle {
    margin: 0 0 6px;
    font-size: 12px;
    color: var(--text-secondary);
}
";

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let session = use_signal(|| None::<AuthSession>);
    let mut auth_error = use_signal(|| None::<String>);
    let mut restoring_session = use_signal(|| true);
    let theme_mode = use_signal(|| ThemeMode::System);
    let mut theme = use_signal(|| resolve_theme(ThemeMode::System));
    let mut auth_service = use_signal(|| None::<Arc<AuthService>>);
    let mut user_config = use_signal(|| None::<Arc<UserConfigClient>>);
    let notifications = use_signal(Vec::new);
    let next_notification_id = use_signal(|| 0_u64);
    let mut services_initialized = use_signal(|| false);

    // Build the service handles and restore any persisted session (only once)
    use_effect(move || {
        if services_initialized() {
            return;
        }
        services_initialized.set(true);

        match new_user_config_client() {
            Ok(client) => user_config.set(Some(Arc::new(client))),
            Err(error) => {
                tracing::error!("Failed to construct API client: {}", error);
            }
        }

        match AuthService::new_from_config() {
            Ok(service) => {
                let service = Arc::new(service);
                auth_service.set(Some(Arc::clone(&service)));

                let mut session_signal = session;
                let mut auth_error_signal = auth_error;
                let mut restoring_signal = restoring_session;
                spawn(async move {
                    match service.restore_session().await {
                        Ok(Some(restored)) => session_signal.set(Some(restored)),
                        Ok(None) => {}
                        Err(error) => {
                            tracing::error!("Session restore failed: {}", error);
                            auth_error_signal.set(Some(error.to_string()));
                        }
                    }
                    restoring_signal.set(false);
                });
            }
            Err(error) => {
                tracing::error!("Failed to construct auth service: {}", error);
                auth_error.set(Some(error.to_string()));
                restoring_session.set(false);
            }
        }
    });

    use_context_provider(|| AppState {
        session,
        auth_error,
        restoring_session,
        theme_mode,
        theme,
        auth_service,
        user_config,
        notifications,
        next_notification_id,
    });

    let cycle_theme = move |_: MouseEvent| {
        let mut theme_mode_signal = theme_mode;
        let next = theme_mode().next();
        theme_mode_signal.set(next);
        theme.set(resolve_theme(next));
    };

    let current_theme = theme();
    let colors = current_theme.palette();
    let theme_attr = match current_theme {
        ResolvedTheme::Light => "light",
        ResolvedTheme::Dark => "dark",
    };
    let mode_label = format!("Theme: {}", theme_mode().label());
    let signed_in = session().is_some();
    let notification_items = notifications();

    rsx! {
        style { "{APP_STYLES}{UI_STYLES}" }

        div {
            class: "app-container",
            "data-theme": "{theme_attr}",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: {colors.bg_primary};
                color: {colors.text_primary};
                --bg-primary: {colors.bg_primary};
                --bg-secondary: {colors.bg_secondary};
                --bg-tertiary: {colors.bg_tertiary};
                --text-primary: {colors.text_primary};
                --text-secondary: {colors.text_secondary};
                --text-muted: {colors.text_muted};
                --border: {colors.border};
                --accent: {colors.accent};
                --accent-hover: {colors.accent_hover};
                --accent-text: {colors.accent_text};
                --error: {colors.error};
                --error-soft: {colors.error_soft};
                --success: {colors.success};
            ",

            header {
                class: "app-header",
                div {
                    h1 { class: "app-title", "Lookout" }
                    p { class: "app-subtitle", "Profile & settings" }
                }
                UiButton {
                    variant: ButtonVariant::Ghost,
                    onclick: cycle_theme,
                    "{mode_label}"
                }
            }

            for notification in notification_items {
                NotificationBanner {
                    key: "{notification.id}",
                    notification,
                }
            }

            if restoring_session() {
                div { class: "app-loading", "Restoring session..." }
            } else if signed_in {
                ProfilePage {}
            } else {
                SignIn {}
            }
        }
    }
}

/// Dismissible banner for background failures (e.g. sign-out teardown).
#[component]
fn NotificationBanner(notification: Notification) -> Element {
    let mut state = use_context::<AppState>();
    let id = notification.id;

    rsx! {
        div {
            class: "app-notification",
            span { "{notification.text}" }
            UiButton {
                variant: ButtonVariant::Ghost,
                onclick: move |_| state.dismiss_notification(id),
                "Dismiss"
            }
        }
    }
}

//! Account card with background sign-out.

use dioxus::prelude::*;

use super::ui::{ButtonVariant, UiButton};
use super::SectionCard;
use crate::format::format_short_date;
use crate::state::AppState;

#[component]
pub fn AccountSection() -> Element {
    let state = use_context::<AppState>();

    // The profile page only renders signed-in, so this is effectively always
    // present; an empty card is fine for the teardown frame.
    let Some(session) = (state.session)() else {
        return rsx! {};
    };
    let user = session.user;
    let member_since = format_short_date(&user.created_at);
    let status = if user.is_active { "Active" } else { "Inactive" };

    let sign_out = move |_: MouseEvent| {
        let Some(session) = (state.session)() else {
            return;
        };
        let Some(service) = (state.auth_service)() else {
            return;
        };

        // Leave the profile page immediately; server teardown runs behind
        // it and reports through the notification feed if it fails.
        let mut session_signal = state.session;
        session_signal.set(None);

        let mut state = state;
        spawn(async move {
            if let Err(error) = service.logout(&session.access_token).await {
                tracing::warn!("Background sign-out failed: {}", error);
                state.push_notification(format!(
                    "Sign-out didn't finish on the server: {error}"
                ));
            }
        });
    };

    rsx! {
        SectionCard {
            title: "Account",
            description: "Profile details for the signed-in Lookout account.",
            action: rsx! {
                UiButton {
                    variant: ButtonVariant::Outline,
                    onclick: sign_out,
                    "Sign out"
                }
            },

            div {
                class: "account-grid",
                div {
                    class: "account-field",
                    div { class: "account-field-label", "Username" }
                    div { class: "account-field-value", "{user.username}" }
                }
                div {
                    class: "account-field",
                    div { class: "account-field-label", "Email" }
                    div { class: "account-field-value", "{user.email}" }
                }
                div {
                    class: "account-field",
                    div { class: "account-field-label", "Member since" }
                    div { class: "account-field-value", "{member_since}" }
                }
                div {
                    class: "account-field",
                    div { class: "account-field-label", "Status" }
                    div { class: "account-field-value", "{status}" }
                }
            }
        }
    }
}

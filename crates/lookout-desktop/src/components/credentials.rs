//! Stored API credential manager.
//!
//! Lists stored keys, collects new ones through an inline form, and removes
//! them after native confirmation. Key material flows one way: it is typed,
//! submitted, and never shown again.

use dioxus::prelude::*;

use lookout_core::models::{NewCredential, Provider, StoredCredential};
use lookout_core::API_KEYS;

use super::ui::{ButtonVariant, UiButton, UiInput};
use super::{confirm_removal, refresh_list, NoticeLine, SectionCard};
use crate::format::{credential_meta, credential_title};
use crate::resource::{validate_required, Notice, RemoteList};
use crate::state::AppState;

const LIST_FALLBACK: &str = "Failed to load API keys";

/// Input type for the key field; masking changes display only, never the
/// stored value.
const fn key_input_type(visible: bool) -> &'static str {
    if visible {
        "text"
    } else {
        "password"
    }
}

#[component]
pub fn CredentialsSection() -> Element {
    let state = use_context::<AppState>();

    let list = use_signal(|| RemoteList::<StoredCredential>::Idle);
    let mut notice = use_signal(|| None::<Notice>);
    let mut form_open = use_signal(|| false);
    let mut provider = use_signal(|| Provider::Google);
    let mut api_key = use_signal(String::new);
    let mut key_name = use_signal(String::new);
    let mut show_key = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    use_future(move || async move {
        refresh_list(state, list, API_KEYS, LIST_FALLBACK).await;
    });

    let open_form = move |_: MouseEvent| {
        form_open.set(true);
    };

    let close_form = move |_: MouseEvent| {
        form_open.set(false);
    };

    let submit = move |_: MouseEvent| {
        if let Err(invalid) = validate_required(&[&api_key()]) {
            notice.set(Some(invalid));
            return;
        }

        submitting.set(true);
        notice.set(None);

        let request = NewCredential {
            provider: provider(),
            api_key: api_key().trim().to_string(),
            key_name: lookout_core::config::normalize_text_option(Some(key_name())),
        };

        let mut notice_signal = notice;
        let mut submitting_signal = submitting;
        let mut form_open_signal = form_open;
        let mut api_key_signal = api_key;
        let mut key_name_signal = key_name;
        let mut show_key_signal = show_key;
        spawn(async move {
            if let Some((token, client)) = state.api_handles() {
                match client.create(&token, API_KEYS, &request).await {
                    Ok(()) => {
                        api_key_signal.set(String::new());
                        key_name_signal.set(String::new());
                        show_key_signal.set(false);
                        form_open_signal.set(false);
                        notice_signal.set(Some(Notice::success("API key added successfully")));
                        refresh_list(state, list, API_KEYS, LIST_FALLBACK).await;
                    }
                    Err(error) => {
                        tracing::error!("Failed to add API key: {}", error);
                        notice_signal
                            .set(Some(Notice::error(error.user_message("Failed to add API key"))));
                    }
                }
            }
            submitting_signal.set(false);
        });
    };

    let remove = move |credential: StoredCredential| {
        let mut notice_signal = notice;
        spawn(async move {
            let description = format!(
                "Remove {}? Lookout will stop using this key immediately.",
                credential_title(&credential)
            );
            if !confirm_removal("Remove API key", &description).await {
                return;
            }

            let Some((token, client)) = state.api_handles() else {
                return;
            };
            match client.delete(&token, API_KEYS, credential.id).await {
                Ok(()) => {
                    notice_signal.set(Some(Notice::success("API key deleted")));
                    refresh_list(state, list, API_KEYS, LIST_FALLBACK).await;
                }
                Err(error) => {
                    tracing::error!("Failed to delete API key {}: {}", credential.id, error);
                    notice_signal.set(Some(Notice::error(
                        error.user_message("Failed to delete API key"),
                    )));
                }
            }
        });
    };

    let credentials = list();
    let current_provider = provider();
    let key_type = key_input_type(show_key());
    let toggle_label = if show_key() { "Hide" } else { "Show" };

    rsx! {
        SectionCard {
            title: "API Keys",
            description: "Credentials for the LLM providers Lookout queries on your behalf.",
            action: rsx! {
                if !form_open() {
                    UiButton {
                        variant: ButtonVariant::Outline,
                        onclick: open_form,
                        "Add API key"
                    }
                }
            },

            if let Some(notice) = notice() {
                NoticeLine { notice }
            }

            if form_open() {
                div {
                    class: "form-grid",

                    label { class: "field-label", "Provider" }
                    select {
                        class: "ui-select",
                        disabled: submitting(),
                        onchange: move |event: FormEvent| {
                            if let Some(parsed) = Provider::parse(&event.value()) {
                                provider.set(parsed);
                            }
                        },
                        for option in Provider::ALL {
                            option {
                                value: "{option.as_str()}",
                                selected: option == current_provider,
                                "{option.label()}"
                            }
                        }
                    }

                    label { class: "field-label", "API key" }
                    div {
                        class: "field-inline",
                        UiInput {
                            r#type: "{key_type}",
                            placeholder: "Paste the provider API key",
                            value: "{api_key}",
                            disabled: submitting(),
                            oninput: move |event: FormEvent| {
                                api_key.set(event.value());
                            },
                        }
                        UiButton {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| {
                                show_key.set(!show_key());
                            },
                            "{toggle_label}"
                        }
                    }

                    label { class: "field-label", "Name (optional)" }
                    UiInput {
                        placeholder: "e.g. Prod",
                        value: "{key_name}",
                        disabled: submitting(),
                        oninput: move |event: FormEvent| {
                            key_name.set(event.value());
                        },
                    }

                    div {
                        class: "form-actions",
                        UiButton {
                            variant: ButtonVariant::Primary,
                            disabled: submitting(),
                            onclick: submit,
                            if submitting() { "Saving..." } else { "Save key" }
                        }
                        UiButton {
                            variant: ButtonVariant::Ghost,
                            disabled: submitting(),
                            onclick: close_form,
                            "Cancel"
                        }
                    }
                }
            }

            if credentials.is_initial_loading() {
                div { class: "section-hint", "Loading API keys..." }
            } else {
                if let Some(message) = credentials.error() {
                    div { class: "notice notice--error", "{message}" }
                }
                if credentials.items().is_empty() {
                    div { class: "empty-state", "No API keys stored yet." }
                } else {
                    div {
                        class: "list-rows",
                        for credential in credentials.items().iter().cloned() {
                            CredentialRow {
                                key: "{credential.id}",
                                credential,
                                on_remove: remove,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CredentialRow(
    credential: StoredCredential,
    on_remove: EventHandler<StoredCredential>,
) -> Element {
    let title = credential_title(&credential);
    let meta = credential_meta(&credential);
    let remove_target = credential.clone();

    rsx! {
        div {
            class: "list-row",
            div {
                class: "list-row-info",
                div { class: "list-row-title", "{title}" }
                div { class: "list-row-meta", "{meta}" }
            }
            UiButton {
                variant: ButtonVariant::Danger,
                onclick: move |_| on_remove.call(remove_target.clone()),
                "Remove"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn key_masking_only_changes_input_type() {
        assert_eq!(key_input_type(false), "password");
        assert_eq!(key_input_type(true), "text");
    }
}

//! Saved search intent manager.
//!
//! An intent pairs a short alias with the full prompt Lookout sends to each
//! provider. Alias uniqueness is enforced by the backend; a duplicate simply
//! comes back as a rejection whose detail is shown verbatim.

use dioxus::prelude::*;

use lookout_core::models::{Intent, NewIntent};
use lookout_core::INTENTS;

use super::ui::{ButtonVariant, UiButton, UiInput, UiTextarea};
use super::{confirm_removal, refresh_list, NoticeLine, SectionCard};
use crate::format::format_short_date;
use crate::resource::{validate_required, Notice, RemoteList};
use crate::state::AppState;

const LIST_FALLBACK: &str = "Couldn't refresh intents";

#[component]
pub fn IntentsSection() -> Element {
    let state = use_context::<AppState>();

    let list = use_signal(|| RemoteList::<Intent>::Idle);
    let mut notice = use_signal(|| None::<Notice>);
    let mut form_open = use_signal(|| false);
    let mut intent_alias = use_signal(String::new);
    let mut prompt = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    use_future(move || async move {
        refresh_list(state, list, INTENTS, LIST_FALLBACK).await;
    });

    let open_form = move |_: MouseEvent| {
        form_open.set(true);
    };

    let close_form = move |_: MouseEvent| {
        form_open.set(false);
    };

    let submit = move |_: MouseEvent| {
        if let Err(invalid) = validate_required(&[&intent_alias(), &prompt()]) {
            notice.set(Some(invalid));
            return;
        }

        submitting.set(true);
        notice.set(None);

        let request = NewIntent {
            intent_alias: intent_alias().trim().to_string(),
            prompt: prompt().trim().to_string(),
        };

        let mut notice_signal = notice;
        let mut submitting_signal = submitting;
        let mut form_open_signal = form_open;
        let mut intent_alias_signal = intent_alias;
        let mut prompt_signal = prompt;
        spawn(async move {
            if let Some((token, client)) = state.api_handles() {
                match client.create(&token, INTENTS, &request).await {
                    Ok(()) => {
                        intent_alias_signal.set(String::new());
                        prompt_signal.set(String::new());
                        form_open_signal.set(false);
                        notice_signal.set(Some(Notice::success("Intent added successfully")));
                        refresh_list(state, list, INTENTS, LIST_FALLBACK).await;
                    }
                    Err(error) => {
                        tracing::error!("Failed to add intent: {}", error);
                        notice_signal
                            .set(Some(Notice::error(error.user_message("Failed to add intent"))));
                    }
                }
            }
            submitting_signal.set(false);
        });
    };

    let remove = move |intent: Intent| {
        let mut notice_signal = notice;
        spawn(async move {
            let description = format!("Delete the intent \"{}\"?", intent.intent_alias);
            if !confirm_removal("Remove intent", &description).await {
                return;
            }

            let Some((token, client)) = state.api_handles() else {
                return;
            };
            match client.delete(&token, INTENTS, intent.id).await {
                Ok(()) => {
                    notice_signal.set(Some(Notice::success("Intent deleted")));
                    refresh_list(state, list, INTENTS, LIST_FALLBACK).await;
                }
                Err(error) => {
                    tracing::error!("Failed to delete intent {}: {}", intent.id, error);
                    notice_signal.set(Some(Notice::error(
                        error.user_message("Failed to delete intent"),
                    )));
                }
            }
        });
    };

    let intents = list();

    rsx! {
        SectionCard {
            title: "Search Intents",
            description: "Questions Lookout asks each provider when a watch runs.",
            action: rsx! {
                if !form_open() {
                    UiButton {
                        variant: ButtonVariant::Outline,
                        onclick: open_form,
                        "Add intent"
                    }
                }
            },

            if let Some(notice) = notice() {
                NoticeLine { notice }
            }

            if form_open() {
                div {
                    class: "form-grid",

                    label { class: "field-label", "Alias" }
                    UiInput {
                        placeholder: "e.g. pricing-comparison",
                        value: "{intent_alias}",
                        disabled: submitting(),
                        oninput: move |event: FormEvent| {
                            intent_alias.set(event.value());
                        },
                    }

                    label { class: "field-label", "Prompt" }
                    UiTextarea {
                        placeholder: "What should Lookout ask?",
                        value: "{prompt}",
                        disabled: submitting(),
                        oninput: move |event: FormEvent| {
                            prompt.set(event.value());
                        },
                    }

                    div {
                        class: "form-actions",
                        UiButton {
                            variant: ButtonVariant::Primary,
                            disabled: submitting(),
                            onclick: submit,
                            if submitting() { "Saving..." } else { "Save intent" }
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

            // Best-effort list: failures stay quiet, prior items stay up.
            if let Some(message) = intents.error() {
                div { class: "section-hint", "{message}" }
            }

            if intents.items().is_empty() {
                div { class: "empty-state", "No search intents saved yet." }
            } else {
                div {
                    class: "list-rows",
                    for intent in intents.items().iter().cloned() {
                        IntentRow {
                            key: "{intent.id}",
                            intent,
                            on_remove: remove,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn IntentRow(intent: Intent, on_remove: EventHandler<Intent>) -> Element {
    let added = format!("Added {}", format_short_date(&intent.created_at));
    let remove_target = intent.clone();

    rsx! {
        div {
            class: "list-row",
            div {
                class: "list-row-info",
                div { class: "list-row-title", "{intent.intent_alias}" }
                p { class: "list-row-prompt", "{intent.prompt}" }
                div { class: "list-row-meta", "{added}" }
            }
            UiButton {
                variant: ButtonVariant::Danger,
                onclick: move |_| on_remove.call(remove_target.clone()),
                "Remove"
            }
        }
    }
}

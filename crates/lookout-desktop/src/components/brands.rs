//! Tracked brand manager.
//!
//! Brands partition into "mine" and competitors; the flag is set at creation
//! and rendered as a badge. The list is best-effort: a failed refresh keeps
//! the previous items on screen with a quiet hint instead of an error banner.

use dioxus::prelude::*;

use lookout_core::models::{Brand, NewBrand};
use lookout_core::BRANDS;

use super::ui::{ButtonVariant, UiButton, UiInput};
use super::{confirm_removal, refresh_list, NoticeLine, SectionCard};
use crate::format::format_short_date;
use crate::resource::{validate_required, Notice, RemoteList};
use crate::state::AppState;

const LIST_FALLBACK: &str = "Couldn't refresh brands";

#[component]
pub fn BrandsSection() -> Element {
    let state = use_context::<AppState>();

    let list = use_signal(|| RemoteList::<Brand>::Idle);
    let mut notice = use_signal(|| None::<Notice>);
    let mut form_open = use_signal(|| false);
    let mut brand_name = use_signal(String::new);
    let mut is_mine = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    use_future(move || async move {
        refresh_list(state, list, BRANDS, LIST_FALLBACK).await;
    });

    let open_form = move |_: MouseEvent| {
        form_open.set(true);
    };

    let close_form = move |_: MouseEvent| {
        form_open.set(false);
    };

    let submit = move |_: MouseEvent| {
        if let Err(invalid) = validate_required(&[&brand_name()]) {
            notice.set(Some(invalid));
            return;
        }

        submitting.set(true);
        notice.set(None);

        let request = NewBrand {
            brand_name: brand_name().trim().to_string(),
            is_mine: is_mine(),
        };

        let mut notice_signal = notice;
        let mut submitting_signal = submitting;
        let mut form_open_signal = form_open;
        let mut brand_name_signal = brand_name;
        let mut is_mine_signal = is_mine;
        spawn(async move {
            if let Some((token, client)) = state.api_handles() {
                match client.create(&token, BRANDS, &request).await {
                    Ok(()) => {
                        brand_name_signal.set(String::new());
                        is_mine_signal.set(false);
                        form_open_signal.set(false);
                        notice_signal.set(Some(Notice::success("Brand added successfully")));
                        refresh_list(state, list, BRANDS, LIST_FALLBACK).await;
                    }
                    Err(error) => {
                        tracing::error!("Failed to add brand: {}", error);
                        notice_signal
                            .set(Some(Notice::error(error.user_message("Failed to add brand"))));
                    }
                }
            }
            submitting_signal.set(false);
        });
    };

    let remove = move |brand: Brand| {
        let mut notice_signal = notice;
        spawn(async move {
            let description = format!("Stop tracking \"{}\"?", brand.brand_name);
            if !confirm_removal("Remove brand", &description).await {
                return;
            }

            let Some((token, client)) = state.api_handles() else {
                return;
            };
            match client.delete(&token, BRANDS, brand.id).await {
                Ok(()) => {
                    notice_signal.set(Some(Notice::success("Brand deleted")));
                    refresh_list(state, list, BRANDS, LIST_FALLBACK).await;
                }
                Err(error) => {
                    tracing::error!("Failed to delete brand {}: {}", brand.id, error);
                    notice_signal.set(Some(Notice::error(
                        error.user_message("Failed to delete brand"),
                    )));
                }
            }
        });
    };

    let brands = list();

    rsx! {
        SectionCard {
            title: "Brands",
            description: "Your brand and the competitors Lookout watches for in answers.",
            action: rsx! {
                if !form_open() {
                    UiButton {
                        variant: ButtonVariant::Outline,
                        onclick: open_form,
                        "Add brand"
                    }
                }
            },

            if let Some(notice) = notice() {
                NoticeLine { notice }
            }

            if form_open() {
                div {
                    class: "form-grid",

                    label { class: "field-label", "Brand name" }
                    UiInput {
                        placeholder: "e.g. Acme",
                        value: "{brand_name}",
                        disabled: submitting(),
                        oninput: move |event: FormEvent| {
                            brand_name.set(event.value());
                        },
                    }

                    label {
                        class: "field-check",
                        input {
                            r#type: "checkbox",
                            checked: is_mine(),
                            disabled: submitting(),
                            onchange: move |event: FormEvent| {
                                is_mine.set(event.checked());
                            },
                        }
                        "This is my brand"
                    }

                    div {
                        class: "form-actions",
                        UiButton {
                            variant: ButtonVariant::Primary,
                            disabled: submitting(),
                            onclick: submit,
                            if submitting() { "Saving..." } else { "Save brand" }
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
            if let Some(message) = brands.error() {
                div { class: "section-hint", "{message}" }
            }

            if brands.items().is_empty() {
                div { class: "empty-state", "No brands tracked yet." }
            } else {
                div {
                    class: "list-rows",
                    for brand in brands.items().iter().cloned() {
                        BrandRow {
                            key: "{brand.id}",
                            brand,
                            on_remove: remove,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BrandRow(brand: Brand, on_remove: EventHandler<Brand>) -> Element {
    let added = format!("Added {}", format_short_date(&brand.created_at));
    let (badge_class, badge_label) = if brand.is_mine {
        ("badge badge--mine", "My brand")
    } else {
        ("badge badge--competitor", "Competitor")
    };
    let remove_target = brand.clone();

    rsx! {
        div {
            class: "list-row",
            div {
                class: "list-row-info",
                div {
                    class: "list-row-title",
                    "{brand.brand_name}"
                    span { class: "{badge_class}", "{badge_label}" }
                }
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

//! Shared layout pieces for the profile page sections.

use dioxus::prelude::*;

use crate::resource::Notice;

/// Card wrapper used by every section on the profile page.
#[component]
pub(crate) fn SectionCard(
    #[props(into)] title: String,
    #[props(into)] description: String,
    action: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        section {
            class: "section-card",

            div {
                class: "section-card-header",
                div {
                    class: "section-card-heading",
                    h2 { class: "section-card-title", "{title}" }
                    p { class: "section-card-description", "{description}" }
                }
                if let Some(action) = action {
                    div {
                        class: "section-card-action",
                        {action}
                    }
                }
            }

            {children}
        }
    }
}

/// One manager's success or error message, rendered inside its own section.
#[component]
pub(crate) fn NoticeLine(notice: Notice) -> Element {
    let class = if notice.is_error() {
        "notice notice--error"
    } else {
        "notice notice--success"
    };

    rsx! {
        div {
            class: "{class}",
            "{notice.text()}"
        }
    }
}

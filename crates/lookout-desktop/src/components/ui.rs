//! Shared desktop UI primitives aligned with official Dioxus component patterns.
//!
//! Colors are taken from the theme custom properties the app container sets,
//! so every control follows light/dark switches without per-component logic.

use dioxus::prelude::*;

/// Shared styles for the button/input/textarea wrappers.
pub const UI_STYLES: &str = r"
.ui-button {
    border-radius: 8px;
    padding: 8px 14px;
    font-size: 13px;
    font-weight: 600;
    border: 1px solid transparent;
    cursor: pointer;
    transition: background-color 120ms ease, color 120ms ease, border-color 120ms ease;
}

.ui-button:disabled {
    opacity: 0.55;
    cursor: default;
}

.ui-button--primary {
    background: var(--accent);
    color: var(--accent-text);
    border-color: var(--accent);
}

.ui-button--primary:hover:enabled {
    background: var(--accent-hover);
    border-color: var(--accent-hover);
}

.ui-button--outline {
    background: transparent;
    color: var(--text-primary);
    border-color: var(--border);
}

.ui-button--ghost {
    background: transparent;
    color: var(--text-secondary);
    border-color: transparent;
}

.ui-button--danger {
    background: transparent;
    color: var(--error);
    border-color: var(--error);
}

.ui-input,
.ui-textarea,
.ui-select {
    width: 100%;
    box-sizing: border-box;
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 8px 10px;
    font-size: 13px;
    background: var(--bg-secondary);
    color: var(--text-primary);
}

.ui-textarea {
    resize: vertical;
    min-height: 64px;
    font-family: inherit;
}
";

/// Button variant mapping.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "ui-button--primary",
            Self::Outline => "ui-button--outline",
            Self::Ghost => "ui-button--ghost",
            Self::Danger => "ui-button--danger",
        }
    }
}

#[component]
pub fn UiButton(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class_name = format!("ui-button {}", variant.class());

    rsx! {
        button {
            class: "{class_name}",
            disabled,
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn UiInput(
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        input {
            class: "ui-input",
            oninput: move |event| _ = oninput.map(|handler| handler(event)),
            ..attributes,
        }
    }
}

#[component]
pub fn UiTextarea(
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = textarea)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        textarea {
            class: "ui-textarea",
            oninput: move |event| _ = oninput.map(|handler| handler(event)),
            ..attributes,
        }
    }
}

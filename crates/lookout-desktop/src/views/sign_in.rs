//! Sign-in view shown when no session is active.

use dioxus::prelude::*;

use lookout_core::error::CONNECTIVITY_MESSAGE;

use crate::components::ui::{ButtonVariant, UiButton, UiInput};
use crate::services::AuthError;
use crate::state::AppState;

fn login_error_message(error: &AuthError) -> String {
    match error {
        AuthError::Api(detail) => detail.clone(),
        _ => CONNECTIVITY_MESSAGE.to_string(),
    }
}

#[component]
pub fn SignIn() -> Element {
    let state = use_context::<AppState>();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut message = use_signal(|| None::<String>);

    let init_auth_error = (state.auth_error)();

    let submit = move |_: MouseEvent| {
        let Some(service) = (state.auth_service)() else {
            message.set(Some(
                "Sign-in is unavailable: the auth service failed to start.".to_string(),
            ));
            return;
        };

        let username_value = username().trim().to_string();
        let password_value = password();
        if username_value.is_empty() || password_value.trim().is_empty() {
            message.set(Some("Username and password are required.".to_string()));
            return;
        }

        busy.set(true);
        message.set(None);

        let mut session_signal = state.session;
        let mut auth_error_signal = state.auth_error;
        let mut message_signal = message;
        let mut password_signal = password;
        let mut busy_signal = busy;
        spawn(async move {
            match service.login(&username_value, &password_value).await {
                Ok(session) => {
                    session_signal.set(Some(session));
                    auth_error_signal.set(None);
                    password_signal.set(String::new());
                }
                Err(error) => {
                    tracing::error!("Sign-in failed: {}", error);
                    message_signal.set(Some(login_error_message(&error)));
                }
            }
            busy_signal.set(false);
        });
    };

    rsx! {
        div {
            class: "sign-in-wrap",
            div {
                class: "sign-in-card",

                h2 { class: "sign-in-title", "Sign in to Lookout" }
                p {
                    class: "sign-in-subtitle",
                    "Your profile, API keys, brands, and intents live on the server."
                }

                UiInput {
                    placeholder: "Username",
                    value: "{username}",
                    disabled: busy(),
                    oninput: move |event: FormEvent| {
                        username.set(event.value());
                    },
                }
                UiInput {
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    disabled: busy(),
                    oninput: move |event: FormEvent| {
                        password.set(event.value());
                    },
                }

                UiButton {
                    variant: ButtonVariant::Primary,
                    disabled: busy(),
                    onclick: submit,
                    if busy() { "Signing in..." } else { "Sign in" }
                }

                if let Some(message) = message() {
                    div { class: "notice notice--error", "{message}" }
                }

                if let Some(error_message) = init_auth_error {
                    div { class: "section-hint", "{error_message}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn login_error_surfaces_server_detail_verbatim() {
        let error = AuthError::Api("Incorrect username or password".to_string());
        assert_eq!(
            login_error_message(&error),
            "Incorrect username or password"
        );
    }

    #[test]
    fn login_error_maps_other_failures_to_connectivity() {
        let error = AuthError::SecureStorage("keyring locked".to_string());
        assert_eq!(login_error_message(&error), CONNECTIVITY_MESSAGE);
    }
}

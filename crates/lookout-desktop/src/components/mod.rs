//! UI Components
//!
//! Section components for the profile page plus shared primitives.

mod account;
mod brands;
mod credentials;
mod intents;
mod section;
pub mod ui;

use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use lookout_core::ListEndpoint;

use crate::resource::RemoteList;
use crate::state::AppState;

pub use account::AccountSection;
pub use brands::BrandsSection;
pub use credentials::CredentialsSection;
pub use intents::IntentsSection;

pub(crate) use section::{NoticeLine, SectionCard};

/// Native yes/no dialog gating every delete. Nothing is sent to the network
/// when the user declines.
pub(crate) async fn confirm_removal(title: &str, description: &str) -> bool {
    let choice = rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title(title)
        .set_description(description)
        .set_buttons(rfd::MessageButtons::YesNo)
        .show()
        .await;
    matches!(choice, rfd::MessageDialogResult::Yes)
}

/// Refetches one collection into its manager's slot.
///
/// Runs at mount and after every successful write. Skipped entirely when no
/// session token is available. Failures land in the slot's `Failed` state;
/// each section decides how loudly to render them.
pub(crate) async fn refresh_list<T>(
    state: AppState,
    mut list: Signal<RemoteList<T>>,
    endpoint: ListEndpoint<T>,
    fallback: &str,
) where
    T: DeserializeOwned + Clone + PartialEq + 'static,
{
    let Some((token, client)) = state.api_handles() else {
        return;
    };

    let current = list();
    list.set(current.to_loading());

    match client.list(&token, endpoint).await {
        Ok(items) => list.set(RemoteList::Loaded(items)),
        Err(error) => {
            tracing::warn!("Failed to refresh {}: {}", endpoint.path(), error);
            let message = error.user_message(fallback);
            let current = list();
            list.set(current.resolve(Err(message)));
        }
    }
}

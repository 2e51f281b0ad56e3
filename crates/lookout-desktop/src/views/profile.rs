//! Profile page - account details, credentials, and reference lists.

use dioxus::prelude::*;

use crate::components::{AccountSection, BrandsSection, CredentialsSection, IntentsSection};

/// The settings surface.
///
/// The three list sections issue their initial fetches independently when
/// they mount; nothing here sequences or couples them.
#[component]
pub fn ProfilePage() -> Element {
    rsx! {
        div {
            class: "profile-page",

            AccountSection {}
            CredentialsSection {}
            BrandsSection {}
            IntentsSection {}
        }
    }
}

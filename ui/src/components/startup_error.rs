use dioxus::prelude::*;

use crate::i18n::use_language_marker;
use crate::t;

/// Shown in place of a page when the dataset could not be loaded.
#[component]
pub fn StartupError(message: String) -> Element {
    let _ = use_language_marker();

    rsx! {
        div { class: "startup-error", role: "alert",
            h2 { class: "startup-error__title", {t!("startup-error-title")} }
            p { {t!("startup-error-detail")} }
            pre { class: "startup-error__message", "{message}" }
        }
    }
}

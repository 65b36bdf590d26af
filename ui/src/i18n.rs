//! Localized strings for `dexboard-ui`.
//!
//! Messages live in `i18n/<lang-id>/dexboard-ui.ftl` and are embedded at
//! compile time with `rust-embed`. `en-US` is the fallback and the reference
//! every other locale is checked against in tests.
//!
//! ```ignore
//! use crate::t;
//! crate::i18n::init(); // idempotent
//! let title = t!("dashboard-title");
//! let meta = t!("dashboard-showing", shown = 3, matched = 12);
//! ```
//!
//! Desktop builds pick the OS locale list, web builds use `navigator.languages`.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Look up a message through the shared [`LOADER`].
///
/// ```ignore
/// t!("nav-dashboard")
/// t!("card-description-toggle", name = "Bulbasaur")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Matches the package name and the FTL file name in every locale folder.
const DOMAIN: &str = "dexboard-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    FluentLanguageLoader::new(DOMAIN, unic_langid::langid!("en-US"))
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!("locale selection failed ({err}); using en-US");
        } else {
            tracing::debug!(language = %LOADER.current_language(), "locale selected");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(%tag, "ignoring unparseable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Language code from the platform's context signal, empty when none was
/// provided. Reading it re-renders the calling component on language change,
/// which is how already-mounted components pick up new strings.
pub fn use_language_marker() -> String {
    use dioxus::prelude::*;

    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_default()
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

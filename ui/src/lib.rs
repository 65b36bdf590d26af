//! Shared UI crate for Dexboard. Dataset loading, filtering, card rendering
//! and the page views live here; the platform crates only launch them.

pub mod cards;
pub mod data;
pub mod format;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod startup_error;
    pub use startup_error::StartupError;
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
    mod language_refresh;
}

#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::dpi::LogicalSize, tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::data::{DashboardConfig, DashboardState};
use ui::views::{Dashboard, Overview};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Dashboard {},
    #[route("/overview")]
    Overview {},
}

// Shared theme from the ui crate, always inlined so packaged builds need no asset folder.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Dexboard – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(1280.0, 860.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_overview(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Overview {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar writes the selected locale here. Mounted components read it through
    // `use_language_marker` and re-render in place, so filter state survives a switch.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Dataset is read once per launch.
    use_context_provider(|| {
        let config = DashboardConfig::from_env();
        tracing::info!(
            dataset = %config.dataset.describe(),
            image_width = config.image_width_px,
            "starting dexboard desktop"
        );
        DashboardState::load(config)
    });

    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        overview: nav_overview,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div { style: "display:none", "{lang_code()}" }
        Router::<Route> { }
    }
}

/// Desktop layout around the shared navbar, bound to the desktop `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}

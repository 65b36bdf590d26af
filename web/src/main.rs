use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::data::{DashboardConfig, DashboardState};
use ui::views::{Dashboard, Overview};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Dashboard {},
    #[route("/overview")]
    Overview {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}
fn nav_overview(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Overview {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    // Browsers have no environment, so this is always the embedded dataset.
    use_context_provider(|| DashboardState::load(DashboardConfig::from_env()));

    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        overview: nav_overview,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div { style: "display:none", "{lang_code()}" }
        Router::<Route> {}
    }
}

/// Web layout around the shared navbar, bound to the web `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}

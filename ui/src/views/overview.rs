use dioxus::prelude::*;

use crate::components::StartupError;
use crate::data::{DashboardState, DatasetSummary};
use crate::format::{format_average, format_share};
use crate::i18n::use_language_marker;
use crate::t;

#[component]
pub fn Overview() -> Element {
    let lang_marker = use_language_marker();

    let state = use_context::<DashboardState>();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-overview",
            h1 { {t!("overview-title")} }
            p { {t!("overview-intro")} }
            match state.dataset {
                Ok(dataset) => render_summary(&DatasetSummary::from_dataset(&dataset)),
                Err(message) => rsx! { StartupError { message } },
            }
        }
    }
}

fn render_summary(summary: &DatasetSummary) -> Element {
    if summary.entries == 0 {
        return rsx! {
            p { class: "overview__placeholder", {t!("overview-empty")} }
        };
    }

    let strongest = summary
        .strongest
        .as_ref()
        .map(|(name, total)| format!("{name} ({total})"))
        .unwrap_or_else(|| "—".to_string());
    let legendary = format!(
        "{} · {}",
        summary.legendary,
        format_share(summary.legendary, summary.entries)
    );
    let average = format_average(summary.average_total);

    rsx! {
        div { class: "overview__highlights",
            {highlight(t!("overview-entries"), summary.entries.to_string())}
            {highlight(t!("overview-legendary"), legendary)}
            {highlight(t!("overview-average-total"), average)}
            {highlight(t!("overview-strongest"), strongest)}
        }
        div { class: "overview__breakdowns",
            div { class: "overview__breakdown",
                h2 { {t!("overview-by-generation")} }
                ul { class: "overview__list",
                    for (generation, count) in summary.per_generation.iter() {
                        li { key: "gen-{generation}", class: "overview__row",
                            span { class: "overview__row-label", {t!("badge-generation")} " {generation}" }
                            span { class: "overview__row-value", "{count}" }
                        }
                    }
                }
            }
            div { class: "overview__breakdown",
                h2 { {t!("overview-by-type")} }
                ul { class: "overview__list",
                    for (type1, count) in summary.per_type1.iter() {
                        li { key: "type-{type1}", class: "overview__row",
                            span { class: "overview__row-label", "{type1}" }
                            span { class: "overview__row-value", "{count}" }
                        }
                    }
                }
            }
        }
    }
}

fn highlight(label: String, value: String) -> Element {
    rsx! {
        div { class: "overview__tile",
            span { class: "overview__tile-label", "{label}" }
            span { class: "overview__tile-value", "{value}" }
        }
    }
}

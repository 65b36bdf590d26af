use dioxus::prelude::*;

use crate::cards::EntryCard;
use crate::components::StartupError;
use crate::data::filter::{parse_generation, parse_legendary};
use crate::data::{DashboardState, DatasetHandle, FilterCriteria, RenderPass, Selector, ALL_CHOICE};
use crate::i18n::use_language_marker;
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let lang_marker = use_language_marker();

    let state = use_context::<DashboardState>();
    let image_width = state.config.image_width_px;

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-title")} }
            p { class: "page-dashboard__intro", {t!("dashboard-intro")} }
            match state.dataset {
                Ok(dataset) => rsx! { DashboardBody { dataset, image_width } },
                Err(message) => rsx! { StartupError { message } },
            }
        }
    }
}

#[component]
fn DashboardBody(dataset: DatasetHandle, image_width: u32) -> Element {
    let _ = use_language_marker();
    let criteria = use_signal(FilterCriteria::default);
    let mut name = use_signal(|| Selector::<String>::All);

    let pass = use_memo({
        let dataset = dataset.clone();
        move || RenderPass::compute(&dataset, &criteria.read(), &name.read())
    });
    let RenderPass { matched, selection } = pass();
    let name_choices = text_choices(dataset.name_options());

    rsx! {
        div { class: "dashboard",
            FilterSidebar { dataset: dataset.clone(), criteria }
            div { class: "dashboard__main",
                ChoiceSelect {
                    id: "name-picker",
                    label: t!("name-picker-label"),
                    current: name.read().to_choice(),
                    choices: name_choices,
                    onpick: move |raw: String| name.set(Selector::text(&raw)),
                }
                p { class: "dashboard__meta",
                    {t!("dashboard-showing", shown = selection.len(), matched = matched)}
                }
                if selection.is_empty() {
                    p { class: "dashboard__placeholder", {t!("dashboard-empty")} }
                } else {
                    div { class: "dashboard__cards",
                        for entry in selection.iter() {
                            EntryCard {
                                key: "{entry.row}",
                                entry: entry.clone(),
                                image_width,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterSidebar(dataset: DatasetHandle, criteria: Signal<FilterCriteria>) -> Element {
    let _ = use_language_marker();
    let mut criteria = criteria;
    let current = criteria.read().clone();

    let type1_choices = text_choices(dataset.type1_options());
    let type2_choices = text_choices(dataset.type2_options());
    let generation_choices = dataset
        .generation_options()
        .into_iter()
        .map(|generation| Choice {
            value: generation.to_string(),
            label: generation.to_string(),
        })
        .collect::<Vec<_>>();
    let legendary_choices = dataset
        .legendary_options()
        .into_iter()
        .map(|flag| Choice {
            value: flag.to_string(),
            label: if flag {
                t!("filter-legendary-yes")
            } else {
                t!("filter-legendary-no")
            },
        })
        .collect::<Vec<_>>();

    rsx! {
        aside { class: "dashboard__filters",
            h2 { class: "dashboard__filters-title", {t!("filter-heading")} }
            ChoiceSelect {
                id: "filter-type1",
                label: t!("filter-type1"),
                current: current.type1.to_choice(),
                choices: type1_choices,
                onpick: move |raw: String| criteria.write().type1 = Selector::text(&raw),
            }
            ChoiceSelect {
                id: "filter-type2",
                label: t!("filter-type2"),
                current: current.type2.to_choice(),
                choices: type2_choices,
                onpick: move |raw: String| criteria.write().type2 = Selector::text(&raw),
            }
            ChoiceSelect {
                id: "filter-generation",
                label: t!("filter-generation"),
                current: current.generation.to_choice(),
                choices: generation_choices,
                onpick: move |raw: String| {
                    criteria.write().generation = Selector::from_choice(&raw, parse_generation)
                },
            }
            ChoiceSelect {
                id: "filter-legendary",
                label: t!("filter-legendary"),
                current: current.legendary.to_choice(),
                choices: legendary_choices,
                onpick: move |raw: String| {
                    criteria.write().legendary = Selector::from_choice(&raw, parse_legendary)
                },
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Choice {
    value: String,
    label: String,
}

fn text_choices(values: Vec<String>) -> Vec<Choice> {
    values
        .into_iter()
        .map(|value| Choice {
            label: value.clone(),
            value,
        })
        .collect()
}

/// Labelled `<select>` whose first option is always "Select All".
#[component]
fn ChoiceSelect(
    id: &'static str,
    label: String,
    current: String,
    choices: Vec<Choice>,
    onpick: EventHandler<String>,
) -> Element {
    let _ = use_language_marker();

    rsx! {
        div { class: "choice-select",
            label { class: "choice-select__label", r#for: "{id}", "{label}" }
            select {
                id: "{id}",
                class: "choice-select__input",
                value: "{current}",
                onchange: move |evt: FormEvent| onpick.call(evt.value()),
                option { value: ALL_CHOICE, selected: current == ALL_CHOICE, {t!("filter-select-all")} }
                for choice in choices.iter() {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        selected: choice.value == current,
                        "{choice.label}"
                    }
                }
            }
        }
    }
}

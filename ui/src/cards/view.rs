use dioxus::prelude::*;

use crate::data::Entry;
use crate::i18n::use_language_marker;
use crate::t;

use super::image::fetch_image;
use super::model::{Badge, BadgeKind, CardModel, ImageSlot};

const RADAR_SIZE_PX: f64 = 300.0;

/// One entry rendered as identity, description and statistic panels.
///
/// The artwork fetch is owned by this card, so a slow or failed request only
/// affects this card's identity panel. It restarts whenever the card is handed
/// an entry with a different image URL.
#[component]
pub fn EntryCard(entry: Entry, image_width: u32) -> Element {
    let lang_marker = use_language_marker();

    let url = entry.image_url.clone();
    let artwork = use_resource(use_reactive!(|(url,)| async move {
        fetch_image(&url).await
    }));

    let slot = ImageSlot::from_fetch(artwork.read().as_ref());
    let card = CardModel::build(&entry, slot);

    rsx! {
        article { class: "entry-card",
            div { style: "display:none", "{lang_marker}" }
            {identity_panel(&card, image_width)}
            {description_panel(&card)}
            {statistic_panel(&card)}
        }
    }
}

fn identity_panel(card: &CardModel, image_width: u32) -> Element {
    let alt = t!("card-image-alt", name = card.name.as_str());

    let artwork = match &card.image {
        ImageSlot::Loading => rsx! {
            div {
                class: "entry-card__image entry-card__image--loading",
                style: "width:{image_width}px",
                {t!("card-image-loading")}
            }
        },
        ImageSlot::Ready(image) => rsx! {
            img {
                class: "entry-card__image",
                src: "{image.data_url}",
                width: "{image_width}",
                alt: "{alt}",
            }
        },
        ImageSlot::Failed(error) => rsx! {
            div { class: "entry-card__image-error", role: "alert",
                "⚠️ "
                {t!("card-image-error", error = error.as_str())}
            }
        },
    };

    rsx! {
        div { class: "entry-card__panel entry-card__identity",
            h2 { class: "entry-card__name", "{card.name}" }
            {artwork}
            div { class: "entry-card__badges",
                for badge in card.badges.iter() {
                    {render_badge(badge)}
                }
            }
        }
    }
}

fn render_badge(badge: &Badge) -> Element {
    let label = match badge.kind {
        BadgeKind::Total => t!("badge-total"),
        BadgeKind::Type1 => t!("badge-type1"),
        BadgeKind::Type2 => t!("badge-type2"),
        BadgeKind::Generation => t!("badge-generation"),
    };
    let value = badge
        .value
        .clone()
        .unwrap_or_else(|| t!("badge-type-none"));
    let class = format!("card-badge {}", badge.kind.css_modifier());

    rsx! {
        div { class: "{class}",
            span { class: "card-badge__label", "{label}" }
            span { class: "card-badge__value", "{value}" }
        }
    }
}

fn description_panel(card: &CardModel) -> Element {
    rsx! {
        div { class: "entry-card__panel entry-card__description",
            h3 { class: "entry-card__panel-title", {t!("card-description-heading")} }
            // Collapsed until the reader opens it.
            details { class: "entry-card__details",
                summary { {t!("card-description-toggle", name = card.name.as_str())} }
                p { class: "entry-card__description-text", "{card.description}" }
            }
        }
    }
}

fn statistic_panel(card: &CardModel) -> Element {
    let svg = card.radar.to_svg(RADAR_SIZE_PX);

    rsx! {
        div { class: "entry-card__panel entry-card__stats",
            h3 { class: "entry-card__panel-title", {t!("card-statistic-heading")} }
            div { class: "entry-card__radar", dangerous_inner_html: "{svg}" }
        }
    }
}

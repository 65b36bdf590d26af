//! Pure card content, built from an entry plus the state of its artwork fetch.

use crate::data::Entry;

use super::image::{CardImage, ImageFetchError};
use super::radar::RadarChart;

#[derive(Debug, Clone, PartialEq)]
pub enum ImageSlot {
    Loading,
    Ready(CardImage),
    Failed(String),
}

impl ImageSlot {
    /// `None` means the fetch hasn't resolved yet.
    pub fn from_fetch(fetch: Option<&Result<CardImage, ImageFetchError>>) -> Self {
        match fetch {
            None => Self::Loading,
            Some(Ok(image)) => Self::Ready(image.clone()),
            Some(Err(err)) => Self::Failed(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Total,
    Type1,
    Type2,
    Generation,
}

impl BadgeKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            BadgeKind::Total => "card-badge--total",
            BadgeKind::Type1 => "card-badge--type1",
            BadgeKind::Type2 => "card-badge--type2",
            BadgeKind::Generation => "card-badge--generation",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub kind: BadgeKind,
    /// `None` for an absent secondary type.
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub name: String,
    pub image: ImageSlot,
    pub badges: Vec<Badge>,
    pub description: String,
    pub radar: RadarChart,
}

impl CardModel {
    pub fn build(entry: &Entry, image: ImageSlot) -> Self {
        let badges = vec![
            Badge {
                kind: BadgeKind::Total,
                value: Some(entry.total.to_string()),
            },
            Badge {
                kind: BadgeKind::Type1,
                value: Some(entry.type1.clone()),
            },
            Badge {
                kind: BadgeKind::Type2,
                value: entry.type2.clone(),
            },
            Badge {
                kind: BadgeKind::Generation,
                value: Some(entry.generation.to_string()),
            },
        ];

        Self {
            name: entry.name.clone(),
            image,
            badges,
            description: entry.description.clone(),
            radar: RadarChart::for_stats(entry.stats()),
        }
    }

    pub fn badge(&self, kind: BadgeKind) -> Option<&Badge> {
        self.badges.iter().find(|badge| badge.kind == kind)
    }
}

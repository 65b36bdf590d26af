//! Equality filters over the dataset.

use std::fmt::Display;

use super::dataset::{Dataset, Entry};

/// Widget value standing for "Select All".
pub const ALL_CHOICE: &str = "__all__";

/// A single criterion: either the "select all" sentinel or a concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selector<T> {
    /// Build a selector from a raw widget value. The sentinel, or anything
    /// `parse` rejects, means no filter.
    pub fn from_choice(raw: &str, parse: impl FnOnce(&str) -> Option<T>) -> Self {
        if raw == ALL_CHOICE {
            return Self::All;
        }
        parse(raw).map(Self::Only).unwrap_or(Self::All)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, candidate: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == candidate,
        }
    }
}

impl<T: Display> Selector<T> {
    /// Inverse of [`Selector::from_choice`] for keeping a `<select>` in sync.
    pub fn to_choice(&self) -> String {
        match self {
            Self::All => ALL_CHOICE.to_string(),
            Self::Only(value) => value.to_string(),
        }
    }
}

impl Selector<String> {
    pub fn text(raw: &str) -> Self {
        Self::from_choice(raw, |value| Some(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub type1: Selector<String>,
    pub type2: Selector<String>,
    pub generation: Selector<u8>,
    pub legendary: Selector<bool>,
}

impl FilterCriteria {
    pub fn is_unfiltered(&self) -> bool {
        self.type1.is_all()
            && self.type2.is_all()
            && self.generation.is_all()
            && self.legendary.is_all()
    }

    /// True when `entry` satisfies every concrete criterion.
    pub fn accepts(&self, entry: &Entry) -> bool {
        let type2_ok = match (&self.type2, entry.type2.as_ref()) {
            (Selector::All, _) => true,
            (Selector::Only(expected), Some(actual)) => expected == actual,
            (Selector::Only(_), None) => false,
        };

        self.type1.matches(&entry.type1)
            && type2_ok
            && self.generation.matches(&entry.generation)
            && self.legendary.matches(&entry.legendary)
    }
}

/// Entries matching all concrete criteria, in dataset order.
pub fn apply<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> Vec<&'a Entry> {
    dataset
        .entries()
        .iter()
        .filter(|entry| criteria.accepts(entry))
        .collect()
}

pub fn parse_generation(raw: &str) -> Option<u8> {
    raw.trim().parse().ok()
}

pub fn parse_legendary(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::tests::entry;

    fn sample() -> Dataset {
        let mut moltres = entry("Moltres", "Fire", Some("Flying"), 1);
        moltres.legendary = true;

        Dataset::new(vec![
            entry("Charmander", "Fire", None, 1),
            entry("Charizard", "Fire", Some("Flying"), 1),
            entry("Squirtle", "Water", None, 1),
            moltres,
            entry("Cyndaquil", "Fire", None, 2),
            entry("Pidgey", "Normal", Some("Flying"), 1),
            entry("fire-lowercase", "fire", None, 1),
        ])
    }

    fn names<'a>(entries: &[&'a Entry]) -> Vec<&'a str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn all_sentinels_return_everything_in_order() {
        let dataset = sample();
        let out = apply(&dataset, &FilterCriteria::default());
        assert_eq!(out.len(), dataset.len());
        assert!(out
            .iter()
            .zip(dataset.entries())
            .all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn criteria_are_combined_with_and() {
        let dataset = sample();
        let criteria = FilterCriteria {
            type1: Selector::Only("Fire".into()),
            generation: Selector::Only(1),
            ..Default::default()
        };
        assert_eq!(
            names(&apply(&dataset, &criteria)),
            ["Charmander", "Charizard", "Moltres"]
        );

        let legendary_only = FilterCriteria {
            legendary: Selector::Only(true),
            ..criteria
        };
        assert_eq!(names(&apply(&dataset, &legendary_only)), ["Moltres"]);
    }

    #[test]
    fn type_matching_is_case_sensitive() {
        let dataset = sample();
        let criteria = FilterCriteria {
            type1: Selector::Only("fire".into()),
            ..Default::default()
        };
        assert_eq!(names(&apply(&dataset, &criteria)), ["fire-lowercase"]);
    }

    #[test]
    fn missing_secondary_type_never_matches_a_concrete_type2() {
        let dataset = sample();
        let criteria = FilterCriteria {
            type2: Selector::Only("Flying".into()),
            ..Default::default()
        };
        assert_eq!(
            names(&apply(&dataset, &criteria)),
            ["Charizard", "Moltres", "Pidgey"]
        );
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let dataset = sample();
        let criteria = FilterCriteria {
            type1: Selector::Only("Water".into()),
            generation: Selector::Only(6),
            ..Default::default()
        };
        assert!(apply(&dataset, &criteria).is_empty());
    }

    #[test]
    fn output_is_sound_and_complete_for_every_combination() {
        let dataset = sample();
        let type1s = [Selector::All, Selector::Only("Fire".to_string())];
        let type2s = [Selector::All, Selector::Only("Flying".to_string())];
        let generations = [Selector::All, Selector::Only(1), Selector::Only(2)];
        let legendaries = [Selector::All, Selector::Only(true), Selector::Only(false)];

        for type1 in &type1s {
            for type2 in &type2s {
                for generation in &generations {
                    for legendary in &legendaries {
                        let criteria = FilterCriteria {
                            type1: type1.clone(),
                            type2: type2.clone(),
                            generation: generation.clone(),
                            legendary: legendary.clone(),
                        };
                        let out = apply(&dataset, &criteria);

                        for e in &out {
                            assert!(criteria.accepts(e), "{criteria:?} let {} through", e.name);
                        }
                        for e in dataset.entries() {
                            if criteria.accepts(e) {
                                assert!(
                                    out.iter().any(|o| std::ptr::eq(*o, e)),
                                    "{criteria:?} dropped {}",
                                    e.name
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn choices_round_trip_through_widget_values() {
        assert_eq!(Selector::text(ALL_CHOICE), Selector::All);
        assert_eq!(Selector::text("Fire"), Selector::Only("Fire".to_string()));
        assert_eq!(
            Selector::from_choice("3", parse_generation),
            Selector::Only(3u8)
        );
        assert_eq!(
            Selector::from_choice("x", parse_generation),
            Selector::<u8>::All
        );
        assert_eq!(
            Selector::from_choice("false", parse_legendary),
            Selector::Only(false)
        );

        assert_eq!(Selector::Only(true).to_choice(), "true");
        assert_eq!(Selector::<u8>::All.to_choice(), ALL_CHOICE);
    }
}

//! Dataset loading and the immutable handle shared across render passes.
//!
//! The CSV layout follows the classic creature table: one row per entry with
//! `Name, Type 1, Type 2, Generation, Legendary, Total`, the six stat columns,
//! an image `link` and a `desc` column. Extra columns are ignored.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Dataset bundled with the crate (used unless a file override is configured).
const EMBEDDED_CSV: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/creatures.csv"
));

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("couldn't open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// One dataset row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entry {
    /// Position in the loaded dataset. Unique per row even when names repeat.
    #[serde(skip)]
    pub row: usize,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type 1")]
    pub type1: String,
    #[serde(rename = "Type 2", default, deserialize_with = "optional_text")]
    pub type2: Option<String>,
    #[serde(rename = "Generation")]
    pub generation: u8,
    #[serde(rename = "Legendary", deserialize_with = "flexible_bool")]
    pub legendary: bool,
    /// Display-only; never checked against the stat sum.
    #[serde(rename = "Total")]
    pub total: u32,
    #[serde(rename = "HP")]
    pub hp: u32,
    #[serde(rename = "Attack")]
    pub attack: u32,
    #[serde(rename = "Defense")]
    pub defense: u32,
    #[serde(rename = "Sp. Atk")]
    pub special_attack: u32,
    #[serde(rename = "Sp. Def")]
    pub special_defense: u32,
    #[serde(rename = "Speed")]
    pub speed: u32,
    #[serde(rename = "link")]
    pub image_url: String,
    #[serde(rename = "desc")]
    pub description: String,
}

impl Entry {
    /// Stats in chart order: HP, Attack, Defense, Sp. Atk, Sp. Def, Speed.
    pub fn stats(&self) -> [u32; 6] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
    }
}

/// The full entry set, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    entries: Vec<Entry>,
}

impl Dataset {
    /// Rows are numbered in the order given.
    pub fn new(mut entries: Vec<Entry>) -> Self {
        for (row, entry) in entries.iter_mut().enumerate() {
            entry.row = row;
        }
        Self { entries }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            // Type filters compare exactly, so cells are trimmed on the way in.
            .trim(csv::Trim::All)
            .from_reader(reader);

        let entries = csv_reader
            .deserialize::<Entry>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(entries))
    }

    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_reader(EMBEDDED_CSV.as_bytes())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn type1_options(&self) -> Vec<String> {
        distinct_in_order(self.entries.iter().map(|e| e.type1.as_str()))
    }

    /// Absent secondary types are not offered as a choice.
    pub fn type2_options(&self) -> Vec<String> {
        distinct_in_order(self.entries.iter().filter_map(|e| e.type2.as_deref()))
    }

    pub fn generation_options(&self) -> Vec<u8> {
        let mut generations: Vec<u8> = self.entries.iter().map(|e| e.generation).collect();
        generations.sort_unstable();
        generations.dedup();
        generations
    }

    pub fn legendary_options(&self) -> Vec<bool> {
        [true, false]
            .into_iter()
            .filter(|flag| self.entries.iter().any(|e| e.legendary == *flag))
            .collect()
    }

    pub fn name_options(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|e| e.name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Cheap clonable handle to the loaded dataset.
///
/// Equality is identity: two handles are equal when they point at the same
/// load, which is what component props need to skip needless re-renders.
#[derive(Debug, Clone)]
pub struct DatasetHandle(Arc<Dataset>);

impl DatasetHandle {
    pub fn new(dataset: Dataset) -> Self {
        Self(Arc::new(dataset))
    }
}

impl Deref for DatasetHandle {
    type Target = Dataset;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for DatasetHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}

fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "True" | "true" | "TRUE" | "1" => Ok(true),
        "False" | "false" | "FALSE" | "0" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected a boolean, found `{other}`"
        ))),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const HEADER: &str =
        "#,Name,Type 1,Type 2,Total,HP,Attack,Defense,Sp. Atk,Sp. Def,Speed,Generation,Legendary,link,desc";

    pub(crate) fn entry(name: &str, type1: &str, type2: Option<&str>, generation: u8) -> Entry {
        Entry {
            row: 0,
            name: name.into(),
            type1: type1.into(),
            type2: type2.map(Into::into),
            generation,
            legendary: false,
            total: 300,
            hp: 50,
            attack: 50,
            defense: 50,
            special_attack: 50,
            special_defense: 50,
            speed: 50,
            image_url: format!("https://example.invalid/{}.png", name.to_lowercase()),
            description: format!("{name} description"),
        }
    }

    #[test]
    fn parses_rows_in_file_order() {
        let csv = format!(
            "{HEADER}\n\
             4,Charmander,Fire,,309,39,52,43,60,50,65,1,False,https://x/charmander.jpg,Tail flame\n\
             6,Charizard,Fire,Flying,534,78,84,78,109,85,100,1,False,https://x/charizard.jpg,\"Soars high, breathes fire\"\n\
             146,Moltres,Fire,Flying,580,90,100,90,125,85,90,1,True,https://x/moltres.jpg,Legendary bird\n"
        );
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();

        let names: Vec<_> = dataset.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Charmander", "Charizard", "Moltres"]);

        let charmander = &dataset.entries()[0];
        assert_eq!(charmander.type2, None);
        assert_eq!(charmander.stats(), [39, 52, 43, 60, 50, 65]);
        assert_eq!(charmander.image_url, "https://x/charmander.jpg");

        let charizard = &dataset.entries()[1];
        assert_eq!(charizard.type2.as_deref(), Some("Flying"));
        assert_eq!(charizard.description, "Soars high, breathes fire");
        assert!(dataset.entries()[2].legendary);
    }

    #[test]
    fn rows_are_numbered_in_file_order() {
        let csv = format!(
            "{HEADER}\n\
             1,Twin,Normal,,300,50,50,50,50,50,50,1,False,https://x/a.jpg,First\n\
             2,Twin,Normal,,300,50,50,50,50,50,50,2,False,https://x/b.jpg,Second\n"
        );
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();

        let rows: Vec<_> = dataset.entries().iter().map(|e| e.row).collect();
        assert_eq!(rows, [0, 1]);
    }

    #[test]
    fn both_type_columns_are_trimmed() {
        let csv = format!(
            "{HEADER}\n6,Charizard, Fire , Flying ,534,78,84,78,109,85,100,1,False,https://x/c.jpg,Wings\n"
        );
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();

        let charizard = &dataset.entries()[0];
        assert_eq!(charizard.type1, "Fire");
        assert_eq!(charizard.type2.as_deref(), Some("Flying"));
        assert_eq!(dataset.type1_options(), ["Fire"]);
    }

    #[test]
    fn header_only_file_is_an_empty_dataset() {
        let dataset = Dataset::from_reader(format!("{HEADER}\n").as_bytes()).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.name_options().is_empty());
    }

    #[test]
    fn malformed_rows_are_rejected() {
        let csv = format!(
            "{HEADER}\n1,Bulbasaur,Grass,Poison,318,45,49,49,65,65,45,one,False,https://x,Seed\n"
        );
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
    }

    #[test]
    fn unrecognised_legendary_flag_is_rejected() {
        let csv = format!(
            "{HEADER}\n1,Bulbasaur,Grass,Poison,318,45,49,49,65,65,45,1,maybe,https://x,Seed\n"
        );
        assert!(Dataset::from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn missing_file_reports_its_path() {
        let path = Path::new("/definitely/not/here/creatures.csv");
        match Dataset::from_path(path) {
            Err(DatasetError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn embedded_dataset_loads() {
        let dataset = Dataset::embedded().unwrap();
        assert!(dataset.len() > 20);
        assert!(dataset
            .entries()
            .iter()
            .all(|e| !e.name.is_empty() && !e.image_url.is_empty()));
    }

    #[test]
    fn option_lists_follow_control_rules() {
        let dataset = Dataset::new(vec![
            entry("Squirtle", "Water", None, 1),
            entry("Charizard", "Fire", Some("Flying"), 3),
            entry("Bulbasaur", "Grass", Some("Poison"), 1),
            entry("Pidgey", "Normal", Some("Flying"), 2),
            entry("Charizard", "Fire", Some("Flying"), 1),
        ]);

        assert_eq!(dataset.type1_options(), ["Water", "Fire", "Grass", "Normal"]);
        assert_eq!(dataset.type2_options(), ["Flying", "Poison"]);
        assert_eq!(dataset.generation_options(), [1, 2, 3]);
        assert_eq!(dataset.legendary_options(), [false]);
        assert_eq!(
            dataset.name_options(),
            ["Bulbasaur", "Charizard", "Pidgey", "Squirtle"]
        );
    }

    #[test]
    fn handles_compare_by_identity() {
        let first = DatasetHandle::new(Dataset::default());
        let clone = first.clone();
        let other = DatasetHandle::new(Dataset::default());
        assert_eq!(first, clone);
        assert_ne!(first, other);
    }
}

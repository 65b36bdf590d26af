//! Resolves the name picker against the filtered set.

use super::dataset::Entry;
use super::filter::Selector;

/// How many entries "Select All" shows.
pub const DEFAULT_SLICE_LEN: usize = 20;

/// With a concrete name, every filtered entry carrying that name (duplicates
/// included). With the sentinel, the first [`DEFAULT_SLICE_LEN`] entries.
pub fn resolve<'a>(filtered: &[&'a Entry], name: &Selector<String>) -> Vec<&'a Entry> {
    match name {
        Selector::Only(wanted) => filtered
            .iter()
            .copied()
            .filter(|entry| &entry.name == wanted)
            .collect(),
        Selector::All => filtered.iter().copied().take(DEFAULT_SLICE_LEN).collect(),
    }
}

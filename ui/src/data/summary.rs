//! Aggregate counts for the overview page.

use super::dataset::Dataset;

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub entries: usize,
    pub legendary: usize,
    /// NaN when the dataset is empty.
    pub average_total: f64,
    /// Highest `total`; the earliest entry wins a tie.
    pub strongest: Option<(String, u32)>,
    /// Ascending by generation.
    pub per_generation: Vec<(u8, usize)>,
    /// Descending by count, ties kept in first-appearance order.
    pub per_type1: Vec<(String, usize)>,
}

impl DatasetSummary {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let entries = dataset.entries();
        let legendary = entries.iter().filter(|e| e.legendary).count();

        let average_total = if entries.is_empty() {
            f64::NAN
        } else {
            entries.iter().map(|e| e.total as f64).sum::<f64>() / entries.len() as f64
        };

        let mut strongest: Option<(String, u32)> = None;
        for entry in entries {
            let beats = strongest
                .as_ref()
                .map(|(_, best)| entry.total > *best)
                .unwrap_or(true);
            if beats {
                strongest = Some((entry.name.clone(), entry.total));
            }
        }

        let per_generation = dataset
            .generation_options()
            .into_iter()
            .map(|generation| {
                let count = entries.iter().filter(|e| e.generation == generation).count();
                (generation, count)
            })
            .collect();

        let mut per_type1: Vec<(String, usize)> = dataset
            .type1_options()
            .into_iter()
            .map(|type1| {
                let count = entries.iter().filter(|e| e.type1 == type1).count();
                (type1, count)
            })
            .collect();
        // Stable sort keeps first-appearance order for equal counts.
        per_type1.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            entries: entries.len(),
            legendary,
            average_total,
            strongest,
            per_generation,
            per_type1,
        }
    }
}

pub mod config;
pub mod dataset;
pub mod filter;
pub mod selection;
pub mod summary;

pub use config::{DashboardConfig, DatasetSource};
pub use dataset::{Dataset, DatasetError, DatasetHandle, Entry};
pub use filter::{FilterCriteria, Selector, ALL_CHOICE};
pub use summary::DatasetSummary;

/// Result of one filter-then-select pass, owned so it can live in a memo.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderPass {
    /// Entries that passed the attribute filters.
    pub matched: usize,
    /// Entries to render as cards, in dataset order.
    pub selection: Vec<Entry>,
}

impl RenderPass {
    pub fn compute(dataset: &Dataset, criteria: &FilterCriteria, name: &Selector<String>) -> Self {
        let filtered = filter::apply(dataset, criteria);
        let selection: Vec<Entry> = selection::resolve(&filtered, name)
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(
            matched = filtered.len(),
            shown = selection.len(),
            unfiltered = criteria.is_unfiltered(),
            "render pass"
        );

        Self {
            matched: filtered.len(),
            selection,
        }
    }
}

/// App-wide state provided through context by the platform `App` component.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub config: DashboardConfig,
    pub dataset: Result<DatasetHandle, String>,
}

impl DashboardState {
    /// Load the configured dataset once. Failure is kept as a message so the
    /// shell can show a startup error instead of the dashboard.
    pub fn load(config: DashboardConfig) -> Self {
        let source = config.dataset.describe();
        let dataset = match config.dataset.load() {
            Ok(dataset) => {
                tracing::info!(entries = dataset.len(), %source, "dataset loaded");
                Ok(DatasetHandle::new(dataset))
            }
            Err(err) => {
                tracing::error!(%source, "dataset failed to load: {err}");
                Err(format!("{source}: {err}"))
            }
        };

        Self { config, dataset }
    }
}

//! Runtime configuration. Compiled defaults, optionally overridden by
//! environment variables on native targets.

#[cfg(not(target_arch = "wasm32"))]
use std::env;
use std::path::PathBuf;

use super::dataset::{Dataset, DatasetError};

/// Width the identity panel renders artwork at.
pub const DEFAULT_IMAGE_WIDTH_PX: u32 = 150;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DatasetSource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl DatasetSource {
    /// Blank values fall back to the embedded dataset.
    pub fn from_setting(raw: Option<String>) -> Self {
        match raw {
            Some(path) if !path.trim().is_empty() => Self::File(PathBuf::from(path.trim())),
            _ => Self::Embedded,
        }
    }

    pub fn load(&self) -> Result<Dataset, DatasetError> {
        match self {
            Self::Embedded => Dataset::embedded(),
            Self::File(path) => Dataset::from_path(path),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Embedded => "embedded dataset".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub dataset: DatasetSource,
    pub image_width_px: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetSource::Embedded,
            image_width_px: DEFAULT_IMAGE_WIDTH_PX,
        }
    }
}

impl DashboardConfig {
    /// Reads `DEXBOARD_DATASET` and `DEXBOARD_IMAGE_WIDTH`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_settings(
            env::var("DEXBOARD_DATASET").ok(),
            env::var("DEXBOARD_IMAGE_WIDTH").ok(),
        )
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn from_settings(dataset: Option<String>, image_width: Option<String>) -> Self {
        let image_width_px = image_width
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|width| *width > 0)
            .unwrap_or(DEFAULT_IMAGE_WIDTH_PX);

        Self {
            dataset: DatasetSource::from_setting(dataset),
            image_width_px,
        }
    }
}

//! Runtime configuration for the dashboard.

use std::path::PathBuf;

/// Environment variable pointing at an alternative dataset JSON file.
pub const DATASET_ENV: &str = "NEWSROOM_DATASET";

/// Year shown next to the month in chart descriptions until a month is picked.
pub const REPORT_YEAR: i32 = 2024;

/// Where the dataset document is read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DatasetSource {
    /// `data/dashboard.json`, compiled into the binary.
    #[default]
    Embedded,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardConfig {
    pub dataset: DatasetSource,
}

impl DashboardConfig {
    /// Read overrides from the process environment. On wasm32 there is no
    /// environment, so this always yields the defaults there.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let dataset = lookup(DATASET_ENV)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(|raw| DatasetSource::File(PathBuf::from(raw)))
            .unwrap_or_default();

        Self { dataset }
    }
}

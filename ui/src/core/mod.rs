//! Platform-agnostic dashboard logic: month labels, the static dataset and
//! the series resolver every chart is built on.

pub mod config;
pub mod dataset;
pub mod format;
pub mod month;
pub mod resolver;

pub use config::{DashboardConfig, DatasetSource};
pub use dataset::{CategorySeries, CategoryTable, DatasetError, DatasetStore, Graph};
pub use month::{InvalidMonthLabel, Month, PickedMonth};
pub use resolver::{
    resolve, resolve_field, FieldSelector, ResolvedEntry, ResolvedSeries, SeriesError,
};

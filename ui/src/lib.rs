//! Shared crate for Newsroom Analytics: the dataset, the series resolver and
//! the chart views every platform crate mounts.

pub mod charts;
pub mod core;
pub mod i18n;
pub mod views;

pub use crate::core::{
    resolve, resolve_field, DatasetStore, FieldSelector, Graph, Month, PickedMonth, ResolvedEntry,
    ResolvedSeries, SeriesError,
};

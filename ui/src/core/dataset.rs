//! Static dataset backing every dashboard chart.
//!
//! The document is a list of graphs. Each graph maps a category (author,
//! theme, subscriber segment) to its monthly values plus one `fill` color:
//!
//! ```text
//! { "graphs": [ { "title": "Total Articles",
//!                 "data": { "peter": { "Jan": 5, "Feb": 7, "fill": "..." } } } ] }
//! ```
//!
//! The store is built once and never mutated, so `&DatasetStore` can be
//! shared freely between components.

use std::{
    collections::BTreeMap,
    fmt,
    path::{Path, PathBuf},
};

use log::{debug, error, info, warn};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{
    de::{self, MapAccess, Visitor},
    Deserialize, Deserializer,
};
use serde_json::{Map, Value};

use super::{
    config::{DashboardConfig, DatasetSource},
    month::Month,
};

/// Key holding the category color inside a series object.
pub const FILL_KEY: &str = "fill";

/// File name of the embedded document under `data/`.
pub const EMBEDDED_DATASET: &str = "dashboard.json";

#[derive(Embed)]
#[folder = "data"]
struct EmbeddedData;

/// Values of one category, keyed by field name (normally a month label).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct CategorySeries {
    fields: BTreeMap<String, f64>,
    color: String,
}

impl CategorySeries {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            fields: BTreeMap::new(),
            color: color.into(),
        }
    }

    /// Builder used by tests and programmatic datasets. Non-finite values are dropped.
    pub fn with_value(mut self, field: impl Into<String>, value: f64) -> Self {
        if value.is_finite() {
            self.fields.insert(field.into(), value);
        }
        self
    }

    pub fn with_month(self, month: Month, value: f64) -> Self {
        self.with_value(month.label(), value)
    }

    pub fn field(&self, name: &str) -> Option<f64> {
        self.fields.get(name).copied()
    }

    pub fn month(&self, month: Month) -> Option<f64> {
        self.field(month.label())
    }

    /// Stored color token, empty when the source had none.
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl From<Map<String, Value>> for CategorySeries {
    fn from(raw: Map<String, Value>) -> Self {
        let mut series = CategorySeries::default();

        for (key, value) in raw {
            if key == FILL_KEY {
                match value {
                    Value::String(color) => series.color = color,
                    Value::Null => {}
                    other => debug!("ignoring non-string fill value {other}"),
                }
                continue;
            }

            match numeric_value(&value) {
                Some(number) => {
                    series.fields.insert(key, number);
                }
                None => debug!("treating non-numeric `{key}` value {value} as missing"),
            }
        }

        series
    }
}

/// Numbers pass through; numeric strings are parsed; everything else is missing.
fn numeric_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Categories of a graph in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryTable {
    entries: Vec<(String, CategorySeries)>,
}

impl CategoryTable {
    pub fn get(&self, name: &str) -> Option<&CategorySeries> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, series)| series)
    }

    /// Insert or replace a category. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, series: CategorySeries) {
        let name = name.into();
        match self.entries.iter_mut().find(|(candidate, _)| *candidate == name) {
            Some((_, existing)) => *existing = series,
            None => self.entries.push((name, series)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategorySeries)> {
        self.entries
            .iter()
            .map(|(name, series)| (name.as_str(), series))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for CategoryTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = CategoryTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category name to monthly values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut table = CategoryTable::default();
                while let Some((name, series)) = access.next_entry::<String, CategorySeries>()? {
                    if table.get(&name).is_some() {
                        return Err(de::Error::custom(format!("duplicate category `{name}`")));
                    }
                    table.entries.push((name, series));
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

/// A named dataset driving one chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Graph {
    title: String,
    #[serde(default, rename = "data")]
    categories: CategoryTable,
}

impl Graph {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            categories: CategoryTable::default(),
        }
    }

    pub fn with_category(mut self, name: impl Into<String>, series: CategorySeries) -> Self {
        self.categories.insert(name, series);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }
}

#[derive(Deserialize)]
struct DatasetDocument {
    #[serde(default)]
    graphs: Vec<Graph>,
}

/// Immutable collection of graphs with lookup by exact title.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatasetStore {
    graphs: Vec<Graph>,
}

impl DatasetStore {
    /// Build a store, rejecting duplicate titles.
    pub fn new(graphs: Vec<Graph>) -> Result<Self, DatasetError> {
        for (index, graph) in graphs.iter().enumerate() {
            if graphs[..index].iter().any(|seen| seen.title == graph.title) {
                return Err(DatasetError::DuplicateTitle(graph.title.clone()));
            }
        }
        Ok(Self { graphs })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DatasetError> {
        let document: DatasetDocument = serde_json::from_str(raw)?;
        Self::new(document.graphs)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, DatasetError> {
        let document: DatasetDocument = serde_json::from_slice(bytes)?;
        Self::new(document.graphs)
    }

    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let bytes = std::fs::read(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_slice(&bytes)
    }

    /// The document compiled into the binary from `data/dashboard.json`.
    pub fn embedded() -> Result<Self, DatasetError> {
        let file = EmbeddedData::get(EMBEDDED_DATASET)
            .ok_or(DatasetError::MissingEmbedded(EMBEDDED_DATASET))?;
        Self::from_slice(&file.data)
    }

    pub fn load(source: &DatasetSource) -> Result<Self, DatasetError> {
        match source {
            DatasetSource::Embedded => Self::embedded(),
            DatasetSource::File(path) => Self::from_path(path),
        }
    }

    /// Exact title match; no case folding.
    pub fn find_graph(&self, title: &str) -> Option<&Graph> {
        self.graphs.iter().find(|graph| graph.title == title)
    }

    pub fn graphs(&self) -> impl Iterator<Item = &Graph> {
        self.graphs.iter()
    }

    /// Graph titles in document order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.graphs.iter().map(|graph| graph.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}

static GLOBAL_STORE: Lazy<DatasetStore> =
    Lazy::new(|| load_or_empty(&DashboardConfig::from_env()));

/// Load the configured dataset. A load failure is logged and yields an empty
/// store, so every chart lookup falls through to its no-data state.
pub(crate) fn load_or_empty(config: &DashboardConfig) -> DatasetStore {
    match DatasetStore::load(&config.dataset) {
        Ok(store) => {
            info!(
                "[dataset] loaded {} graph(s) from {:?}",
                store.len(),
                config.dataset
            );
            if store.is_empty() {
                warn!("[dataset] dataset contains no graphs; charts will show no data");
            } else {
                debug!(
                    "[dataset] graphs: {:?}",
                    store.titles().collect::<Vec<_>>()
                );
            }
            store
        }
        Err(err) => {
            error!("[dataset] failed to load {:?}: {err}", config.dataset);
            DatasetStore::default()
        }
    }
}

/// Process-wide store, loaded on first use.
pub fn global() -> &'static DatasetStore {
    &GLOBAL_STORE
}

#[derive(Debug)]
pub enum DatasetError {
    Parse(serde_json::Error),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    MissingEmbedded(&'static str),
    DuplicateTitle(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Parse(err) => write!(f, "malformed dataset document: {err}"),
            DatasetError::Io { path, source } => {
                write!(f, "couldn't read dataset `{}`: {source}", path.display())
            }
            DatasetError::MissingEmbedded(name) => {
                write!(f, "embedded dataset `{name}` is missing from the build")
            }
            DatasetError::DuplicateTitle(title) => {
                write!(f, "graph title `{title}` appears more than once")
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Parse(err) => Some(err),
            DatasetError::Io { source, .. } => Some(source),
            DatasetError::MissingEmbedded(_) | DatasetError::DuplicateTitle(_) => None,
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::Parse(err)
    }
}

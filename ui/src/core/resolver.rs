//! Monthly metric series resolution.
//!
//! Every chart asks the same question: for one graph and one month, which
//! categories rank highest? [`resolve`] answers it once for all of them.
//!
//! Policy
//! ------
//! - A category without a value for the selected field counts as `0`.
//! - A category without a color resolves to `""`. Picking a display color is
//!   the chart adapter's job (see `charts::adapter`).
//! - Entries are ordered by value, highest first. Equal values keep the
//!   order in which categories appear in the dataset.
//! - No month means January.

use std::{cmp::Ordering, fmt};

use log::trace;
use serde::Serialize;

use super::{
    dataset::{DatasetStore, Graph},
    month::{InvalidMonthLabel, Month},
};

/// Which field of each category series supplies the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldSelector {
    Month(Month),
    /// A non-month field such as a yearly total.
    Named(String),
}

impl FieldSelector {
    pub fn key(&self) -> &str {
        match self {
            FieldSelector::Month(month) => month.label(),
            FieldSelector::Named(name) => name,
        }
    }
}

impl Default for FieldSelector {
    fn default() -> Self {
        FieldSelector::Month(Month::default())
    }
}

impl From<Month> for FieldSelector {
    fn from(month: Month) -> Self {
        FieldSelector::Month(month)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedEntry {
    pub category: String,
    pub value: f64,
    pub color: String,
}

/// Ranked output of [`resolve`], highest value first.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ResolvedSeries {
    entries: Vec<ResolvedEntry>,
}

impl ResolvedSeries {
    pub fn entries(&self) -> &[ResolvedEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.value).sum()
    }

    /// Value of the top-ranked entry, if any.
    pub fn max_value(&self) -> Option<f64> {
        self.entries.first().map(|entry| entry.value)
    }
}

impl<'a> IntoIterator for &'a ResolvedSeries {
    type Item = &'a ResolvedEntry;
    type IntoIter = std::slice::Iter<'a, ResolvedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Rank `graph`'s categories by their value for `month` (January when `None`).
pub fn resolve(graph: &Graph, month: Option<Month>) -> ResolvedSeries {
    resolve_field(graph, &FieldSelector::Month(month.unwrap_or_default()))
}

/// Rank `graph`'s categories by an arbitrary field.
pub fn resolve_field(graph: &Graph, field: &FieldSelector) -> ResolvedSeries {
    let key = field.key();

    let mut entries: Vec<ResolvedEntry> = graph
        .categories()
        .iter()
        .map(|(category, series)| ResolvedEntry {
            category: category.to_string(),
            value: series.field(key).unwrap_or(0.0),
            color: series.color().to_string(),
        })
        .collect();

    // `sort_by` is stable; values are always finite.
    entries.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));

    trace!(
        "[resolver] graph={:?} field={key} categories={}",
        graph.title(),
        entries.len()
    );

    ResolvedSeries { entries }
}

impl DatasetStore {
    /// Lookup, month validation and resolution in one call.
    ///
    /// `month` is the raw label from UI state; `None` selects January.
    pub fn series(&self, title: &str, month: Option<&str>) -> Result<ResolvedSeries, SeriesError> {
        let month = Month::from_selection(month)?;
        let graph = self
            .find_graph(title)
            .ok_or_else(|| SeriesError::GraphNotFound(title.to_string()))?;
        Ok(resolve(graph, Some(month)))
    }
}

/// Failures surfaced at the lookup boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    GraphNotFound(String),
    InvalidMonthLabel(InvalidMonthLabel),
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesError::GraphNotFound(title) => write!(f, "no graph titled `{title}`"),
            SeriesError::InvalidMonthLabel(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for SeriesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeriesError::GraphNotFound(_) => None,
            SeriesError::InvalidMonthLabel(err) => Some(err),
        }
    }
}

impl From<InvalidMonthLabel> for SeriesError {
    fn from(err: InvalidMonthLabel) -> Self {
        SeriesError::InvalidMonthLabel(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::CategorySeries;

    fn authors() -> Graph {
        Graph::new("Total Articles")
            .with_category(
                "peter",
                CategorySeries::new("c2")
                    .with_month(Month::Jan, 5.0)
                    .with_month(Month::Feb, 9.0),
            )
            .with_category(
                "nancy",
                CategorySeries::new("c4")
                    .with_month(Month::Jan, 12.0)
                    .with_month(Month::Feb, 9.0),
            )
            .with_category("steve", CategorySeries::new("").with_month(Month::Jan, 7.5))
    }

    fn categories(series: &ResolvedSeries) -> Vec<&str> {
        series.iter().map(|e| e.category.as_str()).collect()
    }

    #[test]
    fn ranks_by_value_descending() {
        let series = resolve(&authors(), Some(Month::Jan));
        assert_eq!(categories(&series), ["nancy", "steve", "peter"]);
        assert_eq!(series.max_value(), Some(12.0));
        assert_eq!(series.total(), 24.5);
    }

    #[test]
    fn ties_keep_dataset_order() {
        let series = resolve(&authors(), Some(Month::Feb));
        assert_eq!(categories(&series), ["peter", "nancy", "steve"]);
        assert_eq!(series.entries()[2].value, 0.0);
    }

    #[test]
    fn missing_color_is_empty_string() {
        let series = resolve(&authors(), Some(Month::Jan));
        let steve = series.iter().find(|e| e.category == "steve").unwrap();
        assert_eq!(steve.color, "");
    }

    #[test]
    fn no_month_means_january() {
        let graph = authors();
        assert_eq!(resolve(&graph, None), resolve(&graph, Some(Month::Jan)));
    }

    #[test]
    fn named_fields_use_the_same_ranking() {
        let graph = Graph::new("Totals")
            .with_category("a", CategorySeries::new("x").with_value("Total", 3.0))
            .with_category("b", CategorySeries::new("y").with_value("Total", 30.0))
            .with_category("c", CategorySeries::new("z"));
        let series = resolve_field(&graph, &FieldSelector::Named("Total".into()));
        assert_eq!(categories(&series), ["b", "a", "c"]);
        assert_eq!(FieldSelector::default().key(), "Jan");
    }

    #[test]
    fn empty_graph_resolves_to_empty_series() {
        let series = resolve(&Graph::new("Empty"), Some(Month::Mar));
        assert!(series.is_empty());
        assert_eq!(series.max_value(), None);
        assert_eq!(series.total(), 0.0);
    }

    #[test]
    fn store_series_separates_failures() {
        let store = DatasetStore::new(vec![authors()]).unwrap();

        let ok = store.series("Total Articles", None).unwrap();
        assert_eq!(categories(&ok), ["nancy", "steve", "peter"]);

        assert_eq!(
            store.series("Missing", Some("Jan")),
            Err(SeriesError::GraphNotFound("Missing".into()))
        );
        assert!(matches!(
            store.series("Total Articles", Some("january")),
            Err(SeriesError::InvalidMonthLabel(_))
        ));
    }

    #[test]
    fn serializes_as_plain_list() {
        let graph = Graph::new("G").with_category("a", CategorySeries::new("c1").with_month(Month::Jan, 2.0));
        let json = serde_json::to_value(resolve(&graph, None)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "category": "a", "value": 2.0, "color": "c1" }])
        );
    }
}

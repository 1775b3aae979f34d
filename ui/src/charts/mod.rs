pub mod adapter;

mod bar;
pub use bar::RankedBarChart;

use crate::core::{FieldSelector, Month};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Columns rising from the x-axis, labels underneath.
    Vertical,
    /// Bars growing to the right, labels on the left.
    Horizontal,
}

/// Which localized title and note a chart uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Overperformance,
    ArticlesPosted,
    SubscriberEvents,
    RevenueByTheme,
    PerAuthor,
    ReaderEngagement,
    SubscriberThemes,
    NonSubscriberThemes,
}

/// Static description of one dashboard chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    /// Title of the graph in the dataset document.
    pub graph: &'static str,
    pub orientation: Orientation,
    /// Non-month field to rank by; `None` ranks by the selected month.
    pub field: Option<&'static str>,
    pub show_total: bool,
}

impl ChartSpec {
    pub fn selector(&self, month: Month) -> FieldSelector {
        match self.field {
            Some(name) => FieldSelector::Named(name.to_string()),
            None => FieldSelector::Month(month),
        }
    }
}

pub const OVERPERFORMANCE: ChartSpec = ChartSpec {
    kind: ChartKind::Overperformance,
    graph: "Article Overperformance",
    orientation: Orientation::Vertical,
    field: None,
    show_total: false,
};

pub const ARTICLES_POSTED: ChartSpec = ChartSpec {
    kind: ChartKind::ArticlesPosted,
    graph: "Total Articles",
    orientation: Orientation::Horizontal,
    field: None,
    show_total: false,
};

pub const SUBSCRIBER_EVENTS: ChartSpec = ChartSpec {
    kind: ChartKind::SubscriberEvents,
    graph: "Subscribers vs Non-Subscribers",
    orientation: Orientation::Vertical,
    field: None,
    show_total: false,
};

pub const REVENUE_BY_THEME: ChartSpec = ChartSpec {
    kind: ChartKind::RevenueByTheme,
    graph: "Revenue per Article Theme (USD)",
    orientation: Orientation::Horizontal,
    field: None,
    show_total: true,
};

pub const PER_AUTHOR: ChartSpec = ChartSpec {
    kind: ChartKind::PerAuthor,
    graph: "Personalized Content by Author",
    orientation: Orientation::Horizontal,
    field: Some("visitors"),
    show_total: false,
};

/// Ranked by visitors, not listed in calendar order.
pub const READER_ENGAGEMENT: ChartSpec = ChartSpec {
    kind: ChartKind::ReaderEngagement,
    graph: "Are Readers Staying Engaged?",
    orientation: Orientation::Vertical,
    field: Some("visitors"),
    show_total: false,
};

pub const SUBSCRIBER_THEMES: ChartSpec = ChartSpec {
    kind: ChartKind::SubscriberThemes,
    graph: "What Do Subscribers Want?",
    orientation: Orientation::Vertical,
    field: Some("subscribers"),
    show_total: false,
};

pub const NON_SUBSCRIBER_THEMES: ChartSpec = ChartSpec {
    kind: ChartKind::NonSubscriberThemes,
    field: Some("nonsubscribers"),
    ..SUBSCRIBER_THEMES
};

/// Charts shown on the dashboard, in display order.
pub const DASHBOARD_CHARTS: [ChartSpec; 8] = [
    OVERPERFORMANCE,
    ARTICLES_POSTED,
    PER_AUTHOR,
    READER_ENGAGEMENT,
    SUBSCRIBER_EVENTS,
    SUBSCRIBER_THEMES,
    NON_SUBSCRIBER_THEMES,
    REVENUE_BY_THEME,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{resolve_field, DatasetStore};

    fn top_of(spec: ChartSpec, month: Month) -> (String, f64) {
        let store = DatasetStore::embedded().unwrap();
        let graph = store.find_graph(spec.graph).unwrap();
        let series = resolve_field(graph, &spec.selector(month));
        assert_eq!(series.len(), graph.categories().len());
        let top = &series.entries()[0];
        (top.category.clone(), top.value)
    }

    #[test]
    fn every_dashboard_chart_has_a_graph() {
        let store = DatasetStore::embedded().unwrap();
        for spec in DASHBOARD_CHARTS {
            assert!(
                store.find_graph(spec.graph).is_some(),
                "no graph for {:?}",
                spec.kind
            );
        }
    }

    #[test]
    fn selector_prefers_named_field() {
        let spec = ChartSpec {
            field: Some("Total"),
            ..ARTICLES_POSTED
        };
        assert_eq!(spec.selector(Month::May), FieldSelector::Named("Total".into()));
        assert_eq!(ARTICLES_POSTED.selector(Month::May), FieldSelector::Month(Month::May));
    }

    #[test]
    fn named_field_charts_ignore_the_month() {
        for spec in DASHBOARD_CHARTS.into_iter().filter(|spec| spec.field.is_some()) {
            assert_eq!(top_of(spec, Month::Jan), top_of(spec, Month::Dec));
        }
    }

    #[test]
    fn per_author_ranks_by_visitors() {
        assert_eq!(top_of(PER_AUTHOR, Month::Jan), ("health".to_string(), 46.0));
    }

    #[test]
    fn reader_engagement_peaks_in_june() {
        assert_eq!(top_of(READER_ENGAGEMENT, Month::Jan), ("June".to_string(), 250.0));
    }

    #[test]
    fn subscriber_theme_charts_read_their_own_field() {
        assert_eq!(top_of(SUBSCRIBER_THEMES, Month::Jan), ("Health".to_string(), 5234.0));
        assert_eq!(
            top_of(NON_SUBSCRIBER_THEMES, Month::Jan),
            ("Health".to_string(), 6879.0)
        );

        let store = DatasetStore::embedded().unwrap();
        let graph = store.find_graph(SUBSCRIBER_THEMES.graph).unwrap();
        let subscribers = resolve_field(graph, &SUBSCRIBER_THEMES.selector(Month::Jan));
        let others = resolve_field(graph, &NON_SUBSCRIBER_THEMES.selector(Month::Jan));
        assert_eq!(subscribers.entries()[1].category, "Environment");
        assert_eq!(others.entries()[1].category, "Politics");
    }

    #[test]
    fn chart_kinds_are_unique() {
        for (i, a) in DASHBOARD_CHARTS.iter().enumerate() {
            for b in &DASHBOARD_CHARTS[i + 1..] {
                assert_ne!(a.kind, b.kind);
            }
        }
    }
}

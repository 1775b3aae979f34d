use dioxus::prelude::*;
use log::warn;

use super::{
    adapter::{chart_rows, ChartRow},
    ChartKind, ChartSpec, Orientation,
};
use crate::{
    core::{dataset, format, resolve_field, Month},
    i18n, t,
};

/// One ranked chart card. Renders the no-data state when the graph is absent.
///
/// `month` and `year` only matter for month-keyed charts; a chart with a named
/// field shows the same ranking for every month.
#[component]
pub fn RankedBarChart(spec: ChartSpec, month: Month, year: i32) -> Element {
    let (title, note) = chart_copy(spec.kind);

    let Some(graph) = dataset::global().find_graph(spec.graph) else {
        warn!("[charts] graph {:?} not found; showing empty state", spec.graph);
        return rsx! {
            section { class: "chart-card chart-card--empty",
                div { class: "chart-card__header",
                    h2 { class: "chart-card__title", "{title}" }
                }
                p { class: "chart-card__placeholder", {t!("chart-no-data")} }
            }
        };
    };

    let series = resolve_field(graph, &spec.selector(month));
    let total = spec
        .show_total
        .then(|| format::format_value(series.total()));
    let rows = chart_rows(&series, i18n::category_label);
    let showing = spec.field.is_none().then(|| {
        t!(
            "chart-showing-month",
            month = month.label(),
            year = year.to_string()
        )
    });

    let orientation_class = match spec.orientation {
        Orientation::Vertical => "chart-card--vertical",
        Orientation::Horizontal => "chart-card--horizontal",
    };

    rsx! {
        section { class: "chart-card {orientation_class}",
            div { class: "chart-card__header",
                h2 { class: "chart-card__title", "{title}" }
                if let Some(showing) = showing {
                    span { class: "chart-card__meta", "{showing}" }
                }
            }

            if let Some(total) = total {
                div { class: "chart-card__total",
                    strong { class: "chart-card__total-value", "{total}" }
                    span { class: "chart-card__total-label", {t!("chart-total-label")} }
                }
            }

            if rows.is_empty() {
                p { class: "chart-card__placeholder", {t!("chart-no-data")} }
            } else {
                ol { class: "chart-bars",
                    for row in rows.into_iter() {
                        {render_row(row)}
                    }
                }
            }

            p { class: "chart-card__note", "{note}" }
        }
    }
}

fn render_row(row: ChartRow) -> Element {
    let ChartRow {
        label,
        display_value,
        color,
        share,
        ..
    } = row;

    let fill_style = format!("--bar-share: {share:.1}%; background: {color};");

    rsx! {
        li { class: "chart-bar", title: "{label}: {display_value}",
            span { class: "chart-bar__label", "{label}" }
            span { class: "chart-bar__track",
                span { class: "chart-bar__fill", style: "{fill_style}" }
            }
            span { class: "chart-bar__value", "{display_value}" }
        }
    }
}

fn chart_copy(kind: ChartKind) -> (String, String) {
    match kind {
        ChartKind::Overperformance => (
            t!("chart-overperformance-title"),
            t!("chart-overperformance-note"),
        ),
        ChartKind::ArticlesPosted => (t!("chart-articles-title"), t!("chart-articles-note")),
        ChartKind::SubscriberEvents => (t!("chart-events-title"), t!("chart-events-note")),
        ChartKind::RevenueByTheme => (t!("chart-revenue-title"), t!("chart-revenue-note")),
        ChartKind::PerAuthor => (t!("chart-per-author-title"), t!("chart-per-author-note")),
        ChartKind::ReaderEngagement => (
            t!("chart-engagement-title"),
            t!("chart-engagement-note"),
        ),
        ChartKind::SubscriberThemes => (
            t!("chart-subscriber-themes-title"),
            t!("chart-subscriber-themes-note"),
        ),
        ChartKind::NonSubscriberThemes => (
            t!("chart-nonsubscriber-themes-title"),
            t!("chart-nonsubscriber-themes-note"),
        ),
    }
}

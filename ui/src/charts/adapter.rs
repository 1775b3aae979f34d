//! Maps a resolved series onto bar rows.
//!
//! The resolver leaves `color` empty when the dataset has no fill. Rows always
//! carry a usable color: stored fill, then the configured category color,
//! then the rotating palette.

use crate::core::{format, ResolvedSeries};

/// Rotating colors for categories with neither a fill nor a configured color.
pub const FALLBACK_PALETTE: [&str; 5] = [
    "hsl(var(--chart-1))",
    "hsl(var(--chart-2))",
    "hsl(var(--chart-3))",
    "hsl(var(--chart-4))",
    "hsl(var(--chart-5))",
];

/// Colors assigned to known categories, matched case-insensitively.
const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("step", "hsl(var(--chart-a1))"),
    ("peter", "hsl(var(--chart-a2))"),
    ("charlie", "hsl(var(--chart-a3))"),
    ("nancy", "hsl(var(--chart-a4))"),
    ("steve", "hsl(var(--chart-a5))"),
    ("politics", "hsl(var(--chart-a1))"),
    ("arts", "hsl(var(--chart-a2))"),
    ("environment", "hsl(var(--chart-a3))"),
    ("health", "hsl(var(--chart-a4))"),
    ("housing", "hsl(var(--chart-a5))"),
    ("subscribers", "hsl(var(--chart-sub))"),
    ("nonsubscribers", "hsl(var(--chart-nonsub))"),
];

pub fn configured_color(category: &str) -> Option<&'static str> {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(category.trim()))
        .map(|(_, color)| *color)
}

/// Display color for the entry at `rank`.
pub fn display_color(stored: &str, category: &str, rank: usize) -> String {
    if !stored.trim().is_empty() {
        return stored.to_string();
    }
    configured_color(category)
        .unwrap_or(FALLBACK_PALETTE[rank % FALLBACK_PALETTE.len()])
        .to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub category: String,
    pub label: String,
    pub value: f64,
    pub display_value: String,
    pub color: String,
    /// Bar length relative to the top entry, `0.0..=100.0`.
    pub share: f64,
}

pub fn chart_rows(series: &ResolvedSeries, label_for: impl Fn(&str) -> String) -> Vec<ChartRow> {
    let max = series.max_value().unwrap_or(0.0);

    series
        .iter()
        .enumerate()
        .map(|(rank, entry)| ChartRow {
            category: entry.category.clone(),
            label: label_for(&entry.category),
            value: entry.value,
            display_value: format::format_value(entry.value),
            color: display_color(&entry.color, &entry.category, rank),
            share: bar_share(entry.value, max),
        })
        .collect()
}

fn bar_share(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        (value / max * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{resolve, CategorySeries, Graph, Month};

    fn revenue() -> Graph {
        Graph::new("Revenue per Article Theme (USD)")
            .with_category("Politics", CategorySeries::default().with_month(Month::Dec, 205.0))
            .with_category("Health", CategorySeries::default().with_month(Month::Dec, 165.0))
            .with_category("Crime", CategorySeries::default().with_month(Month::Dec, 41.0))
            .with_category("Sports", CategorySeries::new("#123456"))
    }

    #[test]
    fn stored_color_wins() {
        assert_eq!(display_color("c4", "nancy", 0), "c4");
    }

    #[test]
    fn configured_colors_match_case_insensitively() {
        assert_eq!(configured_color("Politics"), Some("hsl(var(--chart-a1))"));
        assert_eq!(configured_color("NonSubscribers"), Some("hsl(var(--chart-nonsub))"));
        assert_eq!(configured_color("crime"), None);
    }

    #[test]
    fn rows_never_have_empty_colors() {
        let series = resolve(&revenue(), Some(Month::Dec));
        let rows = chart_rows(&series, |name| name.to_uppercase());

        let colors: Vec<&str> = rows.iter().map(|r| r.color.as_str()).collect();
        assert_eq!(
            colors,
            [
                "hsl(var(--chart-a1))",
                "hsl(var(--chart-a4))",
                "hsl(var(--chart-3))",
                "#123456"
            ]
        );
        assert_eq!(rows[0].label, "POLITICS");
        assert_eq!(rows[0].display_value, "205");
    }

    #[test]
    fn shares_are_relative_to_top_entry() {
        let series = resolve(&revenue(), Some(Month::Dec));
        let rows = chart_rows(&series, str::to_string);
        assert_eq!(rows[0].share, 100.0);
        assert!((rows[1].share - 165.0 / 205.0 * 100.0).abs() < 1e-9);
        assert_eq!(rows[3].share, 0.0);
    }

    #[test]
    fn all_zero_series_has_zero_shares() {
        let series = resolve(&revenue(), Some(Month::Jan));
        let rows = chart_rows(&series, str::to_string);
        assert!(rows.iter().all(|row| row.share == 0.0));
        let order: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(order, ["Politics", "Health", "Crime", "Sports"]);
    }
}

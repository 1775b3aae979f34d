#![cfg(test)]
//! Selector lint for the shared theme embedded by the web build.
//!
//! Chart and dashboard components emit these class names; dropping one from
//! `ui/assets/theme/main.css` silently unstyles the charts at runtime.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Dashboard
    ".dashboard__header",
    ".dashboard__controls",
    ".dashboard__grid",
    ".dashboard__error",
    // Chart cards
    ".chart-card {",
    ".chart-card__title",
    ".chart-card__meta",
    ".chart-card__placeholder",
    ".chart-card__total-value",
    ".chart-card--horizontal",
    ".chart-card--vertical",
    ".chart-bar__fill",
    ".chart-bar__value",
    "@media (max-width: 720px)",
];

/// Colors the chart adapter hands out must be defined as theme tokens.
const REQUIRED_TOKENS: &[&str] = &[
    "--chart-1:",
    "--chart-5:",
    "--chart-a1:",
    "--chart-a5:",
    "--chart-sub:",
    "--chart-nonsub:",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .chain(REQUIRED_TOKENS)
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in shared theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn bars_are_sized_by_share_variable() {
    let uses = THEME_CSS.matches("var(--bar-share)").count();
    assert!(
        uses >= 2,
        "Both bar orientations should size fills from --bar-share (found {uses})"
    );
}

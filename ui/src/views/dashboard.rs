use dioxus::prelude::*;
use log::warn;

use crate::{
    charts::{RankedBarChart, DASHBOARD_CHARTS},
    core::{config::REPORT_YEAR, Month, PickedMonth},
    i18n, t,
};

/// Dashboard with an in-page month picker. No selection shows January of
/// the report year.
#[component]
pub fn Dashboard() -> Element {
    let mut selected: Signal<Option<PickedMonth>> = use_signal(|| None);
    let month = Month::from_picked_date(selected().map(PickedMonth::date));
    let year = selected().map(PickedMonth::year).unwrap_or(REPORT_YEAR);

    let on_month = move |evt: FormEvent| {
        let raw = evt.value();
        if raw.trim().is_empty() {
            selected.set(None);
            return;
        }
        match PickedMonth::parse_input(&raw) {
            Ok(picked) => selected.set(Some(picked)),
            Err(err) => warn!("[dashboard] ignoring month selection: {err}"),
        }
    };

    rsx! {
        section { class: "page page-dashboard",
            DashboardHeader {}

            div { class: "dashboard__controls",
                label { class: "dashboard__month-label", r#for: "month-select",
                    {t!("dashboard-month-label")}
                }
                input {
                    id: "month-select",
                    class: "dashboard__month-select",
                    r#type: "month",
                    placeholder: t!("dashboard-month-placeholder"),
                    value: selected().map(PickedMonth::input_value).unwrap_or_default(),
                    oninput: on_month,
                }
            }

            ChartGrid { month, year }
        }
    }
}

/// Dashboard for a month label taken from the URL (`/month/Mar`).
///
/// A label outside `Jan`..`Dec` is reported instead of falling back to January.
#[component]
pub fn MonthDashboard(label: String) -> Element {
    match label.parse::<Month>() {
        Ok(month) => rsx! {
            section { class: "page page-dashboard",
                DashboardHeader {}
                ChartGrid { month, year: REPORT_YEAR }
            }
        },
        Err(err) => {
            warn!("[dashboard] {err}");
            rsx! {
                section { class: "page page-dashboard",
                    DashboardHeader {}
                    p { class: "dashboard__error", {t!("chart-invalid-month", label = err.label)} }
                }
            }
        }
    }
}

#[component]
fn ChartGrid(month: Month, year: i32) -> Element {
    rsx! {
        div { class: "dashboard__grid",
            for spec in DASHBOARD_CHARTS {
                RankedBarChart { key: "{spec.kind:?}", spec, month, year }
            }
        }
    }
}

#[component]
fn DashboardHeader() -> Element {
    i18n::init();

    // Provided by the platform crate; switching language re-keys the routed subtree.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let current_lang = lang_code
        .as_ref()
        .map(|code| code())
        .unwrap_or_else(|| "en-US".to_string());
    let langs = i18n::available_languages();

    let on_lang = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                if let Some(mut code) = lang_code {
                    code.set(val);
                }
            }
            Err(err) => warn!("[i18n] couldn't switch to {val}: {err}"),
        }
    };

    rsx! {
        header { class: "dashboard__header",
            div { class: "dashboard__heading",
                h1 { class: "dashboard__title", {t!("dashboard-title")} }
                p { class: "dashboard__intro", {t!("dashboard-intro")} }
            }

            if langs.len() > 1 {
                div { class: "dashboard__locale",
                    label { class: "visually-hidden", r#for: "locale-select",
                        {t!("dashboard-language-label")}
                    }
                    select {
                        id: "locale-select",
                        value: "{current_lang}",
                        oninput: on_lang,
                        for code in langs.iter() {
                            option { key: "{code}", value: "{code}", "{code}" }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use ui::views::{Dashboard, MonthDashboard};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Overview {},
    #[route("/month/:label")]
    MonthView { label: String },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme (ui/assets/theme/main.css)

fn main() {
    init_logging();
    log::info!(
        "[web] newsroom dashboard v{} starting",
        env!("CARGO_PKG_VERSION")
    );
    dioxus::launch(App);
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    console_error_panic_hook::set_once();
    // Err means a logger is already installed; keep that one.
    let _ = console_log::init_with_level(log::Level::Info);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; the dashboard header updates it on selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount (and fresh lookups) on language change.
        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

#[component]
fn Overview() -> Element {
    rsx! { Dashboard {} }
}

#[component]
fn MonthView(label: String) -> Element {
    rsx! { MonthDashboard { label } }
}

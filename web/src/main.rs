use dioxus::prelude::*;
use once_cell::sync::Lazy;

use data::EnergyTable;
use ui::views::{About, Dashboard};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Dashboard {},
    #[route("/about")]
    About {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CHARTS_JS: Asset = asset!("/assets/charts.js");

// Demo extract embedded at compile time so the app runs with no external
// data; swap in the full Kaggle CSV for complete coverage.
const ENERGY_CSV: &str = include_str!("../assets/world_energy.csv");

/// Parsed once per process; the table is immutable for its whole lifetime
/// and handed to the views through context.
static TABLE: Lazy<EnergyTable> =
    Lazy::new(|| data::load_from_str(ENERGY_CSV).expect("bundled energy dataset parses"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider::<&'static EnergyTable>(|| &TABLE);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: "https://cdn.plot.ly/plotly-2.35.2.min.js" }
        document::Script { src: CHARTS_JS }

        Router::<Route> {}
    }
}

/// Web-specific navigation shell around the shared views.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        nav { class: "navbar",
            span { class: "navbar__brand", "Wattlace" }
            Link { class: "navbar__link", to: Route::Dashboard {}, "Dashboard" }
            Link { class: "navbar__link", to: Route::About {}, "About" }
        }
        Outlet::<Route> {}
    }
}

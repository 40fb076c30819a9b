use dioxus::prelude::*;

use crate::charts::ChartDescriptor;

/// One dashboard card. Figures are serialized and handed to the JS render
/// bridge (`window.wattlace.render`); fallback descriptors render as an
/// in-card placeholder instead of a plot.
#[component]
pub fn ChartPanel(
    dom_id: &'static str,
    heading: &'static str,
    blurb: &'static str,
    wide: bool,
    descriptor: ChartDescriptor,
) -> Element {
    // Recomposed on every prop change; empty when there is nothing to draw.
    let script = match &descriptor {
        ChartDescriptor::Figure(figure) => serde_json::to_string(figure)
            .map(|json| {
                format!("window.wattlace && window.wattlace.render(\"{dom_id}\", {json});")
            })
            .unwrap_or_default(),
        ChartDescriptor::Fallback(_) => String::new(),
    };

    use_effect(use_reactive!(|script| {
        if !script.is_empty() {
            let _ = document::eval(&script);
        }
    }));

    let card_class = if wide {
        "chart-card chart-card--wide"
    } else {
        "chart-card"
    };

    rsx! {
        section { class: card_class,
            div { class: "chart-card__header",
                h4 { "{heading}" }
                p { class: "chart-card__blurb", "{blurb}" }
            }

            match descriptor {
                ChartDescriptor::Fallback(fallback) => rsx! {
                    div { class: "chart-card__fallback",
                        strong { "{fallback.title}" }
                        if let Some(note) = fallback.note {
                            p { class: "chart-card__note", "{note}" }
                        }
                    }
                },
                ChartDescriptor::Figure(_) => rsx! {
                    div { id: dom_id, class: "chart-card__plot" }
                },
            }
        }
    }
}

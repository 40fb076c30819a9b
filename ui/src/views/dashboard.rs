use dioxus::prelude::*;

use data::EnergyTable;

use crate::charts::{self, ChartDescriptor};
use crate::core::selection::SelectionState;
use crate::views::{ChartPanel, ControlPanel};

/// Static per-panel copy, aligned index-for-index with
/// [`charts::RENDER_ORDER`].
pub struct PanelMeta {
    pub dom_id: &'static str,
    pub heading: &'static str,
    pub blurb: &'static str,
    /// Full-width panels span both grid columns.
    pub wide: bool,
}

pub const PANELS: [PanelMeta; 11] = [
    PanelMeta {
        dom_id: "energy-mix-pie-chart",
        heading: "Energy Mix (Pie Chart)",
        blurb: "Proportional distribution of the selected sources for the latest year in the chosen range.",
        wide: false,
    },
    PanelMeta {
        dom_id: "primary-energy-line-chart",
        heading: "Total Primary Energy Consumption (Line Chart)",
        blurb: "Overall trend of total primary energy consumption over the selected period.",
        wide: false,
    },
    PanelMeta {
        dom_id: "energy-correlation-heatmap",
        heading: "Energy Source Correlation (Heatmap)",
        blurb: "Statistical correlations between the selected sources. Requires at least two sources.",
        wide: false,
    },
    PanelMeta {
        dom_id: "global-energy-map",
        heading: "Interactive Global Energy Map",
        blurb: "Geographic view of the chosen metric across all countries, with projection, per-capita, and animation controls.",
        wide: true,
    },
    PanelMeta {
        dom_id: "energy-source-trend-chart",
        heading: "Energy Source Trends (Multi-Line Chart)",
        blurb: "Absolute consumption trends of the selected sources, one line per source.",
        wide: false,
    },
    PanelMeta {
        dom_id: "stacked-area-chart",
        heading: "Stacked Energy Composition (Area Chart)",
        blurb: "Each source's absolute contribution stacked into the combined total over time.",
        wide: false,
    },
    PanelMeta {
        dom_id: "stream-graph",
        heading: "Proportional Energy Mix Over Time (Stream Graph)",
        blurb: "Relative share of each selected source per year; all sources sum to 100%.",
        wide: false,
    },
    PanelMeta {
        dom_id: "sunburst-chart",
        heading: "Energy Mix Hierarchy (Sunburst Chart)",
        blurb: "Radial part-to-whole view of the latest-year mix.",
        wide: false,
    },
    PanelMeta {
        dom_id: "gdp-vs-energy-scatter",
        heading: "GDP vs. Energy Consumption (Scatter Plot)",
        blurb: "Economic output against primary energy, one point per year.",
        wide: false,
    },
    PanelMeta {
        dom_id: "ghg-emissions-bar-chart",
        heading: "Greenhouse Gas Emissions (Bar Chart)",
        blurb: "Annual greenhouse-gas emissions for the selected country and period.",
        wide: false,
    },
    PanelMeta {
        dom_id: "energy-treemap",
        heading: "Energy Breakdown (Treemap)",
        blurb: "Hierarchical rectangles sized by each selected source's consumption volume.",
        wide: true,
    },
];

#[component]
pub fn Dashboard() -> Element {
    let table = use_context::<&'static EnergyTable>();
    let selection = use_signal(move || SelectionState::initial(table));

    // The whole pipeline reruns on every control change; descriptors are
    // produced fresh and never cached across recomputations.
    let descriptors = use_memo(move || charts::build_all(table, &selection.read()));

    let panels: Vec<(&'static PanelMeta, ChartDescriptor)> = PANELS
        .iter()
        .zip(descriptors.read().iter().cloned())
        .collect();

    rsx! {
        section { class: "page page-dashboard",
            header { class: "page-dashboard__header",
                h1 { "World Energy Consumption Dashboard" }
                p { "Explore global energy trends, the shift between sources, and the footprint of economic growth." }
            }

            ControlPanel { selection }

            div { class: "dashboard__grid",
                for (meta, descriptor) in panels.into_iter() {
                    ChartPanel {
                        dom_id: meta.dom_id,
                        heading: meta.heading,
                        blurb: meta.blurb,
                        wide: meta.wide,
                        descriptor,
                    }
                }
            }
        }
    }
}

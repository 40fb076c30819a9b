//! The recomputation pipeline: one selection tuple in, eleven chart
//! descriptors out.
//!
//! [`build_all`] filters the table once, fans the subset out to the eleven
//! builders, and collects their descriptors in [`RENDER_ORDER`], the
//! position-significant order the presentation layer binds panels to. Every
//! builder call runs inside a fault boundary: a panic is contained, logged,
//! and converted into a fault-titled fallback descriptor, so one degraded
//! panel can never take the other ten with it. The result always holds
//! exactly eleven entries.

use std::panic::{self, AssertUnwindSafe};

use data::EnergyTable;

use crate::core::selection::SelectionState;

pub mod descriptor;
pub mod map;
pub mod mix;
pub mod relations;
pub mod reshape;
pub mod trends;

pub use descriptor::{
    BuildResult, ChartDescriptor, ChartKind, ColorScale, Fallback, FallbackCause, Figure, Frame,
    LayoutHints, Stacking, Trace,
};

/// Render-target order of the dashboard panels.
pub const RENDER_ORDER: [ChartKind; 11] = [
    ChartKind::Pie,
    ChartKind::Line,
    ChartKind::Heatmap,
    ChartKind::Map,
    ChartKind::MultiLine,
    ChartKind::StackedArea,
    ChartKind::StreamArea,
    ChartKind::Sunburst,
    ChartKind::Scatter,
    ChartKind::Bar,
    ChartKind::Treemap,
];

/// Recompute all eleven descriptors for one selection.
pub fn build_all(table: &EnergyTable, selection: &SelectionState) -> Vec<ChartDescriptor> {
    let (year_min, year_max) = selection.year_range;
    let subset = table.filter(&selection.country, year_min, year_max);
    let country = selection.country.as_str();
    let sources = selection.sources.as_slice();

    RENDER_ORDER
        .iter()
        .map(|&kind| {
            guarded(kind, || match kind {
                ChartKind::Pie => mix::energy_mix_pie(&subset, sources, country),
                ChartKind::Line => trends::primary_energy_line(&subset, country),
                ChartKind::Heatmap => relations::correlation_heatmap(&subset, sources, country),
                ChartKind::Map => map::global_energy_map(table, selection),
                ChartKind::MultiLine => trends::source_trend_lines(&subset, sources, country),
                ChartKind::StackedArea => trends::stacked_area(&subset, sources, country),
                ChartKind::StreamArea => trends::stream_graph(&subset, sources, country),
                ChartKind::Sunburst => mix::energy_mix_sunburst(&subset, sources, country),
                ChartKind::Scatter => relations::gdp_energy_scatter(&subset, country),
                ChartKind::Bar => relations::ghg_emissions_bar(&subset, country),
                ChartKind::Treemap => mix::energy_treemap(&subset, sources, country),
            })
        })
        .collect()
}

/// Fault boundary around a single builder.
fn guarded<F>(kind: ChartKind, build: F) -> ChartDescriptor
where
    F: FnOnce() -> BuildResult,
{
    match panic::catch_unwind(AssertUnwindSafe(build)) {
        Ok(Ok(figure)) => ChartDescriptor::Figure(figure),
        Ok(Err(fallback)) => ChartDescriptor::Fallback(fallback),
        Err(payload) => {
            let detail = panic_detail(payload.as_ref());
            tracing::warn!(chart = ?kind, detail = %detail, "chart builder fault contained");
            ChartDescriptor::Fallback(Fallback::fault(detail))
        }
    }
}

fn panic_detail(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected builder panic".to_string()
    }
}

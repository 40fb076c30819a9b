//! The global energy map.
//!
//! Unlike every other builder, the map reads the full table rather than the
//! country-scoped subset: it is always an all-countries view, and a map
//! narrowed to one selected country would be degenerate. Branching:
//!
//! - base rows are the whole table when animating, else the single map year;
//! - per-capita normalization drops rows with a null population, divides the
//!   metric per row, and nulls out non-finite quotients (zero population);
//! - rows with no metric value or no ISO code cannot be drawn and are
//!   dropped;
//! - the orthographic projection renders as a point globe, every other
//!   projection as a filled choropleth; animation emits one frame per year
//!   that still has data, keyed by year.

use data::{EnergyRecord, EnergyTable, MetricColumn};

use crate::core::format::{format_count, format_number};
use crate::core::selection::{MapProjection, SelectionState};

use super::descriptor::{BuildResult, ChartKind, ColorScale, Fallback, Figure, Frame, Trace};

struct MapRow<'a> {
    iso: &'a str,
    country: &'a str,
    year: i32,
    value: f64,
    gdp: Option<f64>,
    population: Option<f64>,
}

pub fn global_energy_map(table: &EnergyTable, selection: &SelectionState) -> BuildResult {
    let metric = selection.map_metric;
    let per_capita = selection.map_per_capita;
    let animate = selection.map_animate;

    let rows: Vec<MapRow> = table
        .records()
        .iter()
        .filter(|r| animate || r.year == selection.map_year)
        .filter_map(|r| map_row(r, metric, per_capita))
        .collect();

    if rows.is_empty() {
        return Err(Fallback::empty_annotated(
            map_title(selection),
            "No mappable data for this selection",
        ));
    }

    let globe = selection.map_projection == MapProjection::Orthographic;

    let mut figure = Figure::new(ChartKind::Map, map_title(selection));
    figure.layout.projection = Some(selection.map_projection);
    figure.layout.color_scale = Some(if globe {
        ColorScale::Plasma
    } else {
        ColorScale::Sequential
    });

    if animate {
        let mut years: Vec<i32> = rows.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();

        for year in years {
            let frame_rows: Vec<&MapRow> = rows.iter().filter(|r| r.year == year).collect();
            figure.frames.push(Frame {
                year,
                trace: build_trace(&frame_rows, metric, per_capita, globe),
            });
        }
        // The base trace shows the first frame until playback starts.
        if let Some(first) = figure.frames.first() {
            figure.traces.push(first.trace.clone());
        }
    } else {
        let all: Vec<&MapRow> = rows.iter().collect();
        figure.traces.push(build_trace(&all, metric, per_capita, globe));
    }

    Ok(figure)
}

/// Normalize one record into a drawable map row, or drop it.
fn map_row<'a>(
    record: &'a EnergyRecord,
    metric: MetricColumn,
    per_capita: bool,
) -> Option<MapRow<'a>> {
    let iso = record.iso_code.as_deref()?;

    let value = if per_capita {
        let population = record.population?;
        let quotient = metric.value(record)? / population;
        if !quotient.is_finite() {
            return None;
        }
        quotient
    } else {
        metric.value(record)?
    };

    Some(MapRow {
        iso,
        country: &record.country,
        year: record.year,
        value,
        gdp: record.gdp,
        population: record.population,
    })
}

fn build_trace(rows: &[&MapRow], metric: MetricColumn, per_capita: bool, globe: bool) -> Trace {
    let locations: Vec<String> = rows.iter().map(|r| r.iso.to_string()).collect();
    let values: Vec<f64> = rows.iter().map(|r| r.value).collect();
    let label = metric_display(metric, per_capita);

    if globe {
        let hover = rows
            .iter()
            .map(|r| {
                format!(
                    "{}<br>GDP: {}<br>Population: {}<br>{}: {}",
                    r.country,
                    r.gdp.map(format_count).unwrap_or_else(|| "—".to_string()),
                    r.population
                        .map(format_count)
                        .unwrap_or_else(|| "—".to_string()),
                    label,
                    format_number(r.value, 2),
                )
            })
            .collect();
        // Point area tracks the metric; the renderer scales sizeref.
        let sizes = values.clone();
        Trace::GeoPoints {
            locations,
            values,
            sizes,
            hover,
        }
    } else {
        let hover = rows
            .iter()
            .map(|r| format!("{}<br>{}: {}", r.country, label, format_number(r.value, 2)))
            .collect();
        Trace::Choropleth {
            locations,
            values,
            hover,
        }
    }
}

fn metric_display(metric: MetricColumn, per_capita: bool) -> String {
    if per_capita {
        format!("{} Per Capita", metric.label())
    } else {
        metric.label()
    }
}

fn map_title(selection: &SelectionState) -> String {
    let display = metric_display(selection.map_metric, selection.map_per_capita);
    let year_suffix = if selection.map_animate {
        String::new()
    } else {
        format!(" ({})", selection.map_year)
    };

    if selection.map_projection == MapProjection::Orthographic {
        format!("Global {display} - 3D Interactive Globe{year_suffix}")
    } else {
        format!(
            "Global {display} - {} Projection{year_suffix}",
            selection.map_projection.label()
        )
    }
}

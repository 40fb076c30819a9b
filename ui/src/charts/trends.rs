//! Time-series builders: total primary energy line, per-source multi-line,
//! stacked area, and the proportional stream graph.

use data::{EnergyRecord, SourceColumn};

use crate::core::theme;

use super::descriptor::{BuildResult, ChartKind, Fallback, Figure, Stacking, Trace};
use super::reshape::{melt_sources, series_by_source};

const NO_SOURCES: &str = "Select energy sources";
const NO_SOURCE_DATA: &str = "No data available for selected sources";

/// Total primary energy consumption over the selected period.
pub fn primary_energy_line(subset: &[&EnergyRecord], country: &str) -> BuildResult {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for record in subset {
        if let Some(value) = record.primary_energy_consumption {
            x.push(record.year as f64);
            y.push(value);
        }
    }

    if y.is_empty() {
        return Err(Fallback::empty_annotated(
            format!("Total Primary Energy Consumption - {country} (No data available)"),
            "No primary energy consumption data available for selected period",
        ));
    }

    let mut figure = Figure::new(
        ChartKind::Line,
        format!("Total Primary Energy Consumption - {country}"),
    );
    figure.traces.push(Trace::Series {
        name: None,
        x,
        y,
        text: None,
        color: Some(theme::SECONDARY.to_string()),
    });
    figure.layout.x_title = Some("Year".to_string());
    figure.layout.y_title = Some("Energy Consumption (TWh)".to_string());
    figure.layout.y_zero = true;
    Ok(figure)
}

/// One line per selected source.
pub fn source_trend_lines(
    subset: &[&EnergyRecord],
    sources: &[SourceColumn],
    country: &str,
) -> BuildResult {
    let mut figure = melted_series_figure(
        subset,
        sources,
        ChartKind::MultiLine,
        format!("Energy Source Consumption Trends - {country}"),
    )?;
    figure.layout.y_zero = true;
    Ok(figure)
}

/// Absolute contributions stacked on top of each other.
pub fn stacked_area(
    subset: &[&EnergyRecord],
    sources: &[SourceColumn],
    country: &str,
) -> BuildResult {
    let mut figure = melted_series_figure(
        subset,
        sources,
        ChartKind::StackedArea,
        format!("Stacked Energy Consumption - {country}"),
    )?;
    figure.layout.stacking = Some(Stacking::Stacked);
    figure.layout.y_zero = true;
    Ok(figure)
}

/// Relative shares over time. Values are normalized per year so the
/// selected sources sum to 1; years with a non-positive total have no
/// defined fractions and are dropped.
pub fn stream_graph(
    subset: &[&EnergyRecord],
    sources: &[SourceColumn],
    country: &str,
) -> BuildResult {
    if sources.is_empty() {
        return Err(Fallback::selection(NO_SOURCES));
    }

    let melted = melt_sources(subset, sources);
    if melted.is_empty() {
        return Err(Fallback::empty(NO_SOURCE_DATA));
    }

    let mut years: Vec<i32> = melted.iter().map(|p| p.year).collect();
    years.sort_unstable();
    years.dedup();

    let mut totals: Vec<(i32, f64)> = Vec::with_capacity(years.len());
    for &year in &years {
        let total: f64 = melted
            .iter()
            .filter(|p| p.year == year)
            .map(|p| p.value)
            .sum();
        if total > 0.0 {
            totals.push((year, total));
        }
    }

    if totals.is_empty() {
        return Err(Fallback::empty(NO_SOURCE_DATA));
    }

    let mut figure = Figure::new(
        ChartKind::StreamArea,
        format!("Proportional Energy Mix Over Time - {country}"),
    );
    for (index, (source, points)) in series_by_source(&melted, sources).into_iter().enumerate() {
        if points.is_empty() {
            continue;
        }
        let mut x = Vec::new();
        let mut y = Vec::new();
        for (year, value) in points {
            if let Some(&(_, total)) = totals.iter().find(|&&(total_year, _)| total_year == year) {
                x.push(year as f64);
                y.push(value / total);
            }
        }
        if x.is_empty() {
            continue;
        }
        figure.traces.push(Trace::Series {
            name: Some(source.label()),
            x,
            y,
            text: None,
            color: Some(theme::series_color(index).to_string()),
        });
    }

    figure.layout.x_title = Some("Year".to_string());
    figure.layout.y_title = Some("Proportion".to_string());
    figure.layout.legend_horizontal = true;
    figure.layout.percent_y = true;
    figure.layout.stacking = Some(Stacking::Normalized);
    Ok(figure)
}

/// Shared melt→series scaffolding for the multi-line and stacked charts.
fn melted_series_figure(
    subset: &[&EnergyRecord],
    sources: &[SourceColumn],
    kind: ChartKind,
    title: String,
) -> BuildResult {
    if sources.is_empty() {
        return Err(Fallback::selection(NO_SOURCES));
    }

    let melted = melt_sources(subset, sources);
    if melted.is_empty() {
        return Err(Fallback::empty(NO_SOURCE_DATA));
    }

    let mut figure = Figure::new(kind, title);
    for (index, (source, points)) in series_by_source(&melted, sources).into_iter().enumerate() {
        if points.is_empty() {
            continue;
        }
        figure.traces.push(Trace::Series {
            name: Some(source.label()),
            x: points.iter().map(|(year, _)| *year as f64).collect(),
            y: points.iter().map(|(_, value)| *value).collect(),
            text: None,
            color: Some(theme::series_color(index).to_string()),
        });
    }

    figure.layout.x_title = Some("Year".to_string());
    figure.layout.y_title = Some("Consumption (TWh)".to_string());
    figure.layout.legend_horizontal = true;
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::descriptor::FallbackCause;

    fn row(year: i32, primary: Option<f64>, coal: Option<f64>, solar: Option<f64>) -> EnergyRecord {
        EnergyRecord {
            country: "World".to_string(),
            year,
            primary_energy_consumption: primary,
            coal_consumption: coal,
            solar_consumption: solar,
            ..EnergyRecord::default()
        }
    }

    const PAIR: [SourceColumn; 2] = [SourceColumn::Coal, SourceColumn::Solar];

    #[test]
    fn line_collects_non_null_pairs_in_order() {
        let rows = [
            row(2000, Some(100.0), None, None),
            row(2001, None, None, None),
            row(2002, Some(120.0), None, None),
        ];
        let subset: Vec<&EnergyRecord> = rows.iter().collect();
        let figure = primary_energy_line(&subset, "World").unwrap();

        match &figure.traces[0] {
            Trace::Series { x, y, .. } => {
                assert_eq!(x, &[2000.0, 2002.0]);
                assert_eq!(y, &[100.0, 120.0]);
            }
            other => panic!("expected series trace, got {other:?}"),
        }
        assert!(figure.layout.y_zero);
    }

    #[test]
    fn line_with_no_data_is_annotated_empty() {
        let rows = [row(2000, None, None, None)];
        let subset: Vec<&EnergyRecord> = rows.iter().collect();
        let fallback = primary_energy_line(&subset, "World").unwrap_err();
        assert_eq!(fallback.cause, FallbackCause::Empty);
        assert!(fallback.note.is_some());
    }

    #[test]
    fn multiline_builds_one_series_per_source() {
        let rows = [
            row(2000, None, Some(10.0), None),
            row(2001, None, Some(12.0), Some(1.0)),
        ];
        let subset: Vec<&EnergyRecord> = rows.iter().collect();
        let figure = source_trend_lines(&subset, &PAIR, "World").unwrap();

        assert_eq!(figure.traces.len(), 2);
        match &figure.traces[1] {
            Trace::Series { name, x, y, .. } => {
                assert_eq!(name.as_deref(), Some("Solar"));
                assert_eq!(x, &[2001.0]);
                assert_eq!(y, &[1.0]);
            }
            other => panic!("expected series trace, got {other:?}"),
        }
        assert!(figure.layout.legend_horizontal);
    }

    #[test]
    fn multiline_without_sources_or_data_falls_back() {
        let rows = [row(2000, None, None, None)];
        let subset: Vec<&EnergyRecord> = rows.iter().collect();
        assert_eq!(
            source_trend_lines(&subset, &[], "World")
                .unwrap_err()
                .cause,
            FallbackCause::Selection
        );
        assert_eq!(
            source_trend_lines(&subset, &PAIR, "World")
                .unwrap_err()
                .cause,
            FallbackCause::Empty
        );
    }

    #[test]
    fn stream_proportions_sum_to_one_per_year() {
        let rows = [
            row(2000, None, Some(30.0), Some(10.0)),
            row(2001, None, Some(50.0), Some(50.0)),
        ];
        let subset: Vec<&EnergyRecord> = rows.iter().collect();
        let figure = stream_graph(&subset, &PAIR, "World").unwrap();

        for year in [2000.0, 2001.0] {
            let mut sum = 0.0;
            for trace in &figure.traces {
                if let Trace::Series { x, y, .. } = trace {
                    for (xi, yi) in x.iter().zip(y) {
                        if *xi == year {
                            sum += yi;
                        }
                    }
                }
            }
            assert!((sum - 1.0).abs() < 1e-12, "year {year} sums to {sum}");
        }
        assert_eq!(figure.layout.stacking, Some(Stacking::Normalized));
        assert!(figure.layout.percent_y);
    }

    #[test]
    fn stream_drops_years_without_a_positive_total() {
        let rows = [
            row(2000, None, Some(0.0), Some(0.0)),
            row(2001, None, Some(40.0), Some(60.0)),
        ];
        let subset: Vec<&EnergyRecord> = rows.iter().collect();
        let figure = stream_graph(&subset, &PAIR, "World").unwrap();

        for trace in &figure.traces {
            if let Trace::Series { x, .. } = trace {
                assert!(!x.contains(&2000.0));
            }
        }
    }

    #[test]
    fn stacked_area_carries_the_stacking_hint() {
        let rows = [row(2000, None, Some(5.0), Some(5.0))];
        let subset: Vec<&EnergyRecord> = rows.iter().collect();
        let figure = stacked_area(&subset, &PAIR, "World").unwrap();
        assert_eq!(figure.layout.stacking, Some(Stacking::Stacked));
        assert_eq!(figure.kind, ChartKind::StackedArea);
    }
}

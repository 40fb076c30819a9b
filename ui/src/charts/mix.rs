//! Part-to-whole builders: pie, sunburst, treemap.

use data::{EnergyRecord, SourceColumn};

use super::descriptor::{BuildResult, ChartKind, Fallback, Figure, Trace};
use super::reshape::{latest_year, melt_sources, row_at_year};

const NO_SOURCES: &str = "Select at least one energy source";

/// Energy mix for the latest year in the subset.
pub fn energy_mix_pie(
    subset: &[&EnergyRecord],
    sources: &[SourceColumn],
    country: &str,
) -> BuildResult {
    if sources.is_empty() {
        return Err(Fallback::selection(NO_SOURCES));
    }

    let year = latest_year(subset).ok_or_else(|| Fallback::empty("No data available"))?;
    let row = row_at_year(subset, year).ok_or_else(|| Fallback::empty("No data available"))?;

    let mut labels = Vec::new();
    let mut values = Vec::new();
    for &source in sources {
        if let Some(value) = source.value(row) {
            labels.push(source.label());
            values.push(value);
        }
    }

    if values.is_empty() {
        return Err(Fallback::empty("No data available"));
    }

    let mut figure = Figure::new(ChartKind::Pie, format!("Energy Mix for {country} ({year})"));
    figure.traces.push(Trace::Pie { labels, values });
    Ok(figure)
}

/// Radial part-to-whole view of the latest-year mix: a single "Total
/// Energy" root with one child per selected source.
pub fn energy_mix_sunburst(
    subset: &[&EnergyRecord],
    sources: &[SourceColumn],
    country: &str,
) -> BuildResult {
    if sources.is_empty() {
        return Err(Fallback::selection(NO_SOURCES));
    }

    let year = latest_year(subset).ok_or_else(|| Fallback::empty("No data available"))?;
    let row = row_at_year(subset, year).ok_or_else(|| Fallback::empty("No data available"))?;

    const ROOT: &str = "Total Energy";
    let mut labels = vec![ROOT.to_string()];
    let mut parents = vec![String::new()];
    let mut values = vec![0.0];

    for &source in sources {
        if let Some(value) = source.value(row) {
            labels.push(source.label());
            parents.push(ROOT.to_string());
            values.push(value);
            values[0] += value;
        }
    }

    if labels.len() == 1 {
        return Err(Fallback::empty("No data available"));
    }

    let mut figure = Figure::new(
        ChartKind::Sunburst,
        format!("Energy Mix Sunburst - {country} ({year})"),
    );
    figure.traces.push(Trace::Hierarchy {
        labels,
        parents,
        values,
    });
    Ok(figure)
}

/// Hierarchical breakdown over the whole year range: per-source totals
/// (positive values only) under a root named after the country.
pub fn energy_treemap(
    subset: &[&EnergyRecord],
    sources: &[SourceColumn],
    country: &str,
) -> BuildResult {
    if sources.is_empty() {
        return Err(Fallback::selection(NO_SOURCES));
    }

    let melted = melt_sources(subset, sources);

    let mut labels = vec![country.to_string()];
    let mut parents = vec![String::new()];
    let mut values = vec![0.0];

    for &source in sources {
        let total: f64 = melted
            .iter()
            .filter(|p| p.source == source && p.value > 0.0)
            .map(|p| p.value)
            .sum();
        if total > 0.0 {
            labels.push(source.label());
            parents.push(country.to_string());
            values.push(total);
            values[0] += total;
        }
    }

    if labels.len() == 1 {
        return Err(Fallback::empty("No data available for selected sources"));
    }

    let mut figure = Figure::new(
        ChartKind::Treemap,
        format!("Energy Consumption Treemap - {country}"),
    );
    figure.traces.push(Trace::Hierarchy {
        labels,
        parents,
        values,
    });
    Ok(figure)
}

//! Relationship builders: source correlation heatmap, GDP-vs-energy
//! scatter, and the greenhouse-gas bar chart.

use data::{EnergyRecord, SourceColumn};

use crate::core::theme;

use super::descriptor::{BuildResult, ChartKind, ColorScale, Fallback, Figure, Trace};
use super::reshape::pearson;

/// Pairwise Pearson correlations between the selected sources, computed
/// over rows complete in every selected column.
pub fn correlation_heatmap(
    subset: &[&EnergyRecord],
    sources: &[SourceColumn],
    country: &str,
) -> BuildResult {
    if sources.len() < 2 {
        return Err(Fallback::selection("Select at least two energy sources"));
    }

    // Complete-case samples: a row enters only when all selected columns
    // are present, so every pair correlates over the same observations.
    let mut samples: Vec<Vec<f64>> = vec![Vec::new(); sources.len()];
    'rows: for record in subset {
        let mut row_values = Vec::with_capacity(sources.len());
        for &source in sources {
            match source.value(record) {
                Some(value) => row_values.push(value),
                None => continue 'rows,
            }
        }
        for (sample, value) in samples.iter_mut().zip(row_values) {
            sample.push(value);
        }
    }

    if samples[0].len() < 2 {
        return Err(Fallback::empty("Insufficient data for correlation analysis"));
    }

    let labels: Vec<String> = sources.iter().map(|s| s.label()).collect();
    let z: Vec<Vec<Option<f64>>> = samples
        .iter()
        .map(|row_sample| {
            samples
                .iter()
                .map(|col_sample| pearson(row_sample, col_sample))
                .collect()
        })
        .collect();

    let mut figure = Figure::new(
        ChartKind::Heatmap,
        format!("Energy Source Correlation Matrix - {country}"),
    );
    figure.traces.push(Trace::Heatmap {
        x: labels.clone(),
        y: labels,
        z,
    });
    figure.layout.x_title = Some("Energy Source".to_string());
    figure.layout.y_title = Some("Energy Source".to_string());
    figure.layout.color_scale = Some(ColorScale::Diverging);
    Ok(figure)
}

/// GDP against primary energy, one point per year with complete data.
pub fn gdp_energy_scatter(subset: &[&EnergyRecord], country: &str) -> BuildResult {
    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut text = Vec::new();
    for record in subset {
        if let (Some(gdp), Some(energy)) = (record.gdp, record.primary_energy_consumption) {
            x.push(gdp);
            y.push(energy);
            text.push(record.year.to_string());
        }
    }

    if x.is_empty() {
        return Err(Fallback::empty_annotated(
            format!("GDP vs. Energy Consumption - {country}"),
            "No GDP or energy data available for selected period",
        ));
    }

    let points = x.len();
    let mut figure = Figure::new(
        ChartKind::Scatter,
        format!("GDP vs. Energy Consumption - {country} ({points} data points)"),
    );
    figure.traces.push(Trace::Series {
        name: None,
        x,
        y,
        text: Some(text),
        color: Some(theme::SECONDARY.to_string()),
    });
    figure.layout.x_title = Some("GDP ($)".to_string());
    figure.layout.y_title = Some("Energy Consumption (TWh)".to_string());
    figure.layout.x_zero = true;
    figure.layout.y_zero = true;
    Ok(figure)
}

/// Annual greenhouse-gas emissions bars.
pub fn ghg_emissions_bar(subset: &[&EnergyRecord], country: &str) -> BuildResult {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for record in subset {
        if let Some(value) = record.greenhouse_gas_emissions {
            x.push(record.year as f64);
            y.push(value);
        }
    }

    if y.is_empty() {
        return Err(Fallback::empty_annotated(
            format!("Greenhouse Gas Emissions - {country} (No data available)"),
            "No greenhouse gas emissions data available for selected period",
        ));
    }

    let mut figure = Figure::new(
        ChartKind::Bar,
        format!("Greenhouse Gas Emissions - {country}"),
    );
    figure.traces.push(Trace::Series {
        name: None,
        x,
        y,
        text: None,
        color: Some(theme::ACCENT.to_string()),
    });
    figure.layout.x_title = Some("Year".to_string());
    figure.layout.y_title = Some("GHG Emissions (Million Tonnes CO2)".to_string());
    figure.layout.y_zero = true;
    Ok(figure)
}

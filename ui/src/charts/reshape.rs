//! Wide→long reshape and small statistics shared by the chart builders.
//!
//! Five builders (multi-line, stacked area, stream, sunburst, treemap) melt
//! the selected source columns into long rows. The semantics live here once:
//! a row missing one source still contributes its other sources, because
//! nulls are dropped per-source, never per-row.

use data::{EnergyRecord, SourceColumn};

/// One melted observation: a (year, source, value) triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeltedPoint {
    pub year: i32,
    pub source: SourceColumn,
    pub value: f64,
}

/// Melt the selected source columns of a subset into long rows, dropping
/// null cells per-source. Output preserves row order, then selection order
/// within a row.
pub fn melt_sources(subset: &[&EnergyRecord], sources: &[SourceColumn]) -> Vec<MeltedPoint> {
    let mut melted = Vec::new();
    for record in subset {
        for &source in sources {
            if let Some(value) = source.value(record) {
                melted.push(MeltedPoint {
                    year: record.year,
                    source,
                    value,
                });
            }
        }
    }
    melted
}

/// Regroup melted points into one (year, value) series per source, in
/// selection order, each series ascending by year.
pub fn series_by_source(
    melted: &[MeltedPoint],
    sources: &[SourceColumn],
) -> Vec<(SourceColumn, Vec<(i32, f64)>)> {
    sources
        .iter()
        .map(|&source| {
            let mut points: Vec<(i32, f64)> = melted
                .iter()
                .filter(|p| p.source == source)
                .map(|p| (p.year, p.value))
                .collect();
            points.sort_by_key(|(year, _)| *year);
            (source, points)
        })
        .collect()
}

/// Latest year present in a subset.
pub fn latest_year(subset: &[&EnergyRecord]) -> Option<i32> {
    subset.iter().map(|r| r.year).max()
}

/// First row at the given year.
pub fn row_at_year<'a>(subset: &[&'a EnergyRecord], year: i32) -> Option<&'a EnergyRecord> {
    subset.iter().find(|r| r.year == year).copied()
}

/// Pearson correlation coefficient of two equal-length samples, or `None`
/// when either sample has no variance or fewer than two observations.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }

    let mean_x = xs[..n].iter().sum::<f64>() / n as f64;
    let mean_y = ys[..n].iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = xs[i] - mean_x;
        let dy = ys[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return None;
    }

    Some(cov / denom)
}

//! The energy dataset: one record per (country, year), plus the read-only
//! table the whole dashboard computes from.

use serde::{Deserialize, Serialize};

/// One dataset row. `None` means the value is missing or unknown for that
/// country/year; `country == "World"` is a synthetic aggregate present for
/// every year.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyRecord {
    pub country: String,
    pub iso_code: Option<String>,
    pub year: i32,
    pub primary_energy_consumption: Option<f64>,
    pub gdp: Option<f64>,
    pub population: Option<f64>,
    pub greenhouse_gas_emissions: Option<f64>,
    pub coal_consumption: Option<f64>,
    pub oil_consumption: Option<f64>,
    pub gas_consumption: Option<f64>,
    pub nuclear_consumption: Option<f64>,
    pub hydro_consumption: Option<f64>,
    pub solar_consumption: Option<f64>,
    pub wind_consumption: Option<f64>,
    pub biofuel_consumption: Option<f64>,
    pub other_renewable_consumption: Option<f64>,
    pub renewables_consumption: Option<f64>,
}

/// Immutable in-memory table. Constructed once by the loader (or by tests
/// from synthetic records) and shared read-only with every chart builder.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EnergyTable {
    records: Vec<EnergyRecord>,
}

impl EnergyTable {
    pub fn new(records: Vec<EnergyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[EnergyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The filter engine: exact country match, inclusive year range.
    /// An unmatched country yields an empty subset, never an error.
    pub fn filter(&self, country: &str, year_min: i32, year_max: i32) -> Vec<&EnergyRecord> {
        self.records
            .iter()
            .filter(|r| r.country == country && r.year >= year_min && r.year <= year_max)
            .collect()
    }

    /// Min and max year across the whole table, or `None` when empty.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let mut years = self.records.iter().map(|r| r.year);
        let first = years.next()?;
        let bounds = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
        Some(bounds)
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Distinct country names in first-appearance order, for the country
    /// dropdown.
    pub fn countries(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.country.as_str()) {
                seen.push(record.country.as_str());
            }
        }
        seen
    }
}

//! Fixed column enumerations and the label normalizer.
//!
//! The dashboard exposes two enumerated column surfaces: the nine-source
//! checklist shared by the mix/trend charts, and the nine-metric dropdown
//! for the map (which adds the renewables aggregate and total primary
//! energy in place of biofuel/other-renewable).

use crate::record::EnergyRecord;

/// Energy-source columns selectable in the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceColumn {
    Coal,
    Oil,
    Gas,
    Nuclear,
    Hydro,
    Solar,
    Wind,
    Biofuel,
    OtherRenewable,
}

impl SourceColumn {
    /// Checklist order, matching the dataset column order.
    pub const ALL: [SourceColumn; 9] = [
        SourceColumn::Coal,
        SourceColumn::Oil,
        SourceColumn::Gas,
        SourceColumn::Nuclear,
        SourceColumn::Hydro,
        SourceColumn::Solar,
        SourceColumn::Wind,
        SourceColumn::Biofuel,
        SourceColumn::OtherRenewable,
    ];

    /// Raw dataset column identifier.
    pub fn id(self) -> &'static str {
        match self {
            SourceColumn::Coal => "coal_consumption",
            SourceColumn::Oil => "oil_consumption",
            SourceColumn::Gas => "gas_consumption",
            SourceColumn::Nuclear => "nuclear_consumption",
            SourceColumn::Hydro => "hydro_consumption",
            SourceColumn::Solar => "solar_consumption",
            SourceColumn::Wind => "wind_consumption",
            SourceColumn::Biofuel => "biofuel_consumption",
            SourceColumn::OtherRenewable => "other_renewable_consumption",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Human-readable label, e.g. `Other Renewable`.
    pub fn label(self) -> String {
        normalize_label(self.id())
    }

    pub fn value(self, record: &EnergyRecord) -> Option<f64> {
        match self {
            SourceColumn::Coal => record.coal_consumption,
            SourceColumn::Oil => record.oil_consumption,
            SourceColumn::Gas => record.gas_consumption,
            SourceColumn::Nuclear => record.nuclear_consumption,
            SourceColumn::Hydro => record.hydro_consumption,
            SourceColumn::Solar => record.solar_consumption,
            SourceColumn::Wind => record.wind_consumption,
            SourceColumn::Biofuel => record.biofuel_consumption,
            SourceColumn::OtherRenewable => record.other_renewable_consumption,
        }
    }
}

/// Metric columns selectable for the global map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricColumn {
    PrimaryEnergy,
    Coal,
    Oil,
    Gas,
    Nuclear,
    Hydro,
    Solar,
    Wind,
    RenewablesTotal,
}

impl MetricColumn {
    /// Dropdown order.
    pub const ALL: [MetricColumn; 9] = [
        MetricColumn::PrimaryEnergy,
        MetricColumn::Coal,
        MetricColumn::Oil,
        MetricColumn::Gas,
        MetricColumn::Nuclear,
        MetricColumn::Hydro,
        MetricColumn::Solar,
        MetricColumn::Wind,
        MetricColumn::RenewablesTotal,
    ];

    pub fn id(self) -> &'static str {
        match self {
            MetricColumn::PrimaryEnergy => "primary_energy_consumption",
            MetricColumn::Coal => "coal_consumption",
            MetricColumn::Oil => "oil_consumption",
            MetricColumn::Gas => "gas_consumption",
            MetricColumn::Nuclear => "nuclear_consumption",
            MetricColumn::Hydro => "hydro_consumption",
            MetricColumn::Solar => "solar_consumption",
            MetricColumn::Wind => "wind_consumption",
            MetricColumn::RenewablesTotal => "renewables_consumption",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn label(self) -> String {
        normalize_label(self.id())
    }

    pub fn value(self, record: &EnergyRecord) -> Option<f64> {
        match self {
            MetricColumn::PrimaryEnergy => record.primary_energy_consumption,
            MetricColumn::Coal => record.coal_consumption,
            MetricColumn::Oil => record.oil_consumption,
            MetricColumn::Gas => record.gas_consumption,
            MetricColumn::Nuclear => record.nuclear_consumption,
            MetricColumn::Hydro => record.hydro_consumption,
            MetricColumn::Solar => record.solar_consumption,
            MetricColumn::Wind => record.wind_consumption,
            MetricColumn::RenewablesTotal => record.renewables_consumption,
        }
    }
}

/// Turn a raw column identifier into a display label: strip the
/// `_consumption` suffix, replace underscores with spaces, title-case each
/// word. Total over the fixed column set.
pub fn normalize_label(column_id: &str) -> String {
    let stem = column_id.strip_suffix("_consumption").unwrap_or(column_id);
    stem.split('_')
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_suffix_and_title_cases() {
        assert_eq!(normalize_label("gas_consumption"), "Gas");
        assert_eq!(
            normalize_label("other_renewable_consumption"),
            "Other Renewable"
        );
        assert_eq!(
            normalize_label("primary_energy_consumption"),
            "Primary Energy"
        );
        assert_eq!(normalize_label("renewables_consumption"), "Renewables");
    }

    #[test]
    fn normalize_is_total_over_both_column_sets() {
        for source in SourceColumn::ALL {
            assert!(!source.label().is_empty());
        }
        for metric in MetricColumn::ALL {
            assert!(!metric.label().is_empty());
        }
    }

    #[test]
    fn ids_round_trip() {
        for source in SourceColumn::ALL {
            assert_eq!(SourceColumn::from_id(source.id()), Some(source));
        }
        for metric in MetricColumn::ALL {
            assert_eq!(MetricColumn::from_id(metric.id()), Some(metric));
        }
        assert_eq!(SourceColumn::from_id("plutonium_consumption"), None);
    }

    #[test]
    fn source_and_metric_read_the_right_field() {
        let record = EnergyRecord {
            gas_consumption: Some(12.5),
            renewables_consumption: Some(7.0),
            ..EnergyRecord::default()
        };
        assert_eq!(SourceColumn::Gas.value(&record), Some(12.5));
        assert_eq!(SourceColumn::Coal.value(&record), None);
        assert_eq!(MetricColumn::RenewablesTotal.value(&record), Some(7.0));
    }
}

//! CSV loader for the energy dataset.
//!
//! The table is assumed validated upstream (one row per country/year,
//! numeric columns numeric); the loader only maps rows into typed records.
//! Empty fields deserialize to `None`.

use std::path::Path;

use crate::record::{EnergyRecord, EnergyTable};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset row: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset contains no rows")]
    Empty,
}

/// Parse a CSV document (with headers) into an [`EnergyTable`].
pub fn load_from_str(csv_text: &str) -> Result<EnergyTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_text.as_bytes());

    let mut records = Vec::new();
    for row in reader.deserialize::<EnergyRecord>() {
        records.push(row?);
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }

    tracing::debug!(rows = records.len(), "energy dataset loaded");
    Ok(EnergyTable::new(records))
}

/// Read and parse a CSV file from disk.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<EnergyTable, LoadError> {
    let text = std::fs::read_to_string(path)?;
    load_from_str(&text)
}

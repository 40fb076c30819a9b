//! Dataset crate for Wattlace: typed energy records, the in-memory table,
//! the fixed column enumerations, and the CSV loader.

pub mod columns;
pub mod loader;
pub mod record;

pub use columns::{normalize_label, MetricColumn, SourceColumn};
pub use loader::{load_from_path, load_from_str, LoadError};
pub use record::{EnergyRecord, EnergyTable};

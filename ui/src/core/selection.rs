//! The selection tuple driving a single recomputation.
//!
//! A `SelectionState` is created fresh on every control change and discarded
//! once the charts are produced; it has no identity and no history. Builders
//! receive it by reference and must not mutate it.

use data::{EnergyTable, MetricColumn, SourceColumn};
use serde::Serialize;

/// Map projections the presentation layer can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MapProjection {
    #[serde(rename = "natural earth")]
    NaturalEarth,
    #[serde(rename = "orthographic")]
    Orthographic,
    #[serde(rename = "equirectangular")]
    Equirectangular,
    #[serde(rename = "robinson")]
    Robinson,
    #[serde(rename = "mercator")]
    Mercator,
}

impl MapProjection {
    /// Dropdown order.
    pub const ALL: [MapProjection; 5] = [
        MapProjection::NaturalEarth,
        MapProjection::Orthographic,
        MapProjection::Equirectangular,
        MapProjection::Robinson,
        MapProjection::Mercator,
    ];

    /// Identifier as the renderer expects it.
    pub fn id(self) -> &'static str {
        match self {
            MapProjection::NaturalEarth => "natural earth",
            MapProjection::Orthographic => "orthographic",
            MapProjection::Equirectangular => "equirectangular",
            MapProjection::Robinson => "robinson",
            MapProjection::Mercator => "mercator",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    /// Title-cased display name ("Natural Earth").
    pub fn label(self) -> &'static str {
        match self {
            MapProjection::NaturalEarth => "Natural Earth",
            MapProjection::Orthographic => "Orthographic",
            MapProjection::Equirectangular => "Equirectangular",
            MapProjection::Robinson => "Robinson",
            MapProjection::Mercator => "Mercator",
        }
    }
}

/// The full parameter tuple, always supplied whole.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub country: String,
    /// Inclusive (min, max), min ≤ max, both within table bounds.
    pub year_range: (i32, i32),
    /// 0–9 distinct sources, checklist order.
    pub sources: Vec<SourceColumn>,
    pub map_metric: MetricColumn,
    pub map_projection: MapProjection,
    pub map_per_capita: bool,
    pub map_year: i32,
    pub map_animate: bool,
}

impl SelectionState {
    /// The dashboard's starting selection: World over the full year range
    /// with the three fossil sources checked, primary energy on a natural
    /// earth map at the latest year.
    pub fn initial(table: &EnergyTable) -> Self {
        let (year_min, year_max) = table.year_bounds().unwrap_or((0, 0));
        Self {
            country: "World".to_string(),
            year_range: (year_min, year_max),
            sources: vec![SourceColumn::Coal, SourceColumn::Oil, SourceColumn::Gas],
            map_metric: MetricColumn::PrimaryEnergy,
            map_projection: MapProjection::NaturalEarth,
            map_per_capita: false,
            map_year: year_max,
            map_animate: false,
        }
    }

    pub fn has_source(&self, source: SourceColumn) -> bool {
        self.sources.contains(&source)
    }

    /// Add or remove a source, keeping checklist order.
    pub fn toggle_source(&mut self, source: SourceColumn) {
        if self.has_source(source) {
            self.sources.retain(|s| *s != source);
        } else {
            let picked: Vec<SourceColumn> = SourceColumn::ALL
                .into_iter()
                .filter(|s| *s == source || self.sources.contains(s))
                .collect();
            self.sources = picked;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data::EnergyRecord;

    fn table() -> EnergyTable {
        EnergyTable::new(
            (1990..=2020)
                .map(|year| EnergyRecord {
                    country: "World".to_string(),
                    year,
                    ..EnergyRecord::default()
                })
                .collect(),
        )
    }

    #[test]
    fn initial_selection_spans_the_table() {
        let selection = SelectionState::initial(&table());
        assert_eq!(selection.country, "World");
        assert_eq!(selection.year_range, (1990, 2020));
        assert_eq!(selection.map_year, 2020);
        assert_eq!(selection.sources.len(), 3);
    }

    #[test]
    fn toggle_source_keeps_checklist_order() {
        let mut selection = SelectionState::initial(&table());
        selection.toggle_source(SourceColumn::Coal);
        assert!(!selection.has_source(SourceColumn::Coal));

        selection.toggle_source(SourceColumn::Coal);
        assert_eq!(selection.sources[0], SourceColumn::Coal);

        selection.toggle_source(SourceColumn::Wind);
        assert_eq!(
            selection.sources,
            vec![
                SourceColumn::Coal,
                SourceColumn::Oil,
                SourceColumn::Gas,
                SourceColumn::Wind
            ]
        );
    }

    #[test]
    fn projection_ids_round_trip() {
        for projection in MapProjection::ALL {
            assert_eq!(MapProjection::from_id(projection.id()), Some(projection));
        }
        assert_eq!(MapProjection::from_id("azimuthal"), None);
    }
}

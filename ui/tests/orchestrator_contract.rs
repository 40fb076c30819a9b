//! Contract tests for the recomputation pipeline: exactly eleven
//! descriptors, fixed order, contained failures, and the map's deliberate
//! indifference to the country selector.

use data::{EnergyRecord, EnergyTable, MetricColumn, SourceColumn};
use ui::charts::{self, ChartDescriptor, ChartKind, FallbackCause, Trace, RENDER_ORDER};
use ui::core::selection::{MapProjection, SelectionState};

fn record(country: &str, iso: &str, year: i32) -> EnergyRecord {
    let t = (year - 1950) as f64;
    EnergyRecord {
        country: country.to_string(),
        iso_code: Some(iso.to_string()),
        year,
        primary_energy_consumption: Some(1000.0 + 10.0 * t),
        gdp: Some(1.0e12 + 2.0e10 * t),
        population: Some(1.0e8 + 5.0e5 * t),
        greenhouse_gas_emissions: Some(300.0 + t),
        coal_consumption: Some(400.0 + 2.0 * t),
        oil_consumption: Some(300.0 + 3.0 * t),
        gas_consumption: Some(200.0 + 4.0 * t),
        hydro_consumption: Some(100.0 + t),
        ..EnergyRecord::default()
    }
}

fn table() -> EnergyTable {
    let mut records = Vec::new();
    for year in 1950..=2020 {
        records.push(record("World", "OWID_WRL", year));
        records.push(record("Iceland", "ISL", year));
    }
    EnergyTable::new(records)
}

fn selection(table: &EnergyTable) -> SelectionState {
    SelectionState::initial(table)
}

#[test]
fn build_all_returns_eleven_descriptors_in_render_order() {
    let table = table();
    let descriptors = charts::build_all(&table, &selection(&table));

    assert_eq!(descriptors.len(), 11);
    for (descriptor, expected) in descriptors.iter().zip(RENDER_ORDER) {
        let figure = descriptor
            .as_figure()
            .unwrap_or_else(|| panic!("expected a figure for {expected:?}"));
        assert_eq!(figure.kind, expected);
    }
}

#[test]
fn degenerate_selection_still_yields_eleven_descriptors() {
    let table = table();
    let mut sel = selection(&table);
    sel.country = "Atlantis".to_string();
    sel.sources.clear();
    sel.map_year = 1800; // outside the table

    let descriptors = charts::build_all(&table, &sel);
    assert_eq!(descriptors.len(), 11);

    // Country-scoped builders see an empty subset, the checklist is empty,
    // and the map year matches nothing: every panel degrades gracefully.
    for descriptor in &descriptors {
        let fallback = descriptor.as_fallback().expect("all panels fall back");
        assert!(fallback.is_empty);
        assert_ne!(fallback.cause, FallbackCause::Fault);
    }
}

#[test]
fn map_ignores_the_country_selector() {
    let table = table();
    let mut sel = selection(&table);
    sel.country = "Iceland".to_string();

    let descriptors = charts::build_all(&table, &sel);
    let map = descriptors[3].as_figure().expect("map renders");

    match &map.traces[0] {
        Trace::Choropleth { locations, .. } => {
            assert!(locations.contains(&"OWID_WRL".to_string()));
            assert!(locations.contains(&"ISL".to_string()));
        }
        other => panic!("expected choropleth trace, got {other:?}"),
    }
}

#[test]
fn end_to_end_coal_only_world_scenario() {
    let table = table();
    let sel = SelectionState {
        country: "World".to_string(),
        year_range: (1950, 2020),
        sources: vec![SourceColumn::Coal],
        map_metric: MetricColumn::PrimaryEnergy,
        map_projection: MapProjection::NaturalEarth,
        map_per_capita: false,
        map_year: 2020,
        map_animate: false,
    };

    let descriptors = charts::build_all(&table, &sel);

    // Pie: a single coal slice carrying the raw 2020 value.
    let pie = descriptors[0].as_figure().expect("pie renders");
    match &pie.traces[0] {
        Trace::Pie { labels, values } => {
            assert_eq!(labels, &["Coal"]);
            assert_eq!(values, &[400.0 + 2.0 * 70.0]);
        }
        other => panic!("expected pie trace, got {other:?}"),
    }

    // Line: spans the full range with retrievable (year, value) pairs.
    let line = descriptors[1].as_figure().expect("line renders");
    match &line.traces[0] {
        Trace::Series { x, y, .. } => {
            assert_eq!(x.first(), Some(&1950.0));
            assert_eq!(x.last(), Some(&2020.0));
            assert_eq!(x.len(), 71);
            assert_eq!(y.len(), 71);
        }
        other => panic!("expected series trace, got {other:?}"),
    }

    // Heatmap: one source selected, so it prompts for a second.
    let heatmap = descriptors[2].as_fallback().expect("heatmap falls back");
    assert_eq!(heatmap.cause, FallbackCause::Selection);

    // Map: single-frame choropleth titled for the map year.
    let map = descriptors[3].as_figure().expect("map renders");
    assert_eq!(map.kind, ChartKind::Map);
    assert!(map.frames.is_empty());
    assert!(map.title.contains("(2020)"));

    match &descriptors[10] {
        ChartDescriptor::Figure(treemap) => assert_eq!(treemap.kind, ChartKind::Treemap),
        other => panic!("expected treemap figure, got {other:?}"),
    }
}

#[test]
fn animated_per_capita_map_composes_both_modifiers() {
    let table = table();
    let mut sel = selection(&table);
    sel.map_per_capita = true;
    sel.map_animate = true;
    sel.map_metric = MetricColumn::Gas;

    let descriptors = charts::build_all(&table, &sel);
    let map = descriptors[3].as_figure().expect("map renders");

    assert_eq!(map.frames.len(), 71);
    assert!(map.title.contains("Gas Per Capita"));
    assert!(!map.title.contains("(2020)"));
}

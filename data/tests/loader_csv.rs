//! Loader round-trip against a small in-line CSV extract.

use data::{load_from_str, LoadError, SourceColumn};

const SAMPLE: &str = "\
country,iso_code,year,primary_energy_consumption,gdp,population,greenhouse_gas_emissions,coal_consumption,oil_consumption,gas_consumption,nuclear_consumption,hydro_consumption,solar_consumption,wind_consumption,biofuel_consumption,other_renewable_consumption,renewables_consumption
World,OWID_WRL,2019,158839.0,121000000000000,7713468100,49758.2,43849.0,53620.0,39292.0,2796.0,4222.0,724.0,1429.0,1143.0,652.0,8170.0
World,OWID_WRL,2020,153595.4,,7794798739,47513.2,42062.0,50555.0,38774.0,2700.0,4355.0,856.0,1591.0,1102.0,668.0,8572.0
Iceland,ISL,2020,53.5,20000000000,366425,4.6,0.9,8.1,,,13.2,,,0.0,5.7,18.9
";

#[test]
fn parses_rows_with_missing_values_as_none() {
    let table = load_from_str(SAMPLE).expect("sample parses");
    assert_eq!(table.len(), 3);

    let world_2020 = &table.records()[1];
    assert_eq!(world_2020.country, "World");
    assert_eq!(world_2020.iso_code.as_deref(), Some("OWID_WRL"));
    assert_eq!(world_2020.year, 2020);
    assert_eq!(world_2020.gdp, None);
    assert_eq!(world_2020.primary_energy_consumption, Some(153595.4));

    let iceland = &table.records()[2];
    assert_eq!(iceland.gas_consumption, None);
    assert_eq!(iceland.nuclear_consumption, None);
    assert_eq!(SourceColumn::Hydro.value(iceland), Some(13.2));
    assert_eq!(iceland.biofuel_consumption, Some(0.0));
}

#[test]
fn table_accessors_reflect_loaded_rows() {
    let table = load_from_str(SAMPLE).expect("sample parses");
    assert_eq!(table.year_bounds(), Some((2019, 2020)));
    assert_eq!(table.countries(), vec!["World", "Iceland"]);
    assert_eq!(table.filter("World", 2020, 2020).len(), 1);
}

#[test]
fn empty_document_is_an_error() {
    let header_only = SAMPLE.lines().next().unwrap().to_string();
    assert!(matches!(
        load_from_str(&header_only),
        Err(LoadError::Empty)
    ));
}

use dioxus::prelude::*;

use data::{EnergyTable, MetricColumn, SourceColumn};

use crate::core::selection::{MapProjection, SelectionState};

/// The control panel: country, year range, source checklist, and the map's
/// metric/projection/normalization/animation/year controls. Every change
/// rewrites the selection signal, which reruns the whole pipeline.
#[component]
pub fn ControlPanel(selection: Signal<SelectionState>) -> Element {
    let table = use_context::<&'static EnergyTable>();
    let (year_lo, year_hi) = table.year_bounds().unwrap_or((0, 0));

    let current = selection.read().clone();
    let (year_from, year_to) = current.year_range;
    let map_year = current.map_year;

    let countries: Vec<(String, bool)> = table
        .countries()
        .iter()
        .map(|c| (c.to_string(), *c == current.country))
        .collect();

    let source_checks: Vec<(SourceColumn, String, bool)> = SourceColumn::ALL
        .iter()
        .map(|&source| (source, source.label(), current.sources.contains(&source)))
        .collect();

    let metric_options: Vec<(MetricColumn, String, bool)> = MetricColumn::ALL
        .iter()
        .map(|&metric| (metric, metric.label(), metric == current.map_metric))
        .collect();

    let projection_options: Vec<(MapProjection, &'static str, bool)> = MapProjection::ALL
        .iter()
        .map(|&projection| {
            (
                projection,
                projection.label(),
                projection == current.map_projection,
            )
        })
        .collect();

    rsx! {
        section { class: "control-panel",
            h3 { "Controls" }

            div { class: "control-panel__section",
                label { class: "control-panel__label", "Select Country / Region:" }
                select {
                    class: "control-panel__select",
                    onchange: move |event| {
                        selection.write().country = event.value();
                    },
                    for (country, selected) in countries.into_iter() {
                        option { value: "{country}", selected, "{country}" }
                    }
                }
                p { class: "control-panel__hint",
                    "Choose a specific country or 'World' for global aggregated data."
                }
            }

            div { class: "control-panel__section",
                label { class: "control-panel__label", "Select Year Range:" }
                div { class: "control-panel__range",
                    input {
                        r#type: "number",
                        min: "{year_lo}",
                        max: "{year_hi}",
                        value: "{year_from}",
                        onchange: move |event| {
                            if let Ok(year) = event.value().parse::<i32>() {
                                let mut sel = selection.write();
                                let hi = sel.year_range.1;
                                sel.year_range.0 = year.clamp(year_lo, hi);
                            }
                        },
                    }
                    span { class: "control-panel__range-sep", "to" }
                    input {
                        r#type: "number",
                        min: "{year_lo}",
                        max: "{year_hi}",
                        value: "{year_to}",
                        onchange: move |event| {
                            if let Ok(year) = event.value().parse::<i32>() {
                                let mut sel = selection.write();
                                let lo = sel.year_range.0;
                                sel.year_range.1 = year.clamp(lo, year_hi);
                            }
                        },
                    }
                }
            }

            div { class: "control-panel__section",
                label { class: "control-panel__label", "Select Energy Sources to Analyze:" }
                div { class: "control-panel__checklist",
                    for (source, source_label, checked) in source_checks.into_iter() {
                        label { class: "control-panel__check",
                            input {
                                r#type: "checkbox",
                                checked,
                                onchange: move |_| {
                                    selection.write().toggle_source(source);
                                },
                            }
                            " {source_label}"
                        }
                    }
                }
                p { class: "control-panel__hint",
                    "These selections filter the pie, trend, heatmap, stacked area, stream, sunburst, and treemap panels."
                }
            }

            div { class: "control-panel__map",
                div { class: "control-panel__section",
                    label { class: "control-panel__label", "Map Metric:" }
                    select {
                        class: "control-panel__select",
                        onchange: move |event| {
                            if let Some(metric) = MetricColumn::from_id(&event.value()) {
                                selection.write().map_metric = metric;
                            }
                        },
                        for (metric, metric_label, selected) in metric_options.into_iter() {
                            option { value: metric.id(), selected, "{metric_label}" }
                        }
                    }
                }

                div { class: "control-panel__section",
                    label { class: "control-panel__label", "Map Projection:" }
                    select {
                        class: "control-panel__select",
                        onchange: move |event| {
                            if let Some(projection) = MapProjection::from_id(&event.value()) {
                                selection.write().map_projection = projection;
                            }
                        },
                        for (projection, projection_label, selected) in projection_options.into_iter() {
                            option {
                                value: projection.id(),
                                selected,
                                "{projection_label}"
                            }
                        }
                    }
                }

                label { class: "control-panel__check",
                    input {
                        r#type: "checkbox",
                        checked: current.map_per_capita,
                        onchange: move |event| {
                            selection.write().map_per_capita = event.checked();
                        },
                    }
                    " Per Capita"
                }

                label { class: "control-panel__check",
                    input {
                        r#type: "checkbox",
                        checked: current.map_animate,
                        onchange: move |event| {
                            selection.write().map_animate = event.checked();
                        },
                    }
                    " Animate"
                }
            }

            div { class: "control-panel__section",
                label { class: "control-panel__label", "Map Year: {map_year}" }
                input {
                    r#type: "range",
                    min: "{year_lo}",
                    max: "{year_hi}",
                    value: "{map_year}",
                    disabled: current.map_animate,
                    oninput: move |event| {
                        if let Ok(year) = event.value().parse::<i32>() {
                            selection.write().map_year = year.clamp(year_lo, year_hi);
                        }
                    },
                }
            }
        }
    }
}

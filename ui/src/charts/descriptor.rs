//! Chart descriptors: the language-neutral bundles of series data and
//! rendering hints handed to the presentation layer.
//!
//! Every recomputation produces exactly one descriptor per panel. A
//! descriptor is either a [`Figure`] with trace data, or a [`Fallback`]
//! saying why there is nothing meaningful to draw. All numeric payloads are
//! finite (missing values are dropped or carried as `Option`), so a
//! descriptor always serializes cleanly to JSON for the render bridge.

use serde::Serialize;

use crate::core::selection::MapProjection;

/// The eleven chart kinds, one per dashboard panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Line,
    Heatmap,
    Map,
    MultiLine,
    StackedArea,
    StreamArea,
    Sunburst,
    Scatter,
    Bar,
    Treemap,
}

/// One panel's output for a single recomputation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartDescriptor {
    Figure(Figure),
    Fallback(Fallback),
}

impl ChartDescriptor {
    pub fn as_figure(&self) -> Option<&Figure> {
        match self {
            ChartDescriptor::Figure(figure) => Some(figure),
            ChartDescriptor::Fallback(_) => None,
        }
    }

    pub fn as_fallback(&self) -> Option<&Fallback> {
        match self {
            ChartDescriptor::Fallback(fallback) => Some(fallback),
            ChartDescriptor::Figure(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub kind: ChartKind,
    pub title: String,
    pub traces: Vec<Trace>,
    /// Animation frames; only the map builder emits these.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
    pub layout: LayoutHints,
}

impl Figure {
    pub fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            traces: Vec::new(),
            frames: Vec::new(),
            layout: LayoutHints::default(),
        }
    }
}

/// One year's snapshot of the map data, keyed for sequential playback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub year: i32,
    pub trace: Trace,
}

/// Series geometries the renderer knows how to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "geometry", rename_all = "snake_case")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<f64>,
    },
    /// Shared by line, bar, scatter, and area charts.
    Series {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        x: Vec<f64>,
        y: Vec<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    /// `None` cells mark undefined values (rendered as gaps).
    Heatmap {
        x: Vec<String>,
        y: Vec<String>,
        z: Vec<Vec<Option<f64>>>,
    },
    /// Sunburst and treemap share the labels/parents/values encoding.
    Hierarchy {
        labels: Vec<String>,
        parents: Vec<String>,
        values: Vec<f64>,
    },
    Choropleth {
        locations: Vec<String>,
        values: Vec<f64>,
        hover: Vec<String>,
    },
    GeoPoints {
        locations: Vec<String>,
        values: Vec<f64>,
        sizes: Vec<f64>,
        hover: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScale {
    /// Diverging scale centered at zero (correlation heatmap).
    Diverging,
    /// Sequential yellow-to-red scale (choropleth).
    Sequential,
    /// Plasma scale (globe points).
    Plasma,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stacking {
    Stacked,
    /// Per-year fractions of the total; y axis reads as percent.
    Normalized,
}

/// Rendering hints the presentation layer applies verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutHints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_title: Option<String>,
    /// Force the axis range to start at zero.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub x_zero: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub y_zero: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub legend_horizontal: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub percent_y: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<ColorScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacking: Option<Stacking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<MapProjection>,
}

/// Why a panel has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackCause {
    /// The user has not selected enough inputs.
    Selection,
    /// Valid selection, but no matching or complete rows.
    Empty,
    /// An unexpected computational fault, contained at the builder boundary.
    Fault,
}

/// A descriptor variant signaling "nothing meaningful to draw".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fallback {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub cause: FallbackCause,
    pub is_empty: bool,
}

impl Fallback {
    pub fn selection(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            note: None,
            cause: FallbackCause::Selection,
            is_empty: true,
        }
    }

    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            note: None,
            cause: FallbackCause::Empty,
            is_empty: true,
        }
    }

    pub fn empty_annotated(title: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            note: Some(note.into()),
            cause: FallbackCause::Empty,
            is_empty: true,
        }
    }

    pub fn fault(detail: impl std::fmt::Display) -> Self {
        Self {
            title: format!("Error: {detail}"),
            note: None,
            cause: FallbackCause::Fault,
            is_empty: true,
        }
    }
}

/// Builder output before the orchestrator's fault boundary is applied.
pub type BuildResult = Result<Figure, Fallback>;

//! Dashboard palette. The qualitative sequence colors multi-source series;
//! single-series charts use the primary/secondary/accent trio.

pub const PRIMARY: &str = "#2C3E50";
pub const SECONDARY: &str = "#3498DB";
pub const ACCENT: &str = "#E74C3C";
pub const BACKGROUND: &str = "#ECF0F1";

/// Series colors for up to nine selected sources.
pub const QUALITATIVE: [&str; 9] = [
    "#7F3C8D", "#11A579", "#3969AC", "#F2B701", "#E73F74", "#80BA5A", "#E68310", "#008695",
    "#CF1C90",
];

/// Color for the nth series, cycling past the palette end.
pub fn series_color(index: usize) -> &'static str {
    QUALITATIVE[index % QUALITATIVE.len()]
}

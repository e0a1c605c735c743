//! Detail panel content for a selected lake.
//!
//! Readings are static placeholders; no sensor data is ingested.

use crate::lake::LakeRecord;
use crate::quality::WaterQuality;

/// Placeholder turbidity shown for every lake.
pub const PLACEHOLDER_TURBIDITY_NTU: f64 = 4.2;
/// Placeholder pH shown for every lake.
pub const PLACEHOLDER_PH: f64 = 7.4;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// External map search link centered on the lake.
pub fn directions_url(lake: &LakeRecord) -> String {
    format!("{}{},{}", MAPS_SEARCH_URL, lake.lat, lake.lon)
}

/// Conservation status paragraph for the detail panel.
pub fn conservation_summary(lake: &LakeRecord) -> String {
    let diversity = match lake.quality {
        WaterQuality::Fresh => "excellent",
        WaterQuality::Normal | WaterQuality::Hazardous => "moderate",
    };
    format!(
        "{} is currently categorized as {}. It serves as a vital ecosystem for {}. \
         Regular monitoring confirms {} biological diversity maintenance.",
        lake.name, lake.quality, lake.location, diversity
    )
}

/// Display label for the turbidity tile.
pub fn turbidity_label() -> String {
    format!("{:.1} NTU", PLACEHOLDER_TURBIDITY_NTU)
}

/// Display label for the pH tile.
pub fn ph_label() -> String {
    format!("{:.1} pH", PLACEHOLDER_PH)
}

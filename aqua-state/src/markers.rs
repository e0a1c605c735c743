//! Map marker styling for the visible lakes.

use crate::selection::Selection;
use aqua_lakes::lake::{LakeId, LakeRecord};
use serde::Serialize;

const RADIUS: u32 = 10;
const RADIUS_HIGHLIGHT: u32 = 15;
const WEIGHT: u32 = 2;
const WEIGHT_HIGHLIGHT: u32 = 4;
const FILL_OPACITY: f64 = 0.8;
const FILL_OPACITY_HIGHLIGHT: f64 = 1.0;
const STROKE_COLOR: &str = "white";

/// A circle marker as handed to the map bridge (serialized to JSON).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSpec {
    pub id: LakeId,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub radius: u32,
    pub weight: u32,
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
}

impl MarkerSpec {
    pub fn for_lake(lake: &LakeRecord, highlighted: bool) -> Self {
        Self {
            id: lake.id.clone(),
            name: lake.name.clone(),
            lat: lake.lat,
            lon: lake.lon,
            radius: if highlighted { RADIUS_HIGHLIGHT } else { RADIUS },
            weight: if highlighted { WEIGHT_HIGHLIGHT } else { WEIGHT },
            color: STROKE_COLOR,
            fill_color: lake.quality.color(),
            fill_opacity: if highlighted {
                FILL_OPACITY_HIGHLIGHT
            } else {
                FILL_OPACITY
            },
        }
    }
}

pub fn marker_specs(lakes: &[&LakeRecord], selection: &Selection) -> Vec<MarkerSpec> {
    lakes
        .iter()
        .map(|lake| MarkerSpec::for_lake(lake, selection.is_highlighted(&lake.id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqua_lakes::registry::Registry;

    #[test]
    fn highlighted_markers_are_larger() {
        let registry = Registry::builtin().unwrap();
        let lakes: Vec<&LakeRecord> = registry.lakes().iter().take(3).collect();
        let mut selection = Selection::default();
        selection.select(LakeId::from("2"));
        selection.hover(LakeId::from("3"));

        let specs = marker_specs(&lakes, &selection);
        assert_eq!(specs.len(), 3);
        assert_eq!((specs[0].radius, specs[0].weight), (10, 2));
        assert!((specs[0].fill_opacity - 0.8).abs() < f64::EPSILON);
        assert_eq!((specs[1].radius, specs[1].weight), (15, 4));
        assert_eq!((specs[2].radius, specs[2].weight), (15, 4));
        assert_eq!(specs[0].fill_color, "#22c55e");
        assert_eq!(specs[2].fill_color, "#f59e0b");
    }

    #[test]
    fn serializes_camel_case_for_the_map() {
        let registry = Registry::builtin().unwrap();
        let spec = MarkerSpec::for_lake(&registry.lakes()[10], false);
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["id"], "11");
        assert_eq!(json["fillColor"], "#ef4444");
        assert_eq!(json["color"], "white");
        assert!(json.get("fillOpacity").is_some());
    }
}

use aqua_lakes::lake::GeoPoint;
use serde::{Deserialize, Serialize};

/// Center of India, where the dashboard opens.
pub const INITIAL_CENTER: GeoPoint = GeoPoint {
    lat: 20.5937,
    lon: 78.9629,
};
pub const INITIAL_ZOOM: f64 = 5.0;
/// Zoom after selecting a lake.
pub const DETAIL_ZOOM: f64 = 13.0;
/// Zoom when re-centering on an already known user location.
pub const OVERVIEW_ZOOM: f64 = 12.0;
/// Zoom right after a position was acquired.
pub const LOCATED_ZOOM: f64 = 10.0;

/// Target map view. The map collaborator animates towards it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: INITIAL_CENTER,
            zoom: INITIAL_ZOOM,
        }
    }
}

impl Viewport {
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self { center, zoom }
    }

    pub fn detail(center: GeoPoint) -> Self {
        Self::new(center, DETAIL_ZOOM)
    }

    pub fn overview(center: GeoPoint) -> Self {
        Self::new(center, OVERVIEW_ZOOM)
    }

    pub fn located(center: GeoPoint) -> Self {
        Self::new(center, LOCATED_ZOOM)
    }
}

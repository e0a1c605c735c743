use crate::quality::WaterQuality;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable registry identifier of a lake.
///
/// Selection and hover state refer to lakes through this id rather than
/// holding the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LakeId(pub String);

impl LakeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LakeId {
    fn from(value: &str) -> Self {
        LakeId(value.to_string())
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether both components fall inside [-90, 90] x [-180, 180].
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Euclidean distance treating (lat, lon) as planar coordinates.
    ///
    /// No great-circle correction is applied, so this only ranks points
    /// sensibly at the scale of a single country.
    pub fn planar_distance(&self, other: &GeoPoint) -> f64 {
        (self.lat - other.lat).hypot(self.lon - other.lon)
    }
}

/// Represents a monitored lake with its registry metadata.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LakeRecord {
    pub id: LakeId,
    pub name: String,
    /// Free-text region label (state or city)
    pub location: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
    pub quality: WaterQuality,
}

impl LakeRecord {
    pub fn coordinates(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    /// Case-insensitive substring match against name or location.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.location.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dal() -> LakeRecord {
        LakeRecord {
            id: LakeId::from("1"),
            name: "Dal Lake".to_string(),
            location: "Kashmir".to_string(),
            lat: 34.0837,
            lon: 74.8379,
            quality: WaterQuality::Fresh,
        }
    }

    #[test]
    fn matches_name_and_location_ignoring_case() {
        let lake = dal();
        assert!(lake.matches("dal"));
        assert!(lake.matches("KASH"));
        assert!(lake.matches("l la"));
        assert!(!lake.matches("kerala"));
    }

    #[test]
    fn planar_distance_is_euclidean() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);
        assert!((a.planar_distance(&b) - 5.0).abs() < f64::EPSILON);
        assert_eq!(a.planar_distance(&a), 0.0);
    }

    #[test]
    fn geo_point_range_check() {
        assert!(GeoPoint::new(90.0, -180.0).is_valid());
        assert!(!GeoPoint::new(90.5, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, 181.0).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }
}

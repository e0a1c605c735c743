use crate::error::{LakeError, Result};
use crate::lake::{GeoPoint, LakeId, LakeRecord};
use crate::quality::WaterQuality;
use csv::ReaderBuilder;
use std::collections::HashSet;

/// Embedded CSV data for every monitored lake.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/lakes.csv");

/// The fixed, read-only collection of lakes shown on the dashboard.
///
/// Records keep their CSV row order; every ordering guarantee in the search
/// and nearest-lake lookups is expressed in terms of this order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Registry {
    lakes: Vec<LakeRecord>,
}

impl Registry {
    /// Build a registry from records, rejecting duplicate ids and
    /// out-of-range coordinates.
    pub fn new(lakes: Vec<LakeRecord>) -> Result<Self> {
        let mut seen: HashSet<&LakeId> = HashSet::with_capacity(lakes.len());
        for lake in &lakes {
            if !seen.insert(&lake.id) {
                return Err(LakeError::DuplicateId(lake.id.to_string()));
            }
            if !lake.coordinates().is_valid() {
                return Err(LakeError::CoordinateOutOfRange {
                    id: lake.id.to_string(),
                    lat: lake.lat,
                    lon: lake.lon,
                });
            }
        }
        Ok(Self { lakes })
    }

    /// Registry parsed from the embedded `fixtures/lakes.csv`.
    pub fn builtin() -> Result<Self> {
        Registry::parse_lake_csv(CSV_OBJECT)
    }

    /// Parse a CSV string of lake data into a Registry.
    ///
    /// Expected CSV columns (with headers): id, name, location, latitude, longitude, quality
    pub fn parse_lake_csv(csv_object: &str) -> Result<Self> {
        let mut lakes: Vec<LakeRecord> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let id = record.get(0).unwrap_or("");
            let lat = parse_degrees(record.get(3));
            let lon = parse_degrees(record.get(4));
            let quality: WaterQuality = record.get(5).unwrap_or("").parse()?;
            lakes.push(LakeRecord {
                id: LakeId::from(id),
                name: record.get(1).unwrap_or("").to_string(),
                location: record.get(2).unwrap_or("").to_string(),
                lat,
                lon,
                quality,
            });
        }
        log::info!("[Aqua] registry: Loaded {} lakes", lakes.len());
        Registry::new(lakes)
    }

    pub fn lakes(&self) -> &[LakeRecord] {
        &self.lakes
    }

    pub fn len(&self) -> usize {
        self.lakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lakes.is_empty()
    }

    pub fn get(&self, id: &LakeId) -> Option<&LakeRecord> {
        self.lakes.iter().find(|lake| &lake.id == id)
    }

    /// Like `get`, but a missing id is an error.
    pub fn require(&self, id: &LakeId) -> Result<&LakeRecord> {
        self.get(id)
            .ok_or_else(|| LakeError::LakeNotFound(id.to_string()))
    }

    /// Nearest lake to `origin`, see [`crate::nearest::nearest`].
    pub fn nearest_to(&self, origin: &GeoPoint) -> Result<&LakeRecord> {
        crate::nearest::nearest(origin, &self.lakes)
    }
}

// A non-numeric coordinate becomes NaN so that the range check in
// `Registry::new` rejects the row instead of silently placing it at 0,0.
fn parse_degrees(field: Option<&str>) -> f64 {
    field
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "ID,NAME,LOCATION,LATITUDE,LONGITUDE,QUALITY\n";

    #[test]
    fn test_builtin_registry() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.len(), 18);
        let first = &registry.lakes()[0];
        assert_eq!(first.id, LakeId::from("1"));
        assert_eq!(first.name, "Dal Lake");
        assert_eq!(first.quality, WaterQuality::Fresh);
        let last = &registry.lakes()[17];
        assert_eq!(last.name, "Pushkar Lake");
        assert!((last.lon - 74.5530).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_with_spaces_in_labels() {
        let csv = format!("{}6,Pulicat Lake,Tamil Nadu,13.6113,80.0463,normal\n", HEADER);
        let registry = Registry::parse_lake_csv(&csv).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lakes()[0].location, "Tamil Nadu");
        assert_eq!(registry.lakes()[0].quality, WaterQuality::Normal);
    }

    #[test]
    fn test_parse_empty_csv() {
        let registry = Registry::parse_lake_csv(HEADER).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let csv = format!(
            "{}1,Dal Lake,Kashmir,34.08,74.83,fresh\n1,Wular Lake,Kashmir,34.36,74.60,fresh\n",
            HEADER
        );
        let err = Registry::parse_lake_csv(&csv).unwrap_err();
        assert!(matches!(err, LakeError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn test_bad_coordinates_rejected() {
        let csv = format!("{}1,Nowhere,Void,95.0,10.0,fresh\n", HEADER);
        assert!(matches!(
            Registry::parse_lake_csv(&csv),
            Err(LakeError::CoordinateOutOfRange { .. })
        ));

        let csv = format!("{}1,Nowhere,Void,abc,10.0,fresh\n", HEADER);
        assert!(matches!(
            Registry::parse_lake_csv(&csv),
            Err(LakeError::CoordinateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_unknown_quality_rejected() {
        let csv = format!("{}1,Dal Lake,Kashmir,34.08,74.83,murky\n", HEADER);
        assert!(matches!(
            Registry::parse_lake_csv(&csv),
            Err(LakeError::UnknownQuality(_))
        ));
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = Registry::builtin().unwrap();
        let powai = registry.get(&LakeId::from("11")).unwrap();
        assert_eq!(powai.name, "Powai Lake");
        assert!(registry.get(&LakeId::from("99")).is_none());
        assert!(matches!(
            registry.require(&LakeId::from("99")),
            Err(LakeError::LakeNotFound(_))
        ));
    }
}

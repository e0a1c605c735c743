use crate::error::{LakeError, Result};
use crate::lake::{GeoPoint, LakeRecord};

/// Find the lake closest to `origin`.
///
/// Distance is [`GeoPoint::planar_distance`], i.e. latitude and longitude are
/// treated as a flat plane. That is only a reasonable ranking within one
/// country; no great-circle correction is made. The first lake reaching the
/// minimum distance wins ties.
pub fn nearest<'a>(origin: &GeoPoint, lakes: &'a [LakeRecord]) -> Result<&'a LakeRecord> {
    let mut best: Option<(&LakeRecord, f64)> = None;
    for lake in lakes {
        let distance = origin.planar_distance(&lake.coordinates());
        match best {
            Some((_, min)) if distance >= min => {}
            _ => best = Some((lake, distance)),
        }
    }
    best.map(|(lake, _)| lake).ok_or(LakeError::EmptyRegistry)
}

//! Search and quality filtering over the registry.

use crate::lake::LakeRecord;
use crate::quality::WaterQuality;

/// Number of lakes shown before the user types anything.
pub const FEATURED_COUNT: usize = 5;

/// How a [`Listing`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    /// Blank query and no filter: the first few registry entries.
    Featured,
    /// A query or filter was applied; an empty list means nothing matched.
    Matches,
}

/// Result of [`visible_lakes`], in registry order.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<'a> {
    pub mode: ListingMode,
    pub lakes: Vec<&'a LakeRecord>,
}

impl Listing<'_> {
    /// True when a query or filter is active and nothing matched.
    pub fn is_no_match(&self) -> bool {
        self.mode == ListingMode::Matches && self.lakes.is_empty()
    }
}

/// Lakes visible for a free-text query and optional quality filter.
///
/// - blank query, no filter: the first [`FEATURED_COUNT`] lakes
/// - otherwise: every lake whose name or location contains `query`
///   (case-insensitive, a blank query matches everything) and whose
///   quality equals `filter` when one is set
pub fn visible_lakes<'a>(
    query: &str,
    filter: Option<WaterQuality>,
    lakes: &'a [LakeRecord],
) -> Listing<'a> {
    let blank = query.trim().is_empty();
    if blank && filter.is_none() {
        return Listing {
            mode: ListingMode::Featured,
            lakes: lakes.iter().take(FEATURED_COUNT).collect(),
        };
    }
    let lakes = lakes
        .iter()
        .filter(|lake| blank || lake.matches(query))
        .filter(|lake| filter.map_or(true, |q| lake.quality == q))
        .collect();
    Listing {
        mode: ListingMode::Matches,
        lakes,
    }
}

/// Lakes drawn on the map: the whole registry, restricted by `filter` only.
pub fn with_quality(filter: Option<WaterQuality>, lakes: &[LakeRecord]) -> Vec<&LakeRecord> {
    lakes
        .iter()
        .filter(|lake| filter.map_or(true, |q| lake.quality == q))
        .collect()
}

/// Filter chip toggle: picking the active filter again clears it.
pub fn toggle_filter(
    current: Option<WaterQuality>,
    chosen: WaterQuality,
) -> Option<WaterQuality> {
    if current == Some(chosen) {
        None
    } else {
        Some(chosen)
    }
}

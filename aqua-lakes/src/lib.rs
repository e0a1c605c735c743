//! Core types for the lake registry dashboard.
//!
//! This crate provides:
//! - `lake`: `LakeRecord`, `LakeId` and `GeoPoint`
//! - `quality`: the closed `WaterQuality` classification and its palette
//! - `registry`: the immutable lake registry embedded from `fixtures/lakes.csv`
//! - `search`: query + quality filtering for the search dropdown and map
//! - `nearest`: planar nearest-lake lookup
//! - `composition`: per-category counts for the dashboard summary
//! - `detail`: detail panel text and the external map deep link
//!
//! # Usage
//!
//! ```rust
//! use aqua_lakes::registry::Registry;
//! use aqua_lakes::search::visible_lakes;
//! use aqua_lakes::quality::WaterQuality;
//!
//! let registry = Registry::builtin().unwrap();
//! let featured = visible_lakes("", None, registry.lakes());
//! assert_eq!(featured.lakes.len(), 5);
//!
//! let bangalore = visible_lakes("bangalore", Some(WaterQuality::Hazardous), registry.lakes());
//! assert_eq!(bangalore.lakes.len(), 2);
//! ```

pub mod composition;
pub mod detail;
pub mod error;
pub mod lake;
pub mod nearest;
pub mod quality;
pub mod registry;
pub mod search;

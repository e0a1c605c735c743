use crate::error::LakeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed classification of a lake's water condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterQuality {
    Fresh,
    Normal,
    Hazardous,
}

impl WaterQuality {
    /// All categories in display order.
    pub const ALL: [WaterQuality; 3] = [
        WaterQuality::Fresh,
        WaterQuality::Normal,
        WaterQuality::Hazardous,
    ];

    /// Display color for map markers and badges.
    pub fn color(&self) -> &'static str {
        match self {
            WaterQuality::Fresh => "#22c55e",
            WaterQuality::Normal => "#f59e0b",
            WaterQuality::Hazardous => "#ef4444",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WaterQuality::Fresh => "fresh",
            WaterQuality::Normal => "normal",
            WaterQuality::Hazardous => "hazardous",
        }
    }
}

impl fmt::Display for WaterQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WaterQuality {
    type Err = LakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fresh" => Ok(WaterQuality::Fresh),
            "normal" => Ok(WaterQuality::Normal),
            "hazardous" => Ok(WaterQuality::Hazardous),
            other => Err(LakeError::UnknownQuality(other.to_string())),
        }
    }
}

//! Per-category composition of the registry for the dashboard summary.

use crate::lake::LakeRecord;
use crate::quality::WaterQuality;
use serde::Serialize;

/// Count and share of one quality category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityShare {
    pub quality: WaterQuality,
    pub count: usize,
    /// Share of the registry, 0.0..=100.0
    pub percent: f64,
}

impl QualityShare {
    /// Percentage rounded to a whole number for labels.
    pub fn rounded_percent(&self) -> u32 {
        self.percent.round() as u32
    }
}

/// Composition of a set of lakes by water quality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityBreakdown {
    pub total: usize,
    /// One entry per category, in [`WaterQuality::ALL`] order.
    pub shares: Vec<QualityShare>,
}

impl QualityBreakdown {
    pub fn of(lakes: &[LakeRecord]) -> Self {
        let total = lakes.len();
        let shares = WaterQuality::ALL
            .iter()
            .map(|&quality| {
                let count = lakes.iter().filter(|l| l.quality == quality).count();
                let percent = if total == 0 {
                    0.0
                } else {
                    count as f64 * 100.0 / total as f64
                };
                QualityShare {
                    quality,
                    count,
                    percent,
                }
            })
            .collect();
        Self { total, shares }
    }

    pub fn share(&self, quality: WaterQuality) -> QualityShare {
        self.shares
            .iter()
            .copied()
            .find(|s| s.quality == quality)
            .unwrap_or(QualityShare {
                quality,
                count: 0,
                percent: 0.0,
            })
    }
}

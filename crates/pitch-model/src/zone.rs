//! Zone-quality records.
//!
//! The zone-quality table is sparse: a row exists only for cells where the
//! pitcher threw at least one pitch of that type to that batter hand.

use serde::{Deserialize, Serialize};

use crate::category::{Hand, ZoneId};
use crate::pitch::PitcherId;

/// Aggregate quality of one pitch type in one zone cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneQualityRecord {
    #[serde(alias = "pitcher_pcode")]
    pub pitcher_id: PitcherId,

    pub season_year: i32,

    pub pitch_type: String,

    pub batter_hand: Hand,

    pub zone_id: ZoneId,

    /// Pitches observed in the cell.
    pub count: u32,

    /// Display label for the average quality (e.g. "A").
    pub avg_class: String,

    /// Continuous quality score in `[1.0, 5.0]`.
    pub avg_score: f64,

    #[serde(rename = "tier_S", default)]
    pub tier_s: f64,
    #[serde(rename = "tier_A", default)]
    pub tier_a: f64,
    #[serde(rename = "tier_B", default)]
    pub tier_b: f64,
    #[serde(rename = "tier_C", default)]
    pub tier_c: f64,
    #[serde(rename = "tier_D", default)]
    pub tier_d: f64,
}

impl ZoneQualityRecord {
    /// Create a record with zeroed tier percentages.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pitcher_id: impl Into<String>,
        season_year: i32,
        pitch_type: impl Into<String>,
        batter_hand: Hand,
        zone_id: ZoneId,
        count: u32,
        avg_class: impl Into<String>,
        avg_score: f64,
    ) -> Self {
        Self {
            pitcher_id: PitcherId::new(pitcher_id),
            season_year,
            pitch_type: pitch_type.into(),
            batter_hand,
            zone_id,
            count,
            avg_class: avg_class.into(),
            avg_score,
            tier_s: 0.0,
            tier_a: 0.0,
            tier_b: 0.0,
            tier_c: 0.0,
            tier_d: 0.0,
        }
    }

    /// Tier percentages in rank order S, A, B, C, D.
    pub fn tier_percentages(&self) -> [f64; 5] {
        [self.tier_s, self.tier_a, self.tier_b, self.tier_c, self.tier_d]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{HorizontalBand, VerticalBand};

    #[test]
    fn test_zone_record_from_source_columns() {
        let raw = r#"{
            "pitcher_pcode": "50030",
            "season_year": 2024,
            "pitch_type": "Fastball",
            "batter_hand": "R",
            "zone_id": "D2",
            "count": 14,
            "avg_class": "A",
            "avg_score": 3.86,
            "tier_S": 28.6,
            "tier_A": 42.9,
            "tier_B": 14.3,
            "tier_C": 14.3,
            "tier_D": 0.0
        }"#;
        let record: ZoneQualityRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(
            record.zone_id,
            ZoneId::new(VerticalBand::D, HorizontalBand::H2)
        );
        assert_eq!(record.batter_hand, Hand::Right);
        let total: f64 = record.tier_percentages().iter().sum();
        assert!((total - 100.1).abs() < 1e-9);
    }

    #[test]
    fn test_bad_zone_id_is_rejected() {
        let raw = r#"{
            "pitcher_pcode": "1", "season_year": 2024, "pitch_type": "Fastball",
            "batter_hand": "R", "zone_id": "Z9", "count": 1,
            "avg_class": "A", "avg_score": 4.0
        }"#;
        assert!(serde_json::from_str::<ZoneQualityRecord>(raw).is_err());
    }
}

//! Engine facade over the two input tables.
//!
//! [`AnalyticsEngine`] borrows the pitch table and, when present, the
//! zone-quality table. Every call is a pure function of those snapshots, so
//! one engine can serve any number of scopes, including from several threads.

use pitchscope_model::category::Hand;
use pitchscope_model::dataset::PitchDataset;
use pitchscope_model::pitch::{PitchRecord, PitcherId};
use pitchscope_model::zone::ZoneQualityRecord;

use crate::directory::{pitcher_directory, pitcher_seasons, search_pitchers, PitcherEntry, PitcherQuery};
use crate::frequency::{top_pitch_labels, FrequencyRow};
use crate::movement::{movement_points, movement_summary, MovementPoint, MovementSummary};
use crate::scope::{pitcher_summary, select_pitches, select_zone_quality, PitcherSummary, Scope, ScopedPitches};
use crate::tiers::{tier_distribution, TierDistribution};
use crate::usage::{yearly_usage, UsageRow};
use crate::zone_grid::{build_zone_grid, zone_detail, zone_pitch_types, ZoneDetailRow, ZoneGridOutcome};

/// Read-only analytics over a pitch table and an optional zone-quality table.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsEngine<'a> {
    pitches: &'a [PitchRecord],
    zone_quality: Option<&'a [ZoneQualityRecord]>,
}

impl<'a> AnalyticsEngine<'a> {
    pub fn new(pitches: &'a [PitchRecord], zone_quality: Option<&'a [ZoneQualityRecord]>) -> Self {
        Self {
            pitches,
            zone_quality,
        }
    }

    pub fn from_dataset(dataset: &'a PitchDataset) -> Self {
        Self::new(&dataset.pitches, dataset.zone_quality.as_deref())
    }

    pub fn has_zone_quality(&self) -> bool {
        self.zone_quality.is_some()
    }

    pub fn directory(&self) -> Vec<PitcherEntry> {
        pitcher_directory(self.pitches)
    }

    pub fn search(&self, query: &PitcherQuery) -> Vec<PitcherEntry> {
        search_pitchers(&self.directory(), query)
    }

    pub fn seasons(&self, pitcher_id: &PitcherId) -> Vec<i32> {
        pitcher_seasons(self.pitches, pitcher_id)
    }

    /// Narrow both tables to a scope.
    pub fn scope(&self, scope: &Scope) -> ScopedView<'a> {
        let pitches = select_pitches(self.pitches, scope);
        let zones = select_zone_quality(self.zone_quality, scope);
        tracing::debug!(
            pitcher = %scope.pitcher_id,
            seasons = ?scope.seasons,
            pitches = pitches.len(),
            zone_rows = ?zones.as_ref().map(Vec::len),
            "Selected scope"
        );
        ScopedView {
            scope: scope.clone(),
            pitches,
            zones,
        }
    }
}

/// Both tables narrowed to one scope.
#[derive(Debug, Clone)]
pub struct ScopedView<'a> {
    scope: Scope,
    pitches: ScopedPitches<'a>,
    zones: Option<Vec<&'a ZoneQualityRecord>>,
}

impl<'a> ScopedView<'a> {
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn pitches(&self) -> &ScopedPitches<'a> {
        &self.pitches
    }

    /// Scoped zone rows, `None` when the zone-quality source is absent.
    pub fn zone_rows(&self) -> Option<&[&'a ZoneQualityRecord]> {
        self.zones.as_deref()
    }

    /// No pitch matched the scope.
    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    pub fn summary(&self) -> Option<PitcherSummary> {
        pitcher_summary(&self.pitches)
    }

    pub fn usage(&self) -> Vec<UsageRow> {
        yearly_usage(&self.pitches)
    }

    pub fn tiers(&self) -> TierDistribution {
        tier_distribution(&self.pitches)
    }

    pub fn movement(&self) -> MovementSummary {
        movement_summary(&self.pitches)
    }

    pub fn movement_points(&self) -> Vec<MovementPoint> {
        movement_points(&self.pitches)
    }

    pub fn top_labels(&self, limit: usize) -> Vec<FrequencyRow> {
        top_pitch_labels(&self.pitches, limit)
    }

    /// Pitch types worth a zone grid. Empty when the source is absent.
    pub fn zone_pitch_types(&self, limit: usize) -> Vec<String> {
        self.zone_rows()
            .map(|rows| zone_pitch_types(rows, limit))
            .unwrap_or_default()
    }

    pub fn zone_grid(&self, pitch_type: &str, batter_hand: Hand) -> ZoneGridOutcome {
        build_zone_grid(self.zone_rows(), pitch_type, batter_hand)
    }

    /// Zone detail rows, `None` when the source is absent.
    pub fn zone_detail(&self, batter_hand: Hand) -> Option<Vec<ZoneDetailRow>> {
        self.zone_rows().map(|rows| zone_detail(rows, batter_hand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchscope_model::category::VelocityTier;

    fn dataset(with_zones: bool) -> PitchDataset {
        let pitches = vec![
            PitchRecord::new("1", "Kim", Hand::Right, 2024, "Fastball", VelocityTier::S, 150.0),
            PitchRecord::new("1", "Kim", Hand::Right, 2023, "Slider", VelocityTier::C, 134.0),
            PitchRecord::new("2", "Lee", Hand::Left, 2024, "Curve", VelocityTier::D, 112.0),
        ];
        let zones = vec![ZoneQualityRecord::new(
            "1",
            2024,
            "Fastball",
            Hand::Right,
            "C3".parse().unwrap(),
            8,
            "S",
            4.6,
        )];
        PitchDataset::from_records(pitches, with_zones.then_some(zones))
    }

    #[test]
    fn test_scope_view_runs_every_aggregator() {
        let data = dataset(true);
        let engine = AnalyticsEngine::from_dataset(&data);
        let view = engine.scope(&Scope::new("1", [2023, 2024]));

        assert!(!view.is_empty());
        assert_eq!(view.usage().len(), 2);
        assert_eq!(view.tiers().chart.rows.len(), 2);
        assert_eq!(view.movement().pitch_types.len(), 2);
        assert_eq!(view.zone_pitch_types(6), vec!["Fastball".to_string()]);
        assert!(view.zone_grid("Fastball", Hand::Right).grid().is_some());
        assert_eq!(view.zone_grid("Fastball", Hand::Left), ZoneGridOutcome::Empty);
    }

    #[test]
    fn test_missing_zone_source_is_unavailable() {
        let data = dataset(false);
        let engine = AnalyticsEngine::from_dataset(&data);
        assert!(!engine.has_zone_quality());

        let view = engine.scope(&Scope::new("1", [2024]));
        assert_eq!(
            view.zone_grid("Fastball", Hand::Right),
            ZoneGridOutcome::Unavailable
        );
        assert!(view.zone_detail(Hand::Right).is_none());
        assert!(view.zone_pitch_types(6).is_empty());
    }

    #[test]
    fn test_directory_and_seasons() {
        let data = dataset(false);
        let engine = AnalyticsEngine::from_dataset(&data);
        assert_eq!(engine.directory().len(), 2);
        assert_eq!(engine.seasons(&PitcherId::new("1")), vec![2023, 2024]);
        let lefties = engine.search(&PitcherQuery {
            hand: Some(Hand::Left),
            name: None,
        });
        assert_eq!(lefties[0].pitcher_name, "Lee");
    }

    #[test]
    fn test_empty_scope_yields_empty_results() {
        let data = dataset(true);
        let engine = AnalyticsEngine::from_dataset(&data);
        let view = engine.scope(&Scope::new("1", [1999]));

        assert!(view.is_empty());
        assert!(view.summary().is_none());
        assert!(view.usage().is_empty());
        assert!(view.tiers().is_empty());
        assert!(view.movement().is_empty());
        assert!(view.top_labels(20).is_empty());
        assert_eq!(view.zone_grid("Fastball", Hand::Right), ZoneGridOutcome::Empty);
    }
}

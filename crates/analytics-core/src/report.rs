//! One-call report for a scope.
//!
//! Runs every aggregator and bundles the results into a serialisable
//! [`PitcherReport`], or [`ScopeReport::NoData`] when the scope is empty.

use pitchscope_model::category::Hand;
use serde::Serialize;

use crate::engine::ScopedView;
use crate::frequency::FrequencyRow;
use crate::movement::MovementSummary;
use crate::scope::{PitcherSummary, Scope};
use crate::tiers::TierDistribution;
use crate::usage::UsageRow;
use crate::zone_grid::{ZoneDetailRow, ZoneGridOutcome};

/// Report knobs, normally filled from the `report` config section.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub top_labels: usize,
    pub zone_pitch_types: usize,
    pub batter_hand: Hand,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_labels: 20,
            zone_pitch_types: 6,
            batter_hand: Hand::Right,
        }
    }
}

/// Zone section of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ZoneSection {
    /// No zone-quality source was loaded.
    Unavailable,
    /// Source loaded, but nothing for the scoped seasons.
    NoData,
    Ready {
        batter_hand: Hand,
        /// One outcome per pitch type, in `pitch_types` order.
        pitch_types: Vec<String>,
        grids: Vec<ZoneGridOutcome>,
        detail: Vec<ZoneDetailRow>,
    },
}

/// Every derived table for a non-empty scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PitcherReport {
    /// RFC 3339 timestamp of report generation.
    pub generated_at: String,
    pub scope: Scope,
    pub summary: PitcherSummary,
    pub usage: Vec<UsageRow>,
    pub tiers: TierDistribution,
    pub movement: MovementSummary,
    pub top_labels: Vec<FrequencyRow>,
    pub zones: ZoneSection,
}

/// Result of reporting on a scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "report", rename_all = "snake_case")]
pub enum ScopeReport {
    /// The selection matched no pitches.
    NoData { scope: Scope },
    Ready(Box<PitcherReport>),
}

/// Zone grids for a scope. `pitch_types` of `None` picks the
/// `options.zone_pitch_types` most frequent ones.
pub fn zone_section(
    view: &ScopedView<'_>,
    pitch_types: Option<Vec<String>>,
    options: &ReportOptions,
) -> ZoneSection {
    let Some(rows) = view.zone_rows() else {
        return ZoneSection::Unavailable;
    };
    if rows.is_empty() {
        return ZoneSection::NoData;
    }

    let pitch_types =
        pitch_types.unwrap_or_else(|| view.zone_pitch_types(options.zone_pitch_types));
    let grids = pitch_types
        .iter()
        .map(|pitch_type| view.zone_grid(pitch_type, options.batter_hand))
        .collect();

    ZoneSection::Ready {
        batter_hand: options.batter_hand,
        pitch_types,
        grids,
        detail: view.zone_detail(options.batter_hand).unwrap_or_default(),
    }
}

/// Build the full report for a scoped view.
pub fn build_report(view: &ScopedView<'_>, options: &ReportOptions) -> ScopeReport {
    let Some(summary) = view.summary() else {
        tracing::debug!(pitcher = %view.scope().pitcher_id, "Scope has no pitches");
        return ScopeReport::NoData {
            scope: view.scope().clone(),
        };
    };

    ScopeReport::Ready(Box::new(PitcherReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        scope: view.scope().clone(),
        summary,
        usage: view.usage(),
        tiers: view.tiers(),
        movement: view.movement(),
        top_labels: view.top_labels(options.top_labels),
        zones: zone_section(view, None, options),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AnalyticsEngine;
    use pitchscope_model::category::VelocityTier;
    use pitchscope_model::pitch::PitchRecord;
    use pitchscope_model::zone::ZoneQualityRecord;

    fn pitches() -> Vec<PitchRecord> {
        vec![
            PitchRecord::new("7", "Park", Hand::Left, 2024, "Fastball", VelocityTier::A, 144.0)
                .with_label("A-arm-rise"),
            PitchRecord::new("7", "Park", Hand::Left, 2024, "Changeup", VelocityTier::B, 128.0)
                .with_label("B-arm-drop"),
        ]
    }

    fn zones() -> Vec<ZoneQualityRecord> {
        vec![
            ZoneQualityRecord::new("7", 2024, "Fastball", Hand::Right, "D3".parse().unwrap(), 6, "A", 4.0),
            ZoneQualityRecord::new("7", 2024, "Changeup", Hand::Left, "A2".parse().unwrap(), 2, "B", 3.1),
        ]
    }

    #[test]
    fn test_report_for_populated_scope() {
        let pitches = pitches();
        let zones = zones();
        let engine = AnalyticsEngine::new(&pitches, Some(zones.as_slice()));
        let view = engine.scope(&Scope::new("7", [2024]));

        let ScopeReport::Ready(report) = build_report(&view, &ReportOptions::default()) else {
            panic!("expected a report");
        };
        assert_eq!(report.summary.total_pitches, 2);
        assert_eq!(report.top_labels.len(), 2);

        let ZoneSection::Ready {
            pitch_types,
            grids,
            detail,
            ..
        } = &report.zones
        else {
            panic!("expected zone data");
        };
        assert_eq!(pitch_types, &vec!["Changeup".to_string(), "Fastball".to_string()]);
        // Changeup has only a left-handed row, so the right-handed grid is empty.
        assert_eq!(grids[0], ZoneGridOutcome::Empty);
        assert!(grids[1].grid().is_some());
        assert_eq!(detail.len(), 1);
    }

    #[test]
    fn test_no_data_report() {
        let pitches = pitches();
        let engine = AnalyticsEngine::new(&pitches, None);
        let view = engine.scope(&Scope::new("7", [2020]));
        assert!(matches!(
            build_report(&view, &ReportOptions::default()),
            ScopeReport::NoData { .. }
        ));
    }

    #[test]
    fn test_zone_section_states() {
        let pitches = pitches();
        let engine = AnalyticsEngine::new(&pitches, None);
        let view = engine.scope(&Scope::new("7", [2024]));
        let ScopeReport::Ready(report) = build_report(&view, &ReportOptions::default()) else {
            panic!("expected a report");
        };
        assert_eq!(report.zones, ZoneSection::Unavailable);

        let empty_zones: Vec<ZoneQualityRecord> = vec![];
        let engine = AnalyticsEngine::new(&pitches, Some(empty_zones.as_slice()));
        let view = engine.scope(&Scope::new("7", [2024]));
        let ScopeReport::Ready(report) = build_report(&view, &ReportOptions::default()) else {
            panic!("expected a report");
        };
        assert_eq!(report.zones, ZoneSection::NoData);
    }

    #[test]
    fn test_report_serializes_with_status_tags() {
        let pitches = pitches();
        let engine = AnalyticsEngine::new(&pitches, None);
        let view = engine.scope(&Scope::new("7", [2024]));
        let json = serde_json::to_value(build_report(&view, &ReportOptions::default())).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["report"]["zones"]["status"], "unavailable");
        assert_eq!(json["report"]["summary"]["hand"], "L");
    }

    #[test]
    fn test_zone_section_without_source_is_tagged_unavailable() {
        let pitches = pitches();
        let engine = AnalyticsEngine::new(&pitches, None);
        let view = engine.scope(&Scope::new("7", [2024]));

        let section = zone_section(&view, Some(vec!["Fastball".to_string()]), &ReportOptions::default());
        assert_eq!(section, ZoneSection::Unavailable);
        assert_eq!(
            serde_json::to_value(&section).unwrap(),
            serde_json::json!({ "status": "unavailable" })
        );

        let section = zone_section(&view, None, &ReportOptions::default());
        assert_eq!(serde_json::to_value(&section).unwrap()["status"], "unavailable");
    }

    #[test]
    fn test_zone_section_with_explicit_pitch_types() {
        let pitches = pitches();
        let zones = zones();
        let engine = AnalyticsEngine::new(&pitches, Some(zones.as_slice()));

        let view = engine.scope(&Scope::new("7", [2023]));
        let section = zone_section(&view, Some(vec!["Fastball".to_string()]), &ReportOptions::default());
        assert_eq!(serde_json::to_value(&section).unwrap()["status"], "no_data");

        let view = engine.scope(&Scope::new("7", [2024]));
        let section = zone_section(&view, Some(vec!["Fastball".to_string()]), &ReportOptions::default());
        let ZoneSection::Ready {
            pitch_types, grids, ..
        } = &section
        else {
            panic!("expected zone data");
        };
        assert_eq!(pitch_types, &vec!["Fastball".to_string()]);
        assert_eq!(grids.len(), 1);
        assert!(grids[0].grid().is_some());
        assert_eq!(serde_json::to_value(&section).unwrap()["status"], "ready");
    }
}

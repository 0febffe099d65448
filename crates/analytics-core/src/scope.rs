//! Scoped selection: one pitcher, a set of seasons.
//!
//! Every aggregator consumes a [`ScopedPitches`] view rather than the full
//! table. Selection borrows rows and keeps their original order.

use std::collections::BTreeSet;

use pitchscope_model::category::Hand;
use pitchscope_model::pitch::{PitchRecord, PitcherId};
use pitchscope_model::zone::ZoneQualityRecord;
use serde::Serialize;

/// The (pitcher, seasons) selection all derived tables are relative to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Scope {
    pub pitcher_id: PitcherId,
    pub seasons: BTreeSet<i32>,
}

impl Scope {
    pub fn new(pitcher_id: impl Into<String>, seasons: impl IntoIterator<Item = i32>) -> Self {
        Self {
            pitcher_id: PitcherId::new(pitcher_id),
            seasons: seasons.into_iter().collect(),
        }
    }

    fn matches(&self, pitcher_id: &PitcherId, season_year: i32) -> bool {
        &self.pitcher_id == pitcher_id && self.seasons.contains(&season_year)
    }
}

/// Pitch rows inside a scope, in table order.
#[derive(Debug, Clone, Default)]
pub struct ScopedPitches<'a> {
    rows: Vec<&'a PitchRecord>,
}

impl<'a> ScopedPitches<'a> {
    /// Wrap rows that were already selected.
    pub fn from_rows(rows: Vec<&'a PitchRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[&'a PitchRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// An empty scope is the "no data" state, not a failure.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a PitchRecord> + '_ {
        self.rows.iter().copied()
    }
}

/// Select the pitch rows matching a scope.
pub fn select_pitches<'a>(pitches: &'a [PitchRecord], scope: &Scope) -> ScopedPitches<'a> {
    ScopedPitches {
        rows: pitches
            .iter()
            .filter(|p| scope.matches(&p.pitcher_id, p.season_year))
            .collect(),
    }
}

/// Select the zone-quality rows matching a scope.
///
/// Returns `None` when the zone-quality source itself is absent, so callers
/// can tell "unavailable" apart from "no rows for this pitcher".
pub fn select_zone_quality<'a>(
    zone_quality: Option<&'a [ZoneQualityRecord]>,
    scope: &Scope,
) -> Option<Vec<&'a ZoneQualityRecord>> {
    zone_quality.map(|rows| {
        rows.iter()
            .filter(|z| scope.matches(&z.pitcher_id, z.season_year))
            .collect()
    })
}

/// Headline figures for a scoped pitcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PitcherSummary {
    pub pitcher_id: PitcherId,
    pub name: String,
    pub hand: Hand,
    pub total_pitches: usize,
    pub seasons: Vec<i32>,
    pub pitch_type_count: usize,
}

/// Summarize a scope. `None` for an empty scope.
pub fn pitcher_summary(scoped: &ScopedPitches<'_>) -> Option<PitcherSummary> {
    let first = scoped.rows.first()?;
    let seasons: BTreeSet<i32> = scoped.iter().map(|p| p.season_year).collect();
    let pitch_types: BTreeSet<&str> = scoped.iter().map(|p| p.pitch_type.as_str()).collect();

    Some(PitcherSummary {
        pitcher_id: first.pitcher_id.clone(),
        name: first.pitcher_name.clone(),
        hand: first.pitcher_hand,
        total_pitches: scoped.len(),
        seasons: seasons.into_iter().collect(),
        pitch_type_count: pitch_types.len(),
    })
}

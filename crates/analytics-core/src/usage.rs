//! Yearly pitch-type usage.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::scope::ScopedPitches;

/// Pitches thrown of one type in one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageRow {
    pub season_year: i32,
    pub pitch_type: String,
    pub count: usize,
}

/// Count scoped pitches by (season, pitch type).
///
/// Rows come out ordered by season, then pitch type. Combinations with no
/// pitches are absent rather than zero-filled.
pub fn yearly_usage(scoped: &ScopedPitches<'_>) -> Vec<UsageRow> {
    let mut counts: BTreeMap<(i32, &str), usize> = BTreeMap::new();
    for pitch in scoped.iter() {
        *counts
            .entry((pitch.season_year, pitch.pitch_type.as_str()))
            .or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((season_year, pitch_type), count)| UsageRow {
            season_year,
            pitch_type: pitch_type.to_string(),
            count,
        })
        .collect()
}

//! Pitcher directory and search.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use pitchscope_model::category::Hand;
use pitchscope_model::pitch::{PitchRecord, PitcherId};
use serde::Serialize;

/// Minimum query length before a name filter applies.
pub const MIN_QUERY_CHARS: usize = 2;

/// One distinct (id, name, hand) combination in the pitch table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PitcherEntry {
    pub pitcher_id: PitcherId,
    pub pitcher_name: String,
    pub pitcher_hand: Hand,
}

/// Filter applied to the directory.
#[derive(Debug, Clone, Default)]
pub struct PitcherQuery {
    /// Restrict to one throwing hand.
    pub hand: Option<Hand>,
    /// Case-insensitive name substring. Ignored when shorter than [`MIN_QUERY_CHARS`].
    pub name: Option<String>,
}

/// Distinct pitchers sorted by name.
///
/// Names compare case-insensitively first and by code point second, which
/// also orders Hangul syllables in dictionary order. Ties fall back to id and
/// hand so repeated calls return the same order.
pub fn pitcher_directory(pitches: &[PitchRecord]) -> Vec<PitcherEntry> {
    let mut seen = HashSet::new();
    let mut entries: Vec<PitcherEntry> = pitches
        .iter()
        .filter(|p| seen.insert((&p.pitcher_id, p.pitcher_name.as_str(), p.pitcher_hand)))
        .map(|p| PitcherEntry {
            pitcher_id: p.pitcher_id.clone(),
            pitcher_name: p.pitcher_name.clone(),
            pitcher_hand: p.pitcher_hand,
        })
        .collect();

    entries.sort_by(|a, b| {
        compare_names(&a.pitcher_name, &b.pitcher_name)
            .then_with(|| a.pitcher_id.cmp(&b.pitcher_id))
            .then_with(|| a.pitcher_hand.cmp(&b.pitcher_hand))
    });
    entries
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Apply a hand filter and name query to a directory listing.
pub fn search_pitchers(directory: &[PitcherEntry], query: &PitcherQuery) -> Vec<PitcherEntry> {
    let needle = query
        .name
        .as_deref()
        .map(str::trim)
        .filter(|q| q.chars().count() >= MIN_QUERY_CHARS)
        .map(str::to_lowercase);

    directory
        .iter()
        .filter(|entry| query.hand.map_or(true, |hand| entry.pitcher_hand == hand))
        .filter(|entry| {
            needle
                .as_deref()
                .map_or(true, |n| entry.pitcher_name.to_lowercase().contains(n))
        })
        .cloned()
        .collect()
}

/// Sorted distinct seasons in which a pitcher appears.
pub fn pitcher_seasons(pitches: &[PitchRecord], pitcher_id: &PitcherId) -> Vec<i32> {
    pitches
        .iter()
        .filter(|p| &p.pitcher_id == pitcher_id)
        .map(|p| p.season_year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

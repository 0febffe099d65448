//! Categorical frequency tables.
//!
//! Used for movement buckets and pitch labels: counts per distinct value,
//! share of all scoped pitches, most frequent first.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::rounding::percentage;
use crate::scope::ScopedPitches;

/// One value of a categorical column and how often it occurs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    pub value: String,
    pub count: usize,
    /// Percentage of `total`, one decimal.
    pub share: f64,
}

/// Count values, skipping blanks, and rank by descending count.
///
/// Equal counts keep ascending value order. `total` is the share
/// denominator, normally the number of scoped pitches including blanks.
pub fn frequency_table<'v>(
    values: impl IntoIterator<Item = &'v str>,
    total: usize,
    limit: Option<usize>,
) -> Vec<FrequencyRow> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        *counts.entry(value).or_default() += 1;
    }

    let mut rows: Vec<FrequencyRow> = counts
        .into_iter()
        .map(|(value, count)| FrequencyRow {
            value: value.to_string(),
            count,
            share: percentage(count, total),
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    rows
}

/// Most used pitch labels in a scope.
pub fn top_pitch_labels(scoped: &ScopedPitches<'_>, limit: usize) -> Vec<FrequencyRow> {
    frequency_table(
        scoped.iter().map(|p| p.pitch_label.as_str()),
        scoped.len(),
        Some(limit),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchscope_model::category::{Hand, VelocityTier};
    use pitchscope_model::pitch::PitchRecord;

    #[test]
    fn test_ranks_by_count_then_value() {
        let rows = frequency_table(["drop", "rise", "drop", "flat", "rise", "drop"], 6, None);
        let values: Vec<_> = rows.iter().map(|r| (r.value.as_str(), r.count)).collect();
        assert_eq!(values, vec![("drop", 3), ("rise", 2), ("flat", 1)]);
        assert_eq!(rows[0].share, 50.0);
        assert_eq!(rows[2].share, 16.7);
    }

    #[test]
    fn test_blank_values_are_skipped_but_counted_in_total() {
        let rows = frequency_table(["arm", "", " ", "arm"], 4, None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].share, 50.0);
    }

    #[test]
    fn test_top_labels_truncates() {
        let pitches: Vec<PitchRecord> = ["S-arm-rise", "A-arm-rise", "S-arm-rise", "B-glove-drop"]
            .into_iter()
            .map(|label| {
                PitchRecord::new("1", "Kim", Hand::Right, 2024, "Fastball", VelocityTier::S, 150.0)
                    .with_label(label)
            })
            .collect();
        let scoped = ScopedPitches::from_rows(pitches.iter().collect());

        let top = top_pitch_labels(&scoped, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].value, "S-arm-rise");
        assert_eq!(top[0].count, 2);
        assert_eq!(top[1].value, "A-arm-rise");
    }

    #[test]
    fn test_empty_input() {
        assert!(frequency_table(Vec::<&str>::new(), 0, None).is_empty());
    }
}

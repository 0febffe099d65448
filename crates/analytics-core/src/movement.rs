//! Per-pitch-type speed and break statistics.
//!
//! # Rounding
//!
//! - speed mean and standard deviation: 1 decimal
//! - speed min and max: nearest integer
//! - break means and shares: 1 decimal
//!
//! Standard deviation is the sample deviation (n - 1 denominator). A single
//! pitch has no spread and reports [`SpeedSpread::NotApplicable`].

use std::collections::BTreeMap;

use pitchscope_model::pitch::PitchRecord;
use serde::Serialize;

use crate::frequency::{frequency_table, FrequencyRow};
use crate::rounding::{percentage, round_to};
use crate::scope::ScopedPitches;

/// Sample standard deviation, or the marker that it is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SpeedSpread {
    Value(f64),
    /// Fewer than two observations.
    NotApplicable,
}

impl SpeedSpread {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::NotApplicable => None,
        }
    }
}

/// Descriptive statistics for one pitch type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PitchTypeStats {
    pub pitch_type: String,
    pub count: usize,
    /// Percentage of all scoped pitches.
    pub share: f64,
    pub speed_mean: f64,
    pub speed_std: SpeedSpread,
    pub speed_min: f64,
    pub speed_max: f64,
    /// `None` when no pitch of this type has a recorded horizontal break.
    pub horizontal_break_mean: Option<f64>,
    pub vertical_break_mean: Option<f64>,
}

/// Statistics table plus the two movement-bucket frequency tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MovementSummary {
    /// Most used pitch type first.
    pub pitch_types: Vec<PitchTypeStats>,
    pub horizontal_buckets: Vec<FrequencyRow>,
    pub vertical_buckets: Vec<FrequencyRow>,
}

impl MovementSummary {
    pub fn is_empty(&self) -> bool {
        self.pitch_types.is_empty()
    }
}

/// A single pitch's break, for scatter rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovementPoint {
    pub pitch_type: String,
    pub horizontal_break: f64,
    pub vertical_break: f64,
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn sample_std(values: &[f64], mean: f64) -> SpeedSpread {
    if values.len() < 2 {
        return SpeedSpread::NotApplicable;
    }
    let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    SpeedSpread::Value((ss / (values.len() - 1) as f64).sqrt())
}

fn describe(pitch_type: &str, group: &[&PitchRecord], total: usize) -> PitchTypeStats {
    let speeds: Vec<f64> = group.iter().map(|p| p.speed).collect();
    let h_breaks: Vec<f64> = group.iter().filter_map(|p| p.horizontal_break).collect();
    let v_breaks: Vec<f64> = group.iter().filter_map(|p| p.vertical_break).collect();

    // Groups are never empty, so speeds has at least one value.
    let speed_mean = mean(&speeds).unwrap_or(0.0);
    let speed_min = speeds.iter().copied().fold(f64::INFINITY, f64::min);
    let speed_max = speeds.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    PitchTypeStats {
        pitch_type: pitch_type.to_string(),
        count: group.len(),
        share: percentage(group.len(), total),
        speed_mean: round_to(speed_mean, 1),
        speed_std: match sample_std(&speeds, speed_mean) {
            SpeedSpread::Value(v) => SpeedSpread::Value(round_to(v, 1)),
            SpeedSpread::NotApplicable => SpeedSpread::NotApplicable,
        },
        speed_min: round_to(speed_min, 0),
        speed_max: round_to(speed_max, 0),
        horizontal_break_mean: mean(&h_breaks).map(|m| round_to(m, 1)),
        vertical_break_mean: mean(&v_breaks).map(|m| round_to(m, 1)),
    }
}

/// Per-pitch-type statistics, most used first.
///
/// Pitch types are grouped in ascending name order, then stably sorted by
/// descending count, so equal counts stay alphabetical.
pub fn pitch_type_stats(scoped: &ScopedPitches<'_>) -> Vec<PitchTypeStats> {
    let mut groups: BTreeMap<&str, Vec<&PitchRecord>> = BTreeMap::new();
    for pitch in scoped.iter() {
        groups.entry(pitch.pitch_type.as_str()).or_default().push(pitch);
    }

    let total = scoped.len();
    let mut stats: Vec<PitchTypeStats> = groups
        .iter()
        .map(|(pitch_type, group)| describe(pitch_type, group, total))
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

/// Full movement summary for a scope.
pub fn movement_summary(scoped: &ScopedPitches<'_>) -> MovementSummary {
    let total = scoped.len();
    MovementSummary {
        pitch_types: pitch_type_stats(scoped),
        horizontal_buckets: frequency_table(
            scoped.iter().map(|p| p.h_movement_bucket.as_str()),
            total,
            None,
        ),
        vertical_buckets: frequency_table(
            scoped.iter().map(|p| p.v_movement_bucket.as_str()),
            total,
            None,
        ),
    }
}

/// Break of every scoped pitch with both components recorded.
pub fn movement_points(scoped: &ScopedPitches<'_>) -> Vec<MovementPoint> {
    scoped
        .iter()
        .filter_map(|p| {
            p.movement().map(|(h, v)| MovementPoint {
                pitch_type: p.pitch_type.clone(),
                horizontal_break: h,
                vertical_break: v,
            })
        })
        .collect()
}

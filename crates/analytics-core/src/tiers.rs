//! Velocity-tier distribution per pitch type.
//!
//! Two result shapes come out of the same counts:
//! - [`TierChart`] is sparse. A tier with no pitches for a pitch type has no row.
//! - [`TierTable`] is dense. Every pitch type carries one column per tier seen
//!   anywhere in the scope, and missing combinations read `0.0`.
//!
//! Tiers are always ordered S, A, B, C, D by [`VelocityTier`] rank.

use std::collections::{BTreeMap, BTreeSet};

use pitchscope_model::category::VelocityTier;
use serde::Serialize;

use crate::rounding::percentage;
use crate::scope::ScopedPitches;

/// Share of one tier within one pitch type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierShare {
    pub pitch_type: String,
    pub velocity_tier: VelocityTier,
    pub count: usize,
    /// Percentage of the pitch type's pitches, one decimal.
    pub percentage: f64,
}

/// Chart feed: observed (pitch type, tier) shares, ordered by pitch type then tier rank.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TierChart {
    pub rows: Vec<TierShare>,
}

impl TierChart {
    /// Shares for one pitch type, in tier order.
    pub fn for_pitch_type<'s>(&'s self, pitch_type: &'s str) -> impl Iterator<Item = &'s TierShare> {
        self.rows.iter().filter(move |r| r.pitch_type == pitch_type)
    }
}

/// One pitch type in the cross-tabulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierTableRow {
    pub pitch_type: String,
    /// Aligned with [`TierTable::tiers`].
    pub percentages: Vec<f64>,
}

/// Detail table: pitch types by tiers present in the scope, zero-filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TierTable {
    pub tiers: Vec<VelocityTier>,
    pub rows: Vec<TierTableRow>,
}

/// Both views of the tier distribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TierDistribution {
    pub chart: TierChart,
    pub table: TierTable,
}

impl TierDistribution {
    pub fn is_empty(&self) -> bool {
        self.chart.rows.is_empty()
    }
}

type TierCounts<'a> = BTreeMap<&'a str, BTreeMap<VelocityTier, usize>>;

fn count_tiers<'a>(scoped: &ScopedPitches<'a>) -> TierCounts<'a> {
    let mut counts: TierCounts<'a> = BTreeMap::new();
    for pitch in scoped.iter() {
        *counts
            .entry(pitch.pitch_type.as_str())
            .or_default()
            .entry(pitch.velocity_tier)
            .or_default() += 1;
    }
    counts
}

/// Compute the sparse chart feed and the dense table for a scope.
pub fn tier_distribution(scoped: &ScopedPitches<'_>) -> TierDistribution {
    let counts = count_tiers(scoped);

    let mut chart = TierChart::default();
    for (pitch_type, tiers) in &counts {
        // Non-zero: the pitch type only exists because it was observed.
        let total: usize = tiers.values().sum();
        for (tier, count) in tiers {
            chart.rows.push(TierShare {
                pitch_type: pitch_type.to_string(),
                velocity_tier: *tier,
                count: *count,
                percentage: percentage(*count, total),
            });
        }
    }

    let present: BTreeSet<VelocityTier> = counts
        .values()
        .flat_map(|tiers| tiers.keys().copied())
        .collect();
    let tiers: Vec<VelocityTier> = present.into_iter().collect();

    let rows = counts
        .iter()
        .map(|(pitch_type, by_tier)| {
            let total: usize = by_tier.values().sum();
            TierTableRow {
                pitch_type: pitch_type.to_string(),
                percentages: tiers
                    .iter()
                    .map(|tier| percentage(by_tier.get(tier).copied().unwrap_or(0), total))
                    .collect(),
            }
        })
        .collect();

    TierDistribution {
        chart,
        table: TierTable { tiers, rows },
    }
}

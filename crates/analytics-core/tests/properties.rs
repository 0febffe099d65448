use std::collections::BTreeSet;

use pitchscope_analytics::movement::pitch_type_stats;
use pitchscope_analytics::tiers::tier_distribution;
use pitchscope_analytics::usage::yearly_usage;
use pitchscope_analytics::zone_grid::{build_zone_grid, ZoneGridOutcome, GRID_SIZE};
use pitchscope_analytics::{AnalyticsEngine, Scope, ScopedPitches};
use pitchscope_model::category::{Hand, HorizontalBand, VelocityTier, VerticalBand, ZoneId};
use pitchscope_model::pitch::PitchRecord;
use pitchscope_model::zone::ZoneQualityRecord;
use proptest::prelude::*;

const PITCH_TYPES: [&str; 5] = ["Changeup", "Curve", "Fastball", "Slider", "Splitter"];

fn arb_tier() -> impl Strategy<Value = VelocityTier> {
    prop::sample::select(VelocityTier::ALL.to_vec())
}

fn arb_hand() -> impl Strategy<Value = Hand> {
    prop_oneof![Just(Hand::Left), Just(Hand::Right)]
}

fn arb_zone() -> impl Strategy<Value = ZoneId> {
    (
        prop::sample::select(VerticalBand::TOP_TO_BOTTOM.to_vec()),
        prop::sample::select(HorizontalBand::LEFT_TO_RIGHT.to_vec()),
    )
        .prop_map(|(v, h)| ZoneId::new(v, h))
}

fn arb_pitch() -> impl Strategy<Value = PitchRecord> {
    (
        prop::sample::select(vec!["1", "2"]),
        2021i32..2025,
        prop::sample::select(PITCH_TYPES.to_vec()),
        arb_tier(),
        100.0f64..160.0,
    )
        .prop_map(|(id, season, pitch_type, tier, speed)| {
            PitchRecord::new(id, "Kim", Hand::Right, season, pitch_type, tier, speed)
        })
}

fn arb_zone_row() -> impl Strategy<Value = ZoneQualityRecord> {
    (
        prop::sample::select(PITCH_TYPES.to_vec()),
        arb_hand(),
        arb_zone(),
        1u32..40,
        1.0f64..5.0,
    )
        .prop_map(|(pitch_type, hand, zone, count, score)| {
            ZoneQualityRecord::new("1", 2024, pitch_type, hand, zone, count, "B", score)
        })
}

proptest! {
    #[test]
    fn tier_percentages_sum_to_one_hundred(pitches in prop::collection::vec(arb_pitch(), 1..80)) {
        let scoped = ScopedPitches::from_rows(pitches.iter().collect());
        let dist = tier_distribution(&scoped);

        for pitch_type in PITCH_TYPES {
            if dist.chart.for_pitch_type(pitch_type).next().is_none() {
                continue;
            }
            let sum: f64 = dist.chart.for_pitch_type(pitch_type).map(|s| s.percentage).sum();
            prop_assert!((sum - 100.0).abs() <= 0.5, "{} sums to {}", pitch_type, sum);
        }
    }

    #[test]
    fn chart_tiers_follow_rank(pitches in prop::collection::vec(arb_pitch(), 1..80)) {
        let scoped = ScopedPitches::from_rows(pitches.iter().collect());
        let dist = tier_distribution(&scoped);

        for pitch_type in PITCH_TYPES {
            let ranks: Vec<usize> = dist
                .chart
                .for_pitch_type(pitch_type)
                .map(|s| s.velocity_tier.rank())
                .collect();
            prop_assert!(ranks.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(dist.chart.for_pitch_type(pitch_type).all(|s| s.count > 0));
        }

        let ranks: Vec<usize> = dist.table.tiers.iter().map(|t| t.rank()).collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        for row in &dist.table.rows {
            prop_assert_eq!(row.percentages.len(), dist.table.tiers.len());
        }
    }

    #[test]
    fn usage_counts_partition_the_scope(pitches in prop::collection::vec(arb_pitch(), 0..80)) {
        let scoped = ScopedPitches::from_rows(pitches.iter().collect());
        let usage = yearly_usage(&scoped);

        let total: usize = usage.iter().map(|row| row.count).sum();
        prop_assert_eq!(total, scoped.len());
        prop_assert!(usage.iter().all(|row| row.count > 0 && row.count <= scoped.len()));

        let seasons: BTreeSet<i32> = scoped.iter().map(|p| p.season_year).collect();
        let types: BTreeSet<&str> = scoped.iter().map(|p| p.pitch_type.as_str()).collect();
        prop_assert!(usage.len() <= seasons.len() * types.len());
    }

    #[test]
    fn movement_rows_are_ordered_by_count(pitches in prop::collection::vec(arb_pitch(), 0..80)) {
        let scoped = ScopedPitches::from_rows(pitches.iter().collect());
        let stats = pitch_type_stats(&scoped);

        let ordered = stats.windows(2).all(|w| {
            w[0].count > w[1].count || (w[0].count == w[1].count && w[0].pitch_type < w[1].pitch_type)
        });
        prop_assert!(ordered);
        prop_assert!(stats.iter().all(|s| s.speed_min <= s.speed_max));
        prop_assert_eq!(stats.iter().map(|s| s.count).sum::<usize>(), scoped.len());
    }

    #[test]
    fn zone_grid_is_full_or_empty(
        rows in prop::collection::vec(arb_zone_row(), 0..60),
        pitch_type in prop::sample::select(PITCH_TYPES.to_vec()),
        hand in arb_hand(),
    ) {
        let refs: Vec<&ZoneQualityRecord> = rows.iter().collect();
        let matching = rows
            .iter()
            .filter(|r| r.pitch_type == pitch_type && r.batter_hand == hand)
            .count();

        match build_zone_grid(Some(refs.as_slice()), pitch_type, hand) {
            ZoneGridOutcome::Grid(grid) => {
                prop_assert!(matching > 0);
                prop_assert_eq!(grid.cells.len(), GRID_SIZE * GRID_SIZE);
                prop_assert!(grid.populated_cells() <= matching);
                prop_assert!(grid.cells.iter().all(|c| c.score.is_some() == c.count.is_some()));
            }
            ZoneGridOutcome::Empty => prop_assert_eq!(matching, 0),
            ZoneGridOutcome::Unavailable => prop_assert!(false, "source was provided"),
        }
    }

    #[test]
    fn scoped_results_are_idempotent(
        pitches in prop::collection::vec(arb_pitch(), 0..60),
        seasons in prop::collection::btree_set(2021i32..2025, 0..4),
    ) {
        let engine = AnalyticsEngine::new(&pitches, None);
        let scope = Scope::new("1", seasons);

        let first = engine.scope(&scope);
        let second = engine.scope(&scope);
        prop_assert!(first.pitches().iter().all(|p| p.pitcher_id.as_str() == "1"));
        prop_assert_eq!(first.usage(), second.usage());
        prop_assert_eq!(first.tiers(), second.tiers());
        prop_assert_eq!(first.movement(), second.movement());
    }
}

//! PitchScope Analytics: the aggregation engine
//!
//! Turns a scoped pitch table (plus an optional zone-quality table) into the
//! derived tables a presentation layer renders:
//! - **Directory:** Distinct pitchers, name search, active seasons
//! - **Scope:** One pitcher, a subset of seasons
//! - **Usage:** Yearly pitch-type counts
//! - **Tiers:** Velocity-tier shares per pitch type, sparse and dense
//! - **Movement:** Speed and break statistics, movement-bucket frequencies
//! - **Zone grid:** Dense 5x5 quality matrix per pitch type and batter hand
//!
//! This crate is pure computation with no I/O and no shared mutable state.
//! All inputs are borrowed snapshots; all outputs are new values.

pub mod directory;
pub mod engine;
pub mod frequency;
pub mod movement;
pub mod report;
pub mod rounding;
pub mod scope;
pub mod tiers;
pub mod usage;
pub mod zone_grid;

pub use engine::AnalyticsEngine;
pub use scope::{Scope, ScopedPitches};

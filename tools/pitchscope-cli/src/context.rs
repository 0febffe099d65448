//! Shared command context: resolved config, data paths, output mode.

use std::path::PathBuf;

use anyhow::Context as _;
use pitchscope_analytics::report::ReportOptions;
use pitchscope_analytics::{AnalyticsEngine, Scope};
use pitchscope_common::config::AppConfig;
use pitchscope_common::error::PitchscopeError;
use pitchscope_model::category::Hand;
use pitchscope_model::dataset::PitchDataset;
use pitchscope_model::pitch::PitcherId;
use serde::Serialize;

use crate::ScopeArgs;

pub struct Context {
    pub config: AppConfig,
    pub json: bool,
    pitches_path: PathBuf,
    zones_path: Option<PathBuf>,
}

impl Context {
    /// Command-line paths win over the configured ones.
    pub fn new(
        config: AppConfig,
        pitches: Option<PathBuf>,
        zones: Option<PathBuf>,
        json: bool,
    ) -> Self {
        let pitches_path = pitches.unwrap_or_else(|| config.data.pitches_path.clone());
        let zones_path = zones.or_else(|| config.data.zone_quality_path.clone());
        Self {
            config,
            json,
            pitches_path,
            zones_path,
        }
    }

    pub fn load_dataset(&self) -> anyhow::Result<PitchDataset> {
        if !self.pitches_path.exists() {
            return Err(PitchscopeError::FileNotFound {
                path: self.pitches_path.clone(),
            }
            .into());
        }
        tracing::debug!(
            pitches = %self.pitches_path.display(),
            zones = ?self.zones_path,
            "Opening dataset"
        );
        PitchDataset::open(&self.pitches_path, self.zones_path.as_deref())
            .with_context(|| format!("Failed to load pitch data from {}", self.pitches_path.display()))
    }

    /// Batter hand from the flag, else from `report.default_batter_hand`.
    pub fn batter_hand(&self, flag: Option<Hand>) -> anyhow::Result<Hand> {
        if let Some(hand) = flag {
            return Ok(hand);
        }
        self.config
            .report
            .default_batter_hand
            .parse::<Hand>()
            .map_err(|e| PitchscopeError::config(format!("report.default_batter_hand: {e}")).into())
    }

    pub fn report_options(&self, batter: Option<Hand>) -> anyhow::Result<ReportOptions> {
        Ok(ReportOptions {
            top_labels: self.config.report.top_labels,
            zone_pitch_types: self.config.report.zone_pitch_types,
            batter_hand: self.batter_hand(batter)?,
        })
    }

    pub fn emit_json<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// Scope for the arguments. No `--season` means every season the pitcher appears in.
pub fn resolve_scope(engine: &AnalyticsEngine<'_>, args: &ScopeArgs) -> Scope {
    let pitcher = args.pitcher.trim();
    let seasons = if args.seasons.is_empty() {
        engine.seasons(&PitcherId::new(pitcher))
    } else {
        args.seasons.clone()
    };
    Scope::new(pitcher, seasons)
}

pub fn print_no_data(scope: &Scope) {
    let seasons: Vec<String> = scope.seasons.iter().map(i32::to_string).collect();
    if seasons.is_empty() {
        println!("No pitches found for pitcher {}.", scope.pitcher_id);
    } else {
        println!(
            "No pitches found for pitcher {} in season(s) {}.",
            scope.pitcher_id,
            seasons.join(", ")
        );
    }
}

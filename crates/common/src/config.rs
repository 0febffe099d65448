//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::PitchscopeResult;

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the pitch and zone-quality tables live.
    #[serde(default)]
    pub data: DataConfig,

    /// Default report parameters.
    #[serde(default)]
    pub report: ReportDefaults,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Input table locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Pitch table (`.csv`, `.jsonl` or `.json`).
    pub pitches_path: PathBuf,

    /// Zone-quality table. Optional; zone grids report "unavailable" without it.
    pub zone_quality_path: Option<PathBuf>,
}

/// Default report parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDefaults {
    /// Number of pitch labels in the label leaderboard.
    pub top_labels: usize,

    /// Number of pitch types to build zone grids for.
    pub zone_pitch_types: usize,

    /// Batter hand used for zone grids when none is given ("L" or "R").
    pub default_batter_hand: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "pitchscope=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        let base = default_data_dir();
        Self {
            pitches_path: base.join("pitches_classified.csv"),
            zone_quality_path: Some(base.join("pitcher_zone_quality.csv")),
        }
    }
}

impl Default for ReportDefaults {
    fn default() -> Self {
        Self {
            top_labels: 20,
            zone_pitch_types: 6,
            default_batter_hand: "R".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load config from an explicit path, falling back to defaults.
    pub fn load_from(config_path: &Path) -> Self {
        if config_path.exists() {
            match std::fs::read_to_string(config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> PitchscopeResult<()> {
        self.save_to(&config_file_path())
    }

    /// Save config to an explicit path.
    pub fn save_to(&self, config_path: &Path) -> PitchscopeResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, json)?;
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("pitchscope").join("config.json")
}

/// Default data directory.
fn default_data_dir() -> PathBuf {
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".local").join("share")
        });
    base.join("pitchscope").join("data")
}

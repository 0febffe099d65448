//! Loading the pitch and zone-quality tables.
//!
//! Both tables are read once into memory and never written back. The
//! zone-quality table is optional: a missing file leaves
//! [`PitchDataset::zone_quality`] as `None` instead of failing the load.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::pitch::{PitchRecord, PitcherId};
use crate::zone::ZoneQualityRecord;

/// On-disk encodings accepted for either table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// One JSON object per line; `#` lines are comments.
    JsonLines,
    /// A single JSON array of row objects.
    Json,
}

impl TableFormat {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("jsonl") | Some("ndjson") => Ok(Self::JsonLines),
            Some("json") => Ok(Self::Json),
            _ => Err(DatasetError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Errors that can occur while loading tables.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    CsvError { path: PathBuf, source: csv::Error },

    #[error("Parse error in {path} (line {line}): {source}")]
    ParseError {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },

    #[error("Unsupported table format: {path} (expected .csv, .jsonl, .ndjson or .json)")]
    UnsupportedFormat { path: PathBuf },
}

/// Read every row of a table file, choosing the decoder by extension.
pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let format = TableFormat::from_path(path)?;
    match format {
        TableFormat::Csv => {
            let file = std::fs::File::open(path).map_err(|e| DatasetError::IoError {
                path: path.to_path_buf(),
                source: e,
            })?;
            parse_csv(file).map_err(|e| DatasetError::CsvError {
                path: path.to_path_buf(),
                source: e,
            })
        }
        TableFormat::JsonLines | TableFormat::Json => {
            let content = std::fs::read_to_string(path).map_err(|e| DatasetError::IoError {
                path: path.to_path_buf(),
                source: e,
            })?;
            let parsed: Result<Vec<T>, (usize, serde_json::Error)> = if format == TableFormat::Json {
                serde_json::from_str(&content)
                    .and_then(from_json_value)
                    .map_err(|e| (e.line(), e))
            } else {
                parse_jsonl(&content)
            };
            parsed.map_err(|(line, source)| DatasetError::ParseError {
                path: path.to_path_buf(),
                line,
                source,
            })
        }
    }
}

/// Parse CSV rows (with header) from any reader.
pub fn parse_csv<T: DeserializeOwned>(reader: impl std::io::Read) -> Result<Vec<T>, csv::Error> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_deserialize()
        .collect()
}

/// Parse JSONL content. Errors carry the 1-based line number.
pub fn parse_jsonl<T: DeserializeOwned>(jsonl: &str) -> Result<Vec<T>, (usize, serde_json::Error)> {
    jsonl
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(lineno, line)| {
            serde_json::from_str(line)
                .and_then(from_json_value)
                .map_err(|e| (lineno, e))
        })
        .collect()
}

/// Type a parsed JSON value, turning numeric pitcher ids into their literal text.
fn from_json_value<T: DeserializeOwned>(mut value: Value) -> Result<T, serde_json::Error> {
    stringify_pitcher_ids(&mut value);
    T::deserialize(value)
}

fn stringify_pitcher_ids(value: &mut Value) {
    match value {
        Value::Array(rows) => rows.iter_mut().for_each(stringify_pitcher_ids),
        Value::Object(row) => {
            for column in PitcherId::COLUMNS {
                if let Some(id) = row.get_mut(column) {
                    if id.is_number() {
                        *id = Value::String(id.to_string());
                    }
                }
            }
        }
        _ => {}
    }
}

/// Both input tables, resident in memory.
#[derive(Debug, Clone, Default)]
pub struct PitchDataset {
    /// Pitch table, in file order.
    pub pitches: Vec<PitchRecord>,

    /// Zone-quality table, `None` when the source is unavailable.
    pub zone_quality: Option<Vec<ZoneQualityRecord>>,
}

impl PitchDataset {
    /// Build a dataset from already-materialized rows.
    pub fn from_records(
        pitches: Vec<PitchRecord>,
        zone_quality: Option<Vec<ZoneQualityRecord>>,
    ) -> Self {
        Self {
            pitches,
            zone_quality,
        }
    }

    /// Load the pitch table and, if a path is given and exists, the zone table.
    pub fn open(
        pitches_path: impl AsRef<Path>,
        zone_quality_path: Option<&Path>,
    ) -> Result<Self, DatasetError> {
        let pitches_path = pitches_path.as_ref();
        let pitches: Vec<PitchRecord> = read_table(pitches_path)?;
        tracing::info!(
            path = %pitches_path.display(),
            rows = pitches.len(),
            "Loaded pitch table"
        );

        let zone_quality = match zone_quality_path {
            Some(path) if path.exists() => {
                let rows: Vec<ZoneQualityRecord> = read_table(path)?;
                tracing::info!(path = %path.display(), rows = rows.len(), "Loaded zone-quality table");
                let duplicates = duplicate_zone_keys(&rows);
                if duplicates > 0 {
                    tracing::warn!(
                        path = %path.display(),
                        duplicates,
                        "Zone-quality table repeats cell keys; the first row per cell wins"
                    );
                }
                Some(rows)
            }
            Some(path) => {
                tracing::warn!(
                    path = %path.display(),
                    "Zone-quality table not found; zone grids will be unavailable"
                );
                None
            }
            None => None,
        };

        Ok(Self {
            pitches,
            zone_quality,
        })
    }

    /// Whether the optional zone-quality table was loaded.
    pub fn has_zone_quality(&self) -> bool {
        self.zone_quality.is_some()
    }
}

/// Count rows whose (pitcher, season, pitch type, batter hand, zone) key repeats.
pub fn duplicate_zone_keys(rows: &[ZoneQualityRecord]) -> usize {
    let mut seen = HashSet::with_capacity(rows.len());
    rows.iter()
        .filter(|r| {
            !seen.insert((
                &r.pitcher_id,
                r.season_year,
                r.pitch_type.as_str(),
                r.batter_hand,
                r.zone_id,
            ))
        })
        .count()
}

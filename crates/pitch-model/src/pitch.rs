//! Pitch-level records.
//!
//! One [`PitchRecord`] per recorded pitch. Classification columns
//! (`pitch_type`, `velocity_tier`, `pitch_label`, movement buckets) are
//! produced upstream and consumed here as-is.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::category::{Hand, VelocityTier};

/// Opaque pitcher key. Numeric codes in the source are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PitcherId(pub String);

impl PitcherId {
    /// Column names that carry a pitcher id in either input table.
    pub const COLUMNS: [&'static str; 2] = ["pitcher_id", "pitcher_pcode"];

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PitcherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PitcherId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Ids are read as text, so `0123` and `123` stay distinct and `60146.0`
/// keeps its spelling. JSON loaders turn numeric ids into text first
/// (see [`PitcherId::COLUMNS`]).
impl<'de> Deserialize<'de> for PitcherId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_string(PitcherIdVisitor)
    }
}

struct PitcherIdVisitor;

impl<'de> Visitor<'de> for PitcherIdVisitor {
    type Value = PitcherId;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a pitcher id string or integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<PitcherId, E> {
        Ok(PitcherId(v.trim().to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<PitcherId, E> {
        if v.trim().len() == v.len() {
            Ok(PitcherId(v))
        } else {
            self.visit_str(&v)
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<PitcherId, E> {
        Ok(PitcherId(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<PitcherId, E> {
        Ok(PitcherId(v.to_string()))
    }
}

/// A single classified pitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchRecord {
    #[serde(alias = "pitcher_pcode")]
    pub pitcher_id: PitcherId,

    pub pitcher_name: String,

    pub pitcher_hand: Hand,

    pub season_year: i32,

    /// Open set of pitch-type labels ("Fastball", "Slider", ...).
    pub pitch_type: String,

    /// Tier relative to the same pitch type.
    pub velocity_tier: VelocityTier,

    /// Release speed, single unit across the dataset.
    pub speed: f64,

    /// Signed horizontal break. Missing when tracking dropped the value.
    #[serde(alias = "pfx_x", default)]
    pub horizontal_break: Option<f64>,

    /// Signed vertical break.
    #[serde(alias = "pfx_z", default)]
    pub vertical_break: Option<f64>,

    #[serde(alias = "pitch_no", default)]
    pub pitch_sequence_no: Option<u32>,

    #[serde(default)]
    pub pitch_label: String,

    #[serde(alias = "h_movement", default)]
    pub h_movement_bucket: String,

    #[serde(alias = "v_movement", default)]
    pub v_movement_bucket: String,
}

impl PitchRecord {
    /// Create a record with the required columns; optional columns are empty.
    pub fn new(
        pitcher_id: impl Into<String>,
        pitcher_name: impl Into<String>,
        pitcher_hand: Hand,
        season_year: i32,
        pitch_type: impl Into<String>,
        velocity_tier: VelocityTier,
        speed: f64,
    ) -> Self {
        Self {
            pitcher_id: PitcherId::new(pitcher_id),
            pitcher_name: pitcher_name.into(),
            pitcher_hand,
            season_year,
            pitch_type: pitch_type.into(),
            velocity_tier,
            speed,
            horizontal_break: None,
            vertical_break: None,
            pitch_sequence_no: None,
            pitch_label: String::new(),
            h_movement_bucket: String::new(),
            v_movement_bucket: String::new(),
        }
    }

    pub fn with_break(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_break = Some(horizontal);
        self.vertical_break = Some(vertical);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.pitch_label = label.into();
        self
    }

    pub fn with_buckets(mut self, horizontal: impl Into<String>, vertical: impl Into<String>) -> Self {
        self.h_movement_bucket = horizontal.into();
        self.v_movement_bucket = vertical.into();
        self
    }

    /// Both break components, if both were recorded.
    pub fn movement(&self) -> Option<(f64, f64)> {
        self.horizontal_break.zip(self.vertical_break)
    }
}

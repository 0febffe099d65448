//! Zone-quality grids.
//!
//! Expands the sparse zone-quality rows for one (pitch type, batter hand)
//! into a dense 5x5 matrix. Rows run top to bottom (bands E..A), columns
//! left to right (bands 1..5).

use std::collections::BTreeMap;

use pitchscope_model::category::{Hand, HorizontalBand, VerticalBand, ZoneId};
use pitchscope_model::zone::ZoneQualityRecord;
use serde::Serialize;

/// Grid edge length.
pub const GRID_SIZE: usize = 5;

/// Display text for a cell without a record.
pub const EMPTY_CELL_TEXT: &str = "-";

/// Rectangle of zone bands, inclusive on every side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneRect {
    pub top: VerticalBand,
    pub bottom: VerticalBand,
    pub left: HorizontalBand,
    pub right: HorizontalBand,
}

impl ZoneRect {
    pub fn contains(&self, zone: ZoneId) -> bool {
        (self.bottom..=self.top).contains(&zone.vertical)
            && (self.left..=self.right).contains(&zone.horizontal)
    }

    /// Inclusive (row, col) bounds of the rectangle in grid coordinates.
    pub fn grid_bounds(&self) -> ((usize, usize), (usize, usize)) {
        (
            (row_index(self.top), col_index(self.left)),
            (row_index(self.bottom), col_index(self.right)),
        )
    }
}

/// The strike zone: bands B..D by 2..4. Fixed, not derived from data.
pub const STRIKE_ZONE: ZoneRect = ZoneRect {
    top: VerticalBand::D,
    bottom: VerticalBand::B,
    left: HorizontalBand::H2,
    right: HorizontalBand::H4,
};

fn row_index(band: VerticalBand) -> usize {
    VerticalBand::TOP_TO_BOTTOM
        .iter()
        .position(|b| *b == band)
        .unwrap_or(0)
}

fn col_index(band: HorizontalBand) -> usize {
    band.number() as usize - 1
}

/// One cell of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneCell {
    pub zone_id: ZoneId,
    /// Average quality score. `None` means no pitches were observed here.
    pub score: Option<f64>,
    /// `"<class> (<count>)"`, or `"-"` when empty.
    pub text: String,
    pub count: Option<u32>,
    pub avg_class: Option<String>,
}

impl ZoneCell {
    fn empty(zone_id: ZoneId) -> Self {
        Self {
            zone_id,
            score: None,
            text: EMPTY_CELL_TEXT.to_string(),
            count: None,
            avg_class: None,
        }
    }

    fn from_record(record: &ZoneQualityRecord) -> Self {
        Self {
            zone_id: record.zone_id,
            score: Some(record.avg_score),
            text: format!("{} ({})", record.avg_class, record.count),
            count: Some(record.count),
            avg_class: Some(record.avg_class.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.score.is_none()
    }
}

/// Dense 5x5 quality grid for one pitch type against one batter hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneGrid {
    pub pitch_type: String,
    pub batter_hand: Hand,
    /// Vertical band of each row, top first.
    pub rows: [VerticalBand; GRID_SIZE],
    /// Horizontal band of each column, left first.
    pub cols: [HorizontalBand; GRID_SIZE],
    /// Row-major cells.
    pub cells: Vec<ZoneCell>,
    pub strike_zone: ZoneRect,
}

impl ZoneGrid {
    pub fn cell(&self, row: usize, col: usize) -> Option<&ZoneCell> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        self.cells.get(row * GRID_SIZE + col)
    }

    pub fn cell_at(&self, zone: ZoneId) -> Option<&ZoneCell> {
        self.cell(row_index(zone.vertical), col_index(zone.horizontal))
    }

    /// Scores as a row-major matrix, `None` for empty cells.
    pub fn score_matrix(&self) -> Vec<Vec<Option<f64>>> {
        self.cells
            .chunks(GRID_SIZE)
            .map(|row| row.iter().map(|c| c.score).collect())
            .collect()
    }

    pub fn populated_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

/// Result of building a zone grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "grid", rename_all = "snake_case")]
pub enum ZoneGridOutcome {
    /// The zone-quality source was not loaded.
    Unavailable,
    /// The source is loaded but has no row for this pitch type and hand.
    Empty,
    Grid(ZoneGrid),
}

impl ZoneGridOutcome {
    pub fn grid(&self) -> Option<&ZoneGrid> {
        match self {
            Self::Grid(grid) => Some(grid),
            _ => None,
        }
    }
}

/// Build the grid for one pitch type and batter hand.
///
/// `zone_rows` is the scoped zone table, `None` when the source is absent.
/// If several rows share a zone (e.g. one per selected season), the first in
/// table order is used.
pub fn build_zone_grid(
    zone_rows: Option<&[&ZoneQualityRecord]>,
    pitch_type: &str,
    batter_hand: Hand,
) -> ZoneGridOutcome {
    let Some(rows) = zone_rows else {
        return ZoneGridOutcome::Unavailable;
    };

    let mut by_zone: BTreeMap<ZoneId, &ZoneQualityRecord> = BTreeMap::new();
    for record in rows
        .iter()
        .filter(|r| r.pitch_type == pitch_type && r.batter_hand == batter_hand)
    {
        by_zone.entry(record.zone_id).or_insert(*record);
    }

    if by_zone.is_empty() {
        return ZoneGridOutcome::Empty;
    }

    let cells = VerticalBand::TOP_TO_BOTTOM
        .into_iter()
        .flat_map(|v| {
            HorizontalBand::LEFT_TO_RIGHT
                .into_iter()
                .map(move |h| ZoneId::new(v, h))
        })
        .map(|zone| match by_zone.get(&zone) {
            Some(record) => ZoneCell::from_record(record),
            None => ZoneCell::empty(zone),
        })
        .collect();

    ZoneGridOutcome::Grid(ZoneGrid {
        pitch_type: pitch_type.to_string(),
        batter_hand,
        rows: VerticalBand::TOP_TO_BOTTOM,
        cols: HorizontalBand::LEFT_TO_RIGHT,
        cells,
        strike_zone: STRIKE_ZONE,
    })
}

/// Most frequent pitch types in the scoped zone table, by row count.
///
/// Ties are broken by pitch-type name.
pub fn zone_pitch_types(zone_rows: &[&ZoneQualityRecord], limit: usize) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in zone_rows {
        *counts.entry(record.pitch_type.as_str()).or_default() += 1;
    }
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(limit)
        .map(|(pitch_type, _)| pitch_type.to_string())
        .collect()
}

/// One row of the zone detail table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneDetailRow {
    pub pitch_type: String,
    pub zone_id: ZoneId,
    pub count: u32,
    pub avg_class: String,
    pub avg_score: f64,
    /// Tier percentages S, A, B, C, D.
    pub tier_percentages: [f64; 5],
}

/// Scoped zone rows for one batter hand, sorted by pitch type then zone.
pub fn zone_detail(zone_rows: &[&ZoneQualityRecord], batter_hand: Hand) -> Vec<ZoneDetailRow> {
    let mut rows: Vec<ZoneDetailRow> = zone_rows
        .iter()
        .filter(|r| r.batter_hand == batter_hand)
        .map(|r| ZoneDetailRow {
            pitch_type: r.pitch_type.clone(),
            zone_id: r.zone_id,
            count: r.count,
            avg_class: r.avg_class.clone(),
            avg_score: r.avg_score,
            tier_percentages: r.tier_percentages(),
        })
        .collect();
    rows.sort_by(|a, b| {
        a.pitch_type
            .cmp(&b.pitch_type)
            .then_with(|| a.zone_id.cmp(&b.zone_id))
    });
    rows
}

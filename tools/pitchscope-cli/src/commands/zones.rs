//! Zone-quality grids.

use pitchscope_analytics::report::{zone_section, ZoneSection};
use pitchscope_analytics::zone_grid::{ZoneDetailRow, ZoneGrid, ZoneGridOutcome};
use pitchscope_analytics::AnalyticsEngine;
use pitchscope_model::category::Hand;

use crate::context::{self, Context};
use crate::table;
use crate::ScopeArgs;

pub fn run(
    ctx: &Context,
    args: ScopeArgs,
    batter: Option<Hand>,
    pitch_types: Vec<String>,
    detail: bool,
) -> anyhow::Result<()> {
    let options = ctx.report_options(batter)?;
    let data = ctx.load_dataset()?;
    let engine = AnalyticsEngine::from_dataset(&data);
    let view = engine.scope(&context::resolve_scope(&engine, &args));

    let requested = (!pitch_types.is_empty()).then_some(pitch_types);
    let section = zone_section(&view, requested, &options);

    if ctx.json {
        return ctx.emit_json(&section);
    }

    match section {
        ZoneSection::Unavailable => println!("Zone-quality data is not available."),
        _ if view.is_empty() => context::print_no_data(view.scope()),
        ZoneSection::NoData => println!("No zone data for the selected seasons."),
        ZoneSection::Ready {
            batter_hand,
            pitch_types,
            grids,
            detail: rows,
        } => {
            print_grids(&pitch_types, &grids, batter_hand);
            if detail {
                println!();
                print_detail(&rows);
            }
        }
    }
    Ok(())
}

pub fn print_grids(pitch_types: &[String], grids: &[ZoneGridOutcome], batter_hand: Hand) {
    if pitch_types.is_empty() {
        println!("No zone data for the selected seasons.");
        return;
    }
    for (pitch_type, outcome) in pitch_types.iter().zip(grids) {
        match outcome {
            ZoneGridOutcome::Grid(grid) => print_grid(grid),
            ZoneGridOutcome::Empty => {
                println!("{pitch_type} vs {batter_hand}: no zone data");
            }
            ZoneGridOutcome::Unavailable => {
                println!("{pitch_type} vs {batter_hand}: zone-quality data is not available");
            }
        }
        println!();
    }
    println!("[ ] marks the strike zone");
}

/// Render one grid, top row first, with the strike zone bracketed.
pub fn print_grid(grid: &ZoneGrid) {
    let width = grid
        .cells
        .iter()
        .map(|c| c.text.chars().count() + 2)
        .max()
        .unwrap_or(3);

    println!(
        "{} vs {}-handed batters ({} cells)",
        grid.pitch_type,
        grid.batter_hand,
        grid.populated_cells()
    );
    let header: Vec<String> = grid
        .cols
        .iter()
        .map(|col| format!("{:^width$}", col.number()))
        .collect();
    println!("   {}", header.join(" "));

    for (r, band) in grid.rows.iter().enumerate() {
        let cells: Vec<String> = (0..grid.cols.len())
            .filter_map(|c| grid.cell(r, c))
            .map(|cell| {
                let text = if grid.strike_zone.contains(cell.zone_id) {
                    format!("[{}]", cell.text)
                } else {
                    cell.text.clone()
                };
                format!("{text:^width$}")
            })
            .collect();
        println!(" {}  {}", band.as_char(), cells.join(" "));
    }
}

pub fn print_detail(detail: &[ZoneDetailRow]) {
    let rows: Vec<Vec<String>> = detail
        .iter()
        .map(|row| {
            let mut cells = vec![
                row.pitch_type.clone(),
                row.zone_id.to_string(),
                row.count.to_string(),
                row.avg_class.clone(),
                format!("{:.2}", row.avg_score),
            ];
            cells.extend(row.tier_percentages.iter().map(|p| format!("{p:.1}")));
            cells
        })
        .collect();
    table::print_table(
        &[
            "Pitch type",
            "Zone",
            "Count",
            "Class",
            "Score",
            "S%",
            "A%",
            "B%",
            "C%",
            "D%",
        ],
        &rows,
    );
}

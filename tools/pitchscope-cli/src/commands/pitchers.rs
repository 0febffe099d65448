//! List and search pitchers.

use pitchscope_analytics::directory::{PitcherEntry, PitcherQuery};
use pitchscope_analytics::AnalyticsEngine;
use pitchscope_model::category::Hand;

use crate::context::Context;
use crate::table;

pub fn run(ctx: &Context, hand: Option<Hand>, name: Option<String>) -> anyhow::Result<()> {
    let data = ctx.load_dataset()?;
    let engine = AnalyticsEngine::from_dataset(&data);
    let entries = engine.search(&PitcherQuery { hand, name });

    if ctx.json {
        return ctx.emit_json(&entries);
    }
    if entries.is_empty() {
        println!("No pitchers match.");
        return Ok(());
    }
    print_entries(&entries);
    println!();
    println!("{} pitcher(s)", entries.len());
    Ok(())
}

fn print_entries(entries: &[PitcherEntry]) {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.pitcher_id.to_string(),
                e.pitcher_name.clone(),
                e.pitcher_hand.to_string(),
            ]
        })
        .collect();
    table::print_table(&["ID", "Name", "Hand"], &rows);
}

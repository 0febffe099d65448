//! Velocity-tier distribution per pitch type.

use pitchscope_analytics::tiers::TierDistribution;
use pitchscope_analytics::AnalyticsEngine;

use crate::context::{self, Context};
use crate::table;
use crate::ScopeArgs;

pub fn run(ctx: &Context, args: ScopeArgs) -> anyhow::Result<()> {
    let data = ctx.load_dataset()?;
    let engine = AnalyticsEngine::from_dataset(&data);
    let view = engine.scope(&context::resolve_scope(&engine, &args));
    let tiers = view.tiers();

    if ctx.json {
        return ctx.emit_json(&tiers);
    }
    if tiers.is_empty() {
        context::print_no_data(view.scope());
        return Ok(());
    }
    print_tiers(&tiers);
    Ok(())
}

pub fn print_tiers(tiers: &TierDistribution) {
    let chart_rows: Vec<Vec<String>> = tiers
        .chart
        .rows
        .iter()
        .map(|share| {
            vec![
                share.pitch_type.clone(),
                share.velocity_tier.to_string(),
                share.count.to_string(),
                table::pct(share.percentage),
            ]
        })
        .collect();
    table::print_table(&["Pitch type", "Tier", "Count", "Share"], &chart_rows);
    println!();

    let mut headers = vec!["Pitch type".to_string()];
    headers.extend(tiers.table.tiers.iter().map(|t| format!("{t} (%)")));
    let headers: Vec<&str> = headers.iter().map(String::as_str).collect();

    let table_rows: Vec<Vec<String>> = tiers
        .table
        .rows
        .iter()
        .map(|row| {
            std::iter::once(row.pitch_type.clone())
                .chain(row.percentages.iter().map(|p| format!("{p:.1}")))
                .collect()
        })
        .collect();
    table::print_table(&headers, &table_rows);
}

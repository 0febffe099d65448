//! Yearly pitch-type usage.

use pitchscope_analytics::usage::UsageRow;
use pitchscope_analytics::AnalyticsEngine;

use crate::context::{self, Context};
use crate::table;
use crate::ScopeArgs;

pub fn run(ctx: &Context, args: ScopeArgs) -> anyhow::Result<()> {
    let data = ctx.load_dataset()?;
    let engine = AnalyticsEngine::from_dataset(&data);
    let view = engine.scope(&context::resolve_scope(&engine, &args));
    let usage = view.usage();

    if ctx.json {
        return ctx.emit_json(&usage);
    }
    if view.is_empty() {
        context::print_no_data(view.scope());
        return Ok(());
    }
    print_usage(&usage);
    Ok(())
}

pub fn print_usage(usage: &[UsageRow]) {
    let rows: Vec<Vec<String>> = usage
        .iter()
        .map(|row| {
            vec![
                row.season_year.to_string(),
                row.pitch_type.clone(),
                row.count.to_string(),
            ]
        })
        .collect();
    table::print_table(&["Season", "Pitch type", "Count"], &rows);
}

//! Headline figures for a scope.

use pitchscope_analytics::scope::PitcherSummary;
use pitchscope_analytics::AnalyticsEngine;

use crate::context::{self, Context};
use crate::ScopeArgs;

pub fn run(ctx: &Context, args: ScopeArgs) -> anyhow::Result<()> {
    let data = ctx.load_dataset()?;
    let engine = AnalyticsEngine::from_dataset(&data);
    let view = engine.scope(&context::resolve_scope(&engine, &args));

    let Some(summary) = view.summary() else {
        if ctx.json {
            return ctx.emit_json(&Option::<PitcherSummary>::None);
        }
        context::print_no_data(view.scope());
        return Ok(());
    };

    if ctx.json {
        return ctx.emit_json(&summary);
    }
    print_summary(&summary);
    Ok(())
}

pub fn print_summary(summary: &PitcherSummary) {
    let seasons: Vec<String> = summary.seasons.iter().map(i32::to_string).collect();
    println!("Pitcher: {} ({})", summary.name, summary.pitcher_id);
    println!("  Throws: {}", summary.hand);
    println!("  Seasons: {}", seasons.join(", "));
    println!("  Pitches: {}", summary.total_pitches);
    println!("  Pitch types: {}", summary.pitch_type_count);
}

//! Pitch-label leaderboard.

use pitchscope_analytics::AnalyticsEngine;

use crate::commands::movement::print_frequency;
use crate::context::{self, Context};
use crate::ScopeArgs;

pub fn run(ctx: &Context, args: ScopeArgs, limit: Option<usize>) -> anyhow::Result<()> {
    let data = ctx.load_dataset()?;
    let engine = AnalyticsEngine::from_dataset(&data);
    let view = engine.scope(&context::resolve_scope(&engine, &args));
    let labels = view.top_labels(limit.unwrap_or(ctx.config.report.top_labels));

    if ctx.json {
        return ctx.emit_json(&labels);
    }
    if view.is_empty() {
        context::print_no_data(view.scope());
        return Ok(());
    }
    print_frequency("Pitch label", &labels);
    Ok(())
}

//! Full report for a scope.

use pitchscope_analytics::report::{build_report, ScopeReport, ZoneSection};
use pitchscope_analytics::AnalyticsEngine;
use pitchscope_model::category::Hand;

use crate::commands::{movement, summary, tiers, usage, zones};
use crate::context::{self, Context};
use crate::table;
use crate::ScopeArgs;

pub fn run(ctx: &Context, args: ScopeArgs, batter: Option<Hand>) -> anyhow::Result<()> {
    let options = ctx.report_options(batter)?;
    let data = ctx.load_dataset()?;
    let engine = AnalyticsEngine::from_dataset(&data);
    let view = engine.scope(&context::resolve_scope(&engine, &args));
    let report = build_report(&view, &options);

    if ctx.json {
        return ctx.emit_json(&report);
    }

    let report = match report {
        ScopeReport::NoData { scope } => {
            context::print_no_data(&scope);
            return Ok(());
        }
        ScopeReport::Ready(report) => report,
    };

    summary::print_summary(&report.summary);

    table::section("Yearly usage");
    usage::print_usage(&report.usage);

    table::section("Velocity tiers");
    tiers::print_tiers(&report.tiers);

    table::section("Movement");
    movement::print_movement(&report.movement);

    table::section("Pitch labels");
    movement::print_frequency("Pitch label", &report.top_labels);

    table::section("Zone quality");
    match &report.zones {
        ZoneSection::Unavailable => println!("Zone-quality data is not available."),
        ZoneSection::NoData => println!("No zone data for the selected seasons."),
        ZoneSection::Ready {
            batter_hand,
            pitch_types,
            grids,
            detail,
        } => {
            zones::print_grids(pitch_types, grids, *batter_hand);
            println!();
            zones::print_detail(detail);
        }
    }

    println!();
    println!("Generated at {}", report.generated_at);
    Ok(())
}

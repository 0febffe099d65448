//! Speed and break statistics per pitch type.

use pitchscope_analytics::frequency::FrequencyRow;
use pitchscope_analytics::movement::{MovementPoint, MovementSummary};
use pitchscope_analytics::AnalyticsEngine;
use serde::Serialize;

use crate::context::{self, Context};
use crate::table;
use crate::ScopeArgs;

#[derive(Serialize)]
struct MovementOutput {
    #[serde(flatten)]
    summary: MovementSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    points: Option<Vec<MovementPoint>>,
}

pub fn run(ctx: &Context, args: ScopeArgs, points: bool) -> anyhow::Result<()> {
    let data = ctx.load_dataset()?;
    let engine = AnalyticsEngine::from_dataset(&data);
    let view = engine.scope(&context::resolve_scope(&engine, &args));
    let summary = view.movement();
    let points = points.then(|| view.movement_points());

    if ctx.json {
        return ctx.emit_json(&MovementOutput { summary, points });
    }
    if summary.is_empty() {
        context::print_no_data(view.scope());
        return Ok(());
    }
    print_movement(&summary);
    if let Some(points) = points {
        println!();
        print_points(&points);
    }
    Ok(())
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}

pub fn print_movement(summary: &MovementSummary) {
    let rows: Vec<Vec<String>> = summary
        .pitch_types
        .iter()
        .map(|s| {
            vec![
                s.pitch_type.clone(),
                s.count.to_string(),
                table::pct(s.share),
                format!("{:.1}", s.speed_mean),
                optional(s.speed_std.value()),
                format!("{:.0}", s.speed_min),
                format!("{:.0}", s.speed_max),
                optional(s.horizontal_break_mean),
                optional(s.vertical_break_mean),
            ]
        })
        .collect();
    table::print_table(
        &[
            "Pitch type",
            "Count",
            "Share",
            "Speed",
            "Std",
            "Min",
            "Max",
            "H-break",
            "V-break",
        ],
        &rows,
    );

    println!();
    print_frequency("Horizontal movement", &summary.horizontal_buckets);
    println!();
    print_frequency("Vertical movement", &summary.vertical_buckets);
}

pub fn print_frequency(title: &str, rows: &[FrequencyRow]) {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| vec![r.value.clone(), r.count.to_string(), table::pct(r.share)])
        .collect();
    table::print_table(&[title, "Count", "Share"], &rows);
}

fn print_points(points: &[MovementPoint]) {
    let rows: Vec<Vec<String>> = points
        .iter()
        .map(|p| {
            vec![
                p.pitch_type.clone(),
                format!("{:.1}", p.horizontal_break),
                format!("{:.1}", p.vertical_break),
            ]
        })
        .collect();
    table::print_table(&["Pitch type", "H-break", "V-break"], &rows);
}

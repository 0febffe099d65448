//! Show the seasons a pitcher appears in.

use pitchscope_analytics::AnalyticsEngine;
use pitchscope_model::pitch::PitcherId;
use serde::Serialize;

use crate::context::Context;

#[derive(Serialize)]
struct SeasonsOutput {
    pitcher_id: PitcherId,
    seasons: Vec<i32>,
}

pub fn run(ctx: &Context, pitcher: String) -> anyhow::Result<()> {
    let data = ctx.load_dataset()?;
    let engine = AnalyticsEngine::from_dataset(&data);
    let pitcher_id = PitcherId::new(pitcher.trim());
    let seasons = engine.seasons(&pitcher_id);

    if ctx.json {
        return ctx.emit_json(&SeasonsOutput {
            pitcher_id,
            seasons,
        });
    }
    if seasons.is_empty() {
        println!("Pitcher {pitcher_id} not found.");
        return Ok(());
    }
    let seasons: Vec<String> = seasons.iter().map(i32::to_string).collect();
    println!("Pitcher {pitcher_id}: {}", seasons.join(", "));
    Ok(())
}

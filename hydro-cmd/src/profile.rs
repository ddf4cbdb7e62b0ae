//! `profile` subcommand.

use anyhow::Context;
use csv::{ReaderBuilder, Trim};
use hydro_profile::{ProfileLayout, ProfileOptions, ProfilePoint, RiverProfile};
use log::info;
use std::path::Path;

pub fn run_profile(
    path: &str,
    level: Option<f64>,
    bridge: Option<f64>,
    width: f64,
    axis: bool,
) -> anyhow::Result<()> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    let is_json = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let profile = parse_profile(&content, is_json)?;
    info!("Loaded {} profile points from {path}", profile.len());

    let options = ProfileOptions {
        width,
        axis,
        bridge_level: bridge,
        current_water_level: level,
    };
    let layout = ProfileLayout::compute(&profile, &options)
        .with_context(|| format!("Failed to lay out {path}"))?;
    match layout.intersections {
        Some((left, right)) => info!(
            "Water surface from x={:.2} to x={:.2}, {:.2} m² wetted",
            left.x, right.x, layout.water_area
        ),
        None => info!("Water level does not cross the profile"),
    }

    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}

/// Profile points from a JSON array or a CSV with `x` and `y`/`msl` columns.
pub fn parse_profile(content: &str, is_json: bool) -> anyhow::Result<RiverProfile> {
    if is_json {
        return serde_json::from_str(content).context("Failed to parse profile JSON");
    }
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes())
        .deserialize::<ProfilePoint>()
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to parse profile CSV")
}

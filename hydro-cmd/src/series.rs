//! `segment` subcommand.

use crate::SegmentOn;
use anyhow::Context;
use hydro_graph::{
    separate_on_missing, separate_on_missing_and_predicted, separate_on_predicted, series_facts,
    DataPoint, GraphSeries,
};
use log::{info, warn};
use serde::Serialize;

/// Runs of one series, in input order.
#[derive(Debug, Serialize)]
pub struct SeriesSegments {
    pub key: String,
    pub segments: Vec<Vec<DataPoint>>,
}

pub fn run_segment(path: &str, on: SegmentOn) -> anyhow::Result<()> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    let series = parse_series(&content)?;

    match series_facts(&series) {
        Ok(facts) => info!(
            "{} series over {} days, {} points per day",
            series.len(),
            facts.number_of_days,
            facts.data_points_per_day
        ),
        Err(e) => warn!("No series facts for {path}: {e}"),
    }

    let output = segment_series(&series, on);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn parse_series(content: &str) -> anyhow::Result<Vec<GraphSeries>> {
    serde_json::from_str(content).context("Failed to parse series JSON")
}

pub fn segment_series(series: &[GraphSeries], on: SegmentOn) -> Vec<SeriesSegments> {
    series
        .iter()
        .map(|s| SeriesSegments {
            key: s.key.clone(),
            segments: match on {
                SegmentOn::Missing => separate_on_missing(&s.data),
                SegmentOn::Predicted => separate_on_predicted(&s.data),
                SegmentOn::Both => separate_on_missing_and_predicted(&s.data),
            },
        })
        .collect()
}

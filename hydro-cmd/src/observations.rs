//! `observations` subcommand.

use anyhow::Context;
use chrono::{DateTime, FixedOffset, Utc};
use hydro_graph::GraphSeries;
use hydro_observation::{
    format_observation_value, observation_data_to_line_data, AppLang, ObservationRecord,
    ObservationType,
};
use hydro_utils::dates::parse_timestamp;
use log::info;

pub fn run_observations(
    path: &str,
    observation_type: ObservationType,
    lang: AppLang,
    now: Option<&str>,
) -> anyhow::Result<()> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    let records: Vec<ObservationRecord> =
        serde_json::from_str(&content).context("Failed to parse observation records")?;
    let now = match now {
        Some(s) => parse_timestamp(s)?,
        None => Utc::now().fixed_offset(),
    };

    let series = observation_series(&records, observation_type, lang, &now)?;
    let latest = series.data.iter().find(|p| !p.is_missing() && !p.is_predicted());
    let decimals = observation_type.preset().decimals;
    info!(
        "{} points, latest reading {} {}",
        series.data.len(),
        format_observation_value(latest.map(|p| p.value), lang.as_str(), decimals),
        observation_type.unit()
    );

    println!("{}", serde_json::to_string_pretty(&series)?);
    Ok(())
}

/// Series for `records` with the preset of `observation_type` applied.
pub fn observation_series(
    records: &[ObservationRecord],
    observation_type: ObservationType,
    lang: AppLang,
    now: &DateTime<FixedOffset>,
) -> anyhow::Result<GraphSeries> {
    let data = observation_data_to_line_data(records, now)?;
    let series = GraphSeries::new(observation_type.as_str(), data).with_unit(observation_type.unit());
    Ok(observation_type.preset().apply(series, lang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydro_graph::SeriesType;

    #[test]
    fn test_temperature_series() {
        let records: Vec<ObservationRecord> = serde_json::from_str(
            r#"[{ "date": "2021-10-09T00:00:00Z", "values": [4.5, null, -1.2, null] }]"#,
        )
        .unwrap();
        let now = parse_timestamp("2021-10-09T14:00:00Z").unwrap();
        let series =
            observation_series(&records, ObservationType::WaterTemperature, AppLang::En, &now)
                .unwrap();

        assert_eq!(series.key, "water-temperature");
        assert_eq!(series.unit.as_deref(), Some("°C"));
        assert_eq!(series.series_type, SeriesType::Bar);
        assert_eq!(series.data.len(), 3);
        assert!(series.data[1].is_missing());
        assert_eq!(series.data[1].value, 4.5);
        assert_eq!(series.value_color(0, series.data[0].value), "#00f");
    }
}

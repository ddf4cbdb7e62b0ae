//! Chart settings for each kind of observation.

use crate::format::{format_observation_value, AppLang};
use hydro_graph::{GraphSeries, SeriesType, ThresholdDirection};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObservationType {
    WaterLevel,
    WaterFlow,
    WaterTemperature,
    WaterPh,
}

/// Threshold colouring applied to a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPreset {
    pub value: f64,
    pub color: &'static str,
    pub direction: ThresholdDirection,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPreset {
    pub color: &'static str,
    /// Decimals shown by the value formatter.
    pub decimals: usize,
    pub threshold: Option<ThresholdPreset>,
    pub series_type: SeriesType,
}

impl ObservationType {
    pub fn preset(&self) -> SeriesPreset {
        let line = |color, decimals| SeriesPreset {
            color,
            decimals,
            threshold: None,
            series_type: SeriesType::Line,
        };
        match self {
            ObservationType::WaterLevel => line("#2196f3", 2),
            ObservationType::WaterFlow => line("#2196f3", 1),
            ObservationType::WaterPh => line("#009c0d", 1),
            // freezing temperatures drawn in blue bars
            ObservationType::WaterTemperature => SeriesPreset {
                color: "#ce1836",
                decimals: 0,
                threshold: Some(ThresholdPreset {
                    value: 0.0,
                    color: "#00f",
                    direction: ThresholdDirection::Down,
                }),
                series_type: SeriesType::Bar,
            },
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ObservationType::WaterLevel => "m",
            ObservationType::WaterFlow => "m³/s",
            ObservationType::WaterTemperature => "°C",
            ObservationType::WaterPh => "pH",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObservationType::WaterLevel => "water-level",
            ObservationType::WaterFlow => "water-flow",
            ObservationType::WaterTemperature => "water-temperature",
            ObservationType::WaterPh => "water-ph",
        }
    }
}

impl fmt::Display for ObservationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObservationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "water-level" => Ok(ObservationType::WaterLevel),
            "water-flow" => Ok(ObservationType::WaterFlow),
            "water-temperature" => Ok(ObservationType::WaterTemperature),
            "water-ph" => Ok(ObservationType::WaterPh),
            other => Err(format!("unknown observation type: {other}")),
        }
    }
}

impl SeriesPreset {
    /// Copy the preset onto `series`, with a value formatter for `lang`.
    pub fn apply(&self, series: GraphSeries, lang: AppLang) -> GraphSeries {
        let decimals = self.decimals;
        let mut series = series
            .with_color(self.color)
            .with_format_value(move |v| format_observation_value(Some(v), lang.as_str(), decimals));
        series.series_type = self.series_type;
        if let Some(t) = self.threshold {
            series = series.with_threshold(t.value, t.color, t.direction);
        }
        series
    }
}

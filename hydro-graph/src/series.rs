//! Per-series chart configuration.

use crate::data_point::DataPoint;
use crate::threshold::{color_by_index, color_by_threshold, ThresholdDirection, DEFAULT_COLOR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Callback turning a value into display text.
pub type ValueFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    #[default]
    Line,
    Bar,
}

/// One plotted series and how to draw it.
///
/// Loaded from JSON with camelCase keys; the formatter callbacks are not
/// serialized and must be attached in code.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphSeries {
    pub key: String,
    pub data: Vec<DataPoint>,
    #[serde(rename = "type")]
    pub series_type: SeriesType,
    pub name: Option<String>,
    pub color: Option<String>,
    pub threshold: Option<f64>,
    pub threshold_color: Option<String>,
    pub threshold_direction: ThresholdDirection,
    /// Explicit y domain, overriding the one derived from the data.
    pub domain: Option<[f64; 2]>,
    /// Fixed lower bound for the y domain.
    pub bottom: Option<f64>,
    pub label_width: Option<f64>,
    pub axis_height: Option<f64>,
    pub bar_width: Option<f64>,
    pub bar_padding: Option<f64>,
    pub bar_opacity: Option<f64>,
    pub unit: Option<String>,
    #[serde(skip)]
    pub format_value: Option<ValueFormatter>,
    #[serde(skip)]
    pub format_change: Option<ValueFormatter>,
}

impl GraphSeries {
    pub fn new(key: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            key: key.into(),
            data,
            ..Default::default()
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_threshold(
        mut self,
        threshold: f64,
        color: impl Into<String>,
        direction: ThresholdDirection,
    ) -> Self {
        self.threshold = Some(threshold);
        self.threshold_color = Some(color.into());
        self.threshold_direction = direction;
        self
    }

    pub fn with_format_value(
        mut self,
        format: impl Fn(f64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.format_value = Some(Arc::new(format));
        self
    }

    pub fn with_format_change(
        mut self,
        format: impl Fn(f64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.format_change = Some(Arc::new(format));
        self
    }

    /// Same configuration over different data.
    pub fn with_data(&self, data: Vec<DataPoint>) -> Self {
        Self {
            data,
            ..self.clone()
        }
    }

    /// Base colour of the series, falling back to the palette slot for
    /// its position in the chart.
    pub fn base_color(&self, index: usize) -> &str {
        self.color.as_deref().unwrap_or_else(|| color_by_index(index))
    }

    /// Colour for a single value, honouring the series threshold.
    pub fn value_color(&self, index: usize, value: f64) -> &str {
        color_by_threshold(
            value,
            self.threshold,
            self.threshold_color.as_deref().unwrap_or(DEFAULT_COLOR),
            self.threshold_direction,
            self.base_color(index),
        )
    }
}

impl fmt::Debug for GraphSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphSeries")
            .field("key", &self.key)
            .field("data", &self.data)
            .field("series_type", &self.series_type)
            .field("name", &self.name)
            .field("color", &self.color)
            .field("threshold", &self.threshold)
            .field("threshold_color", &self.threshold_color)
            .field("threshold_direction", &self.threshold_direction)
            .field("domain", &self.domain)
            .field("bottom", &self.bottom)
            .field("unit", &self.unit)
            .field("format_value", &self.format_value.as_ref().map(|_| ".."))
            .field("format_change", &self.format_change.as_ref().map(|_| ".."))
            .finish_non_exhaustive()
    }
}

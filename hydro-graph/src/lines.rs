//! Reference lines drawn across a chart.

use crate::data_point::DataPoint;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A horizontal line at a value or a vertical line at an instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphLine {
    Horizontal {
        value: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    Vertical {
        date: DateTime<FixedOffset>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

impl GraphLine {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, GraphLine::Horizontal { .. })
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, GraphLine::Vertical { .. })
    }
}

/// Horizontal line at the mean of the real (non-missing) readings.
pub fn create_mean_level_line(data: &[DataPoint], color: impl Into<String>) -> Option<GraphLine> {
    let (sum, count) = data
        .iter()
        .filter(|datum| !datum.is_missing())
        .fold((0.0, 0usize), |(sum, count), datum| (sum + datum.value, count + 1));
    if count == 0 {
        return None;
    }
    Some(GraphLine::Horizontal {
        value: sum / count as f64,
        color: Some(color.into()),
        label: Some("mean".to_string()),
    })
}

/// Vertical line marking `now`.
pub fn create_now_line(now: DateTime<FixedOffset>, color: impl Into<String>) -> GraphLine {
    GraphLine::Vertical {
        date: now,
        color: Some(color.into()),
        label: Some("now".to_string()),
    }
}

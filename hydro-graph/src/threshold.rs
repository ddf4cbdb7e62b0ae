//! Threshold tests and colour picking.

use crate::data_point::DataPoint;
use serde::{Deserialize, Serialize};

/// Colour used when nothing else applies.
pub const DEFAULT_COLOR: &str = "#000";

/// Series colours cycled by position.
pub const DEFAULT_COLORS: [&str; 4] = ["#CE1836", "#1F81C6", "#A3A948", "#EDB92E"];

/// Side of the threshold that counts as "in threshold".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdDirection {
    #[default]
    Up,
    Down,
}

/// Strictly above (`Up`) or strictly below (`Down`) the threshold.
pub fn value_in_threshold(value: f64, threshold: f64, direction: ThresholdDirection) -> bool {
    match direction {
        ThresholdDirection::Up => value > threshold,
        ThresholdDirection::Down => value < threshold,
    }
}

/// Whether any point is in threshold. Always false without a threshold.
pub fn has_value_in_threshold(
    data: &[DataPoint],
    threshold: Option<f64>,
    direction: ThresholdDirection,
) -> bool {
    let Some(threshold) = threshold else {
        return false;
    };
    data.iter()
        .any(|datum| value_in_threshold(datum.value, threshold, direction))
}

/// `threshold_color` when the value is in threshold, `fallback` otherwise.
pub fn color_by_threshold<'a>(
    value: f64,
    threshold: Option<f64>,
    threshold_color: &'a str,
    direction: ThresholdDirection,
    fallback: &'a str,
) -> &'a str {
    match threshold {
        Some(threshold) if value_in_threshold(value, threshold, direction) => threshold_color,
        _ => fallback,
    }
}

pub fn color_by_index(index: usize) -> &'static str {
    DEFAULT_COLORS[index % DEFAULT_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ThresholdDirection::{Down, Up};

    #[test]
    fn threshold_is_strict() {
        assert!(value_in_threshold(10.0, 5.0, Up));
        assert!(!value_in_threshold(5.0, 5.0, Up));
        assert!(value_in_threshold(2.0, 5.0, Down));
        assert!(!value_in_threshold(5.0, 5.0, Down));
        assert!(!value_in_threshold(10.0, 5.0, Down));
    }

    #[test]
    fn color_in_threshold() {
        assert_eq!(color_by_threshold(10.0, Some(5.0), "#f00", Up, DEFAULT_COLOR), "#f00");
        assert_eq!(color_by_threshold(0.0, Some(5.0), "#f00", Down, DEFAULT_COLOR), "#f00");
    }

    #[test]
    fn color_falls_back() {
        assert_eq!(color_by_threshold(10.0, Some(5.0), "#f00", Down, DEFAULT_COLOR), "#000");
        assert_eq!(color_by_threshold(0.0, Some(5.0), "#f00", Up, DEFAULT_COLOR), "#000");
        assert_eq!(color_by_threshold(5.0, Some(5.0), "#f00", Up, DEFAULT_COLOR), "#000");
        assert_eq!(color_by_threshold(10.0, None, "#f00", Up, DEFAULT_COLOR), "#000");
    }

    #[test]
    fn index_colors_cycle() {
        assert_eq!(color_by_index(0), "#CE1836");
        assert_eq!(color_by_index(5), "#1F81C6");
    }

    #[test]
    fn direction_defaults_up() {
        assert_eq!(ThresholdDirection::default(), Up);
        let down: ThresholdDirection = serde_json::from_str("\"down\"").unwrap();
        assert_eq!(down, Down);
    }

    #[test]
    fn series_level_threshold_check() {
        use chrono::{TimeZone, Utc};
        let date = Utc.with_ymd_and_hms(2021, 2, 1, 0, 0, 0).unwrap().fixed_offset();
        let data = vec![DataPoint::new(date, 1.0), DataPoint::new(date, -2.0)];
        assert!(has_value_in_threshold(&data, Some(0.0), Down));
        assert!(!has_value_in_threshold(&data, Some(1.0), Up));
        assert!(!has_value_in_threshold(&data, None, Down));
    }
}

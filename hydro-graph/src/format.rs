//! Axis and tooltip label formatting.

use crate::series::{GraphSeries, ValueFormatter};

/// Format a value for an axis tick: the series formatter (or plain number
/// formatting) followed by the unit, if any.
pub fn tick_format(series: &GraphSeries, value: f64) -> String {
    with_unit(series, series.format_value.as_ref(), value)
}

/// Like [`tick_format`], for change values using the change formatter.
pub fn change_format(series: &GraphSeries, value: f64) -> String {
    with_unit(series, series.format_change.as_ref(), value)
}

fn with_unit(series: &GraphSeries, format: Option<&ValueFormatter>, value: f64) -> String {
    let formatted = match format {
        Some(format) => format(value),
        None => value.to_string(),
    };
    match series.unit.as_deref() {
        Some(unit) => format!("{formatted}{unit}"),
        None => formatted,
    }
}

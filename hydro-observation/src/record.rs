//! Daily observation records and their conversion to chart points.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use hydro_graph::{DataPoint, Result};
use hydro_utils::dates::start_of_day;
use serde::{Deserialize, Serialize};

/// One day of readings at evenly spaced times, starting at midnight.
///
/// `min` and `max` hold the forecast band for readings that are
/// predictions; `null` entries are plain readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub date: DateTime<FixedOffset>,
    pub values: Vec<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Vec<Option<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Vec<Option<f64>>>,
}

impl ObservationRecord {
    pub fn new(date: DateTime<FixedOffset>, values: Vec<Option<f64>>) -> Self {
        Self {
            date,
            values,
            min: None,
            max: None,
        }
    }

    pub fn with_band(mut self, min: Vec<Option<f64>>, max: Vec<Option<f64>>) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Time of the reading at `index`: `index * 24 / len` hours into the
    /// day, truncated to the whole hour.
    pub fn reading_time(&self, index: usize) -> DateTime<FixedOffset> {
        let hours = (index * 24 / self.values.len().max(1)) as i64;
        start_of_day(&self.date) + Duration::hours(hours)
    }

    fn band_at(&self, index: usize) -> (Option<f64>, Option<f64>) {
        let at = |band: &Option<Vec<Option<f64>>>| {
            band.as_ref().and_then(|b| b.get(index).copied().flatten())
        };
        (at(&self.min), at(&self.max))
    }
}

/// Flatten records into points, latest reading of each record first.
///
/// Empty readings after `now` have not happened yet and are dropped.
/// Earlier ones become missing points carrying the nearest non-zero
/// reading that follows them in the output, else the nearest one before
/// them, else 0. Readings with a band become predicted points.
pub fn observation_data_to_line_data<Tz: TimeZone>(
    records: &[ObservationRecord],
    now: &DateTime<Tz>,
) -> Result<Vec<DataPoint>> {
    let now = now.with_timezone(&Utc);
    let mut points = Vec::new();

    for record in records {
        for (index, value) in record.values.iter().enumerate().rev() {
            let date = record.reading_time(index);
            let point = match (value, record.band_at(index)) {
                (None, _) if date.with_timezone(&Utc) > now => continue,
                (None, _) => DataPoint::missing(date, 0.0),
                (Some(v), (None, None)) => DataPoint::new(date, *v),
                (Some(v), (min, max)) => DataPoint::predicted(date, *v, min, max)?,
            };
            points.push(point);
        }
    }

    let known: Vec<Option<f64>> = points
        .iter()
        .map(|p| (!p.is_missing() && p.value != 0.0).then_some(p.value))
        .collect();
    for (i, point) in points.iter_mut().enumerate() {
        if !point.is_missing() {
            continue;
        }
        let next = known[i + 1..].iter().flatten().next();
        let previous = known[..i].iter().rev().flatten().next();
        point.value = next.or(previous).copied().unwrap_or(0.0);
    }

    log::debug!("{} records became {} points", records.len(), points.len());
    Ok(points)
}

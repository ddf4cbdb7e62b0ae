//! Date extents and density across a set of series.

use crate::error::{GraphError, Result};
use crate::series::GraphSeries;
use chrono::{DateTime, Duration, FixedOffset};
use hydro_utils::dates::start_of_day;
use itertools::Itertools;

/// Shape of the time axis shared by a set of series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesFacts {
    /// Unique instants, newest first.
    pub dates: Vec<DateTime<FixedOffset>>,
    /// Whole hours between the oldest and newest instant.
    pub hours_count: i64,
    /// Whole minutes between the oldest and newest instant.
    pub minutes_count: i64,
    /// Hours from the newest instant to the following midnight, mod 24.
    pub diff_end: i64,
    /// Most points any single series has on one calendar day.
    pub data_points_per_day: usize,
    /// Calendar days touched between the oldest and newest instant.
    pub number_of_days: i64,
}

/// Every distinct instant across all series, newest first.
pub fn series_dates(series: &[GraphSeries]) -> Vec<DateTime<FixedOffset>> {
    series
        .iter()
        .flat_map(|plot| plot.data.iter().map(|datum| datum.date))
        .sorted_by(|a, b| b.cmp(a))
        .dedup()
        .collect()
}

pub fn series_facts(series: &[GraphSeries]) -> Result<SeriesFacts> {
    let dates = series_dates(series);
    let (Some(&newest), Some(&oldest)) = (dates.first(), dates.last()) else {
        return Err(GraphError::EmptySeries);
    };

    let span = newest - oldest;
    let next_midnight = start_of_day(&(newest + Duration::days(1)));
    let diff_end = (next_midnight - newest).num_hours() % 24;

    let data_points_per_day = series
        .iter()
        .filter_map(|plot| {
            plot.data
                .iter()
                .map(|datum| start_of_day(&datum.date))
                .counts()
                .into_values()
                .max()
        })
        .max()
        .unwrap_or(0);

    let number_of_days = (newest.date_naive() - oldest.date_naive()).num_days() + 1;

    Ok(SeriesFacts {
        dates,
        hours_count: span.num_hours(),
        minutes_count: span.num_minutes(),
        diff_end,
        data_points_per_day,
        number_of_days,
    })
}

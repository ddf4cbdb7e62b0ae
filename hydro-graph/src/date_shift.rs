//! Shifting timestamps so a naive local-time formatter shows the wall-clock
//! time of the zone the data was recorded in.
//!
//! The shifted values are for display only: they no longer denote the
//! original instant, so no arithmetic beyond re-rendering the same hour
//! should be done with them.

use crate::data_point::DataPoint;
use crate::error::Result;
use crate::series::GraphSeries;
use chrono::{DateTime, Duration, FixedOffset, Local, Offset, TimeZone, Utc};
use hydro_utils::dates::{format_timestamp, parse_timestamp};
use regex::Regex;
use std::sync::LazyLock;

static OFFSET_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Z$|([+\-])([0-2][0-9]):([0-5][0-9])$").expect("offset suffix pattern")
});

/// Minutes to add to the timestamp's local time to reach UTC.
///
/// `+02:00` gives `-120`, `-02:00` gives `120`; `Z`, `+00:00` and strings
/// without a recognisable suffix give `0`.
pub fn get_timezone_offset(date: &str) -> i32 {
    let Some(captures) = OFFSET_SUFFIX.captures(date) else {
        return 0;
    };
    let (Some(sign), Some(hours), Some(minutes)) =
        (captures.get(1), captures.get(2), captures.get(3))
    else {
        // matched the trailing `Z`
        return 0;
    };
    let hours: i32 = hours.as_str().parse().unwrap_or(0);
    let minutes: i32 = minutes.as_str().parse().unwrap_or(0);
    let total = hours * 60 + minutes;
    if sign.as_str() == "+" {
        -total
    } else {
        total
    }
}

/// Same convention as [`get_timezone_offset`], for a chrono offset.
fn minutes_behind_utc(offset: &FixedOffset) -> i32 {
    -offset.local_minus_utc() / 60
}

/// Offset of the host's local zone at `instant`.
fn host_offset(instant: &DateTime<Utc>) -> FixedOffset {
    Local.offset_from_utc_datetime(&instant.naive_utc()).fix()
}

fn shift(instant: DateTime<Utc>, source_minutes: i32, display: &FixedOffset) -> DateTime<Utc> {
    instant - Duration::minutes(source_minutes as i64)
        + Duration::minutes(minutes_behind_utc(display) as i64)
}

/// Re-express `date` so that showing it in the `display` zone reproduces
/// its own wall-clock time.
pub fn shift_date_to(date: &str, display: &FixedOffset) -> Result<String> {
    let instant = parse_timestamp(date)?.with_timezone(&Utc);
    let shifted = shift(instant, get_timezone_offset(date), display);
    Ok(format_timestamp(&shifted))
}

/// [`shift_date_to`] for the host's local zone.
pub fn shift_date(date: &str) -> Result<String> {
    let instant = parse_timestamp(date)?.with_timezone(&Utc);
    shift_date_to(date, &host_offset(&instant))
}

/// Shift every point of every series for display in `display`.
///
/// The first point's offset is taken as the offset of the whole series.
/// Series recorded in UTC are returned unchanged.
pub fn shift_series_dates_to(series: &[GraphSeries], display: &FixedOffset) -> Vec<GraphSeries> {
    series
        .iter()
        .map(|s| {
            let Some(first) = s.data.first() else {
                return s.clone();
            };
            let source = minutes_behind_utc(first.date.offset());
            if source == 0 {
                return s.clone();
            }
            let data = s
                .data
                .iter()
                .map(|point| DataPoint {
                    date: shift(point.date.with_timezone(&Utc), source, display).fixed_offset(),
                    ..point.clone()
                })
                .collect();
            s.with_data(data)
        })
        .collect()
}

/// [`shift_series_dates_to`] for the host's local zone, evaluated at each
/// series' first point.
pub fn shift_series_dates(series: &[GraphSeries]) -> Vec<GraphSeries> {
    series
        .iter()
        .flat_map(|s| match s.data.first() {
            Some(first) => {
                let display = host_offset(&first.date.with_timezone(&Utc));
                shift_series_dates_to(std::slice::from_ref(s), &display)
            }
            None => vec![s.clone()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amsterdam_winter() -> FixedOffset {
        FixedOffset::east_opt(3600).unwrap()
    }

    #[test]
    fn offset_of_utc_is_zero() {
        assert_eq!(get_timezone_offset("2021-01-01T00:00:00.000Z"), 0);
        assert_eq!(get_timezone_offset("2021-01-01T00:00:00.000+00:00"), 0);
    }

    #[test]
    fn positive_offsets_are_negative_minutes() {
        assert_eq!(get_timezone_offset("2021-01-01T00:00:00.000+02:00"), -120);
        assert_eq!(get_timezone_offset("2021-04-21T22:00:00.000+08:00"), -480);
        assert_eq!(get_timezone_offset("2021-01-01T00:00:00.000+05:30"), -330);
    }

    #[test]
    fn negative_offsets_are_positive_minutes() {
        assert_eq!(get_timezone_offset("2021-01-01T00:00:00.000-02:00"), 120);
    }

    #[test]
    fn unknown_suffix_is_utc() {
        assert_eq!(get_timezone_offset("2021-01-01T00:00:00"), 0);
        assert_eq!(get_timezone_offset("2021-01-01T00:00:00+0200"), 0);
        assert_eq!(get_timezone_offset(""), 0);
    }

    #[test]
    fn shifts_utc_to_display_zone() {
        assert_eq!(
            shift_date_to("2021-02-01T00:00:00.000Z", &amsterdam_winter()).unwrap(),
            "2021-01-31T23:00:00.000Z"
        );
    }

    #[test]
    fn shifts_offset_dates_to_display_zone() {
        let display = amsterdam_winter();
        for source in [
            "2021-02-01T00:00:00.000+02:00",
            "2021-02-01T00:00:00.000-02:00",
            "2021-02-01T00:00:00.000+08:00",
        ] {
            assert_eq!(
                shift_date_to(source, &display).unwrap(),
                "2021-01-31T23:00:00.000Z",
                "{source}"
            );
        }
    }

    #[test]
    fn display_in_utc_keeps_wall_clock() {
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(
            shift_date_to("2021-04-21T22:00:00.000+08:00", &utc).unwrap(),
            "2021-04-21T22:00:00.000Z"
        );
    }

    #[test]
    fn unparseable_instant_is_an_error() {
        assert!(shift_date_to("not a date", &amsterdam_winter()).is_err());
    }

    #[test]
    fn utc_series_are_left_alone() {
        let json = r#"[{
            "key": "UTC",
            "data": [{ "value": 10, "date": "2021-02-01T00:00:00.000Z" }]
        }]"#;
        let series: Vec<GraphSeries> = serde_json::from_str(json).unwrap();
        let shifted = shift_series_dates_to(&series, &amsterdam_winter());
        assert_eq!(
            format_timestamp(&shifted[0].data[0].date.with_timezone(&Utc)),
            "2021-02-01T00:00:00.000Z"
        );
        assert_eq!(shift_series_dates(&series)[0].data, series[0].data);
    }

    #[test]
    fn host_zone_matches_explicit_zone() {
        for source in ["2021-02-01T00:00:00.000+02:00", "2021-07-01T12:30:00.000Z"] {
            let instant = parse_timestamp(source).unwrap().with_timezone(&Utc);
            assert_eq!(
                shift_date(source).unwrap(),
                shift_date_to(source, &host_offset(&instant)).unwrap()
            );
        }
        assert!(shift_date("not a date").is_err());
    }

    #[test]
    fn host_zone_series_matches_explicit_zone() {
        let json = r#"[{
            "key": "UTC-03:00",
            "data": [
                { "value": 1, "date": "2021-02-01T00:00:00.000-03:00" },
                { "value": 2, "date": "2021-02-01T06:00:00.000-03:00" }
            ]
        }]"#;
        let series: Vec<GraphSeries> = serde_json::from_str(json).unwrap();
        let display = host_offset(&series[0].data[0].date.with_timezone(&Utc));
        assert_eq!(
            shift_series_dates(&series)[0].data,
            shift_series_dates_to(&series, &display)[0].data
        );
    }

    #[test]
    fn shifts_whole_series() {
        let json = r#"[{
            "key": "UTC+02:00",
            "data": [
                { "value": 10, "date": "2021-02-01T00:00:00.000+02:00" },
                { "value": 11, "date": "2021-02-01T01:00:00.000+02:00" },
                { "value": 12, "date": "2021-02-01T02:00:00.000+02:00", "missing": true }
            ]
        }, { "key": "empty", "data": [] }]"#;
        let series: Vec<GraphSeries> = serde_json::from_str(json).unwrap();
        let shifted = shift_series_dates_to(&series, &amsterdam_winter());

        let dates: Vec<String> = shifted[0]
            .data
            .iter()
            .map(|p| format_timestamp(&p.date.with_timezone(&Utc)))
            .collect();
        assert_eq!(
            dates,
            vec![
                "2021-01-31T23:00:00.000Z",
                "2021-02-01T00:00:00.000Z",
                "2021-02-01T01:00:00.000Z",
            ]
        );
        assert!(shifted[0].data[2].is_missing());
        assert_eq!(shifted[0].key, "UTC+02:00");
        assert!(shifted[1].data.is_empty());
    }
}

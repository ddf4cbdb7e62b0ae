//! Scales derived from series data.

use crate::error::{GraphError, Result};
use crate::series::GraphSeries;
use chrono::{DateTime, TimeZone};
use hydro_scale::{LinearScale, TimeScale};

/// Share of the value span added above (and below) the data.
const DOMAIN_PADDING: f64 = 0.2;

/// Y scale for one series over a plot `height` pixels tall.
///
/// The domain runs from the top (`max` plus padding) down to the bottom
/// (`min` minus padding), covering prediction bands and `extra_values`.
/// A series `bottom` pins the lower end without padding, and an explicit
/// series `domain` wins over both.
pub fn create_y_scale(
    series: &GraphSeries,
    height: f64,
    extra_values: &[f64],
    padding: f64,
) -> Result<LinearScale> {
    let range = [padding, height + padding];
    if let Some(domain) = series.domain {
        return Ok(LinearScale::new(domain, range).round(true));
    }

    let (min, max) = series
        .data
        .iter()
        .map(|datum| datum.extent())
        .chain(extra_values.iter().map(|&v| (v, v)))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (a, b)| {
            (lo.min(a), hi.max(b))
        });
    if !min.is_finite() || !max.is_finite() {
        return Err(GraphError::EmptySeries);
    }

    let min = series.bottom.unwrap_or(min);
    let domain_padding = (max - min) * DOMAIN_PADDING;
    let bottom_padding = if series.bottom.is_some() {
        0.0
    } else {
        domain_padding
    };

    Ok(LinearScale::new([max + domain_padding, min - bottom_padding], range).round(true))
}

/// Time scale over `[0, width]` spanning the given dates.
pub fn create_x_scale<Tz: TimeZone>(dates: &[DateTime<Tz>], width: f64) -> Result<TimeScale> {
    Ok(TimeScale::from_dates(dates, [0.0, width])?.round(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_point::DataPoint;
    use chrono::{Duration, Utc};
    use hydro_scale::ScaleError;

    fn series(values: &[f64]) -> GraphSeries {
        let start = Utc.with_ymd_and_hms(2021, 2, 1, 0, 0, 0).unwrap().fixed_offset();
        let data = values
            .iter()
            .enumerate()
            .map(|(i, &v)| DataPoint::new(start + Duration::hours(i as i64), v))
            .collect();
        GraphSeries::new("s", data)
    }

    #[test]
    fn pads_domain_both_ways() {
        let scale = create_y_scale(&series(&[0.0, 10.0, 5.0]), 100.0, &[], 0.0).unwrap();
        assert_eq!(scale.domain(), [12.0, -2.0]);
        assert_eq!(scale.range(), [0.0, 100.0]);
    }

    #[test]
    fn includes_prediction_band_and_extras() {
        let mut s = series(&[0.0, 10.0]);
        let date = s.data[1].date;
        s.data.push(DataPoint::predicted(date, 10.0, Some(5.0), Some(20.0)).unwrap());
        let scale = create_y_scale(&s, 100.0, &[-5.0], 10.0).unwrap();
        assert_eq!(scale.domain(), [25.0, -10.0]);
        assert_eq!(scale.range(), [10.0, 110.0]);
    }

    #[test]
    fn bottom_pins_lower_end() {
        let mut s = series(&[2.0, 10.0]);
        s.bottom = Some(0.0);
        let scale = create_y_scale(&s, 100.0, &[], 0.0).unwrap();
        assert_eq!(scale.domain(), [12.0, 0.0]);
    }

    #[test]
    fn explicit_domain_wins() {
        let mut s = series(&[2.0, 10.0]);
        s.domain = Some([50.0, 0.0]);
        let scale = create_y_scale(&s, 100.0, &[], 0.0).unwrap();
        assert_eq!(scale.domain(), [50.0, 0.0]);
        assert_eq!(scale.map(25.0), 50.0);
    }

    #[test]
    fn empty_series_has_no_domain() {
        assert_eq!(
            create_y_scale(&series(&[]), 100.0, &[], 0.0),
            Err(GraphError::EmptySeries)
        );
    }

    #[test]
    fn x_scale_needs_two_dates() {
        let s = series(&[1.0, 2.0, 3.0]);
        let dates: Vec<_> = s.data.iter().map(|p| p.date).collect();
        let scale = create_x_scale(&dates, 200.0).unwrap();
        assert_eq!(scale.map(&dates[1]), 100.0);

        assert_eq!(
            create_x_scale(&dates[..1], 200.0),
            Err(GraphError::Scale(ScaleError::DegenerateDomain { found: 1 }))
        );
    }
}

use crate::error::{GraphError, Result};
use chrono::{DateTime, FixedOffset, SecondsFormat};
use hydro_utils::dates::parse_timestamp;
use serde::{Deserialize, Serialize};

/// Which of the three mutually exclusive kinds a point is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointState {
    #[default]
    Normal,
    /// The value is a carried-forward placeholder, not a reading.
    Missing,
    /// A forecast, optionally with an uncertainty band.
    Predicted {
        min_value: Option<f64>,
        max_value: Option<f64>,
    },
}

/// A single observation in a series.
///
/// Serializes as `{ date, value, missing?, predicted?, minValue?, maxValue? }`
/// with RFC 3339 dates that keep their original offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataPoint", into = "RawDataPoint")]
pub struct DataPoint {
    pub date: DateTime<FixedOffset>,
    pub value: f64,
    pub state: PointState,
}

impl DataPoint {
    pub fn new(date: DateTime<FixedOffset>, value: f64) -> Self {
        Self {
            date,
            value,
            state: PointState::Normal,
        }
    }

    pub fn missing(date: DateTime<FixedOffset>, value: f64) -> Self {
        Self {
            date,
            value,
            state: PointState::Missing,
        }
    }

    /// A forecast point. Fails when both bounds are given and do not
    /// contain `value`.
    pub fn predicted(
        date: DateTime<FixedOffset>,
        value: f64,
        min_value: Option<f64>,
        max_value: Option<f64>,
    ) -> Result<Self> {
        if let (Some(min), Some(max)) = (min_value, max_value) {
            if !(min <= value && value <= max) {
                return Err(GraphError::InvalidBand { value, min, max });
            }
        }
        Ok(Self {
            date,
            value,
            state: PointState::Predicted {
                min_value,
                max_value,
            },
        })
    }

    pub fn is_missing(&self) -> bool {
        matches!(self.state, PointState::Missing)
    }

    pub fn is_predicted(&self) -> bool {
        matches!(self.state, PointState::Predicted { .. })
    }

    /// Lowest and highest value this point spans, prediction band included.
    pub fn extent(&self) -> (f64, f64) {
        match self.state {
            PointState::Predicted {
                min_value,
                max_value,
            } => (
                min_value.unwrap_or(self.value),
                max_value.unwrap_or(self.value),
            ),
            _ => (self.value, self.value),
        }
    }

    /// Same point, reclassified as a normal reading.
    pub fn as_normal(&self) -> Self {
        Self {
            state: PointState::Normal,
            ..self.clone()
        }
    }
}

/// Order for [`sorted_by_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A copy of `points` ordered by instant. Ties keep their input order.
pub fn sorted_by_date(points: &[DataPoint], direction: SortDirection) -> Vec<DataPoint> {
    let mut sorted = points.to_vec();
    match direction {
        SortDirection::Asc => sorted.sort_by(|a, b| a.date.cmp(&b.date)),
        SortDirection::Desc => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
    }
    sorted
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataPoint {
    date: String,
    value: f64,
    #[serde(default, skip_serializing_if = "is_false")]
    missing: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    predicted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_value: Option<f64>,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl TryFrom<RawDataPoint> for DataPoint {
    type Error = GraphError;

    fn try_from(raw: RawDataPoint) -> Result<Self> {
        let date = parse_timestamp(&raw.date)?;
        match (raw.missing, raw.predicted) {
            (true, true) => Err(GraphError::ConflictingState(raw.date)),
            (true, false) => Ok(DataPoint::missing(date, raw.value)),
            (false, true) => DataPoint::predicted(date, raw.value, raw.min_value, raw.max_value),
            (false, false) => Ok(DataPoint::new(date, raw.value)),
        }
    }
}

impl From<DataPoint> for RawDataPoint {
    fn from(point: DataPoint) -> Self {
        let (min_value, max_value) = match point.state {
            PointState::Predicted {
                min_value,
                max_value,
            } => (min_value, max_value),
            _ => (None, None),
        };
        RawDataPoint {
            date: point.date.to_rfc3339_opts(SecondsFormat::Millis, true),
            value: point.value,
            missing: point.is_missing(),
            predicted: point.is_predicted(),
            min_value,
            max_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<FixedOffset> {
        parse_timestamp(s).unwrap()
    }

    #[test]
    fn states_are_exclusive() {
        let normal = DataPoint::new(at("2021-02-01T00:00Z"), 10.0);
        let missing = DataPoint::missing(at("2021-02-01T01:00Z"), 10.0);
        let predicted =
            DataPoint::predicted(at("2021-02-01T02:00Z"), 12.0, Some(10.0), Some(14.0)).unwrap();

        assert!(!normal.is_missing() && !normal.is_predicted());
        assert!(missing.is_missing() && !missing.is_predicted());
        assert!(predicted.is_predicted() && !predicted.is_missing());
    }

    #[test]
    fn predicted_band_must_contain_value() {
        let err = DataPoint::predicted(at("2021-02-01T00:00Z"), 20.0, Some(10.0), Some(14.0));
        assert_eq!(
            err,
            Err(GraphError::InvalidBand {
                value: 20.0,
                min: 10.0,
                max: 14.0
            })
        );
        // one-sided bands are not checked
        assert!(DataPoint::predicted(at("2021-02-01T00:00Z"), 20.0, None, Some(14.0)).is_ok());
    }

    #[test]
    fn extent_uses_band() {
        let p = DataPoint::predicted(at("2021-02-01T00:00Z"), 11.0, None, Some(15.0)).unwrap();
        assert_eq!(p.extent(), (11.0, 15.0));
        assert_eq!(DataPoint::new(at("2021-02-01T00:00Z"), 3.0).extent(), (3.0, 3.0));
    }

    #[test]
    fn deserializes_camel_case() {
        let json = r#"[
            { "value": 10, "date": "2021-02-01T00:00:00.000Z" },
            { "value": 12, "date": "2021-02-01T02:00:00.000+02:00", "missing": true },
            { "value": 12, "date": "2021-02-01T03:00:00.000Z", "predicted": true, "minValue": 10, "maxValue": 14 }
        ]"#;
        let points: Vec<DataPoint> = serde_json::from_str(json).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[1].state, PointState::Missing);
        assert_eq!(points[1].date.offset().local_minus_utc(), 7200);
        assert_eq!(
            points[2].state,
            PointState::Predicted {
                min_value: Some(10.0),
                max_value: Some(14.0)
            }
        );
    }

    #[test]
    fn rejects_conflicting_flags() {
        let json = r#"{ "value": 1, "date": "2021-02-01T00:00Z", "missing": true, "predicted": true }"#;
        assert!(serde_json::from_str::<DataPoint>(json).is_err());
    }

    #[test]
    fn serializes_only_set_flags() {
        let point = DataPoint::missing(at("2021-02-01T00:00:00Z"), 4.5);
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "date": "2021-02-01T00:00:00.000Z", "value": 4.5, "missing": true })
        );
    }

    #[test]
    fn sorts_without_touching_input() {
        let points = vec![
            DataPoint::new(at("2021-02-01T02:00Z"), 2.0),
            DataPoint::new(at("2021-02-01T00:00Z"), 0.0),
            DataPoint::new(at("2021-02-01T01:00Z"), 1.0),
        ];
        let asc = sorted_by_date(&points, SortDirection::Asc);
        let desc = sorted_by_date(&points, SortDirection::Desc);
        assert_eq!(asc.iter().map(|p| p.value).collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);
        assert_eq!(desc.iter().map(|p| p.value).collect::<Vec<_>>(), vec![2.0, 1.0, 0.0]);
        assert_eq!(points[0].value, 2.0);
    }
}

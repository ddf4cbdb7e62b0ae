//! Scale from instants in time to pixels.

use crate::error::{Result, ScaleError};
use crate::linear::LinearScale;
use crate::Scale;
use chrono::{DateTime, TimeZone, Utc};

/// Linear mapping from a `[start, end]` time extent onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    inner: LinearScale,
}

impl TimeScale {
    /// Build a scale whose domain is the extent of `dates`.
    ///
    /// Fails when the dates do not contain two distinct instants.
    pub fn from_dates<Tz: TimeZone>(dates: &[DateTime<Tz>], range: [f64; 2]) -> Result<Self> {
        let mut instants = dates.iter().map(|d| d.with_timezone(&Utc));
        let Some(first) = instants.next() else {
            return Err(ScaleError::DegenerateDomain { found: 0 });
        };
        let (start, end) = instants.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        if start == end {
            log::debug!("time scale over a single instant {start}");
            return Err(ScaleError::DegenerateDomain { found: 1 });
        }
        Ok(Self::new(start, end, range))
    }

    /// Build a scale from an explicit extent.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, range: [f64; 2]) -> Self {
        let inner = LinearScale::new(
            [start.timestamp_millis() as f64, end.timestamp_millis() as f64],
            range,
        );
        Self { start, end, inner }
    }

    /// Round mapped output to whole pixels.
    pub fn round(mut self, round: bool) -> Self {
        self.inner = self.inner.round(round);
        self
    }

    /// Restrict mapped output to the range.
    pub fn clamp(mut self, clamp: bool) -> Self {
        self.inner = self.inner.clamp(clamp);
        self
    }

    pub fn domain(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start, self.end)
    }

    pub fn range(&self) -> [f64; 2] {
        self.inner.range()
    }

    pub fn map<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> f64 {
        self.inner.map(date.timestamp_millis() as f64)
    }

    /// Instant at the given pixel, to millisecond precision.
    pub fn invert(&self, px: f64) -> Option<DateTime<Utc>> {
        let millis = self.inner.invert(px).round();
        if !millis.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis(millis as i64)
    }
}

impl Scale for TimeScale {
    type Domain = DateTime<Utc>;

    fn map(&self, value: &DateTime<Utc>) -> f64 {
        TimeScale::map(self, value)
    }

    fn invert(&self, px: f64) -> Option<DateTime<Utc>> {
        TimeScale::invert(self, px)
    }
}

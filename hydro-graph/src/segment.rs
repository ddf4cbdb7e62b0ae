//! Splitting a series into runs so missing and predicted stretches can be
//! drawn with their own style.

use crate::data_point::DataPoint;
use itertools::Itertools;

/// Group consecutive items that agree on `predicate`.
///
/// A new run starts every time the predicate flips. Concatenating the runs
/// gives back the input.
pub fn segment_by<T, F>(items: &[T], predicate: F) -> Vec<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    items
        .iter()
        .chunk_by(|item| predicate(item))
        .into_iter()
        .map(|(_, run)| run.cloned().collect())
        .collect()
}

pub fn separate_on_missing(points: &[DataPoint]) -> Vec<Vec<DataPoint>> {
    segment_by(points, DataPoint::is_missing)
}

pub fn separate_on_predicted(points: &[DataPoint]) -> Vec<Vec<DataPoint>> {
    segment_by(points, DataPoint::is_predicted)
}

/// Runs of "missing or predicted" against normal points.
///
/// A missing point right after a predicted one is reclassified as normal so
/// the gap does not get folded into the forecast run.
pub fn separate_on_missing_and_predicted(points: &[DataPoint]) -> Vec<Vec<DataPoint>> {
    let normalized = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let after_prediction = index > 0 && points[index - 1].is_predicted();
            if after_prediction && point.is_missing() {
                point.as_normal()
            } else {
                point.clone()
            }
        })
        .collect::<Vec<_>>();

    segment_by(&normalized, |p| p.is_missing() || p.is_predicted())
}

//! Crossings between a horizontal water surface and the bed polyline.

use crate::point::{Intersections, ProfilePoint};

/// Intersection of the infinite lines through `p1`-`p2` and `p3`-`p4`.
///
/// `None` when the lines are parallel or coincide (zero determinant).
pub fn calculate_intersection(
    p1: ProfilePoint,
    p2: ProfilePoint,
    p3: ProfilePoint,
    p4: ProfilePoint,
) -> Option<ProfilePoint> {
    let d = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if d == 0.0 {
        log::debug!("no single intersection between {p1:?}-{p2:?} and {p3:?}-{p4:?}");
        return None;
    }

    let a = p1.x * p2.y - p1.y * p2.x;
    let b = p3.x * p4.y - p3.y * p4.x;

    Some(ProfilePoint {
        x: (a * (p3.x - p4.x) - (p1.x - p2.x) * b) / d,
        y: (a * (p3.y - p4.y) - (p1.y - p2.y) * b) / d,
    })
}

/// Left and right points where the water level crosses the bed.
///
/// The profile is split into halves (sharing the middle point when the
/// length is odd). The left half is searched for the first segment that
/// drops through the level, the right half for the first that rises
/// through it. Touching the level exactly does not count as crossing.
/// Returns `None` without a level, when either side has no crossing, or
/// when a crossing segment is degenerate.
pub fn find_intersections(profile: &[ProfilePoint], level: Option<f64>) -> Option<Intersections> {
    let level = level?;
    let n = profile.len();
    let half = n.div_ceil(2);
    let left = &profile[..half];
    let right = &profile[n - half..];

    let descending = left
        .windows(2)
        .find(|pair| pair[0].y > level && pair[1].y < level)?;
    let ascending = right
        .windows(2)
        .find(|pair| pair[0].y < level && pair[1].y > level)?;

    let last = profile.last()?;
    let surface_start = ProfilePoint::new(0.0, level);
    let surface_end = ProfilePoint::new(last.x, level);

    let left = calculate_intersection(descending[0], descending[1], surface_start, surface_end)?;
    let right = calculate_intersection(ascending[0], ascending[1], surface_start, surface_end)?;
    Some((left, right))
}

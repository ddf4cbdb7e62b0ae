//! Wetted cross-sectional area.

use crate::point::{Intersections, ProfilePoint};

/// Area of water in the cross-section, used as volume per unit length of
/// river.
///
/// The polygon runs from the left intersection along every bed point
/// between the intersections that lies at or below the surface, to the
/// right intersection, and closes along the surface. Without
/// intersections the area is 0.
pub fn calc_water_volume(profile: &[ProfilePoint], intersections: Option<&Intersections>) -> f64 {
    let Some((left, right)) = intersections else {
        return 0.0;
    };

    let polygon = std::iter::once(*left)
        .chain(
            profile
                .iter()
                .filter(|p| p.x >= left.x && p.x <= right.x && p.y <= left.y)
                .copied(),
        )
        .chain(std::iter::once(*right))
        .collect::<Vec<_>>();

    shoelace(&polygon).abs() / 2.0
}

/// Twice the signed area of a closed polygon.
fn shoelace(polygon: &[ProfilePoint]) -> f64 {
    polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - a.y * b.x)
        .sum()
}

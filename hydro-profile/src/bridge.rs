//! Bridge outline drawn over a cross-section.

use crate::point::ProfilePoint;

/// Upper bound on truss triangles; very small heights are stretched to fit.
pub const MAX_BRIDGE_TRIANGLES: f64 = 1000.0;

/// Deck outline and zig-zag truss for a bridge spanning `first` to `last`.
///
/// Coordinates are passed through `x_scale` / `y_scale`, so the result is
/// in pixels. The deck rises `bridge_height` above the bank ends; the truss
/// alternates between `bridge_level` and `bridge_level + bridge_height`
/// with triangles about twice as wide as they are tall, fitted to span the
/// full width, at most [`MAX_BRIDGE_TRIANGLES`] of them. Without a bridge
/// level both lists are empty.
pub fn bridge_line(
    x_scale: impl Fn(f64) -> f64,
    y_scale: impl Fn(f64) -> f64,
    first: ProfilePoint,
    last: ProfilePoint,
    bridge_level: Option<f64>,
    bridge_height: f64,
) -> (Vec<[f64; 2]>, Vec<[f64; 2]>) {
    let Some(level) = bridge_level else {
        return (Vec::new(), Vec::new());
    };

    let total_width = last.x - first.x;
    let triangle_width = bridge_height * 2.0;
    let triangles = if triangle_width > 0.0 {
        (total_width / triangle_width)
            .floor()
            .max(1.0)
            .min(MAX_BRIDGE_TRIANGLES)
    } else {
        1.0
    };
    let fitted = total_width / triangles;
    let tw = fitted / 2.0;

    let deck = vec![
        [x_scale(first.x), y_scale(first.y)],
        [x_scale(first.x + tw), y_scale(first.y + bridge_height)],
        [x_scale(last.x - tw), y_scale(last.y + bridge_height)],
        [x_scale(last.x), y_scale(last.y)],
    ];

    let mut supports = vec![[x_scale(first.x + tw), y_scale(level + bridge_height)]];
    for i in 0..triangles as usize {
        let x = first.x + i as f64 * fitted;
        supports.push([x_scale(x), y_scale(level)]);
        supports.push([x_scale(x + tw), y_scale(level + bridge_height)]);
    }

    (deck, supports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_bridge_level() {
        let (deck, supports) = bridge_line(
            |x| x,
            |y| y,
            ProfilePoint::new(0.0, 5.0),
            ProfilePoint::new(10.0, 5.0),
            None,
            1.0,
        );
        assert!(deck.is_empty() && supports.is_empty());
    }

    #[test]
    fn truss_fits_span() {
        let (deck, supports) = bridge_line(
            |x| x,
            |y| y,
            ProfilePoint::new(0.0, 5.0),
            ProfilePoint::new(10.0, 5.0),
            Some(6.0),
            1.0,
        );
        assert_eq!(deck.len(), 4);
        assert_eq!(deck[1], [1.0, 6.0]);
        // 5 triangles of width 2
        assert_eq!(supports.len(), 11);
        assert_eq!(supports[1], [0.0, 6.0]);
        assert_eq!(supports[2], [1.0, 7.0]);
        assert_eq!(supports[10], [9.0, 7.0]);
    }

    #[test]
    fn narrow_span_keeps_one_triangle() {
        let (_, supports) = bridge_line(
            |x| x * 10.0,
            |y| 100.0 - y,
            ProfilePoint::new(0.0, 5.0),
            ProfilePoint::new(1.0, 5.0),
            Some(6.0),
            2.0,
        );
        assert_eq!(supports.len(), 3);
        assert_eq!(supports[2], [5.0, 92.0]);
    }

    #[test]
    fn tiny_height_is_capped() {
        let (deck, supports) = bridge_line(
            |x| x,
            |y| y,
            ProfilePoint::new(0.0, 5.0),
            ProfilePoint::new(10.0, 5.0),
            Some(6.0),
            1e-9,
        );
        assert_eq!(deck.len(), 4);
        assert_eq!(supports.len(), 1 + 2 * MAX_BRIDGE_TRIANGLES as usize);
        let last = supports[supports.len() - 1];
        assert!((last[0] - (10.0 - 0.005)).abs() < 1e-9);
    }
}

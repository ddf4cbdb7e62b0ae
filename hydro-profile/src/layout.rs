//! Pixel layout for drawing a cross-section.

use crate::bridge;
use crate::error::{ProfileError, Result};
use crate::intersection::find_intersections;
use crate::point::{Intersections, ProfilePoint};
use crate::shape::ProfileShape;
use crate::volume::calc_water_volume;
use hydro_scale::LinearScale;
use serde::{Deserialize, Serialize};

/// Deck thickness above the bridge level, in metres.
pub const BRIDGE_SIZE: f64 = 0.5;
pub const PADDING: f64 = 5.0;
pub const AXIS_OFFSET_RIGHT: f64 = 55.0;
pub const AXIS_OFFSET_BOTTOM: f64 = 45.0;
/// Ground drawn below the lowest bed point.
pub const BANK_PADDING: f64 = 15.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileOptions {
    pub width: f64,
    /// Reserve room for the right and bottom axes.
    pub axis: bool,
    pub bridge_level: Option<f64>,
    pub current_water_level: Option<f64>,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            width: 600.0,
            axis: false,
            bridge_level: None,
            current_water_level: None,
        }
    }
}

/// Everything a renderer needs to place a profile, derived once from the
/// points and options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileLayout {
    pub min_elevation: f64,
    /// Highest bed point, or the top of the bridge deck if that is higher.
    pub max_elevation: f64,
    pub river_width: f64,
    pub render_width: f64,
    pub render_height: f64,
    pub total_width: f64,
    pub total_height: f64,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub highest_left: ProfilePoint,
    pub highest_right: ProfilePoint,
    pub intersections: Option<Intersections>,
    /// Wetted cross-sectional area in square metres.
    pub water_area: f64,
    /// Horizontal pixel extent of the water surface.
    pub water_left: f64,
    pub water_right: f64,
    /// Vertical pixel position of the water surface (bed bottom when dry).
    pub water_surface: f64,
    /// Closed outline of the deck; empty without a bridge.
    pub bridge_deck: Vec<[f64; 2]>,
    /// Ruler values in metres across the water surface; empty when dry.
    pub water_ruler_ticks: Vec<f64>,
}

impl ProfileLayout {
    pub fn compute(profile: &[ProfilePoint], options: &ProfileOptions) -> Result<Self> {
        let (Some(first), Some(last)) = (profile.first().copied(), profile.last().copied()) else {
            return Err(ProfileError::EmptyProfile);
        };

        let max_river = profile.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        let min_elevation = profile.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_elevation = match options.bridge_level {
            Some(level) => max_river.max(level + BRIDGE_SIZE),
            None => max_river,
        };

        let river_width = profile.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        if river_width <= 0.0 {
            return Err(ProfileError::ZeroWidth(river_width));
        }

        let (offset_right, offset_bottom) = if options.axis {
            (AXIS_OFFSET_RIGHT, AXIS_OFFSET_BOTTOM)
        } else {
            (0.0, 0.0)
        };
        let total_width = options.width;
        let render_width = total_width - PADDING * 2.0 - offset_right;
        let render_height = (max_elevation - min_elevation) / river_width * render_width;
        let total_height = render_height + BANK_PADDING + PADDING * 2.0 + offset_bottom;

        let x_scale = LinearScale::new([0.0, river_width], [0.0, render_width]);
        let y_scale = LinearScale::new([min_elevation, max_elevation], [render_height, 0.0]).nice();

        let half = (profile.len() as f64 / 2.0).round() as usize;
        let highest_left = highest_point(&profile[..half]);
        let highest_right = highest_point(&profile[profile.len() - half..]);

        let level = options.current_water_level;
        let intersections = find_intersections(profile, level);
        let water_area = calc_water_volume(profile, intersections.as_ref());
        log::debug!("water level {level:?} crosses at {intersections:?}, area {water_area}");

        let mut layout = Self {
            min_elevation,
            max_elevation,
            river_width,
            render_width,
            render_height,
            total_width,
            total_height,
            x_scale,
            y_scale,
            highest_left,
            highest_right,
            intersections,
            water_area,
            water_left: 0.0,
            water_right: 0.0,
            water_surface: 0.0,
            bridge_deck: Vec::new(),
            water_ruler_ticks: Vec::new(),
        };

        // overtopping water spreads to the ends of the profile
        layout.water_left = match level {
            Some(l) if l > highest_left.y => layout.profile_x(first.x),
            _ => layout.profile_x(highest_left.x),
        };
        layout.water_right = match level {
            Some(l) if l > highest_right.y => layout.profile_x(last.x),
            _ => layout.profile_x(highest_right.x),
        };
        layout.water_surface = layout.profile_y(level.unwrap_or(min_elevation));

        if let Some(bridge_level) = options.bridge_level {
            layout.bridge_deck = vec![
                [layout.profile_x(first.x), layout.profile_y(bridge_level)],
                [layout.profile_x(last.x), layout.profile_y(bridge_level)],
                [layout.profile_x(last.x), layout.profile_y(bridge_level + BRIDGE_SIZE)],
                [layout.profile_x(first.x), layout.profile_y(bridge_level + BRIDGE_SIZE)],
            ];
        }

        if let Some((left, right)) = intersections {
            let w = right.x - left.x;
            layout.water_ruler_ticks = vec![0.0, w / 4.0, w / 2.0, w * 3.0 / 4.0, w];
        }

        Ok(layout)
    }

    /// Horizontal pixel position of a profile x, padding included.
    pub fn profile_x(&self, x: f64) -> f64 {
        self.x_scale.map(x) + PADDING
    }

    /// Vertical pixel position of an elevation, padding included.
    pub fn profile_y(&self, y: f64) -> f64 {
        self.y_scale.map(y) + PADDING
    }

    pub fn point(&self, p: ProfilePoint) -> [f64; 2] {
        [self.profile_x(p.x), self.profile_y(p.y)]
    }

    /// Bridge deck and truss in pixels, see [`bridge::bridge_line`].
    pub fn bridge_line(
        &self,
        first: ProfilePoint,
        last: ProfilePoint,
        bridge_level: Option<f64>,
        bridge_height: f64,
    ) -> (Vec<[f64; 2]>, Vec<[f64; 2]>) {
        bridge::bridge_line(
            |x| self.profile_x(x),
            |y| self.profile_y(y),
            first,
            last,
            bridge_level,
            bridge_height,
        )
    }

    pub fn shape_points(&self, shape: &ProfileShape) -> Vec<[f64; 2]> {
        shape.points().iter().map(|p| self.point(*p)).collect()
    }
}

/// Highest point of a slice, never below the origin.
fn highest_point(points: &[ProfilePoint]) -> ProfilePoint {
    points
        .iter()
        .fold(ProfilePoint::new(0.0, 0.0), |a, b| if b.y > a.y { *b } else { a })
}

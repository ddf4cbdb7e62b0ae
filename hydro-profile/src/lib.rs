//! River cross-section geometry.
//!
//! A profile is a polyline of `(x, elevation)` points from bank to bank.
//! Given a water level this crate finds where the surface meets the bed,
//! the wetted cross-sectional area between those points, and the pixel
//! layout a renderer needs to draw bed, water and an optional bridge.

pub mod bridge;
pub mod error;
pub mod intersection;
pub mod layout;
pub mod point;
pub mod shape;
pub mod volume;

pub use bridge::bridge_line;
pub use error::{ProfileError, Result};
pub use intersection::{calculate_intersection, find_intersections};
pub use layout::{ProfileLayout, ProfileOptions};
pub use point::{Intersections, ProfilePoint, RiverProfile};
pub use shape::{IconType, ProfileShape};
pub use volume::calc_water_volume;

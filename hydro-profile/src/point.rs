use serde::{Deserialize, Serialize};

/// Horizontal distance and elevation of one point on a cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub x: f64,
    /// Elevation, also accepted as `msl` (metres above sea level).
    #[serde(alias = "msl")]
    pub y: f64,
}

impl ProfilePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cross-section ordered from bank to bank with increasing `x`.
pub type RiverProfile = Vec<ProfilePoint>;

/// Where the water surface meets the bed, as `(left, right)`.
pub type Intersections = (ProfilePoint, ProfilePoint);

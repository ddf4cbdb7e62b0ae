//! Overlay shapes placed on a profile in profile coordinates.

use crate::point::ProfilePoint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconType {
    Harbour,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProfileShape {
    #[serde(rename_all = "camelCase")]
    Polygon {
        #[serde(default)]
        fill: Option<String>,
        #[serde(default)]
        stroke_width: Option<f64>,
        #[serde(default)]
        stroke_color: Option<String>,
        points: Vec<ProfilePoint>,
    },
    #[serde(rename_all = "camelCase")]
    Path {
        #[serde(default)]
        fill: Option<String>,
        #[serde(default)]
        stroke_width: Option<f64>,
        #[serde(default)]
        stroke_color: Option<String>,
        points: Vec<ProfilePoint>,
    },
    Icon {
        name: IconType,
        #[serde(default)]
        fill: Option<String>,
        points: Vec<ProfilePoint>,
        width: f64,
        height: f64,
    },
}

impl ProfileShape {
    pub fn points(&self) -> &[ProfilePoint] {
        match self {
            ProfileShape::Polygon { points, .. }
            | ProfileShape::Path { points, .. }
            | ProfileShape::Icon { points, .. } => points,
        }
    }
}

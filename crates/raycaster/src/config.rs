//! Camera configuration, loadable from JSON.
use serde::{Deserialize, Serialize};

use tilecast_physics::V2;

use crate::errors::*;

fn default_direction() -> V2 {
    V2::new(1.0, 0.0)
}

fn default_field_of_view() -> f64 {
    std::f64::consts::FRAC_PI_2
}

fn default_range() -> u32 {
    15
}

/// Everything needed to build a [crate::RayCamera].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub position: V2,
    /// Heading.  Only the direction matters.
    #[serde(default = "default_direction")]
    pub direction: V2,
    /// How many rays to cast per render.
    pub columns: usize,
    /// Total angle covered by the columns, in radians.
    #[serde(default = "default_field_of_view")]
    pub field_of_view: f64,
    /// Boundary crossings per ray before giving up.
    #[serde(default = "default_range")]
    pub range: u32,
}

impl CameraConfig {
    pub fn new(position: V2, direction: V2, columns: usize) -> CameraConfig {
        CameraConfig {
            position,
            direction,
            columns,
            field_of_view: default_field_of_view(),
            range: default_range(),
        }
    }

    pub fn from_json(json: &str) -> Result<CameraConfig> {
        Ok(serde_json::from_str(json)?)
    }
}

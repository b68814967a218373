//! Label bounding box attached to each map region.

use serde::{Deserialize, Serialize};

/// Geographic box (degrees) used to decide whether a label is drawn.
///
/// Values are stored exactly as configured. The catalog keeps the historical
/// convention where `lon_min` holds the eastern edge and `lon_max` the
/// western one, so `lon_max < lon_min` for western-hemisphere regions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelBounds {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl LabelBounds {
    pub const fn new(lon_min: f64, lon_max: f64, lat_min: f64, lat_max: f64) -> Self {
        Self {
            lon_min,
            lon_max,
            lat_min,
            lat_max,
        }
    }
}

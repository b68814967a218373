//! Observation records read from the track and city CSV files.

use serde::{Deserialize, Serialize};

use crate::category::{knots_to_mph, StormCategory};
use crate::error::TrackResult;

/// One storm-center observation.
///
/// Field order matches the column order of the track CSV
/// (`epoch, lat, lon, pressure, wind`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    /// Seconds since the Unix epoch
    pub timestamp: i64,
    /// Latitude in decimal degrees (north positive)
    pub latitude: f64,
    /// Longitude in decimal degrees (east positive)
    pub longitude: f64,
    /// Minimum central pressure (hPa). Informational only.
    pub pressure_hpa: f64,
    /// Maximum sustained wind (knots)
    pub wind_knots: f64,
}

impl TrackPoint {
    pub fn new(timestamp: i64, latitude: f64, longitude: f64, pressure_hpa: f64, wind_knots: f64) -> Self {
        Self {
            timestamp,
            latitude,
            longitude,
            pressure_hpa,
            wind_knots,
        }
    }

    pub fn wind_mph(&self) -> f64 {
        knots_to_mph(self.wind_knots)
    }

    pub fn category(&self) -> TrackResult<StormCategory> {
        StormCategory::from_knots(self.wind_knots)
    }
}

/// A reference city drawn on every map of its region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityPoint {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityPoint {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

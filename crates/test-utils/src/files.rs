//! Temporary input files in the on-disk CSV formats.

use std::io::Write;

use tempfile::NamedTempFile;
use track_common::{CityPoint, TrackPoint};

/// Render track points as headerless track CSV text.
pub fn track_csv(points: &[TrackPoint]) -> String {
    points
        .iter()
        .map(|p| {
            format!(
                "{},{},{},{},{}\n",
                p.timestamp, p.latitude, p.longitude, p.pressure_hpa, p.wind_knots
            )
        })
        .collect()
}

/// Render cities as headerless city CSV text.
pub fn city_csv(cities: &[CityPoint]) -> String {
    cities
        .iter()
        .map(|c| format!("{},{},{}\n", c.name, c.latitude, c.longitude))
        .collect()
}

/// Write arbitrary text to a temp file that lives as long as the handle.
pub fn write_temp_csv(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

pub fn write_track_csv(points: &[TrackPoint]) -> NamedTempFile {
    write_temp_csv(&track_csv(points))
}

pub fn write_city_csv(cities: &[CityPoint]) -> NamedTempFile {
    write_temp_csv(&city_csv(cities))
}

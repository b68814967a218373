//! Readers for the fixed-schema track and city CSV files.
//!
//! Both formats have no header row. Fields are trimmed and lines starting
//! with `#` are ignored. Any row that does not match the schema fails the
//! whole read.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use track_common::{CityPoint, TrackError, TrackPoint, TrackResult};
use tracing::{debug, info};

/// Read a track file: `epoch, lat, lon, pressure_hpa, wind_knots` per row.
pub fn read_track(path: &Path) -> TrackResult<Vec<TrackPoint>> {
    let points = read_csv_file::<TrackPoint>(path, TRACK_FIELDS)?;
    info!(path = %path.display(), points = points.len(), "Loaded storm track");
    Ok(points)
}

/// Read a city file: `name, lat, lon` per row.
pub fn read_cities(path: &Path) -> TrackResult<Vec<CityPoint>> {
    let cities = read_csv_file::<CityPoint>(path, CITY_FIELDS)?;
    info!(path = %path.display(), cities = cities.len(), "Loaded reference cities");
    Ok(cities)
}

/// Columns per track row.
pub const TRACK_FIELDS: usize = 5;
/// Columns per city row.
pub const CITY_FIELDS: usize = 3;

/// Parse track rows from any reader. `source` names the input in errors.
pub fn parse_track<R: Read>(reader: R, source: &Path) -> TrackResult<Vec<TrackPoint>> {
    parse_csv(reader, source, TRACK_FIELDS)
}

/// Parse city rows from any reader. `source` names the input in errors.
pub fn parse_cities<R: Read>(reader: R, source: &Path) -> TrackResult<Vec<CityPoint>> {
    parse_csv(reader, source, CITY_FIELDS)
}

fn read_csv_file<T: DeserializeOwned>(path: &Path, fields: usize) -> TrackResult<Vec<T>> {
    let file = std::fs::File::open(path).map_err(|e| TrackError::io(path, e))?;
    parse_csv(file, path, fields)
}

/// Every row must have exactly `fields` columns, even when all rows agree.
fn parse_csv<T: DeserializeOwned, R: Read>(reader: R, source: &Path, fields: usize) -> TrackResult<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| malformed(source, e, 0))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.len() != fields {
            return Err(TrackError::MalformedInputRow {
                path: source.to_path_buf(),
                line,
                message: format!("expected {} fields, found {}", fields, record.len()),
            });
        }
        let row = record.deserialize::<T>(None).map_err(|e| malformed(source, e, line))?;
        rows.push(row);
    }

    debug!(source = %source.display(), rows = rows.len(), "Parsed CSV");
    Ok(rows)
}

/// `row_line` is used when the error itself carries no position.
fn malformed(source: &Path, err: csv::Error, row_line: u64) -> TrackError {
    let line = err.position().map(|p| p.line()).unwrap_or(row_line);
    let message = match err.kind() {
        csv::ErrorKind::Deserialize { err: de, .. } => de.to_string(),
        csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
            format!("expected {} fields, found {}", expected_len, len)
        }
        _ => err.to_string(),
    };

    match err.into_kind() {
        csv::ErrorKind::Io(io) => TrackError::io(source, io),
        _ => TrackError::MalformedInputRow {
            path: source.to_path_buf(),
            line,
            message,
        },
    }
}

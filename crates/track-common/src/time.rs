//! Time handling for date annotations along the track.

use chrono::DateTime;

/// Whether an observation time gets a date label.
///
/// This is the historical heuristic used by best-track plots: any epoch value
/// divisible by 1000 counts as a synoptic (00Z) fix. It is not a calendar
/// check for UTC midnight.
pub fn is_synoptic(timestamp: i64) -> bool {
    timestamp.rem_euclid(1000) == 0
}

/// Month/day (`MM/DD`) of an epoch timestamp interpreted as UTC.
///
/// Returns None if the timestamp is outside chrono's representable range.
pub fn date_label(timestamp: i64) -> Option<String> {
    DateTime::from_timestamp(timestamp, 0).map(|dt| dt.format("%m/%d").to_string())
}

//! Error types for the storm-track pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using TrackError.
pub type TrackResult<T> = Result<T, TrackError>;

/// Primary error type for track plotting.
#[derive(Debug, Error)]
pub enum TrackError {
    // === Configuration Errors ===
    #[error("Unknown map region '{id}'. Expected one of: {expected}")]
    UnknownRegion { id: String, expected: String },

    // === Per-point Errors ===
    #[error("Invalid wind measurement: {0}")]
    InvalidMeasurement(f64),

    #[error("Coordinates out of projection range: lon={lon}, lat={lat}")]
    ProjectionOutOfRange { lon: f64, lat: f64 },

    // === Input Errors ===
    #[error("Malformed row in {path} at line {line}: {message}")]
    MalformedInputRow {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Output Errors ===
    #[error("Rendering failed: {0}")]
    Render(String),
}

impl TrackError {
    /// Per-point errors skip the offending observation; everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TrackError::InvalidMeasurement(_) | TrackError::ProjectionOutOfRange { .. }
        )
    }

    /// Short machine-friendly name, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            TrackError::UnknownRegion { .. } => "UnknownRegion",
            TrackError::InvalidMeasurement(_) => "InvalidMeasurement",
            TrackError::ProjectionOutOfRange { .. } => "ProjectionOutOfRange",
            TrackError::MalformedInputRow { .. } => "MalformedInputRow",
            TrackError::Io { .. } => "Io",
            TrackError::Render(_) => "Render",
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TrackError::Io {
            path: path.into(),
            source,
        }
    }
}

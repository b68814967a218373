//! Coordinate transformations for track maps.
//!
//! Implements the Lambert conformal conic projection from scratch and a
//! pixel-canvas adapter on top of it.

pub mod lambert;
pub mod map;

pub use lambert::LambertConformal;
pub use map::{LambertParams, MapProjection, PixelPoint};

use track_common::TrackError;

/// Errors raised by projection setup and transforms.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    #[error("Coordinates out of projection range: lon={lon}, lat={lat}")]
    OutOfRange { lon: f64, lat: f64 },

    #[error("Non-finite plane coordinates: x={x}, y={y}")]
    NonFinite { x: f64, y: f64 },

    #[error("Invalid projection parameters: {0}")]
    InvalidParameters(String),
}

impl From<ProjectionError> for TrackError {
    fn from(err: ProjectionError) -> Self {
        match err {
            ProjectionError::OutOfRange { lon, lat } => TrackError::ProjectionOutOfRange { lon, lat },
            other => TrackError::Render(other.to_string()),
        }
    }
}

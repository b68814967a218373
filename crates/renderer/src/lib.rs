//! Raster output for storm track maps.
//!
//! Turns a [`track_core::RenderPlan`] into an RGBA image:
//! - Ocean background and optional lat/lon grid
//! - Category-colored track markers, city crosses and text labels
//! - Category legend and title band
//!
//! Encoding to PNG is handled by [`png`].

pub mod assemble;
pub mod font;
pub mod grid;
pub mod png;
pub mod style;

use std::path::PathBuf;

use thiserror::Error;
use track_common::TrackError;

pub use assemble::{assemble, AssemblyOptions};
pub use font::load_font;
pub use png::{encode_png, write_png};
pub use style::Palette;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("failed to write image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<RenderError> for TrackError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Io { path, source } => TrackError::Io { path, source },
            RenderError::Encode(msg) => TrackError::Render(msg),
        }
    }
}

//! Common types and utilities shared across the storm-track crates.

pub mod bounds;
pub mod category;
pub mod error;
pub mod point;
pub mod time;

pub use bounds::LabelBounds;
pub use category::{classify, knots_to_mph, StormCategory, KNOTS_TO_MPH};
pub use error::{TrackError, TrackResult};
pub use point::{CityPoint, TrackPoint};
pub use time::{date_label, is_synoptic};

//! Track-to-image planning pipeline.
//!
//! Turns a storm track and a region's reference cities into an ordered list
//! of renderer-agnostic [`DrawInstruction`]s:
//! - region catalog lookup
//! - CSV ingestion for track and city files
//! - label filtering against the region's bounding box
//! - per-point classification and projection

pub mod filter;
pub mod ingest;
pub mod instruction;
pub mod plan;
pub mod region;

pub use filter::inside_label_region;
pub use ingest::{read_cities, read_track};
pub use instruction::{DrawInstruction, LabelKind, MarkerStyle, PixelOffset, TextLabel};
pub use plan::{RenderPlan, SkipSummary, TrackRenderer, LABEL_OFFSET_M};
pub use region::{resolve_region, Region, RegionId};

//! Storm track plotter.
//!
//! Reads a track CSV, plans markers and labels for one map region and writes
//! the finished map as a PNG.

pub mod config;
pub mod pipeline;

pub use config::{Cli, ConfigLayer, PlotConfig};
pub use pipeline::{run, RunSummary};

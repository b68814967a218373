//! One plot run: CSV in, PNG out.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use renderer::{assemble, load_font, write_png, AssemblyOptions, Palette};
use tracing::{debug, info, warn};
use track_common::{StormCategory, TrackError};
use track_core::{read_cities, read_track, resolve_region, TrackRenderer};

use crate::config::PlotConfig;

/// What a run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub output_file: PathBuf,
    pub width: u32,
    pub height: u32,
    pub png_bytes: usize,
    pub instructions: usize,
    pub track_points: usize,
    pub skipped_points: usize,
    pub peak_category: Option<StormCategory>,
}

/// Plot one storm.
///
/// The region, palette and both CSV files are loaded before anything is
/// drawn, so a bad setting or a malformed row leaves no output file behind.
pub fn run(config: &PlotConfig) -> Result<RunSummary> {
    let region = resolve_region(&config.region_id)?;
    let palette = match &config.palette_file {
        Some(path) => load_palette(path)?,
        None => Palette::default(),
    };

    let track = read_track(&config.csv_file)?;
    let city_file = region.city_path(&config.cities_dir);
    let cities = read_cities(&city_file)?;

    let projection = region
        .map_projection(config.canvas_width)
        .with_context(|| format!("Failed to build projection for region {}", region.id))?;

    let track_points = track.len();
    let plan = TrackRenderer::new(&region, &projection).plan(config.title(), &cities, track);

    if plan.skipped_track_points.total() > 0 {
        warn!(
            invalid_measurement = plan.skipped_track_points.invalid_measurement,
            out_of_range = plan.skipped_track_points.out_of_range,
            "Some track points were not drawn"
        );
    }

    if let Some(path) = &config.instructions_json {
        let json = plan.instructions_json().context("Failed to serialize draw instructions")?;
        std::fs::write(path, json)
            .map_err(|e| TrackError::io(path, e))
            .context("Failed to write draw instructions")?;
        info!(path = %path.display(), "Wrote draw instructions");
    }

    let options = AssemblyOptions {
        palette,
        ..AssemblyOptions::new(config.grid_enabled, load_font(config.font_path.as_deref()))
    };
    let img = assemble(&projection, &plan, &options);
    let png_bytes = write_png(&img, &config.output_file).map_err(TrackError::from)?;

    let summary = RunSummary {
        output_file: config.output_file.clone(),
        width: img.width(),
        height: img.height(),
        png_bytes,
        instructions: plan.instructions.len(),
        track_points,
        skipped_points: plan.skipped_track_points.total(),
        peak_category: plan.peak_category(),
    };

    info!(
        storm = %plan.title,
        region = %region.id,
        output = %summary.output_file.display(),
        width = summary.width,
        height = summary.height,
        bytes = summary.png_bytes,
        instructions = summary.instructions,
        peak = ?summary.peak_category,
        "Track plot complete"
    );

    Ok(summary)
}

fn load_palette(path: &Path) -> Result<Palette> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| TrackError::io(path, e))
        .context("Failed to read palette file")?;
    let palette = Palette::from_json(&text)
        .with_context(|| format!("Failed to parse palette file: {}", path.display()))?;
    debug!(path = %path.display(), "Loaded palette");
    Ok(palette)
}

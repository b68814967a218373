//! Plot configuration.
//!
//! Settings come from three layers, lowest to highest precedence:
//! a YAML file (`--config`), environment variables (including `.env`), and
//! command-line flags. Clap merges the last two; [`ConfigLayer::merge`]
//! stacks the result over the file.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_CITIES_DIR: &str = "data/cities";
pub const DEFAULT_CANVAS_WIDTH: u32 = 1100;

/// Storm track plotter
#[derive(Parser, Debug, Clone)]
#[command(name = "track-plotter")]
#[command(about = "Plot a tropical cyclone track onto a regional map")]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "TRACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Track CSV (epoch, lat, lon, pressure, wind in knots)
    #[arg(long, env = "TRACK_CSV_FILE")]
    pub csv_file: Option<PathBuf>,

    #[arg(long, env = "TRACK_STORM_NAME")]
    pub storm_name: Option<String>,

    /// Season shown in the title, e.g. 2005 or 2004-05
    #[arg(long, env = "TRACK_STORM_YEAR")]
    pub storm_year: Option<String>,

    /// Output PNG path
    #[arg(short, long, env = "TRACK_OUTPUT_FILE")]
    pub output_file: Option<PathBuf>,

    /// Map region: full, gulf, carib or east_coast
    #[arg(short, long = "region", env = "TRACK_REGION")]
    pub region_id: Option<String>,

    /// Draw the lat/lon grid
    #[arg(long = "grid", env = "TRACK_GRID", num_args = 0..=1, default_missing_value = "true")]
    pub grid_enabled: Option<bool>,

    /// Directory holding the region city lists
    #[arg(long, env = "TRACK_CITIES_DIR")]
    pub cities_dir: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, env = "TRACK_CANVAS_WIDTH")]
    pub canvas_width: Option<u32>,

    /// TrueType font for labels
    #[arg(long, env = "TRACK_FONT_PATH")]
    pub font_path: Option<PathBuf>,

    /// Also write the draw instructions as JSON
    #[arg(long, env = "TRACK_INSTRUCTIONS_JSON")]
    pub instructions_json: Option<PathBuf>,

    /// JSON color palette; unset keys keep the default colors
    #[arg(long, env = "TRACK_PALETTE_FILE")]
    pub palette_file: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "TRACK_LOG_JSON")]
    pub log_json: bool,
}

impl Cli {
    /// The plot settings given on the command line or through the environment.
    pub fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            csv_file: self.csv_file.clone(),
            storm_name: self.storm_name.clone(),
            storm_year: self.storm_year.clone(),
            output_file: self.output_file.clone(),
            region_id: self.region_id.clone(),
            grid_enabled: self.grid_enabled,
            cities_dir: self.cities_dir.clone(),
            canvas_width: self.canvas_width,
            font_path: self.font_path.clone(),
            instructions_json: self.instructions_json.clone(),
            palette_file: self.palette_file.clone(),
        }
    }
}

/// One source of settings. Unset fields defer to lower layers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub csv_file: Option<PathBuf>,
    pub storm_name: Option<String>,
    /// Accepts `2005` as well as `"2004-05"` in YAML
    #[serde(deserialize_with = "year_text")]
    pub storm_year: Option<String>,
    pub output_file: Option<PathBuf>,
    pub region_id: Option<String>,
    pub grid_enabled: Option<bool>,
    pub cities_dir: Option<PathBuf>,
    pub canvas_width: Option<u32>,
    pub font_path: Option<PathBuf>,
    pub instructions_json: Option<PathBuf>,
    pub palette_file: Option<PathBuf>,
}

fn year_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Number(i64),
        Text(String),
    }

    Ok(Option::<Year>::deserialize(deserializer)?.map(|year| match year {
        Year::Number(n) => n.to_string(),
        Year::Text(t) => t,
    }))
}

impl ConfigLayer {
    /// Load a layer from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let layer: ConfigLayer = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "Loaded plot config");
        Ok(layer)
    }

    /// Overlay `self` on `lower`; fields set in `self` win.
    pub fn merge(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            csv_file: self.csv_file.or(lower.csv_file),
            storm_name: self.storm_name.or(lower.storm_name),
            storm_year: self.storm_year.or(lower.storm_year),
            output_file: self.output_file.or(lower.output_file),
            region_id: self.region_id.or(lower.region_id),
            grid_enabled: self.grid_enabled.or(lower.grid_enabled),
            cities_dir: self.cities_dir.or(lower.cities_dir),
            canvas_width: self.canvas_width.or(lower.canvas_width),
            font_path: self.font_path.or(lower.font_path),
            instructions_json: self.instructions_json.or(lower.instructions_json),
            palette_file: self.palette_file.or(lower.palette_file),
        }
    }
}

/// Fully resolved settings for one plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub csv_file: PathBuf,
    pub storm_name: String,
    pub storm_year: String,
    pub output_file: PathBuf,
    pub region_id: String,
    pub grid_enabled: bool,
    pub cities_dir: PathBuf,
    pub canvas_width: u32,
    pub font_path: Option<PathBuf>,
    pub instructions_json: Option<PathBuf>,
    pub palette_file: Option<PathBuf>,
}

impl PlotConfig {
    /// Resolve the configuration for a parsed command line.
    pub fn load(cli: &Cli) -> Result<Self> {
        let file_layer = match &cli.config {
            Some(path) => ConfigLayer::load(path)?,
            None => ConfigLayer::default(),
        };
        Self::from_layer(cli.layer().merge(file_layer))
    }

    /// Fill defaults and check that every required setting is present.
    pub fn from_layer(layer: ConfigLayer) -> Result<Self> {
        let canvas_width = layer.canvas_width.unwrap_or(DEFAULT_CANVAS_WIDTH);
        if canvas_width == 0 {
            bail!("canvas_width must be at least 1 pixel");
        }

        Ok(Self {
            csv_file: required(layer.csv_file, "csv_file", "--csv-file", "TRACK_CSV_FILE")?,
            storm_name: required(layer.storm_name, "storm_name", "--storm-name", "TRACK_STORM_NAME")?,
            storm_year: required(layer.storm_year, "storm_year", "--storm-year", "TRACK_STORM_YEAR")?,
            output_file: required(layer.output_file, "output_file", "--output-file", "TRACK_OUTPUT_FILE")?,
            region_id: required(layer.region_id, "region_id", "--region", "TRACK_REGION")?,
            grid_enabled: layer.grid_enabled.unwrap_or(false),
            cities_dir: layer.cities_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CITIES_DIR)),
            canvas_width,
            font_path: layer.font_path,
            instructions_json: layer.instructions_json,
            palette_file: layer.palette_file,
        })
    }

    /// Map title, e.g. `Katrina (2005)`.
    pub fn title(&self) -> String {
        format!("{} ({})", self.storm_name, self.storm_year)
    }
}

fn required<T>(value: Option<T>, key: &str, flag: &str, env: &str) -> Result<T> {
    value.with_context(|| format!("Missing required setting `{key}` (set {flag}, {env}, or `{key}` in the config file)"))
}

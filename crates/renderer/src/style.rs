//! Color tables for markers, labels and map furniture.

use image::Rgba;
use serde::{Deserialize, Serialize};
use track_common::StormCategory;
use track_core::{LabelKind, MarkerStyle};

/// Color used when a configured hex string cannot be parsed.
const FALLBACK_COLOR: Rgba<u8> = Rgba([200, 200, 200, 255]);

/// Map colors, loaded from JSON or taken from the defaults.
///
/// Colors are hex strings (`#RRGGBB` or `#RRGGBBAA`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Palette {
    pub tropical_depression: String,
    pub tropical_storm: String,
    pub category1: String,
    pub category2: String,
    pub category3: String,
    pub category4: String,
    pub category5: String,
    pub city_marker: String,
    pub city_label: String,
    pub date_label: String,
    pub ocean: String,
    pub grid: String,
    pub title_band: String,
    pub title_text: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tropical_depression: "#FFFFFF".to_string(),
            tropical_storm: "#0000FF".to_string(),
            category1: "#00BFBF".to_string(),
            category2: "#008000".to_string(),
            category3: "#BFBF00".to_string(),
            category4: "#FF0000".to_string(),
            category5: "#BF00BF".to_string(),
            city_marker: "#FFFFFF".to_string(),
            city_label: "#FFFFFF".to_string(),
            date_label: "#FFFF00".to_string(),
            ocean: "#1B3A5C".to_string(),
            grid: "#FFFFFF80".to_string(),
            title_band: "#FFFFFF".to_string(),
            title_text: "#000000".to_string(),
        }
    }
}

impl Palette {
    /// Load a palette from a JSON string. Missing keys keep their defaults.
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    pub fn category_color(&self, category: StormCategory) -> Rgba<u8> {
        let hex = match category {
            StormCategory::TropicalDepression => &self.tropical_depression,
            StormCategory::TropicalStorm => &self.tropical_storm,
            StormCategory::Category1 => &self.category1,
            StormCategory::Category2 => &self.category2,
            StormCategory::Category3 => &self.category3,
            StormCategory::Category4 => &self.category4,
            StormCategory::Category5 => &self.category5,
        };
        color(hex)
    }

    pub fn marker_color(&self, style: MarkerStyle) -> Rgba<u8> {
        match style {
            MarkerStyle::Storm(category) => self.category_color(category),
            MarkerStyle::City => color(&self.city_marker),
        }
    }

    pub fn label_color(&self, kind: LabelKind) -> Rgba<u8> {
        match kind {
            LabelKind::CityName => color(&self.city_label),
            LabelKind::Date => color(&self.date_label),
        }
    }

    pub fn ocean(&self) -> Rgba<u8> {
        color(&self.ocean)
    }

    pub fn grid(&self) -> Rgba<u8> {
        color(&self.grid)
    }

    pub fn title_band(&self) -> Rgba<u8> {
        color(&self.title_band)
    }

    pub fn title_text(&self) -> Rgba<u8> {
        color(&self.title_text)
    }
}

/// Parse hex color string to RGBA. Six digits imply full opacity.
pub fn hex_to_rgba(hex: &str) -> Option<(u8, u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if hex.len() == 8 { channel(6)? } else { 255 };

    Some((r, g, b, a))
}

fn color(hex: &str) -> Rgba<u8> {
    match hex_to_rgba(hex) {
        Some((r, g, b, a)) => Rgba([r, g, b, a]),
        None => {
            tracing::warn!(color = hex, "Invalid color in palette, using fallback");
            FALLBACK_COLOR
        }
    }
}

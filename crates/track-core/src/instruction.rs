//! Renderer-agnostic drawing requests.

use projection::PixelPoint;
use serde::{Deserialize, Serialize};
use track_common::StormCategory;

/// What kind of marker to place at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "category")]
pub enum MarkerStyle {
    /// Filled circle colored by intensity
    Storm(StormCategory),
    /// Reference city cross
    City,
}

/// What a text label annotates. The renderer picks colors per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    CityName,
    Date,
}

/// Label displacement from the anchor position, in pixels (y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelOffset {
    pub dx: f64,
    pub dy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub text: String,
    pub offset: PixelOffset,
    pub kind: LabelKind,
}

/// One drawing request: a marker, a label, or both, anchored at `position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawInstruction {
    pub position: PixelPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<TextLabel>,
}

impl DrawInstruction {
    pub fn marker(position: PixelPoint, style: MarkerStyle) -> Self {
        Self {
            position,
            marker: Some(style),
            label: None,
        }
    }

    pub fn label(position: PixelPoint, label: TextLabel) -> Self {
        Self {
            position,
            marker: None,
            label: Some(label),
        }
    }

    pub fn with_label(mut self, label: TextLabel) -> Self {
        self.label = Some(label);
        self
    }

    /// Absolute pixel position of the label text, if any.
    pub fn label_position(&self) -> Option<PixelPoint> {
        self.label.as_ref().map(|l| PixelPoint {
            x: self.position.x + l.offset.dx,
            y: self.position.y + l.offset.dy,
        })
    }
}

//! Track renderer: turns cities and track observations into draw instructions.
//!
//! Ordering of the output is fixed:
//! 1. city markers (file order), each with its name label when inside the
//!    region's label bounds
//! 2. track markers in chronological (input) order, each followed by its
//!    date label when the fix is synoptic and inside the label bounds
//!
//! Points that cannot be classified or projected are skipped with a warning;
//! the rest of the track still renders.

use std::collections::BTreeMap;

use projection::{MapProjection, PixelPoint};
use rayon::prelude::*;
use serde::Serialize;
use track_common::{date_label, is_synoptic, CityPoint, StormCategory, TrackError, TrackPoint};
use tracing::{debug, info, warn};

use crate::filter::inside_label_region;
use crate::instruction::{DrawInstruction, LabelKind, MarkerStyle, PixelOffset, TextLabel};
use crate::region::Region;

/// Map-plane distance between a point and its label (meters).
pub const LABEL_OFFSET_M: f64 = 50_000.0;

/// Counts of observations dropped from the plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipSummary {
    pub invalid_measurement: usize,
    pub out_of_range: usize,
}

impl SkipSummary {
    pub fn total(&self) -> usize {
        self.invalid_measurement + self.out_of_range
    }

    fn record(&mut self, err: &TrackError) {
        match err {
            TrackError::InvalidMeasurement(_) => self.invalid_measurement += 1,
            _ => self.out_of_range += 1,
        }
    }
}

/// Result of one planning pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub title: String,
    pub instructions: Vec<DrawInstruction>,
    /// Category of every drawn track point, in track order
    pub categories: Vec<StormCategory>,
    pub skipped_track_points: SkipSummary,
    pub skipped_cities: usize,
}

impl RenderPlan {
    /// Number of drawn track points per category.
    pub fn category_counts(&self) -> BTreeMap<StormCategory, usize> {
        let mut counts = BTreeMap::new();
        for category in &self.categories {
            *counts.entry(*category).or_insert(0) += 1;
        }
        counts
    }

    /// Strongest category reached along the drawn track.
    pub fn peak_category(&self) -> Option<StormCategory> {
        self.categories.iter().max().copied()
    }

    /// Stable JSON form of the instruction list.
    pub fn instructions_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.instructions)
    }
}

/// Per-point result of the pure classification/projection stage.
enum PointOutcome {
    Drawn {
        category: StormCategory,
        position: PixelPoint,
    },
    Skipped(TrackError),
}

/// Builds a [`RenderPlan`] for one region.
pub struct TrackRenderer<'a> {
    region: &'a Region,
    projection: &'a MapProjection,
    label_offset_px: f64,
}

impl<'a> TrackRenderer<'a> {
    pub fn new(region: &'a Region, projection: &'a MapProjection) -> Self {
        Self {
            region,
            projection,
            label_offset_px: projection.meters_to_pixels(LABEL_OFFSET_M),
        }
    }

    /// Plan a full map. The track is consumed; nothing is retained after the pass.
    pub fn plan(&self, title: impl Into<String>, cities: &[CityPoint], track: Vec<TrackPoint>) -> RenderPlan {
        let title = title.into();
        let mut instructions = Vec::with_capacity(cities.len() + track.len() * 2);

        let skipped_cities = self.plan_cities(cities, &mut instructions);
        let (categories, skipped_track_points) = self.plan_track(&track, &mut instructions);

        info!(
            region = %self.region.id,
            cities = cities.len() - skipped_cities,
            track_points = categories.len(),
            skipped = skipped_track_points.total(),
            instructions = instructions.len(),
            "Planned track map"
        );

        RenderPlan {
            title,
            instructions,
            categories,
            skipped_track_points,
            skipped_cities,
        }
    }

    /// Emit city markers; returns how many cities were skipped.
    fn plan_cities(&self, cities: &[CityPoint], out: &mut Vec<DrawInstruction>) -> usize {
        let mut skipped = 0;

        for city in cities {
            let position = match self.projection.project(city.longitude, city.latitude) {
                Ok(p) => p,
                Err(e) => {
                    warn!(city = %city.name, error = %e, "Skipping city");
                    skipped += 1;
                    continue;
                }
            };

            let mut instruction = DrawInstruction::marker(position, MarkerStyle::City);
            if inside_label_region(&self.region.label_bounds, city.longitude, city.latitude) {
                instruction = instruction.with_label(TextLabel {
                    text: city.name.clone(),
                    // East and north of the marker; pixel y grows downwards.
                    offset: PixelOffset {
                        dx: self.label_offset_px,
                        dy: -self.label_offset_px,
                    },
                    kind: LabelKind::CityName,
                });
            }
            out.push(instruction);
        }

        skipped
    }

    fn plan_track(
        &self,
        track: &[TrackPoint],
        out: &mut Vec<DrawInstruction>,
    ) -> (Vec<StormCategory>, SkipSummary) {
        if track.is_empty() {
            warn!("Storm track is empty");
        }

        // Pure per-point work; collect() keeps input order.
        let outcomes: Vec<PointOutcome> = track.par_iter().map(|point| self.evaluate(point)).collect();

        let mut categories = Vec::with_capacity(track.len());
        let mut skipped = SkipSummary::default();

        for (index, (point, outcome)) in track.iter().zip(outcomes).enumerate() {
            let (category, position) = match outcome {
                PointOutcome::Drawn { category, position } => (category, position),
                PointOutcome::Skipped(err) => {
                    warn!(
                        index,
                        timestamp = point.timestamp,
                        kind = err.kind(),
                        error = %err,
                        "Skipping track point"
                    );
                    skipped.record(&err);
                    continue;
                }
            };

            out.push(DrawInstruction::marker(position, MarkerStyle::Storm(category)));
            categories.push(category);

            if let Some(label) = self.date_label_for(point) {
                out.push(DrawInstruction::label(position, label));
            }
        }

        (categories, skipped)
    }

    fn evaluate(&self, point: &TrackPoint) -> PointOutcome {
        let category = match StormCategory::from_knots(point.wind_knots) {
            Ok(c) => c,
            Err(e) => return PointOutcome::Skipped(e),
        };
        match self.projection.project(point.longitude, point.latitude) {
            Ok(position) => PointOutcome::Drawn { category, position },
            Err(e) => PointOutcome::Skipped(e.into()),
        }
    }

    fn date_label_for(&self, point: &TrackPoint) -> Option<TextLabel> {
        if !is_synoptic(point.timestamp) {
            return None;
        }
        if !inside_label_region(&self.region.label_bounds, point.longitude, point.latitude) {
            debug!(timestamp = point.timestamp, "Date label outside label bounds");
            return None;
        }

        let text = date_label(point.timestamp)?;
        Some(TextLabel {
            text,
            offset: PixelOffset {
                dx: self.label_offset_px,
                dy: 0.0,
            },
            kind: LabelKind::Date,
        })
    }
}

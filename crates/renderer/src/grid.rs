//! Latitude/longitude graticule.
//!
//! Parallels every 10° from 80°S to 80°N and meridians every 20° starting at
//! 10°E, traced as projected polylines. Parallels are labeled where they
//! leave the right edge, meridians where they leave the bottom edge.

use projection::{MapProjection, PixelPoint};

/// Sampling step along each grid line (degrees).
const SAMPLE_STEP_DEG: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLineKind {
    Parallel,
    Meridian,
}

/// One projected grid line.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub kind: GridLineKind,
    pub label: String,
    pub segments: Vec<(PixelPoint, PixelPoint)>,
    /// Where the label goes, if the line crosses the canvas
    pub label_anchor: Option<PixelPoint>,
}

/// Latitudes of the parallels.
pub fn parallels() -> Vec<f64> {
    (-80..=80).step_by(10).map(f64::from).collect()
}

/// Longitudes of the meridians, normalized to [-180, 180].
pub fn meridians() -> Vec<f64> {
    (10..=350)
        .step_by(20)
        .map(|lon| normalize_lon(f64::from(lon)))
        .collect()
}

fn normalize_lon(lon: f64) -> f64 {
    if lon > 180.0 {
        lon - 360.0
    } else {
        lon
    }
}

pub fn format_lat(lat: f64) -> String {
    match lat {
        l if l > 0.0 => format!("{}°N", l.abs()),
        l if l < 0.0 => format!("{}°S", l.abs()),
        _ => "0°".to_string(),
    }
}

pub fn format_lon(lon: f64) -> String {
    match lon {
        l if l.abs() == 180.0 => "180°".to_string(),
        l if l > 0.0 => format!("{}°E", l.abs()),
        l if l < 0.0 => format!("{}°W", l.abs()),
        _ => "0°".to_string(),
    }
}

/// Project every grid line for this map.
pub fn grid_lines(projection: &MapProjection) -> Vec<GridLine> {
    let center_lon = projection.params().center_lon;
    let mut lines = Vec::new();

    for lat in parallels() {
        let samples = sample_range(center_lon - 180.0, center_lon + 180.0)
            .map(|lon| projection.project(lon, lat).ok());
        lines.push(trace(
            projection,
            GridLineKind::Parallel,
            format_lat(lat),
            samples,
            |best, p| p.x > best.x,
        ));
    }

    for lon in meridians() {
        let samples = sample_range(-80.0, 80.0).map(|lat| projection.project(lon, lat).ok());
        lines.push(trace(
            projection,
            GridLineKind::Meridian,
            format_lon(lon),
            samples,
            |best, p| p.y > best.y,
        ));
    }

    lines
}

fn sample_range(start: f64, end: f64) -> impl Iterator<Item = f64> {
    let steps = ((end - start) / SAMPLE_STEP_DEG).round() as usize;
    (0..=steps).map(move |i| start + i as f64 * SAMPLE_STEP_DEG)
}

/// Join consecutive projected samples into segments that touch the canvas.
fn trace(
    projection: &MapProjection,
    kind: GridLineKind,
    label: String,
    samples: impl Iterator<Item = Option<PixelPoint>>,
    better_anchor: impl Fn(&PixelPoint, &PixelPoint) -> bool,
) -> GridLine {
    let mut segments = Vec::new();
    let mut label_anchor: Option<PixelPoint> = None;
    let mut previous: Option<PixelPoint> = None;

    for sample in samples {
        let Some(point) = sample else {
            previous = None;
            continue;
        };

        if projection.on_canvas(point) {
            label_anchor = match label_anchor {
                Some(best) if !better_anchor(&best, &point) => Some(best),
                _ => Some(point),
            };
        }

        if let Some(prev) = previous {
            if projection.on_canvas(prev) || projection.on_canvas(point) {
                segments.push((prev, point));
            }
        }
        previous = Some(point);
    }

    GridLine {
        kind,
        label,
        segments,
        label_anchor,
    }
}

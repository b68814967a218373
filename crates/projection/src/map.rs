//! Map plane and pixel canvas built on top of a Lambert projection.
//!
//! A map is a `width_m × height_m` rectangle of the Lambert plane centered
//! on the projection origin. Pixel coordinates put (0, 0) at the top-left
//! corner of that rectangle with y growing downwards.

use serde::{Deserialize, Serialize};

use crate::lambert::LambertConformal;
use crate::ProjectionError;

/// Parameters describing a map: center point and extent of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LambertParams {
    /// Latitude of the map center (also the standard parallel), degrees
    pub center_lat: f64,
    /// Longitude of the map center (central meridian), degrees
    pub center_lon: f64,
    /// Map width in meters
    pub width_m: f64,
    /// Map height in meters
    pub height_m: f64,
}

impl LambertParams {
    pub const fn new(center_lat: f64, center_lon: f64, width_m: f64, height_m: f64) -> Self {
        Self {
            center_lat,
            center_lon,
            width_m,
            height_m,
        }
    }
}

/// A position on the output canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rounded integer position for raster drawing.
    pub fn to_i32(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

/// Forward/inverse transform between geographic and pixel coordinates.
#[derive(Debug, Clone)]
pub struct MapProjection {
    lambert: LambertConformal,
    params: LambertParams,
    width_px: u32,
    height_px: u32,
    /// Pixels per meter
    scale: f64,
}

impl MapProjection {
    /// Build a projection whose canvas is `width_px` wide; the height follows
    /// the map's aspect ratio.
    pub fn new(params: LambertParams, width_px: u32) -> Result<Self, ProjectionError> {
        if !(params.width_m > 0.0 && params.height_m > 0.0) {
            return Err(ProjectionError::InvalidParameters(format!(
                "map extent must be positive, got {} x {} m",
                params.width_m, params.height_m
            )));
        }
        if width_px == 0 {
            return Err(ProjectionError::InvalidParameters(
                "canvas width must be at least one pixel".to_string(),
            ));
        }

        let lambert = LambertConformal::tangent(params.center_lat, params.center_lon)?;
        let scale = width_px as f64 / params.width_m;
        let height_px = ((params.height_m * scale).round() as u32).max(1);

        Ok(Self {
            lambert,
            params,
            width_px,
            height_px,
            scale,
        })
    }

    pub fn params(&self) -> &LambertParams {
        &self.params
    }

    /// Canvas size in pixels (width, height).
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.width_px, self.height_px)
    }

    /// Convert a map-plane distance to pixels.
    pub fn meters_to_pixels(&self, meters: f64) -> f64 {
        meters * self.scale
    }

    /// Geographic (degrees) to pixel coordinates.
    ///
    /// Points outside the map rectangle still project; they simply land
    /// off-canvas.
    pub fn project(&self, lon: f64, lat: f64) -> Result<PixelPoint, ProjectionError> {
        let (x, y) = self.lambert.forward(lat, lon)?;

        // Shift from origin-centered plane to the lower-left corner.
        let map_x = x + self.params.width_m / 2.0;
        let map_y = y + self.params.height_m / 2.0;

        Ok(PixelPoint {
            x: map_x * self.scale,
            y: (self.params.height_m - map_y) * self.scale,
        })
    }

    /// Pixel coordinates back to (lon, lat) in degrees.
    ///
    /// Only used to validate round trips; label decisions always use the
    /// original geographic coordinates.
    pub fn unproject(&self, x: f64, y: f64) -> Result<(f64, f64), ProjectionError> {
        let map_x = x / self.scale;
        let map_y = self.params.height_m - y / self.scale;

        let (lat, lon) = self.lambert.inverse(
            map_x - self.params.width_m / 2.0,
            map_y - self.params.height_m / 2.0,
        )?;
        Ok((lon, lat))
    }

    /// Whether a pixel position lies on the canvas.
    pub fn on_canvas(&self, point: PixelPoint) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.width_px as f64
            && point.y < self.height_px as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gulf() -> MapProjection {
        MapProjection::new(LambertParams::new(25.0, -90.0, 2_000_000.0, 1_600_000.0), 1000).unwrap()
    }

    #[test]
    fn test_canvas_follows_aspect_ratio() {
        assert_eq!(gulf().canvas_size(), (1000, 800));
    }

    #[test]
    fn test_center_maps_to_canvas_center() {
        let p = gulf().project(-90.0, 25.0).unwrap();
        assert!((p.x - 500.0).abs() < 1e-6);
        assert!((p.y - 400.0).abs() < 1e-6);
    }

    #[test]
    fn test_north_is_up() {
        let proj = gulf();
        let center = proj.project(-90.0, 25.0).unwrap();
        let north = proj.project(-90.0, 28.0).unwrap();
        assert!(north.y < center.y);
    }

    #[test]
    fn test_meters_to_pixels() {
        assert!((gulf().meters_to_pixels(50_000.0) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_empty_extent() {
        let params = LambertParams::new(25.0, -90.0, 0.0, 1.0);
        assert!(MapProjection::new(params, 100).is_err());
        let params = LambertParams::new(25.0, -90.0, 1.0, 1.0);
        assert!(MapProjection::new(params, 0).is_err());
    }
}

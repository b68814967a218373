//! Label visibility test against a region's bounding box.

use track_common::LabelBounds;

/// Whether a label at (lon, lat) should be drawn.
///
/// The comparison is `lon > lon_max && lon < lon_min`, kept exactly as the
/// historical plots evaluate it. It is only satisfiable when
/// `lon_max < lon_min`; the region catalog stores its longitudes that way, so
/// the accepted longitudes are the open interval `(lon_max, lon_min)`.
/// Latitude uses the ordinary open interval `(lat_min, lat_max)`.
///
/// Markers never consult this; only city names and date labels do.
pub fn inside_label_region(bounds: &LabelBounds, lon: f64, lat: f64) -> bool {
    lon > bounds.lon_max && lon < bounds.lon_min && lat > bounds.lat_min && lat < bounds.lat_max
}

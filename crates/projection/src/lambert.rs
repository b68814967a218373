//! Lambert Conformal Conic projection.
//!
//! This is the projection used for every track map. It maps a cone tangent
//! to the Earth's surface at the reference latitude onto a flat plane.
//!
//! The projection parameters are:
//! - Reference latitude (lat0): standard parallel and latitude of the plane origin
//! - Reference longitude (lon0): the central meridian
//!
//! Plane coordinates are meters east/north of (lat0, lon0) on a sphere.

use std::f64::consts::PI;

use crate::ProjectionError;

/// Mean Earth radius used by the spherical projection (meters).
pub const EARTH_RADIUS: f64 = 6_371_229.0;

/// Lambert Conformal Conic projection parameters.
///
/// Angles are stored in radians.
#[derive(Debug, Clone)]
pub struct LambertConformal {
    /// Central meridian in radians
    pub lon0: f64,
    /// Reference latitude (plane origin and standard parallel) in radians
    pub lat0: f64,
    /// Earth radius (meters)
    pub earth_radius: f64,
    /// Cone constant (n)
    n: f64,
    /// F constant
    f: f64,
    /// Rho at the reference latitude
    rho0: f64,
}

impl LambertConformal {
    /// Tangent cone touching the sphere at the reference latitude (degrees).
    ///
    /// This matches the common map setup where only a center point is given.
    /// Fails on the equator, where the cone degenerates into a cylinder.
    pub fn tangent(lat0_deg: f64, lon0_deg: f64) -> Result<Self, ProjectionError> {
        let to_rad = PI / 180.0;

        let lat0 = lat0_deg * to_rad;
        let lon0 = lon0_deg * to_rad;
        let earth_radius = EARTH_RADIUS;

        // Tangent cone: n is the sine of the standard parallel
        let n = lat0.sin();
        if !n.is_finite() || n.abs() < 1e-10 {
            return Err(ProjectionError::InvalidParameters(format!(
                "degenerate cone for standard parallel {}",
                lat0_deg
            )));
        }

        let f = (lat0.cos() * (PI / 4.0 + lat0 / 2.0).tan().powf(n)) / n;
        let rho0 = earth_radius * f / (PI / 4.0 + lat0 / 2.0).tan().powf(n);

        Ok(Self {
            lon0,
            lat0,
            earth_radius,
            n,
            f,
            rho0,
        })
    }

    /// Whether a geographic point can be projected.
    ///
    /// The pole opposite the cone apex maps to infinity.
    pub fn in_domain(&self, lat_deg: f64, lon_deg: f64) -> bool {
        if !lat_deg.is_finite() || !lon_deg.is_finite() || lat_deg.abs() > 90.0 {
            return false;
        }
        if self.n > 0.0 {
            lat_deg > -90.0
        } else {
            lat_deg < 90.0
        }
    }

    /// Geographic (degrees) to plane coordinates (meters from the origin).
    pub fn forward(&self, lat_deg: f64, lon_deg: f64) -> Result<(f64, f64), ProjectionError> {
        if !self.in_domain(lat_deg, lon_deg) {
            return Err(ProjectionError::OutOfRange {
                lon: lon_deg,
                lat: lat_deg,
            });
        }

        let to_rad = PI / 180.0;
        let lat = lat_deg * to_rad;
        let dlon = normalize_angle(lon_deg * to_rad - self.lon0);

        let rho = self.earth_radius * self.f / (PI / 4.0 + lat / 2.0).tan().powf(self.n);
        let theta = self.n * dlon;

        let x = rho * theta.sin();
        let y = self.rho0 - rho * theta.cos();

        if !x.is_finite() || !y.is_finite() {
            return Err(ProjectionError::OutOfRange {
                lon: lon_deg,
                lat: lat_deg,
            });
        }

        Ok((x, y))
    }

    /// Plane coordinates (meters) back to geographic (lat, lon) in degrees.
    pub fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), ProjectionError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ProjectionError::NonFinite { x, y });
        }

        let to_deg = 180.0 / PI;
        let dy = self.rho0 - y;

        let mut rho = (x * x + dy * dy).sqrt();
        if self.n < 0.0 {
            rho = -rho;
        }

        // Theta takes the sign of n so the quadrant survives southern cones.
        let theta = if self.n < 0.0 {
            (-x).atan2(-dy)
        } else {
            x.atan2(dy)
        };

        let lat = if rho == 0.0 {
            self.n.signum() * PI / 2.0
        } else {
            2.0 * ((self.earth_radius * self.f / rho).powf(1.0 / self.n)).atan() - PI / 2.0
        };
        let lon = normalize_angle(self.lon0 + theta / self.n);

        Ok((lat * to_deg, lon * to_deg))
    }
}

/// Normalize an angle difference to [-π, π].
fn normalize_angle(mut a: f64) -> f64 {
    while a > PI {
        a -= 2.0 * PI;
    }
    while a < -PI {
        a += 2.0 * PI;
    }
    a
}

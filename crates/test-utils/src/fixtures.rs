//! Common test fixtures for storm-track tests.
//!
//! Pre-defined tracks and city lists representing typical plotting scenarios.

use track_common::{CityPoint, TrackPoint};

/// Sample storm tracks.
pub mod tracks {
    use super::TrackPoint;

    /// Two fixes over south Florida: Category 1 then Category 5.
    pub fn two_point_gulf() -> Vec<TrackPoint> {
        vec![
            TrackPoint::new(1000, 25.0, -80.0, 990.0, 80.0),
            TrackPoint::new(2000, 26.0, -81.0, 985.0, 150.0),
        ]
    }

    /// A six-hourly Gulf track that strengthens from depression to Category 5.
    ///
    /// Fixes start at 2005-08-24T00:00:00Z (epoch 1124841600). Only the fifth
    /// fix (1124928000, 08/25) has an epoch divisible by 1000.
    pub fn gulf_landfall() -> Vec<TrackPoint> {
        let start = 1_124_841_600;
        let fixes = [
            (23.2, -75.5, 1007.0, 30.0),
            (24.0, -76.5, 1000.0, 40.0),
            (25.4, -79.9, 985.0, 70.0),
            (25.1, -82.0, 980.0, 75.0),
            (24.6, -84.7, 940.0, 100.0),
            (25.7, -87.7, 908.0, 145.0),
            (28.2, -89.6, 920.0, 125.0),
            (31.1, -89.6, 948.0, 95.0),
        ];
        fixes
            .iter()
            .enumerate()
            .map(|(i, &(lat, lon, pres, wind))| TrackPoint::new(start + i as i64 * 21_600, lat, lon, pres, wind))
            .collect()
    }
}

/// Sample reference cities.
pub mod cities {
    use super::CityPoint;

    pub fn gulf() -> Vec<CityPoint> {
        vec![
            CityPoint::new("New Orleans", 29.95, -90.07),
            CityPoint::new("Houston", 29.76, -95.37),
            CityPoint::new("Tampa", 27.95, -82.46),
            CityPoint::new("Havana", 23.11, -82.37),
        ]
    }

    /// One city inside the gulf label bounds and one east of them.
    pub fn inside_and_outside_gulf() -> Vec<CityPoint> {
        vec![
            CityPoint::new("Mobile", 30.69, -88.04),
            CityPoint::new("Nassau", 25.06, -77.35),
        ]
    }
}

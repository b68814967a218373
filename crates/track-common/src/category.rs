//! Wind unit conversion and Saffir-Simpson style classification.
//!
//! Category thresholds are defined in statute miles per hour, so raw
//! observations (knots) must go through [`knots_to_mph`] before
//! [`classify`]. [`StormCategory::from_knots`] does both in the right order.

use serde::{Deserialize, Serialize};

use crate::error::{TrackError, TrackResult};

/// Knots to statute miles per hour.
pub const KNOTS_TO_MPH: f64 = 1.15155;

/// Convert a wind speed from knots to mph. No rounding is applied.
#[inline]
pub fn knots_to_mph(knots: f64) -> f64 {
    knots * KNOTS_TO_MPH
}

/// Storm intensity, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StormCategory {
    TropicalDepression,
    TropicalStorm,
    Category1,
    Category2,
    Category3,
    Category4,
    Category5,
}

/// Lower bounds (exclusive, mph) for each category above tropical depression,
/// strongest first.
const THRESHOLDS_MPH: [(f64, StormCategory); 6] = [
    (157.0, StormCategory::Category5),
    (129.0, StormCategory::Category4),
    (110.0, StormCategory::Category3),
    (95.0, StormCategory::Category2),
    (73.0, StormCategory::Category1),
    (38.0, StormCategory::TropicalStorm),
];

/// Classify a sustained wind speed given in mph.
///
/// Every threshold is a strict `>` comparison: exactly 157 mph is still
/// Category 4. NaN and negative speeds are rejected.
pub fn classify(wind_mph: f64) -> TrackResult<StormCategory> {
    if wind_mph.is_nan() || wind_mph < 0.0 {
        return Err(TrackError::InvalidMeasurement(wind_mph));
    }

    Ok(THRESHOLDS_MPH
        .iter()
        .find(|(threshold, _)| wind_mph > *threshold)
        .map(|(_, category)| *category)
        .unwrap_or(StormCategory::TropicalDepression))
}

impl StormCategory {
    /// All categories in ascending severity.
    pub const ALL: [StormCategory; 7] = [
        StormCategory::TropicalDepression,
        StormCategory::TropicalStorm,
        StormCategory::Category1,
        StormCategory::Category2,
        StormCategory::Category3,
        StormCategory::Category4,
        StormCategory::Category5,
    ];

    /// Convert knots to mph, then classify.
    pub fn from_knots(wind_knots: f64) -> TrackResult<Self> {
        classify(knots_to_mph(wind_knots))
    }

    /// Human readable name, used in the legend.
    pub fn label(&self) -> &'static str {
        match self {
            StormCategory::TropicalDepression => "Tropical Depression",
            StormCategory::TropicalStorm => "Tropical Storm",
            StormCategory::Category1 => "Category 1",
            StormCategory::Category2 => "Category 2",
            StormCategory::Category3 => "Category 3",
            StormCategory::Category4 => "Category 4",
            StormCategory::Category5 => "Category 5",
        }
    }
}

impl std::fmt::Display for StormCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knots_to_mph() {
        assert!((knots_to_mph(100.0) - 115.155).abs() < 1e-9);
        assert_eq!(knots_to_mph(0.0), 0.0);
    }

    #[test]
    fn test_classify_table() {
        assert_eq!(classify(0.0).unwrap(), StormCategory::TropicalDepression);
        assert_eq!(classify(50.0).unwrap(), StormCategory::TropicalStorm);
        assert_eq!(classify(80.0).unwrap(), StormCategory::Category1);
        assert_eq!(classify(100.0).unwrap(), StormCategory::Category2);
        assert_eq!(classify(120.0).unwrap(), StormCategory::Category3);
        assert_eq!(classify(140.0).unwrap(), StormCategory::Category4);
        assert_eq!(classify(190.0).unwrap(), StormCategory::Category5);
    }

    #[test]
    fn test_classify_rejects_nan_and_negative() {
        assert!(matches!(classify(f64::NAN), Err(TrackError::InvalidMeasurement(_))));
        assert!(matches!(classify(-0.5), Err(TrackError::InvalidMeasurement(_))));
    }

    #[test]
    fn test_from_knots_converts_before_classifying() {
        // 70 kt is 80.6 mph: Category 1, even though 70 < 73.
        assert_eq!(StormCategory::from_knots(70.0).unwrap(), StormCategory::Category1);
    }
}

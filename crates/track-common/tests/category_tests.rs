//! Tests for wind conversion and storm classification.

use track_common::{classify, knots_to_mph, StormCategory, TrackError, TrackPoint};

// ============================================================================
// Boundary tests
// ============================================================================

#[test]
fn test_category5_boundary_is_strict() {
    assert_eq!(classify(157.0).unwrap(), StormCategory::Category4);
    assert_eq!(classify(157.0001).unwrap(), StormCategory::Category5);
}

#[test]
fn test_tropical_storm_boundary_is_strict() {
    assert_eq!(classify(38.0).unwrap(), StormCategory::TropicalDepression);
    assert_eq!(classify(38.0001).unwrap(), StormCategory::TropicalStorm);
}

#[test]
fn test_every_threshold_is_strict() {
    let cases = [
        (73.0, StormCategory::TropicalStorm, StormCategory::Category1),
        (95.0, StormCategory::Category1, StormCategory::Category2),
        (110.0, StormCategory::Category2, StormCategory::Category3),
        (129.0, StormCategory::Category3, StormCategory::Category4),
    ];
    for (threshold, at, above) in cases {
        assert_eq!(classify(threshold).unwrap(), at, "at {}", threshold);
        assert_eq!(classify(threshold + 1e-4).unwrap(), above, "above {}", threshold);
    }
}

#[test]
fn test_zero_wind_is_depression() {
    assert_eq!(classify(0.0).unwrap(), StormCategory::TropicalDepression);
}

#[test]
fn test_infinite_wind_is_category5() {
    assert_eq!(classify(f64::INFINITY).unwrap(), StormCategory::Category5);
}

// ============================================================================
// Monotonicity
// ============================================================================

#[test]
fn test_classification_is_monotonic() {
    let mut previous = classify(0.0).unwrap();
    let mut mph = 0.0;
    while mph < 250.0 {
        let current = classify(mph).unwrap();
        assert!(
            previous <= current,
            "category dropped from {:?} to {:?} at {} mph",
            previous,
            current,
            mph
        );
        previous = current;
        mph += 0.25;
    }
    assert_eq!(previous, StormCategory::Category5);
}

#[test]
fn test_all_is_sorted_by_severity() {
    let mut sorted = StormCategory::ALL;
    sorted.sort();
    assert_eq!(sorted, StormCategory::ALL);
}

// ============================================================================
// Invalid measurements
// ============================================================================

#[test]
fn test_negative_wind_is_invalid() {
    let err = classify(-1.0).unwrap_err();
    assert!(matches!(err, TrackError::InvalidMeasurement(v) if v == -1.0));
    assert!(err.is_recoverable());
}

#[test]
fn test_nan_wind_is_invalid() {
    assert!(matches!(classify(f64::NAN), Err(TrackError::InvalidMeasurement(_))));
}

// ============================================================================
// Unit conversion
// ============================================================================

#[test]
fn test_knots_to_mph_exactness() {
    assert!((knots_to_mph(100.0) - 115.155).abs() < 1e-9);
}

#[test]
fn test_track_point_classifies_in_mph() {
    // 80 kt = 92.124 mph -> Category 1
    let p = TrackPoint::new(1000, 25.0, -80.0, 990.0, 80.0);
    assert!((p.wind_mph() - 92.124).abs() < 1e-9);
    assert_eq!(p.category().unwrap(), StormCategory::Category1);

    // 150 kt = 172.7325 mph -> Category 5
    let p = TrackPoint::new(2000, 26.0, -81.0, 985.0, 150.0);
    assert_eq!(p.category().unwrap(), StormCategory::Category5);
}

#[test]
fn test_labels() {
    assert_eq!(StormCategory::Category3.to_string(), "Category 3");
    assert_eq!(StormCategory::TropicalStorm.label(), "Tropical Storm");
    assert_eq!(StormCategory::Category5.label(), "Category 5");
}

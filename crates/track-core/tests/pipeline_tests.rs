//! End-to-end tests for the planning pipeline: CSV in, draw instructions out.

use track_common::{StormCategory, TrackError, TrackPoint};
use track_core::{
    inside_label_region, read_cities, read_track, resolve_region, LabelKind, MarkerStyle, Region, RegionId,
    TrackRenderer,
};
use test_utils::fixtures::{cities, tracks};
use test_utils::{write_city_csv, write_temp_csv, write_track_csv};

fn storm_markers(plan: &track_core::RenderPlan) -> Vec<StormCategory> {
    plan.instructions
        .iter()
        .filter_map(|i| match i.marker {
            Some(MarkerStyle::Storm(c)) => Some(c),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Scenario tests
// ============================================================================

#[test]
fn test_two_point_gulf_scenario() {
    let file = write_track_csv(&tracks::two_point_gulf());
    let track = read_track(file.path()).unwrap();
    assert_eq!(track.len(), 2);

    let region = resolve_region("gulf").unwrap();
    let projection = region.map_projection(1100).unwrap();
    let plan = TrackRenderer::new(&region, &projection).plan("Test (2014)", &[], track);

    assert_eq!(
        storm_markers(&plan),
        vec![StormCategory::Category1, StormCategory::Category5]
    );

    // Both epochs are multiples of 1000 and both fixes sit inside the gulf
    // label bounds (-100 < lon < -79, 17 < lat < 32).
    let dates: Vec<_> = plan
        .instructions
        .iter()
        .filter_map(|i| i.label.as_ref())
        .filter(|l| l.kind == LabelKind::Date)
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(dates, vec!["01/01", "01/01"]);

    // marker, date, marker, date
    assert_eq!(plan.instructions.len(), 4);
    assert!(plan.instructions[0].marker.is_some());
    assert!(plan.instructions[1].marker.is_none());
    assert_eq!(plan.title, "Test (2014)");
}

#[test]
fn test_unknown_region_is_fatal() {
    let err = resolve_region("moon").unwrap_err();
    assert!(matches!(err, TrackError::UnknownRegion { .. }));
    assert!(!err.is_recoverable());
}

#[test]
fn test_landfall_track_single_date_label() {
    let region = Region::get(RegionId::Gulf);
    let projection = region.map_projection(1100).unwrap();
    let plan = TrackRenderer::new(&region, &projection).plan("Katrina (2005)", &[], tracks::gulf_landfall());

    assert_eq!(plan.categories.len(), 8);
    assert_eq!(plan.peak_category(), Some(StormCategory::Category5));
    assert_eq!(plan.categories[0], StormCategory::TropicalDepression);

    let dates: Vec<_> = plan
        .instructions
        .iter()
        .filter_map(|i| i.label.as_ref())
        .map(|l| l.text.clone())
        .collect();
    assert_eq!(dates, vec!["08/25".to_string()]);
}

// ============================================================================
// Ordering and determinism
// ============================================================================

#[test]
fn test_cities_come_before_track() {
    let region = Region::get(RegionId::Gulf);
    let projection = region.map_projection(1100).unwrap();
    let city_list = cities::gulf();
    let plan = TrackRenderer::new(&region, &projection).plan("T", &city_list, tracks::gulf_landfall());

    for instruction in &plan.instructions[..city_list.len()] {
        assert_eq!(instruction.marker, Some(MarkerStyle::City));
    }
    assert!(plan.instructions[city_list.len()..]
        .iter()
        .all(|i| i.marker != Some(MarkerStyle::City)));
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let region = Region::get(RegionId::Gulf);
    let projection = region.map_projection(1100).unwrap();
    let renderer = TrackRenderer::new(&region, &projection);

    let first = renderer.plan("T", &cities::gulf(), tracks::gulf_landfall());
    let second = renderer.plan("T", &cities::gulf(), tracks::gulf_landfall());

    assert_eq!(
        first.instructions_json().unwrap().into_bytes(),
        second.instructions_json().unwrap().into_bytes()
    );
}

// ============================================================================
// Label filtering
// ============================================================================

#[test]
fn test_city_labels_follow_filter() {
    let file = write_city_csv(&cities::inside_and_outside_gulf());
    let city_list = read_cities(file.path()).unwrap();

    let region = Region::get(RegionId::Gulf);
    let projection = region.map_projection(1100).unwrap();
    let plan = TrackRenderer::new(&region, &projection).plan("T", &city_list, Vec::new());

    // Both markers are drawn; only Mobile is labeled.
    assert_eq!(plan.instructions.len(), 2);
    let mobile = plan.instructions[0].label.as_ref().unwrap();
    assert_eq!(mobile.text, "Mobile");
    assert_eq!(mobile.kind, LabelKind::CityName);
    assert!(mobile.offset.dx > 0.0 && mobile.offset.dy < 0.0);
    assert!(plan.instructions[1].label.is_none());
}

#[test]
fn test_label_bounds_use_original_coordinates() {
    let region = Region::get(RegionId::Gulf);
    // Exactly on the eastern edge: excluded even though it projects fine.
    assert!(!inside_label_region(&region.label_bounds, -79.0, 25.0));
    let projection = region.map_projection(1100).unwrap();
    let plan = TrackRenderer::new(&region, &projection).plan(
        "T",
        &[],
        vec![TrackPoint::new(3000, 25.0, -79.0, 1000.0, 50.0)],
    );
    assert_eq!(plan.instructions.len(), 1);
}

// ============================================================================
// Recoverable and fatal errors
// ============================================================================

#[test]
fn test_out_of_range_point_is_skipped() {
    let region = Region::get(RegionId::Carib);
    let projection = region.map_projection(800).unwrap();
    let track = vec![
        TrackPoint::new(1000, 15.0, -70.0, 1000.0, 50.0),
        TrackPoint::new(2000, -90.0, -70.0, 1000.0, 50.0),
        TrackPoint::new(3000, 16.0, -71.0, 1000.0, 50.0),
    ];
    let plan = TrackRenderer::new(&region, &projection).plan("T", &[], track);

    assert_eq!(plan.skipped_track_points.out_of_range, 1);
    assert_eq!(plan.categories.len(), 2);
}

#[test]
fn test_malformed_track_fails_whole_read() {
    let file = write_temp_csv("1000,25.0,-80.0,990,80\nnot,a,valid,row,here\n");
    let err = read_track(file.path()).unwrap_err();
    match err {
        TrackError::MalformedInputRow { path, line, .. } => {
            assert_eq!(path, file.path());
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_uniform_extra_column_fails_whole_read() {
    let file = write_temp_csv("1000,25.0,-80.0,990,80,EXTRA\n2000,26.0,-81.0,985,150,EXTRA\n");
    let err = read_track(file.path()).unwrap_err();
    match err {
        TrackError::MalformedInputRow { path, line, message } => {
            assert_eq!(path, file.path());
            assert_eq!(line, 1);
            assert!(message.contains("expected 5 fields"));
        }
        other => panic!("unexpected error {:?}", other),
    }

    let cities = write_temp_csv("Mobile,30.69,-88.04,AL\nNassau,25.06,-77.35,BS\n");
    assert!(matches!(
        read_cities(cities.path()),
        Err(TrackError::MalformedInputRow { line: 1, .. })
    ));
}

#[test]
fn test_bundled_city_lists_parse() {
    let dir = test_utils::cities_dir();
    for id in RegionId::ALL {
        let region = Region::get(id);
        let list = read_cities(&region.city_path(&dir)).unwrap();
        assert!(!list.is_empty(), "{} city list is empty", id);
    }
}

//! Image assembly and PNG output for complete render plans.

use image::Rgba;
use renderer::{assemble, encode_png, write_png, AssemblyOptions, Palette};
use test_utils::fixtures::{cities, tracks};
use track_common::StormCategory;
use track_core::{MarkerStyle, Region, RegionId, TrackRenderer};

fn gulf_plan(width: u32) -> (projection::MapProjection, track_core::RenderPlan) {
    let region = Region::get(RegionId::Gulf);
    let projection = region.map_projection(width).unwrap();
    let plan = TrackRenderer::new(&region, &projection).plan("Katrina (2005)", &cities::gulf(), tracks::gulf_landfall());
    (projection, plan)
}

// ============================================================================
// Canvas
// ============================================================================

#[test]
fn test_image_matches_canvas_size() {
    let (projection, plan) = gulf_plan(1100);
    let img = assemble(&projection, &plan, &AssemblyOptions::default());
    assert_eq!(img.dimensions(), projection.canvas_size());
    assert_eq!(img.dimensions(), (1100, 880));
}

#[test]
fn test_ocean_fill_without_grid() {
    let (projection, plan) = gulf_plan(600);
    let img = assemble(&projection, &plan, &AssemblyOptions::default());
    let ocean = Palette::default().ocean();
    // Top-right corner is clear of markers and the legend.
    assert_eq!(*img.get_pixel(img.width() - 1, 0), ocean);
}

#[test]
fn test_grid_changes_pixels() {
    let (projection, plan) = gulf_plan(600);
    let plain = assemble(&projection, &plan, &AssemblyOptions::default());
    let gridded = assemble(&projection, &plan, &AssemblyOptions::new(true, None));
    assert_ne!(plain.as_raw(), gridded.as_raw());
}

// ============================================================================
// Markers
// ============================================================================

#[test]
fn test_storm_marker_uses_category_color() {
    let (projection, plan) = gulf_plan(1100);
    let img = assemble(&projection, &plan, &AssemblyOptions::default());
    let palette = Palette::default();

    let peak = plan
        .instructions
        .iter()
        .find(|i| i.marker == Some(MarkerStyle::Storm(StormCategory::Category5)))
        .unwrap();
    let (x, y) = peak.position.to_i32();
    assert_eq!(
        *img.get_pixel(x as u32, y as u32),
        palette.category_color(StormCategory::Category5)
    );
}

#[test]
fn test_custom_palette_applies() {
    let (projection, plan) = gulf_plan(600);
    let options = AssemblyOptions {
        palette: Palette::from_json(r##"{"ocean": "#000000"}"##).unwrap(),
        ..AssemblyOptions::default()
    };
    let img = assemble(&projection, &plan, &options);
    assert_eq!(*img.get_pixel(img.width() - 1, 0), Rgba([0, 0, 0, 255]));
}

// ============================================================================
// PNG output
// ============================================================================

#[test]
fn test_png_decodes_to_same_size() {
    let (projection, plan) = gulf_plan(500);
    let img = assemble(&projection, &plan, &AssemblyOptions::new(true, None));
    let bytes = encode_png(&img).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), img.dimensions());
    assert_eq!(decoded.as_raw(), img.as_raw());
}

#[test]
fn test_write_png_creates_file() {
    let (projection, plan) = gulf_plan(400);
    let img = assemble(&projection, &plan, &AssemblyOptions::default());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("track.png");
    let written = write_png(&img, &path).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len() as usize, written);
}

#[test]
fn test_write_png_bad_directory() {
    let (projection, plan) = gulf_plan(100);
    let img = assemble(&projection, &plan, &AssemblyOptions::default());
    let err = write_png(&img, std::path::Path::new("/nonexistent/dir/out.png")).unwrap_err();
    assert!(matches!(err, renderer::RenderError::Io { .. }));
}

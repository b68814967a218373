//! Compose the final map image from a render plan.

use image::{Pixel, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut, draw_line_segment_mut, draw_text_mut,
    text_size, BresenhamLineIter,
};
use imageproc::rect::Rect;
use projection::MapProjection;
use rusttype::{Font, Scale};
use tracing::{debug, warn};
use track_common::StormCategory;
use track_core::{DrawInstruction, MarkerStyle, RenderPlan};

use crate::grid::{grid_lines, GridLineKind};
use crate::style::Palette;

const MARKER_OUTLINE: Rgba<u8> = Rgba([0, 0, 0, 255]);
const LEGEND_MARGIN: i32 = 10;

/// Drawing options that are not part of the plan itself.
#[derive(Clone)]
pub struct AssemblyOptions {
    pub grid_enabled: bool,
    /// Font for labels and title; text is skipped when None
    pub font: Option<Font<'static>>,
    pub palette: Palette,
    pub label_font_size: f32,
    pub title_font_size: f32,
    pub marker_radius: i32,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            grid_enabled: false,
            font: None,
            palette: Palette::default(),
            label_font_size: 11.0,
            title_font_size: 18.0,
            marker_radius: 4,
        }
    }
}

impl AssemblyOptions {
    pub fn new(grid_enabled: bool, font: Option<Font<'static>>) -> Self {
        Self {
            grid_enabled,
            font,
            ..Self::default()
        }
    }
}

/// Draw `plan` onto a canvas sized by `projection`.
///
/// Layers, bottom to top: ocean fill, grid, instructions in plan order,
/// legend, title band. The output has exactly the projection's canvas size.
pub fn assemble(projection: &MapProjection, plan: &RenderPlan, options: &AssemblyOptions) -> RgbaImage {
    let (width, height) = projection.canvas_size();
    let mut img = RgbaImage::from_pixel(width, height, options.palette.ocean());

    if options.font.is_none() {
        warn!("No font available, drawing markers without text");
    }

    if options.grid_enabled {
        draw_grid(&mut img, projection, options);
    }

    for instruction in &plan.instructions {
        draw_instruction(&mut img, instruction, options);
    }

    draw_legend(&mut img, plan, options);
    draw_title(&mut img, &plan.title, options);

    debug!(
        width = width,
        height = height,
        instructions = plan.instructions.len(),
        "Assembled map image"
    );

    img
}

fn draw_grid(img: &mut RgbaImage, projection: &MapProjection, options: &AssemblyOptions) {
    let color = options.palette.grid();
    let text_color = opaque(color);
    let scale = Scale::uniform(options.label_font_size);
    let (width, height) = (img.width() as i32, img.height() as i32);

    for line in grid_lines(projection) {
        for (start, end) in &line.segments {
            blend_line(img, (start.x as f32, start.y as f32), (end.x as f32, end.y as f32), color);
        }

        let (Some(font), Some(anchor)) = (options.font.as_ref(), line.label_anchor) else {
            continue;
        };
        let (tw, th) = text_size(scale, font, &line.label);
        let (ax, ay) = anchor.to_i32();

        let (x, y) = match line.kind {
            GridLineKind::Parallel => (width - tw - 2, ay - th / 2),
            GridLineKind::Meridian => (ax - tw / 2, height - th - 2),
        };
        draw_text_mut(img, text_color, x, y, scale, font, &line.label);
    }
}

/// Alpha-blend a line onto the image.
fn blend_line(img: &mut RgbaImage, start: (f32, f32), end: (f32, f32), color: Rgba<u8>) {
    let (width, height) = img.dimensions();
    for (x, y) in BresenhamLineIter::new(start, end) {
        if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
            continue;
        }
        img.get_pixel_mut(x as u32, y as u32).blend(&color);
    }
}

fn draw_instruction(img: &mut RgbaImage, instruction: &DrawInstruction, options: &AssemblyOptions) {
    let (x, y) = instruction.position.to_i32();
    let radius = options.marker_radius;

    match instruction.marker {
        Some(MarkerStyle::Storm(category)) => {
            let color = options.palette.category_color(category);
            draw_filled_circle_mut(img, (x, y), radius, color);
            draw_hollow_circle_mut(img, (x, y), radius, MARKER_OUTLINE);
        }
        Some(MarkerStyle::City) => {
            let color = options.palette.marker_color(MarkerStyle::City);
            let r = radius as f32;
            let (fx, fy) = (x as f32, y as f32);
            draw_line_segment_mut(img, (fx - r, fy), (fx + r, fy), color);
            draw_line_segment_mut(img, (fx, fy - r), (fx, fy + r), color);
        }
        None => {}
    }

    let (Some(label), Some(font)) = (instruction.label.as_ref(), options.font.as_ref()) else {
        return;
    };
    let Some(pos) = instruction.label_position() else {
        return;
    };
    let scale = Scale::uniform(options.label_font_size);
    let (_, th) = text_size(scale, font, &label.text);
    let (lx, ly) = pos.to_i32();
    draw_text_mut(
        img,
        opaque(options.palette.label_color(label.kind)),
        lx,
        ly - th / 2,
        scale,
        font,
        &label.text,
    );
}

/// Legend in the lower-left corner listing the categories the track reached.
fn draw_legend(img: &mut RgbaImage, plan: &RenderPlan, options: &AssemblyOptions) {
    let counts = plan.category_counts();
    if counts.is_empty() {
        return;
    }

    let scale = Scale::uniform(options.label_font_size);
    let radius = options.marker_radius;
    let row_height = (options.label_font_size.ceil() as i32).max(radius * 2) + 4;
    let entries: Vec<(StormCategory, String)> = counts
        .iter()
        .map(|(category, count)| (*category, format!("{} ({})", category.label(), count)))
        .collect();

    let text_width = options
        .font
        .as_ref()
        .map(|font| {
            entries
                .iter()
                .map(|(_, text)| text_size(scale, font, text).0)
                .max()
                .unwrap_or(0)
        })
        .unwrap_or(0);

    let box_width = radius * 2 + 12 + if text_width > 0 { text_width + 6 } else { 0 };
    let box_height = row_height * entries.len() as i32 + 8;
    let left = LEGEND_MARGIN;
    let top = img.height() as i32 - LEGEND_MARGIN - box_height;
    if top < 0 || box_width + LEGEND_MARGIN > img.width() as i32 {
        debug!("Canvas too small for legend");
        return;
    }

    draw_filled_rect_mut(
        img,
        Rect::at(left, top).of_size(box_width as u32, box_height as u32),
        options.palette.title_band(),
    );

    let text_color = opaque(options.palette.title_text());
    for (row, (category, text)) in entries.iter().enumerate() {
        let cy = top + 4 + row as i32 * row_height + row_height / 2;
        let cx = left + 6 + radius;
        draw_filled_circle_mut(img, (cx, cy), radius, options.palette.category_color(*category));
        draw_hollow_circle_mut(img, (cx, cy), radius, MARKER_OUTLINE);

        if let Some(font) = options.font.as_ref() {
            let (_, th) = text_size(scale, font, text);
            draw_text_mut(img, text_color, cx + radius + 6, cy - th / 2, scale, font, text);
        }
    }
}

fn draw_title(img: &mut RgbaImage, title: &str, options: &AssemblyOptions) {
    let Some(font) = options.font.as_ref() else {
        return;
    };
    if title.is_empty() {
        return;
    }

    let scale = Scale::uniform(options.title_font_size);
    let (tw, th) = text_size(scale, font, title);
    let band_height = (th + 10).min(img.height() as i32);
    draw_filled_rect_mut(
        img,
        Rect::at(0, 0).of_size(img.width(), band_height.max(1) as u32),
        options.palette.title_band(),
    );

    let x = (img.width() as i32 - tw) / 2;
    draw_text_mut(
        img,
        opaque(options.palette.title_text()),
        x.max(0),
        (band_height - th) / 2,
        scale,
        font,
        title,
    );
}

fn opaque(color: Rgba<u8>) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], 255])
}

#[cfg(test)]
mod tests {
    use super::*;
    use projection::PixelPoint;

    #[test]
    fn test_blend_line_mixes_with_background() {
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        blend_line(&mut img, (0.0, 5.0), (9.0, 5.0), Rgba([255, 255, 255, 128]));
        let px = img.get_pixel(4, 5);
        assert!(px[0] > 100 && px[0] < 160, "got {:?}", px);
        assert_eq!(px[3], 255);
        assert_eq!(*img.get_pixel(4, 0), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_blend_line_clips_off_canvas() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        blend_line(&mut img, (-50.0, -50.0), (50.0, 50.0), Rgba([255, 0, 0, 255]));
        assert_eq!(*img.get_pixel(2, 2), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_city_cross() {
        let mut img = RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 255]));
        let options = AssemblyOptions::default();
        draw_instruction(
            &mut img,
            &DrawInstruction::marker(PixelPoint::new(10.0, 10.0), MarkerStyle::City),
            &options,
        );
        let white = Rgba([255, 255, 255, 255]);
        assert_eq!(*img.get_pixel(10, 10), white);
        assert_eq!(*img.get_pixel(13, 10), white);
        assert_eq!(*img.get_pixel(10, 7), white);
        assert_eq!(*img.get_pixel(13, 13), Rgba([0, 0, 0, 255]));
    }
}

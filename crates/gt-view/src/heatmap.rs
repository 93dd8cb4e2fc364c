//! Heatmap composition: min-max normalization, "hot" palette, bicubic
//! resampling.
//!
//! The grid is composed at one pixel per cell and then resampled to the
//! requested output size with a Catmull-Rom filter, which gives the smooth
//! cell-to-cell gradients expected of a heatmap.

use image::{imageops::FilterType, DynamicImage, Rgba, RgbaImage};

use gt_core::Grid;

/// "Hot" palette: black through red and yellow to white.
///
/// Piecewise linear ramps, one channel at a time: red saturates first,
/// then green, then blue. `t` is clamped to [0, 1].
pub fn hot(t: f32) -> Rgba<u8> {
    const RED_END: f32 = 0.365;
    const GREEN_END: f32 = 0.746;

    let t = t.clamp(0.0, 1.0);
    let r = (t / RED_END).min(1.0);
    let g = ((t - RED_END) / (GREEN_END - RED_END)).clamp(0.0, 1.0);
    let b = ((t - GREEN_END) / (1.0 - GREEN_END)).clamp(0.0, 1.0);

    Rgba([channel(r), channel(g), channel(b), 255])
}

fn channel(v: f32) -> u8 {
    (v * 255.0).round() as u8
}

/// Compose the grid as a one-pixel-per-cell RGBA image.
///
/// Values are min-max normalized over the whole grid; a constant grid maps
/// everything to the bottom of the palette. Row-major layout: the element
/// at flat index `i` lands at pixel column `i % width`, row `i / width`.
pub fn compose(grid: &Grid) -> RgbaImage {
    let n = grid.width() as u32;
    if n == 0 {
        return RgbaImage::new(0, 0);
    }

    let (min, max) = grid.min_max().unwrap_or((0, 0));
    let span = (max - min) as f32;

    let mut canvas = RgbaImage::new(n, n);
    for row in 0..n {
        for col in 0..n {
            let v = grid.get(row as usize, col as usize);
            let t = if span == 0.0 {
                0.0
            } else {
                (v - min) as f32 / span
            };
            canvas.put_pixel(col, row, hot(t));
        }
    }
    canvas
}

/// Render the grid's heatmap at `width x height` pixels.
pub fn render(grid: &Grid, width: u32, height: u32) -> RgbaImage {
    if grid.is_empty() || width == 0 || height == 0 {
        return RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));
    }

    DynamicImage::ImageRgba8(compose(grid))
        .resize_exact(width, height, FilterType::CatmullRom)
        .to_rgba8()
}

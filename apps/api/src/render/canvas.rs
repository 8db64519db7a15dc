//! Software canvas over an `image::RgbaImage`, with source-over blending.
//!
//! Only the handful of primitives the post layout needs: gradient fill,
//! translucent rectangles, glyph coverage masks, and a rounded-rect-clipped image.

use image::{imageops::FilterType, DynamicImage, RgbaImage};

use crate::layout::color::Color;
use crate::layout::font_metrics::{GlyphBitmap, Typeface};

pub struct Canvas {
    image: RgbaImage,
}

/// Source-over blend of `src` at `coverage` (0..=1) onto an existing pixel.
fn blend(dst: &mut image::Rgba<u8>, src: Color, coverage: f32) {
    let alpha = (src.a as f32 / 255.0) * coverage.clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }
    let dst_alpha = dst[3] as f32 / 255.0;
    let out_alpha = alpha + dst_alpha * (1.0 - alpha);
    let mix = |s: u8, d: u8| {
        let value = (s as f32 * alpha + d as f32 * dst_alpha * (1.0 - alpha)) / out_alpha;
        value.round().clamp(0.0, 255.0) as u8
    };
    dst[0] = mix(src.r, dst[0]);
    dst[1] = mix(src.g, dst[1]);
    dst[2] = mix(src.b, dst[2]);
    dst[3] = (out_alpha * 255.0).round() as u8;
}

/// Coverage of pixel center `(px, py)` inside a rounded square, with a 1px soft edge.
fn rounded_rect_coverage(px: f32, py: f32, x: f32, y: f32, size: f32, radius: f32) -> f32 {
    let radius = radius.min(size / 2.0).max(0.0);
    // Distance outside the rounded rectangle, negative inside.
    let half = size / 2.0;
    let cx = x + half;
    let cy = y + half;
    let qx = (px - cx).abs() - (half - radius);
    let qy = (py - cy).abs() - (half - radius);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    let inside = qx.max(qy).min(0.0);
    let distance = outside + inside - radius;
    (0.5 - distance).clamp(0.0, 1.0)
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Fills every pixel with the gradient projected onto the `start`→`end` axis.
    pub fn fill_linear_gradient(
        &mut self,
        from: Color,
        to: Color,
        start: (f32, f32),
        end: (f32, f32),
    ) {
        let (dx, dy) = (end.0 - start.0, end.1 - start.1);
        let length_sq = dx * dx + dy * dy;
        for (x, y, pixel) in self.image.enumerate_pixels_mut() {
            let t = if length_sq > 0.0 {
                let px = x as f32 + 0.5 - start.0;
                let py = y as f32 + 0.5 - start.1;
                (px * dx + py * dy) / length_sq
            } else {
                0.0
            };
            *pixel = from.lerp(to, t).to_rgba();
        }
    }

    /// Blends a solid rectangle, clipped to the canvas.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let x0 = x.max(0.0).round() as u32;
        let y0 = y.max(0.0).round() as u32;
        let x1 = ((x + width).round().max(0.0) as u32).min(self.width());
        let y1 = ((y + height).round().max(0.0) as u32).min(self.height());
        for py in y0..y1 {
            for px in x0..x1 {
                blend(self.image.get_pixel_mut(px, py), color, 1.0);
            }
        }
    }

    /// Blends a glyph mask whose pen position is `(pen_x, baseline)`.
    pub fn draw_glyph(&mut self, glyph: &GlyphBitmap, pen_x: f32, baseline: f32, color: Color) {
        let left = pen_x.round() as i64 + glyph.xmin as i64;
        let top = baseline.round() as i64 - glyph.ymin as i64 - glyph.height as i64;
        let (width, height) = (self.width() as i64, self.height() as i64);

        for row in 0..glyph.height {
            let py = top + row as i64;
            if py < 0 || py >= height {
                continue;
            }
            for col in 0..glyph.width {
                let px = left + col as i64;
                if px < 0 || px >= width {
                    continue;
                }
                let coverage = glyph.coverage[row * glyph.width + col];
                if coverage == 0 {
                    continue;
                }
                blend(
                    self.image.get_pixel_mut(px as u32, py as u32),
                    color,
                    coverage as f32 / 255.0,
                );
            }
        }
    }

    /// Draws a single line of text with its baseline at `y`. Returns the advance width.
    pub fn draw_text(
        &mut self,
        face: &dyn Typeface,
        text: &str,
        x: f32,
        y: f32,
        px: f32,
        color: Color,
    ) -> f32 {
        let mut pen_x = x;
        for c in text.chars() {
            if let Some(glyph) = face.rasterize(c, px) {
                self.draw_glyph(&glyph, pen_x, y, color);
            }
            pen_x += face.advance(c, px);
        }
        pen_x - x
    }

    /// Stretches `source` to a `size`×`size` square at `(x, y)`, clipped to rounded corners.
    pub fn draw_image_rounded(
        &mut self,
        source: &DynamicImage,
        x: f32,
        y: f32,
        size: f32,
        radius: f32,
    ) {
        let side = size.round().max(1.0) as u32;
        let scaled = source.resize_exact(side, side, FilterType::Lanczos3).to_rgba8();
        let left = x.round() as i64;
        let top = y.round() as i64;

        for (sx, sy, pixel) in scaled.enumerate_pixels() {
            let px = left + sx as i64;
            let py = top + sy as i64;
            if px < 0 || py < 0 || px >= self.width() as i64 || py >= self.height() as i64 {
                continue;
            }
            let coverage = rounded_rect_coverage(
                px as f32 + 0.5,
                py as f32 + 0.5,
                left as f32,
                top as f32,
                side as f32,
                radius,
            );
            if coverage <= 0.0 {
                continue;
            }
            let src = Color {
                r: pixel[0],
                g: pixel[1],
                b: pixel[2],
                a: pixel[3],
            };
            blend(self.image.get_pixel_mut(px as u32, py as u32), src, coverage);
        }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let p = self.image.get_pixel(x, y);
        Color {
            r: p[0],
            g: p[1],
            b: p[2],
            a: p[3],
        }
    }
}

//! Replays a laid-out scene onto a canvas and encodes the PNG export.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::debug;

use crate::errors::AppError;
use crate::generation::generator::GeneratedPost;
use crate::layout::{compose_scene, DrawOp, FontSet};
use crate::render::canvas::Canvas;

pub const PNG_CONTENT_TYPE: &str = "image/png";
pub const DOWNLOAD_FILENAME: &str = "linkedin-post.png";

/// Renders the square post image. CPU-bound: call from `spawn_blocking` in async code.
pub fn render_post(
    post: &GeneratedPost,
    fonts: &FontSet,
    logo: Option<&DynamicImage>,
) -> Result<RgbaImage, AppError> {
    let scene = compose_scene(post, fonts, logo.is_some())?;
    let mut canvas = Canvas::new(scene.width, scene.height);

    for op in &scene.ops {
        match op {
            DrawOp::LinearGradient {
                from,
                to,
                start,
                end,
            } => canvas.fill_linear_gradient(*from, *to, *start, *end),
            DrawOp::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => canvas.fill_rect(*x, *y, *width, *height, *color),
            DrawOp::Text(run) => {
                canvas.draw_text(
                    fonts.face(run.style.weight),
                    &run.text,
                    run.x,
                    run.y,
                    run.style.px,
                    run.style.color,
                );
            }
            DrawOp::Logo {
                x,
                y,
                size,
                corner_radius,
            } => {
                if let Some(logo) = logo {
                    canvas.draw_image_rounded(logo, *x, *y, *size, *corner_radius);
                }
            }
        }
    }

    debug!(
        width = scene.width,
        height = scene.height,
        ops = scene.ops.len(),
        logo = logo.is_some(),
        "Rendered post canvas"
    );

    Ok(canvas.into_image())
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, AppError> {
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|e| AppError::Render(format!("PNG encode failed: {e}")))?;
    Ok(out.into_inner())
}

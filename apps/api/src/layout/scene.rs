//! Post canvas layout: turns a `GeneratedPost` into an ordered list of draw operations.
//!
//! # Canvas layout (1080 × 1080)
//! - Diagonal gradient background, then a 10% white inset panel at 40px.
//! - Content column at x=100, starting y=140, 880px wide.
//! - Headline → hook → "Playbook" label → bulleted talking points, flowing downward.
//! - Call to action pinned at y=880, hashtags pinned at y=1000.
//! - Optional logo in the top-right corner, clipped to a rounded square.
//!
//! Text `y` coordinates are alphabetic baselines. Layout is pure: the renderer
//! replays the ops, and tests assert on positions without touching pixels.

use crate::errors::AppError;
use crate::generation::generator::GeneratedPost;
use crate::layout::color::Color;
use crate::layout::font_metrics::{FontSet, FontWeight};
use crate::layout::wrap::{block_height, wrap_text};

pub const CANVAS_SIZE: u32 = 1080;

const PANEL_INSET: f32 = 40.0;
const CONTENT_X: f32 = 100.0;
const CONTENT_Y: f32 = 140.0;
const CONTENT_WIDTH: f32 = CANVAS_SIZE as f32 - CONTENT_X * 2.0;

const BULLET_INDENT: f32 = 30.0;
const BULLET_GLYPH: &str = "•";
const PLAYBOOK_LABEL: &str = "Playbook";
const HASHTAG_SEPARATOR: &str = "  ";

const CTA_OFFSET_FROM_BOTTOM: f32 = 200.0;
const HASHTAGS_OFFSET_FROM_BOTTOM: f32 = 80.0;

const LOGO_SIZE: f32 = 140.0;
const LOGO_MAX_FRACTION: f32 = 0.15;
const LOGO_RIGHT_MARGIN: f32 = 100.0;
const LOGO_CORNER_RADIUS: f32 = 24.0;

// ────────────────────────────────────────────────────────────────────────────
// Scene types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub px: f32,
    pub weight: FontWeight,
    pub color: Color,
}

/// One line of text placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    /// Alphabetic baseline.
    pub y: f32,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fills the whole canvas with a gradient running from `start` to `end`.
    LinearGradient {
        from: Color,
        to: Color,
        start: (f32, f32),
        end: (f32, f32),
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Text(TextRun),
    /// Slot for the uploaded logo, stretched to `size`×`size`.
    Logo {
        x: f32,
        y: f32,
        size: f32,
        corner_radius: f32,
    },
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<DrawOp>,
}

impl Scene {
    #[cfg(test)]
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            _ => None,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

/// Wraps `text` into the op list starting at baseline `y` and returns the block height.
#[allow(clippy::too_many_arguments)]
fn push_wrapped(
    ops: &mut Vec<DrawOp>,
    fonts: &FontSet,
    text: &str,
    style: TextStyle,
    x: f32,
    y: f32,
    max_width: f32,
    line_height: f32,
) -> f32 {
    let face = fonts.face(style.weight);
    let lines = wrap_text(face, text, style.px, max_width);
    let height = block_height(lines.len(), line_height);

    for (index, line) in lines.into_iter().enumerate() {
        ops.push(DrawOp::Text(TextRun {
            text: line,
            x,
            y: y + index as f32 * line_height,
            style,
        }));
    }

    height
}

/// Lays out the post canvas. Fails only if a palette color is not valid hex.
pub fn compose_scene(
    post: &GeneratedPost,
    fonts: &FontSet,
    has_logo: bool,
) -> Result<Scene, AppError> {
    let size = CANVAS_SIZE as f32;
    let gradient_from = Color::parse_hex(&post.palette.gradient_from)?;
    let gradient_to = Color::parse_hex(&post.palette.gradient_to)?;
    let accent = Color::parse_hex(&post.palette.accent)?;

    let mut ops = vec![
        DrawOp::LinearGradient {
            from: gradient_from,
            to: gradient_to,
            start: (0.0, 0.0),
            end: (size, size),
        },
        DrawOp::FillRect {
            x: PANEL_INSET,
            y: PANEL_INSET,
            width: size - PANEL_INSET * 2.0,
            height: size - PANEL_INSET * 2.0,
            color: Color::WHITE.with_alpha(0.1),
        },
    ];

    // Headline
    let headline_style = TextStyle {
        px: 58.0,
        weight: FontWeight::Bold,
        color: Color::WHITE,
    };
    let mut current_y = CONTENT_Y
        + push_wrapped(
            &mut ops,
            fonts,
            &post.headline,
            headline_style,
            CONTENT_X,
            CONTENT_Y,
            CONTENT_WIDTH,
            70.0,
        )
        + 36.0;

    // Hook
    let hook_style = TextStyle {
        px: 28.0,
        weight: FontWeight::Medium,
        color: Color::WHITE.with_alpha(0.85),
    };
    current_y += push_wrapped(
        &mut ops,
        fonts,
        &post.hook,
        hook_style,
        CONTENT_X,
        current_y,
        CONTENT_WIDTH,
        42.0,
    );

    // Playbook label
    let label_style = TextStyle {
        px: 30.0,
        weight: FontWeight::SemiBold,
        color: accent,
    };
    current_y += 32.0;
    current_y += push_wrapped(
        &mut ops,
        fonts,
        PLAYBOOK_LABEL,
        label_style,
        CONTENT_X,
        current_y,
        CONTENT_WIDTH,
        40.0,
    );

    // Talking points
    let point_style = TextStyle {
        px: 28.0,
        weight: FontWeight::Regular,
        color: Color::WHITE,
    };
    let mut bullet_y = current_y + 24.0;
    for point in &post.talking_points {
        ops.push(DrawOp::Text(TextRun {
            text: BULLET_GLYPH.to_string(),
            x: CONTENT_X,
            y: bullet_y,
            style: point_style,
        }));
        let paragraph_height = push_wrapped(
            &mut ops,
            fonts,
            point,
            point_style,
            CONTENT_X + BULLET_INDENT,
            bullet_y,
            CONTENT_WIDTH - BULLET_INDENT,
            36.0,
        );
        bullet_y += paragraph_height + 28.0;
    }

    // Call to action, pinned near the bottom regardless of how far the points ran.
    let cta_style = TextStyle {
        px: 26.0,
        weight: FontWeight::Medium,
        color: accent,
    };
    push_wrapped(
        &mut ops,
        fonts,
        &post.call_to_action,
        cta_style,
        CONTENT_X,
        size - CTA_OFFSET_FROM_BOTTOM,
        CONTENT_WIDTH,
        38.0,
    );

    // Hashtags on a single unwrapped line.
    ops.push(DrawOp::Text(TextRun {
        text: post.hashtags.join(HASHTAG_SEPARATOR),
        x: CONTENT_X,
        y: size - HASHTAGS_OFFSET_FROM_BOTTOM,
        style: TextStyle {
            px: 24.0,
            weight: FontWeight::Medium,
            color: Color::WHITE,
        },
    }));

    if has_logo {
        let logo_size = LOGO_SIZE.min(size * LOGO_MAX_FRACTION);
        ops.push(DrawOp::Logo {
            x: size - logo_size - LOGO_RIGHT_MARGIN,
            y: CONTENT_Y,
            size: logo_size,
            corner_radius: LOGO_CORNER_RADIUS.min(logo_size / 2.0),
        });
    }

    Ok(Scene {
        width: CANVAS_SIZE,
        height: CANVAS_SIZE,
        ops,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

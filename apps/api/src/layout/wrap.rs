//! Greedy word wrap against a measured line width.

use crate::layout::font_metrics::Typeface;

/// Breaks `text` into lines no wider than `max_width` pixels at `px`.
///
/// Whitespace-only text yields no lines. A word wider than `max_width`
/// gets a line to itself and overflows; words are never split.
pub fn wrap_text(face: &dyn Typeface, text: &str, px: f32, max_width: f32) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if !current.is_empty() && face.measure(&candidate, px) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Total height of a wrapped block.
pub fn block_height(line_count: usize, line_height: f32) -> f32 {
    line_count as f32 * line_height
}

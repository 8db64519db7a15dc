//! Fixed brand palettes and the string hash that picks one.

use serde::{Deserialize, Serialize};

/// Colors for the post canvas. All values are `#rrggbb` hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub gradient_from: String,
    pub gradient_to: String,
    pub accent: String,
    pub text_on_accent: String,
}

struct PaletteSpec {
    gradient_from: &'static str,
    gradient_to: &'static str,
    accent: &'static str,
    text_on_accent: &'static str,
}

#[rustfmt::skip]
static PALETTES: [PaletteSpec; 5] = [
    PaletteSpec { gradient_from: "#4f46e5", gradient_to: "#8b5cf6", accent: "#fcd34d", text_on_accent: "#111827" },
    PaletteSpec { gradient_from: "#2563eb", gradient_to: "#0ea5e9", accent: "#f97316", text_on_accent: "#0f172a" },
    PaletteSpec { gradient_from: "#7c3aed", gradient_to: "#db2777", accent: "#fef08a", text_on_accent: "#1f2937" },
    PaletteSpec { gradient_from: "#0f172a", gradient_to: "#1e293b", accent: "#38bdf8", text_on_accent: "#0f172a" },
    PaletteSpec { gradient_from: "#047857", gradient_to: "#22c55e", accent: "#facc15", text_on_accent: "#1f2937" },
];

/// Sums the leading UTF-16 code unit of every scalar value.
///
/// Astral characters contribute their high surrogate, which keeps the index
/// identical to what a JavaScript client computes for the same string.
pub fn palette_hash(input: &str) -> u64 {
    let mut buf = [0u16; 2];
    input
        .chars()
        .map(|c| u64::from(c.encode_utf16(&mut buf)[0]))
        .sum()
}

pub fn palette_index(input: &str) -> usize {
    (palette_hash(input) % PALETTES.len() as u64) as usize
}

pub fn palette_at(index: usize) -> Palette {
    let entry = &PALETTES[index % PALETTES.len()];
    Palette {
        gradient_from: entry.gradient_from.to_string(),
        gradient_to: entry.gradient_to.to_string(),
        accent: entry.accent.to_string(),
        text_on_accent: entry.text_on_accent.to_string(),
    }
}

/// Picks the palette for a post from the concatenated brief fields.
pub fn choose_palette(input: &str) -> Palette {
    palette_at(palette_index(input))
}

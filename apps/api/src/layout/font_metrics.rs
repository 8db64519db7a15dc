//! Text measurement: the `Typeface` seam plus a static Inter metric table.
//!
//! Character widths in the static table are in em units (relative to font size),
//! so measuring at `px` is `width_em * px`. The table is an approximation of Inter,
//! close enough that wrap decisions match the loaded font in all but borderline lines.
//! It never rasterizes; it exists so layout works, and is testable, without a font file.
//!
//! Table covers ASCII 0x20..=0x7E (95 printable characters). Index = (char as usize) - 32.

use std::sync::Arc;

// ────────────────────────────────────────────────────────────────────────────
// Typeface trait
// ────────────────────────────────────────────────────────────────────────────

/// A rasterized glyph's coverage mask, positioned relative to the pen.
///
/// `xmin` is the offset from the pen x to the left edge. `ymin` is the offset from
/// the baseline to the bottom edge, positive upward (font convention).
#[derive(Debug, Clone)]
pub struct GlyphBitmap {
    pub xmin: i32,
    pub ymin: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major coverage, 0 = transparent, 255 = fully covered.
    pub coverage: Vec<u8>,
}

/// Anything that can measure, and optionally rasterize, text at a pixel size.
pub trait Typeface: Send + Sync {
    /// Horizontal advance of `c` at `px` pixels.
    fn advance(&self, c: char, px: f32) -> f32;

    /// Coverage mask for `c`, or `None` if this face only carries metrics.
    fn rasterize(&self, c: char, px: f32) -> Option<GlyphBitmap>;

    /// Short description for startup logs.
    fn describe(&self) -> String;

    /// Width of a single line of text, the sum of its advances.
    fn measure(&self, text: &str, px: f32) -> f32 {
        text.chars().map(|c| self.advance(c, px)).sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
#[derive(Clone, Copy)]
pub struct FontMetricTable {
    pub name: &'static str,
    widths: &'static [f32; 95],
    /// Uniform widening applied to every width (1.0 for regular, >1.0 for bold).
    width_scale: f32,
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_em(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_em(c)).sum()
    }

    fn char_em(&self, c: char) -> f32 {
        let code = c as usize;
        let base = if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else {
            self.average_char_width
        };
        base * self.width_scale
    }
}

impl Typeface for FontMetricTable {
    fn advance(&self, c: char, px: f32) -> f32 {
        self.char_em(c) * px
    }

    fn measure(&self, text: &str, px: f32) -> f32 {
        self.measure_em(text) * px
    }

    fn rasterize(&self, _c: char, _px: f32) -> Option<GlyphBitmap> {
        None
    }

    fn describe(&self) -> String {
        format!("static metrics ({})", self.name)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables
// ────────────────────────────────────────────────────────────────────────────

#[rustfmt::skip]
static INTER_WIDTHS: [f32; 95] = [
    // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
    0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
    // 0     1     2     3     4     5     6     7     8     9
    0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
    // :     ;     <     =     >     ?     @
    0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
    // A     B     C     D     E     F     G     H     I     J     K     L     M
    0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
    // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
    0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
    // [     \     ]     ^     _     `
    0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
    // a     b     c     d     e     f     g     h     i     j     k     l     m
    0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
    // n     o     p     q     r     s     t     u     v     w     x     y     z
    0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
    // {     |     }     ~
    0.33, 0.26, 0.33, 0.59,
];

/// Inter regular (400/500 weights).
pub static INTER_TABLE: FontMetricTable = FontMetricTable {
    name: "Inter",
    widths: &INTER_WIDTHS,
    width_scale: 1.0,
    average_char_width: 0.52,
};

/// Inter bold (600/700 weights). Approx. 6% wider than regular.
pub static INTER_BOLD_TABLE: FontMetricTable = FontMetricTable {
    name: "Inter Bold",
    widths: &INTER_WIDTHS,
    width_scale: 1.06,
    average_char_width: 0.52,
};

// ────────────────────────────────────────────────────────────────────────────
// Face selection
// ────────────────────────────────────────────────────────────────────────────

/// CSS-style numeric weights collapse onto two faces: 400/500 regular, 600/700 bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Medium,
    SemiBold,
    Bold,
}

impl FontWeight {
    pub fn uses_bold_face(self) -> bool {
        matches!(self, FontWeight::SemiBold | FontWeight::Bold)
    }
}

/// The regular and bold faces used on the canvas.
///
/// Loading real faces from disk lives with the renderer (`FontSet::from_config`).
pub struct FontSet {
    regular: Arc<dyn Typeface>,
    bold: Arc<dyn Typeface>,
}

impl FontSet {
    pub fn new(regular: Arc<dyn Typeface>, bold: Arc<dyn Typeface>) -> Self {
        Self { regular, bold }
    }

    /// Metrics-only faces: correct layout, no painted glyphs.
    pub fn static_metrics() -> Self {
        Self::new(Arc::new(INTER_TABLE), Arc::new(INTER_BOLD_TABLE))
    }

    pub fn face(&self, weight: FontWeight) -> &dyn Typeface {
        if weight.uses_bold_face() {
            self.bold.as_ref()
        } else {
            self.regular.as_ref()
        }
    }

    pub fn describe(&self) -> String {
        format!("{} / {}", self.regular.describe(), self.bold.describe())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_em_empty_returns_zero() {
        assert_eq!(INTER_TABLE.measure_em(""), 0.0);
    }

    #[test]
    fn test_measure_em_ascii_characters() {
        // "Rust" = R(0.61) + u(0.56) + s(0.44) + t(0.39) = 2.00
        let width = INTER_TABLE.measure_em("Rust");
        assert!(
            (width - 2.00).abs() < 1e-3,
            "Rust width should be ~2.00, got {width}"
        );
    }

    #[test]
    fn test_non_ascii_falls_back_to_average() {
        let width = INTER_TABLE.measure_em("é");
        assert!((width - INTER_TABLE.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_measure_scales_with_pixel_size() {
        let at_10 = INTER_TABLE.measure("Rust", 10.0);
        let at_20 = INTER_TABLE.measure("Rust", 20.0);
        assert!((at_10 - 20.0).abs() < 1e-3, "got {at_10}");
        assert!((at_20 - 2.0 * at_10).abs() < 1e-3);
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = "Playbook";
        assert!(INTER_BOLD_TABLE.measure(text, 30.0) > INTER_TABLE.measure(text, 30.0));
    }

    #[test]
    fn test_table_measure_goes_through_em_widths() {
        let em = INTER_TABLE.measure_em("Playbook");
        let px = INTER_TABLE.measure("Playbook", 30.0);
        assert!((px - em * 30.0).abs() < 1e-3, "got {px}, expected {}", em * 30.0);
        // The trait default (sum of advances) agrees with the override.
        let summed: f32 = "Playbook".chars().map(|c| INTER_TABLE.advance(c, 30.0)).sum();
        assert!((px - summed).abs() < 1e-3);
    }

    #[test]
    fn test_static_metrics_pick_face_by_weight() {
        let fonts = FontSet::static_metrics();
        let regular = fonts.face(FontWeight::Medium).measure("Playbook", 30.0);
        let bold = fonts.face(FontWeight::SemiBold).measure("Playbook", 30.0);
        assert!(bold > regular);
        assert!(fonts.describe().contains("Inter Bold"));
    }

    #[test]
    fn test_static_table_never_rasterizes() {
        assert!(INTER_TABLE.rasterize('A', 58.0).is_none());
        assert!(INTER_TABLE.describe().contains("Inter"));
    }
}

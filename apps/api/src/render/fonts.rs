//! Font loading. `fontdue` parses TTF/OTF faces from disk; when no face can be
//! read the static Inter metrics stand in so layout still works.

use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use fontdue::{Font, FontSettings};
use tracing::{info, warn};

use crate::config::Config;
use crate::layout::font_metrics::{FontSet, GlyphBitmap, Typeface};

/// A face parsed by `fontdue`.
pub struct LoadedFont {
    font: Font,
    label: String,
}

impl LoadedFont {
    pub fn from_bytes(bytes: Vec<u8>, label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|error| anyhow!("failed to parse font {label}: {error}"))?;
        Ok(Self { font, label })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read font file {}", path.display()))?;
        Self::from_bytes(bytes, path.display().to_string())
    }
}

impl Typeface for LoadedFont {
    fn advance(&self, c: char, px: f32) -> f32 {
        self.font.metrics(c, px).advance_width
    }

    fn rasterize(&self, c: char, px: f32) -> Option<GlyphBitmap> {
        let (metrics, coverage) = self.font.rasterize(c, px);
        if metrics.width == 0 || metrics.height == 0 {
            return None;
        }
        Some(GlyphBitmap {
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            width: metrics.width,
            height: metrics.height,
            coverage,
        })
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

impl FontSet {
    /// Loads faces from the configured paths, degrading instead of failing.
    ///
    /// - regular unreadable → static metrics for both weights
    /// - bold unreadable → regular face reused for bold
    pub fn from_config(config: &Config) -> Self {
        let regular: Arc<dyn Typeface> = match LoadedFont::from_path(&config.font_path) {
            Ok(font) => Arc::new(font),
            Err(e) => {
                warn!("{e:#}; falling back to static metrics, glyphs will not be painted");
                return Self::static_metrics();
            }
        };

        let bold: Arc<dyn Typeface> = match LoadedFont::from_path(&config.font_bold_path) {
            Ok(font) => Arc::new(font),
            Err(e) => {
                warn!("{e:#}; using the regular face for bold text");
                Arc::clone(&regular)
            }
        };

        info!(
            regular = %regular.describe(),
            bold = %bold.describe(),
            "Fonts loaded"
        );
        Self::new(regular, bold)
    }
}

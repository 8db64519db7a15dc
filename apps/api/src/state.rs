use std::sync::Arc;

use crate::config::Config;
use crate::layout::FontSet;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Faces used for text measurement and glyph rasterization on the post canvas.
    pub fonts: Arc<FontSet>,
}

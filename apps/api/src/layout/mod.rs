// Canvas text layout: colors, font metrics, greedy word wrap, and the post scene.
// Pure computation; pixels are produced by `render`, which depends on this module
// and never the other way round.

pub mod color;
pub mod font_metrics;
pub mod scene;
pub mod wrap;

// Re-export the layout API consumed by `render` and the app state.
pub use font_metrics::{FontSet, FontWeight};
pub use scene::{compose_scene, DrawOp};

// Post generation: input validation, tone lookup, copy templates, hashtags, palette.
// No I/O here; handlers are the only async surface.

pub mod copy;
pub mod generator;
pub mod handlers;
pub mod hashtags;
pub mod palette;
pub mod tone;

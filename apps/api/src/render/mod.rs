// Post image rendering: font loading, the software canvas, logo decoding,
// and PNG export. Rendering is CPU-bound and runs on the
// blocking pool from the handlers.

pub mod canvas;
pub mod compose;
pub mod fonts;
pub mod handlers;
pub mod logo;

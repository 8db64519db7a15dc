//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, Json};
use tracing::info;

use crate::errors::AppError;
use crate::generation::generator::{generate_post, validate, GenerateRequest, GeneratedPost};
use crate::generation::tone::{tone_options, ToneOption};

/// POST /api/generate
///
/// Validates the four inputs and returns the templated post.
pub async fn handle_generate(
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GeneratedPost>, AppError> {
    let Json(request) = payload?;
    let brief = validate(&request)?;
    let post = generate_post(&brief);

    info!(
        hashtags = post.hashtags.len(),
        "Generated post for topic {:?}",
        brief.topic.chars().take(40).collect::<String>()
    );

    Ok(Json(post))
}

/// GET /api/tones
pub async fn handle_list_tones() -> Json<Vec<ToneOption>> {
    Json(tone_options())
}

//! Post generation: validates the brief and assembles every section of the post.
//!
//! Flow: validate → normalize tone → choose palette → fill templates → hashtags.
//! Everything here is pure; the same brief always yields the same post.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::generation::copy::{
    build_talking_points, call_to_action, compose_body, headline, select_hook,
};
use crate::generation::hashtags::build_hashtags;
use crate::generation::palette::{choose_palette, palette_index, Palette};
use crate::generation::tone::Tone;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for post generation. Fields are optional so that missing
/// values surface as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub topic: Option<String>,
    pub target_audience: Option<String>,
    pub outcome: Option<String>,
    pub tone: Option<String>,
}

/// A validated brief. Every field is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostBrief {
    pub topic: String,
    pub target_audience: String,
    pub outcome: String,
    pub tone: String,
}

/// The generated post, as returned by `POST /api/generate` and accepted by `POST /api/render`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPost {
    pub headline: String,
    pub hook: String,
    pub talking_points: Vec<String>,
    pub body: Vec<String>,
    pub call_to_action: String,
    pub hashtags: Vec<String>,
    pub palette: Palette,
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Checks presence first, then trimmed emptiness, matching the two client-facing messages.
pub fn validate(request: &GenerateRequest) -> Result<PostBrief, AppError> {
    let (Some(topic), Some(target_audience), Some(outcome), Some(tone)) = (
        present(&request.topic),
        present(&request.target_audience),
        present(&request.outcome),
        present(&request.tone),
    ) else {
        return Err(AppError::MissingFields);
    };

    let brief = PostBrief {
        topic: topic.trim().to_string(),
        target_audience: target_audience.trim().to_string(),
        outcome: outcome.trim().to_string(),
        tone: tone.trim().to_string(),
    };

    if brief.topic.is_empty()
        || brief.target_audience.is_empty()
        || brief.outcome.is_empty()
        || brief.tone.is_empty()
    {
        return Err(AppError::Validation(
            "Provide valid values for every field.".to_string(),
        ));
    }

    Ok(brief)
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

pub fn generate_post(brief: &PostBrief) -> GeneratedPost {
    let tone = Tone::parse(&brief.tone);
    let palette_key = format!("{}{}{}", brief.topic, brief.target_audience, brief.outcome);

    debug!(
        tone = tone.key(),
        palette = palette_index(&palette_key),
        "Generating post"
    );

    GeneratedPost {
        headline: headline(&brief.topic, &brief.outcome),
        hook: select_hook(&brief.topic, &brief.target_audience),
        talking_points: build_talking_points(
            &brief.topic,
            &brief.outcome,
            &brief.target_audience,
        ),
        body: compose_body(&brief.topic, &brief.target_audience, &brief.outcome, tone),
        call_to_action: call_to_action(&brief.target_audience),
        hashtags: build_hashtags(&brief.topic, &brief.outcome),
        palette: choose_palette(&palette_key),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

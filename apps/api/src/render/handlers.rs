//! Axum route handlers for the Render API.

use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::JsonRejection,
        Multipart, State,
    },
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use image::DynamicImage;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::generator::{generate_post, validate, GenerateRequest, GeneratedPost};
use crate::render::compose::{encode_png, render_post, DOWNLOAD_FILENAME, PNG_CONTENT_TYPE};
use crate::render::logo::{decode_logo_bytes, decode_logo_str, LogoError};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub post: GeneratedPost,
    /// `data:` URL or bare base64 image.
    #[serde(default)]
    pub logo: Option<String>,
}

/// Logo payload as received, decoded later on the blocking pool.
enum LogoSource {
    Encoded(String),
    Upload(Bytes),
}

impl LogoSource {
    fn decode(&self) -> Result<DynamicImage, LogoError> {
        match self {
            LogoSource::Encoded(raw) => decode_logo_str(raw),
            LogoSource::Upload(bytes) => decode_logo_bytes(bytes),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared rendering path
// ────────────────────────────────────────────────────────────────────────────

/// Decodes the logo and renders the PNG on the blocking pool.
///
/// A logo that fails to decode is dropped with a warning; the post still renders.
async fn render_png(
    state: &AppState,
    post: GeneratedPost,
    logo: Option<LogoSource>,
) -> Result<Vec<u8>, AppError> {
    let fonts = state.fonts.clone();

    tokio::task::spawn_blocking(move || {
        let logo = logo.and_then(|source| match source.decode() {
            Ok(image) => Some(image),
            Err(e) => {
                warn!("Error rendering logo: {e}");
                None
            }
        });

        let image = render_post(&post, &fonts, logo.as_ref())?;
        let png = encode_png(&image)?;
        info!(
            bytes = png.len(),
            logo = logo.is_some(),
            "Rendered post image"
        );
        Ok(png)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))?
}

fn png_response(png: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, PNG_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
            ),
        ],
        png,
    )
        .into_response()
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/render
///
/// Renders a previously generated post (plus optional encoded logo) to PNG.
pub async fn handle_render(
    State(state): State<AppState>,
    payload: Result<Json<RenderRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let logo = request
        .logo
        .filter(|raw| !raw.trim().is_empty())
        .map(LogoSource::Encoded);

    let png = render_png(&state, request.post, logo).await?;
    Ok(png_response(png))
}

/// POST /api/render/upload
///
/// Multipart form: the four text inputs plus an optional `logo` file.
/// Generates the post and returns its PNG in one round trip.
pub async fn handle_render_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    let mut multipart = multipart?;
    let mut request = GenerateRequest::default();
    let mut logo: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "topic" => request.topic = Some(field.text().await?),
            "targetAudience" => request.target_audience = Some(field.text().await?),
            "outcome" => request.outcome = Some(field.text().await?),
            "tone" => request.tone = Some(field.text().await?),
            "logo" => {
                let data = field.bytes().await?;
                logo = (!data.is_empty()).then_some(data);
            }
            other => warn!("Ignoring unknown multipart field {other:?}"),
        }
    }

    let brief = validate(&request)?;
    let post = generate_post(&brief);
    let png = render_png(&state, post, logo.map(LogoSource::Upload)).await?;
    Ok(png_response(png))
}

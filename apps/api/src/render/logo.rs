//! Logo decoding from raw upload bytes, bare base64, or `data:` URLs.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::DynamicImage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogoError {
    #[error("logo is empty")]
    Empty,

    #[error("logo data URL is not base64-encoded")]
    NotBase64DataUrl,

    #[error("logo base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("unsupported or corrupt logo image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decodes raster bytes in any format the `image` crate was built with.
pub fn decode_logo_bytes(bytes: &[u8]) -> Result<DynamicImage, LogoError> {
    if bytes.is_empty() {
        return Err(LogoError::Empty);
    }
    Ok(image::load_from_memory(bytes)?)
}

/// Accepts `data:<mime>;base64,<payload>` or a bare base64 payload.
pub fn decode_logo_str(raw: &str) -> Result<DynamicImage, LogoError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LogoError::Empty);
    }

    let payload = match trimmed.strip_prefix("data:") {
        Some(rest) => {
            let (header, data) = rest.split_once(',').ok_or(LogoError::NotBase64DataUrl)?;
            if !header.ends_with(";base64") {
                return Err(LogoError::NotBase64DataUrl);
            }
            data
        }
        None => trimmed,
    };

    let bytes = BASE64.decode(payload.trim())?;
    decode_logo_bytes(&bytes)
}

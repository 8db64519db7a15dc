use image::Rgba;

use crate::errors::AppError;

/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    /// Same color with opacity `alpha` in 0.0..=1.0.
    pub fn with_alpha(self, alpha: f32) -> Color {
        Color {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    /// Parses `#rgb`, `#rrggbb`, or `#rrggbbaa`.
    pub fn parse_hex(raw: &str) -> Result<Color, AppError> {
        let invalid = || AppError::Validation(format!("Invalid hex color '{raw}'"));
        let hex = raw.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..i + 1].repeat(2));
                Ok(Color::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            8 => Ok(Color {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
                a: channel(&hex[6..8])?,
            }),
            _ => Err(invalid()),
        }
    }

    /// Linear interpolation between two colors, `t` clamped to 0.0..=1.0.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_hex() {
        assert_eq!(
            Color::parse_hex("#4f46e5").unwrap(),
            Color::rgb(0x4f, 0x46, 0xe5)
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            Color::parse_hex("#FCD34D").unwrap(),
            Color::parse_hex("#fcd34d").unwrap()
        );
    }

    #[test]
    fn test_parse_short_and_alpha_forms() {
        assert_eq!(Color::parse_hex("#fff").unwrap(), Color::WHITE);
        let c = Color::parse_hex("#00000080").unwrap();
        assert_eq!(c.a, 0x80);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "4f46e5", "#12345", "#gggggg", "#ééé", "rgb(1,2,3)"] {
            assert!(Color::parse_hex(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_with_alpha_rounds() {
        assert_eq!(Color::WHITE.with_alpha(0.85).a, 217);
        assert_eq!(Color::WHITE.with_alpha(2.0).a, 255);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let black = Color::rgb(0, 0, 0);
        assert_eq!(black.lerp(Color::WHITE, 0.0), black);
        assert_eq!(black.lerp(Color::WHITE, 1.0), Color::WHITE);
        assert_eq!(black.lerp(Color::WHITE, 0.5).r, 128);
    }
}

//! Tone calibration: maps the requested voice to the guidance sentence that
//! opens the second body paragraph.
//!
//! Unknown tones never fail a request: they fall back to `Professional`.

use serde::Serialize;

/// The four voices offered by the post form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Energetic,
    Inspirational,
    Analytical,
}

/// Form order; also the order returned by `GET /api/tones`.
pub const ALL_TONES: [Tone; 4] = [
    Tone::Professional,
    Tone::Energetic,
    Tone::Inspirational,
    Tone::Analytical,
];

/// A `{label, value}` pair for rendering a tone select box.
#[derive(Debug, Clone, Serialize)]
pub struct ToneOption {
    pub label: &'static str,
    pub value: &'static str,
}

impl Tone {
    /// Parses a tone key case-insensitively. Anything unrecognised is `Professional`.
    pub fn parse(raw: &str) -> Tone {
        match raw.trim().to_lowercase().as_str() {
            "energetic" => Tone::Energetic,
            "inspirational" => Tone::Inspirational,
            "analytical" => Tone::Analytical,
            _ => Tone::Professional,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Energetic => "energetic",
            Tone::Inspirational => "inspirational",
            Tone::Analytical => "analytical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Energetic => "Energetic",
            Tone::Inspirational => "Inspirational",
            Tone::Analytical => "Analytical",
        }
    }

    /// Full guidance sentence for this voice.
    pub fn guidance(self) -> &'static str {
        match self {
            Tone::Professional => {
                "Maintain an authoritative yet approachable voice that instills trust."
            }
            Tone::Energetic => {
                "Channel enthusiasm and momentum, encouraging readers to take immediate action."
            }
            Tone::Inspirational => {
                "Lean into storytelling and aspirational language that sparks possibility."
            }
            Tone::Analytical => {
                "Highlight data points, insights, and frameworks that demonstrate expertise."
            }
        }
    }

    /// Guidance text up to, but excluding, its first period.
    pub fn lead(self) -> &'static str {
        let guidance = self.guidance();
        guidance.split('.').next().unwrap_or(guidance)
    }
}

pub fn tone_options() -> Vec<ToneOption> {
    ALL_TONES
        .iter()
        .map(|tone| ToneOption {
            label: tone.label(),
            value: tone.key(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Tone::parse("Energetic"), Tone::Energetic);
        assert_eq!(Tone::parse("ANALYTICAL"), Tone::Analytical);
        assert_eq!(Tone::parse("inspirational"), Tone::Inspirational);
    }

    #[test]
    fn test_unknown_tone_falls_back_to_professional() {
        assert_eq!(Tone::parse("sarcastic"), Tone::Professional);
        assert_eq!(Tone::parse(""), Tone::Professional);
    }

    #[test]
    fn test_lead_drops_trailing_period() {
        assert_eq!(
            Tone::Professional.lead(),
            "Maintain an authoritative yet approachable voice that instills trust"
        );
        assert!(!Tone::Analytical.lead().ends_with('.'));
    }

    #[test]
    fn test_every_guidance_is_one_sentence() {
        for tone in ALL_TONES {
            let guidance = tone.guidance();
            assert_eq!(
                guidance.matches('.').count(),
                1,
                "{:?} guidance should be a single sentence",
                tone
            );
            assert_eq!(format!("{}.", tone.lead()), guidance);
        }
    }

    #[test]
    fn test_tone_options_follow_form_order() {
        let options = tone_options();
        let values: Vec<&str> = options.iter().map(|o| o.value).collect();
        assert_eq!(
            values,
            vec!["professional", "energetic", "inspirational", "analytical"]
        );
        assert_eq!(options[0].label, "Professional");
    }

    #[test]
    fn test_key_round_trips_through_parse() {
        for tone in ALL_TONES {
            assert_eq!(Tone::parse(tone.key()), tone);
        }
    }
}

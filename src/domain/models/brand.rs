use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::EngineError;

/// Tone-of-voice register a brand speaks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneOfVoice {
    Playful,
    Professional,
    Bold,
    Minimal,
    Friendly,
}

impl fmt::Display for ToneOfVoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playful => write!(f, "playful"),
            Self::Professional => write!(f, "professional"),
            Self::Bold => write!(f, "bold"),
            Self::Minimal => write!(f, "minimal"),
            Self::Friendly => write!(f, "friendly"),
        }
    }
}

impl FromStr for ToneOfVoice {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "playful" => Ok(Self::Playful),
            "professional" => Ok(Self::Professional),
            "bold" => Ok(Self::Bold),
            "minimal" => Ok(Self::Minimal),
            "friendly" => Ok(Self::Friendly),
            _ => Err(EngineError::InvalidTone(s.to_string())),
        }
    }
}

/// Session-scoped record of a customer's brand facts.
///
/// Supplied by the onboarding collaborator and read-only to the engine for
/// the lifetime of a session. Every routing, validation, and isolation call
/// takes this as an explicit parameter; the engine never stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandContext {
    /// Scoping key for the isolation guard.
    pub brand_id: String,

    /// Core unique-selling-proposition lines.
    pub usp: Vec<String>,

    /// Tone-of-voice register.
    pub tone: ToneOfVoice,

    /// Who the brand speaks to.
    pub target_audience: String,

    /// Visual mood keywords, also offered as substitutes for blocked
    /// artist-name references.
    pub visual_mood: Vec<String>,

    /// Words the brand never uses.
    pub forbidden_words: Vec<String>,

    /// Declared pricing model (e.g. "free", "freemium", "premium"), consulted
    /// by the consistency rule of the quality gate.
    pub pricing_model: Option<String>,
}

impl BrandContext {
    /// Create a minimal brand context.
    pub fn new(brand_id: impl Into<String>, tone: ToneOfVoice) -> Self {
        Self {
            brand_id: brand_id.into(),
            usp: Vec::new(),
            tone,
            target_audience: String::new(),
            visual_mood: Vec::new(),
            forbidden_words: Vec::new(),
            pricing_model: None,
        }
    }

    /// Set the USP lines.
    pub fn with_usp(mut self, usp: Vec<String>) -> Self {
        self.usp = usp;
        self
    }

    /// Set the target audience description.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = audience.into();
        self
    }

    /// Set the visual mood keywords.
    pub fn with_visual_mood(mut self, mood: Vec<String>) -> Self {
        self.visual_mood = mood;
        self
    }

    /// Set the forbidden-word list.
    pub fn with_forbidden_words(mut self, words: Vec<String>) -> Self {
        self.forbidden_words = words;
        self
    }

    /// Declare the pricing model.
    pub fn with_pricing_model(mut self, pricing: impl Into<String>) -> Self {
        self.pricing_model = Some(pricing.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_round_trip() {
        for tone in [
            ToneOfVoice::Playful,
            ToneOfVoice::Professional,
            ToneOfVoice::Bold,
            ToneOfVoice::Minimal,
            ToneOfVoice::Friendly,
        ] {
            assert_eq!(tone.to_string().parse::<ToneOfVoice>().unwrap(), tone);
        }
        assert!("sarcastic".parse::<ToneOfVoice>().is_err());
    }

    #[test]
    fn test_brand_context_builder() {
        let brand = BrandContext::new("acme", ToneOfVoice::Bold)
            .with_usp(vec!["the only zero-setup analytics".to_string()])
            .with_audience("indie founders")
            .with_visual_mood(vec!["neon".to_string(), "grainy".to_string()])
            .with_forbidden_words(vec!["cheap".to_string()])
            .with_pricing_model("freemium");

        assert_eq!(brand.brand_id, "acme");
        assert_eq!(brand.tone, ToneOfVoice::Bold);
        assert_eq!(brand.visual_mood.len(), 2);
        assert_eq!(brand.pricing_model.as_deref(), Some("freemium"));
    }
}

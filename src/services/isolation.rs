//! Brand isolation guard.
//!
//! Keeps every engine operation inside exactly one brand's scope and blocks a
//! fixed list of trademarked slogans and named visual artists.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::models::BrandContext;

/// Slogans owned by other brands.
const PROTECTED_SLOGANS: [&str; 6] = [
    "just do it",
    "i'm lovin' it",
    "think different",
    "because you're worth it",
    "red bull gives you wings",
    "the happiest place on earth",
];

/// Living or estate-protected visual artists whose names must not drive
/// generated style direction.
const PROTECTED_ARTISTS: [&str; 6] = [
    "banksy",
    "kaws",
    "yayoi kusama",
    "takashi murakami",
    "shepard fairey",
    "hayao miyazaki",
];

/// Result of a brand-scope check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsolationCheck {
    /// Whether the request may proceed.
    pub allowed: bool,
    /// Why.
    pub reason: String,
}

/// Result of a blocklist scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlocklistCheck {
    /// True when no protected content was found.
    pub passed: bool,
    /// One entry per hit.
    pub issues: Vec<String>,
}

/// Enforces brand scoping and the protected-content blocklists.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsolationGuard;

impl IsolationGuard {
    pub fn new() -> Self {
        Self
    }

    /// Deny any request scoped to a brand other than the session's.
    pub fn check_isolation(&self, brand: &BrandContext, requested_brand_id: &str) -> IsolationCheck {
        if brand.brand_id == requested_brand_id {
            IsolationCheck {
                allowed: true,
                reason: "request is scoped to the active brand".to_string(),
            }
        } else {
            warn!(
                session_brand = %brand.brand_id,
                requested_brand = requested_brand_id,
                "cross-brand request refused"
            );
            IsolationCheck {
                allowed: false,
                reason: format!(
                    "session is scoped to brand '{}'; refusing to operate on '{requested_brand_id}'",
                    brand.brand_id
                ),
            }
        }
    }

    /// Scan `text` for protected slogans and artist names.
    ///
    /// An artist hit suggests the brand's declared mood keywords as the
    /// substitute style direction.
    pub fn check_protected_content(&self, text: &str, brand: &BrandContext) -> BlocklistCheck {
        let lower = text.to_lowercase();
        let mut issues: Vec<String> = Vec::new();

        for slogan in PROTECTED_SLOGANS {
            if lower.contains(slogan) {
                issues.push(format!("text contains protected slogan \"{slogan}\""));
            }
        }

        for artist in PROTECTED_ARTISTS {
            if lower.contains(artist) {
                let mood = if brand.visual_mood.is_empty() {
                    "a neutral mood description".to_string()
                } else {
                    brand.visual_mood.join(", ")
                };
                issues.push(format!(
                    "text references artist \"{artist}\"; describe the visual direction with the brand's mood keywords instead: {mood}"
                ));
            }
        }

        if !issues.is_empty() {
            warn!(brand = %brand.brand_id, hits = issues.len(), "protected content blocked");
        }

        BlocklistCheck {
            passed: issues.is_empty(),
            issues,
        }
    }
}

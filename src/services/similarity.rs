//! Normalized string similarity.
//!
//! Shared kernel for the quality gate's anti-copycat rule. Character-level
//! edit distance, case-folded, normalized by the longer input.

use strsim::levenshtein;

/// Computes a similarity score between two strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityEngine;

impl SimilarityEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score the similarity of `a` and `b` in `[0.0, 1.0]`.
    ///
    /// Both inputs are case-folded, the Levenshtein distance is computed over
    /// chars, and the result is normalized as
    /// `(len_longer - distance) / len_longer`. Two empty strings score `1.0`.
    pub fn score(&self, a: &str, b: &str) -> f64 {
        let a = a.to_lowercase();
        let b = b.to_lowercase();

        let longer = a.chars().count().max(b.chars().count());
        if longer == 0 {
            return 1.0;
        }

        let distance = levenshtein(&a, &b);
        (longer - distance) as f64 / longer as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_one() {
        let engine = SimilarityEngine::new();
        assert_eq!(engine.score("launch plan", "launch plan"), 1.0);
    }

    #[test]
    fn test_both_empty_score_one() {
        let engine = SimilarityEngine::new();
        assert_eq!(engine.score("", ""), 1.0);
    }

    #[test]
    fn test_empty_versus_non_empty_scores_zero() {
        let engine = SimilarityEngine::new();
        assert_eq!(engine.score("", "campaign"), 0.0);
        assert_eq!(engine.score("campaign", ""), 0.0);
    }

    #[test]
    fn test_case_folded_before_comparison() {
        let engine = SimilarityEngine::new();
        assert_eq!(engine.score("Brand Launch", "brand launch"), 1.0);
    }

    #[test]
    fn test_symmetry() {
        let engine = SimilarityEngine::new();
        assert_eq!(
            engine.score("grow the newsletter", "grow the waitlist"),
            engine.score("grow the waitlist", "grow the newsletter")
        );
    }

    #[test]
    fn test_one_word_difference_scores_high() {
        let engine = SimilarityEngine::new();
        let score = engine.score(
            "our q3 campaign targets indie founders on linkedin",
            "our q4 campaign targets indie founders on linkedin",
        );
        assert!(score > 0.8, "expected near-duplicate score, got {score}");
    }

    #[test]
    fn test_unrelated_strings_score_low() {
        let engine = SimilarityEngine::new();
        let score = engine.score("swot analysis of the cdn market", "neon moodboard draft");
        assert!(score < 0.5, "expected low score, got {score}");
    }

    #[test]
    fn test_unicode_input_does_not_panic() {
        let engine = SimilarityEngine::new();
        let score = engine.score("café ☕ noir", "cafe noir");
        assert!((0.0..=1.0).contains(&score));
    }
}

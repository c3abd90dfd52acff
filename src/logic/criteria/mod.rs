pub mod crop;
pub mod engine;
pub mod fertilizer;
pub mod irrigation;
pub mod soil;
pub mod weather;

pub use engine::{CriterionScore, ScoreCard, ScoringEngine};

use crate::models::FarmInput;

/// One of the independent partial scores that make up a plan score
pub trait Criterion: Send + Sync {
    /// Unique identifier for this criterion
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Upper bound of the criterion's band. The lower bound is always 0.
    fn band_max(&self) -> f64;

    /// Sum of the criterion's terms, before clamping
    fn raw_score(&self, input: &FarmInput) -> f64;

    /// Raw score clamped to `[0, band_max]`
    fn score(&self, input: &FarmInput) -> f64 {
        clamp_to_band(self.raw_score(input), self.band_max())
    }
}

/// `max(0, min(score, max))`. Applied to a criterion's summed terms, so a
/// negative term can cancel out positive ones before the clamp.
pub fn clamp_to_band(score: f64, max: f64) -> f64 {
    score.min(max).max(0.0)
}

/// Ordered keyword classifier over free text.
///
/// The text is lower-cased and checked for each needle in turn; the first
/// needle contained in the text decides the bonus. Text matching nothing
/// gets the fallback.
#[derive(Debug, Clone, Copy)]
pub struct KeywordBonus {
    matches: &'static [(&'static str, f64)],
    fallback: f64,
}

impl KeywordBonus {
    /// Needles must be lower-case.
    pub const fn new(matches: &'static [(&'static str, f64)], fallback: f64) -> Self {
        Self { matches, fallback }
    }

    pub fn bonus(&self, text: &str) -> f64 {
        let text = text.to_lowercase();
        self.matches
            .iter()
            .find(|(needle, _)| text.contains(needle))
            .map(|(_, bonus)| *bonus)
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIFIER: KeywordBonus = KeywordBonus::new(&[("alpha", 3.0), ("beta", 2.0)], 1.0);

    #[test]
    fn clamp_to_band_bounds() {
        assert_eq!(clamp_to_band(-22.5, 50.0), 0.0);
        assert_eq!(clamp_to_band(28.0, 50.0), 28.0);
        assert_eq!(clamp_to_band(75.0, 50.0), 50.0);
        assert_eq!(clamp_to_band(0.0, 20.0), 0.0);
    }

    #[test]
    fn keyword_bonus_is_case_insensitive_substring() {
        assert_eq!(CLASSIFIER.bonus("ALPHA"), 3.0);
        assert_eq!(CLASSIFIER.bonus("pre-Beta release"), 2.0);
    }

    #[test]
    fn keyword_bonus_first_match_wins() {
        assert_eq!(CLASSIFIER.bonus("beta then alpha"), 3.0);
    }

    #[test]
    fn keyword_bonus_falls_back() {
        assert_eq!(CLASSIFIER.bonus("gamma"), 1.0);
        assert_eq!(CLASSIFIER.bonus(""), 1.0);
    }
}

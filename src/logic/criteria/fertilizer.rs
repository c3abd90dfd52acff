use super::{Criterion, KeywordBonus};
use crate::models::FarmInput;

/// Fertilizer practice score, band [0, 20]
///
/// Terms:
/// - Type bonus: organic 10, anything else 5
/// - Amount: `min(10 - amount, 5)`; heavy applications go negative
/// - Frequency: `min(frequency, 5)`
///
/// The amount term is not floored on its own. A large enough amount
/// outweighs the type and frequency terms and only the band clamp keeps the
/// score at zero.
pub struct FertilizerCriterion;

const TYPE_BONUS: KeywordBonus = KeywordBonus::new(&[("organic", 10.0)], 5.0);

impl Criterion for FertilizerCriterion {
    fn id(&self) -> &'static str {
        "fertilizer"
    }

    fn name(&self) -> &'static str {
        "Fertilizer Practice"
    }

    fn band_max(&self) -> f64 {
        20.0
    }

    fn raw_score(&self, input: &FarmInput) -> f64 {
        let fertilizer = &input.fertilizer;
        TYPE_BONUS.bonus(&fertilizer.fertilizer_type)
            + (10.0 - fertilizer.amount).min(5.0)
            + fertilizer.frequency.min(5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_fertilizer(fertilizer_type: &str, amount: f64, frequency: f64) -> FarmInput {
        let mut input = FarmInput::default();
        input.fertilizer.fertilizer_type = fertilizer_type.into();
        input.fertilizer.amount = amount;
        input.fertilizer.frequency = frequency;
        input
    }

    #[test]
    fn organic_compost() {
        let input = with_fertilizer("Organic compost", 2.0, 2.0);
        assert_eq!(FertilizerCriterion.score(&input), 17.0);
    }

    #[test]
    fn synthetic_fertilizer_gets_base_bonus() {
        let input = with_fertilizer("NPK 10-10-10", 1.0, 1.0);
        assert_eq!(FertilizerCriterion.score(&input), 11.0);
    }

    #[test]
    fn heavy_application_goes_negative_before_clamp() {
        // 5 + (10 - 30) + 0 = -15
        let input = with_fertilizer("Urea", 30.0, 0.0);
        assert_eq!(FertilizerCriterion.raw_score(&input), -15.0);
        assert_eq!(FertilizerCriterion.score(&input), 0.0);
    }

    #[test]
    fn moderate_overuse_reduces_but_keeps_score() {
        // 10 + (10 - 8) + 5 = 17
        let input = with_fertilizer("organic manure", 8.0, 9.0);
        assert_eq!(FertilizerCriterion.score(&input), 17.0);
    }
}

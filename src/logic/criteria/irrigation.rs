use super::{Criterion, KeywordBonus};
use crate::models::FarmInput;

/// Irrigation practice score, band [0, 20]
///
/// Terms:
/// - Method bonus: drip 10, sprinkler 7, anything else 5
/// - Frequency: `min(frequency, 5)`
/// - Amount: `min(amount * 2, 5)`
///
/// Unrecognized methods ("Manual bucket") get the fallback bonus rather
/// than an error.
pub struct IrrigationCriterion;

const METHOD_BONUS: KeywordBonus = KeywordBonus::new(&[("drip", 10.0), ("sprinkler", 7.0)], 5.0);

impl Criterion for IrrigationCriterion {
    fn id(&self) -> &'static str {
        "irrigation"
    }

    fn name(&self) -> &'static str {
        "Irrigation Practice"
    }

    fn band_max(&self) -> f64 {
        20.0
    }

    fn raw_score(&self, input: &FarmInput) -> f64 {
        let irrigation = &input.irrigation;
        METHOD_BONUS.bonus(&irrigation.method)
            + irrigation.frequency.min(5.0)
            + (irrigation.amount * 2.0).min(5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_irrigation(method: &str, frequency: f64, amount: f64) -> FarmInput {
        let mut input = FarmInput::default();
        input.irrigation.method = method.into();
        input.irrigation.frequency = frequency;
        input.irrigation.amount = amount;
        input
    }

    #[test]
    fn drip_irrigation() {
        let input = with_irrigation("Drip irrigation", 3.0, 1.5);
        assert_eq!(IrrigationCriterion.score(&input), 16.0);
    }

    #[test]
    fn sprinkler_matches_case_insensitively() {
        let input = with_irrigation("SPRINKLER irrigation", 0.0, 0.0);
        assert_eq!(IrrigationCriterion.score(&input), 7.0);
    }

    #[test]
    fn unknown_method_uses_fallback() {
        let input = with_irrigation("Manual bucket", 0.0, 0.0);
        assert_eq!(IrrigationCriterion.score(&input), 5.0);
    }

    #[test]
    fn frequency_and_amount_are_capped() {
        let input = with_irrigation("Flood irrigation", 7.0, 3.0);
        assert_eq!(IrrigationCriterion.score(&input), 15.0);
    }

    #[test]
    fn negative_amounts_can_zero_the_score() {
        let input = with_irrigation("Furrow irrigation", -2.0, -10.0);
        // 5 - 2 - 20 = -17
        assert_eq!(IrrigationCriterion.raw_score(&input), -17.0);
        assert_eq!(IrrigationCriterion.score(&input), 0.0);
    }
}

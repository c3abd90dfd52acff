use super::{Criterion, KeywordBonus};
use crate::models::FarmInput;

/// Crop state score, band [0, 20]
///
/// Terms:
/// - Health: excellent 10, good 8, fair 5, anything else 2
/// - Growth stage: vegetative 5, flowering 7, fruiting 8, anything else 3
pub struct CropCriterion;

const HEALTH_BONUS: KeywordBonus =
    KeywordBonus::new(&[("excellent", 10.0), ("good", 8.0), ("fair", 5.0)], 2.0);

const STAGE_BONUS: KeywordBonus = KeywordBonus::new(
    &[("vegetative", 5.0), ("flowering", 7.0), ("fruiting", 8.0)],
    3.0,
);

impl Criterion for CropCriterion {
    fn id(&self) -> &'static str {
        "crop"
    }

    fn name(&self) -> &'static str {
        "Crop State"
    }

    fn band_max(&self) -> f64 {
        20.0
    }

    fn raw_score(&self, input: &FarmInput) -> f64 {
        let crop = &input.crop;
        HEALTH_BONUS.bonus(&crop.health_status) + STAGE_BONUS.bonus(&crop.growth_stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_crop(health_status: &str, growth_stage: &str) -> FarmInput {
        let mut input = FarmInput::default();
        input.crop.health_status = health_status.into();
        input.crop.growth_stage = growth_stage.into();
        input
    }

    #[test]
    fn good_vegetative() {
        assert_eq!(CropCriterion.score(&with_crop("Good", "Vegetative")), 13.0);
    }

    #[test]
    fn excellent_fruiting_is_best() {
        assert_eq!(CropCriterion.score(&with_crop("Excellent", "Fruiting")), 18.0);
    }

    #[test]
    fn unlisted_values_use_fallbacks() {
        assert_eq!(CropCriterion.score(&with_crop("Diseased", "Maturity")), 5.0);
        assert_eq!(CropCriterion.score(&with_crop("", "")), 5.0);
    }

    #[test]
    fn substring_matching_applies_to_free_text() {
        // "not good" still contains "good"
        assert_eq!(CropCriterion.score(&with_crop("not good", "early FLOWERING")), 15.0);
    }
}

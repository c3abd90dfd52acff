use super::Criterion;
use crate::models::FarmInput;

/// Soil condition score, band [0, 50]
///
/// Terms:
/// - pH distance penalty: `10 - |6.5 - pH| * 5` (neutral-ish soil is ideal)
/// - Organic matter: `organic_matter * 2`
/// - Macronutrients: `2 * (N + P + K)`
///
/// A strongly acidic or alkaline reading can push the pH term far below
/// zero and wipe out the nutrient terms before the band clamp.
pub struct SoilCriterion;

const OPTIMAL_PH: f64 = 6.5;

impl Criterion for SoilCriterion {
    fn id(&self) -> &'static str {
        "soil"
    }

    fn name(&self) -> &'static str {
        "Soil Condition"
    }

    fn band_max(&self) -> f64 {
        50.0
    }

    fn raw_score(&self, input: &FarmInput) -> f64 {
        let soil = &input.soil;
        let ph_term = 10.0 - (OPTIMAL_PH - soil.ph).abs() * 5.0;
        let organic_term = soil.organic_matter * 2.0;
        let nutrient_term = 2.0 * (soil.nitrogen + soil.phosphorus + soil.potassium);

        ph_term + organic_term + nutrient_term
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_soil(ph: f64, organic_matter: f64, npk: f64) -> FarmInput {
        let mut input = FarmInput::default();
        input.soil.ph = ph;
        input.soil.organic_matter = organic_matter;
        input.soil.nitrogen = npk;
        input.soil.phosphorus = npk;
        input.soil.potassium = npk;
        input
    }

    #[test]
    fn optimal_ph_with_moderate_nutrients() {
        let input = with_soil(6.5, 3.0, 2.0);
        assert_eq!(SoilCriterion.raw_score(&input), 28.0);
        assert_eq!(SoilCriterion.score(&input), 28.0);
    }

    #[test]
    fn extreme_acidity_clamps_to_zero() {
        let input = with_soil(0.0, 0.0, 0.0);
        assert_eq!(SoilCriterion.raw_score(&input), -22.5);
        assert_eq!(SoilCriterion.score(&input), 0.0);
    }

    #[test]
    fn ph_penalty_suppresses_nutrients_before_clamp() {
        // -22.5 + 4 + 12 = -6.5, still clamped to zero
        let input = with_soil(0.0, 2.0, 2.0);
        assert_eq!(SoilCriterion.score(&input), 0.0);
    }

    #[test]
    fn rich_soil_caps_at_band_max() {
        let input = with_soil(6.5, 10.0, 5.0);
        // 10 + 20 + 30 = 60
        assert_eq!(SoilCriterion.raw_score(&input), 60.0);
        assert_eq!(SoilCriterion.score(&input), 50.0);
    }

    #[test]
    fn out_of_range_ph_is_accepted() {
        let input = with_soil(20.0, 3.0, 2.0);
        assert_eq!(SoilCriterion.score(&input), 0.0);
    }
}

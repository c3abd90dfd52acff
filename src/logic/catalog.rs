use crate::error::Result;
use crate::models::{
    CropRecommendation, FarmingPlan, FertilizerStep, IrrigationStep, PestRisk, RiskLevel,
};
use std::path::Path;
use std::sync::Arc;

/// Read-only, indexed set of candidate plans.
///
/// Cloning is cheap and shares the underlying plans, so one catalog loaded at
/// startup can be handed to any number of selectors and threads.
#[derive(Debug, Clone)]
pub struct Catalog {
    plans: Arc<[FarmingPlan]>,
}

impl Catalog {
    pub fn new(plans: Vec<FarmingPlan>) -> Self {
        Self {
            plans: plans.into(),
        }
    }

    /// The pre-authored plans shipped with the binary
    pub fn builtin() -> Self {
        Self::new(vec![temperate_grain_plan(), paddy_plan()])
    }

    /// Load a list of plans from disk. `.json` files are parsed as JSON,
    /// everything else as YAML.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let plans: Vec<FarmingPlan> = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        tracing::debug!("Loaded {} plans from {:?}", plans.len(), path);
        Ok(Self::new(plans))
    }

    /// Configured catalog file if given, built-in plans otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_path(p),
            None => {
                tracing::debug!("Using built-in plan catalog");
                Ok(Self::builtin())
            }
        }
    }

    pub fn plans(&self) -> &[FarmingPlan] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FarmingPlan> {
        self.plans.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FarmingPlan> {
        self.plans.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn crop(
    crop_name: &str,
    variety: &str,
    suitability_score: f64,
    expected_yield: f64,
    rotation_advice: &str,
) -> CropRecommendation {
    CropRecommendation {
        crop_name: crop_name.into(),
        variety: variety.into(),
        suitability_score,
        expected_yield,
        rotation_advice: rotation_advice.into(),
    }
}

fn watering(week: u32, frequency: f64, amount: f64, method: &str) -> IrrigationStep {
    IrrigationStep {
        week,
        frequency,
        amount,
        method: method.into(),
    }
}

fn feeding(week: u32, fertilizer_type: &str, amount: f64, application_method: &str) -> FertilizerStep {
    FertilizerStep {
        week,
        fertilizer_type: fertilizer_type.into(),
        amount,
        application_method: application_method.into(),
    }
}

fn pest(
    pest_type: &str,
    risk_level: RiskLevel,
    prevention_method: &str,
    organic_solution: &str,
    chemical_solution: Option<&str>,
) -> PestRisk {
    PestRisk {
        pest_type: pest_type.into(),
        risk_level,
        prevention_method: prevention_method.into(),
        organic_solution: organic_solution.into(),
        chemical_solution: chemical_solution.map(Into::into),
    }
}

/// Wheat / corn / soybean rotation under drip irrigation
fn temperate_grain_plan() -> FarmingPlan {
    FarmingPlan {
        id: "plan1".into(),
        crop_recommendations: vec![
            crop(
                "Wheat",
                "Hard Red Winter",
                92.0,
                4.5,
                "Follow with legumes to restore nitrogen levels",
            ),
            crop(
                "Corn",
                "Sweet Corn",
                85.0,
                9.2,
                "Rotate with soybeans next season",
            ),
            crop(
                "Soybeans",
                "Group 3 Maturity",
                78.0,
                3.2,
                "Good nitrogen fixer for following with corn",
            ),
        ],
        irrigation_schedule: vec![
            watering(1, 3.0, 1.5, "Drip irrigation"),
            watering(2, 2.0, 2.0, "Drip irrigation"),
            watering(3, 3.0, 1.5, "Drip irrigation"),
        ],
        fertilizer_schedule: vec![
            feeding(1, "Organic compost", 2.5, "Broadcast"),
            feeding(3, "NPK 10-10-10", 1.2, "Side dressing"),
            feeding(6, "Foliar spray", 0.5, "Spray"),
        ],
        pest_management: vec![
            pest(
                "Aphids",
                RiskLevel::Medium,
                "Companion planting with marigolds",
                "Neem oil spray",
                Some("Insecticidal soap"),
            ),
            pest(
                "Fungal diseases",
                RiskLevel::High,
                "Proper spacing and air circulation",
                "Copper fungicide",
                Some("Propiconazole"),
            ),
        ],
        expected_yield: 4.2,
        sustainability_score: 85.0,
    }
}

/// Rice / cotton under flood irrigation
fn paddy_plan() -> FarmingPlan {
    FarmingPlan {
        id: "plan2".into(),
        crop_recommendations: vec![
            crop(
                "Rice",
                "Basmati",
                95.0,
                5.8,
                "Follow with green manure crop",
            ),
            crop(
                "Cotton",
                "Upland",
                82.0,
                2.1,
                "Rotate with legumes to restore soil health",
            ),
        ],
        irrigation_schedule: vec![
            watering(1, 7.0, 3.0, "Flood irrigation"),
            watering(2, 7.0, 3.0, "Flood irrigation"),
            watering(3, 7.0, 2.5, "Flood irrigation"),
        ],
        fertilizer_schedule: vec![
            feeding(1, "Urea", 1.8, "Broadcast"),
            feeding(4, "NPK 15-15-15", 1.5, "Broadcast"),
        ],
        pest_management: vec![pest(
            "Rice stem borer",
            RiskLevel::High,
            "Early planting",
            "Trichogramma release",
            Some("Carbofuran"),
        )],
        expected_yield: 5.5,
        sustainability_score: 72.0,
    }
}

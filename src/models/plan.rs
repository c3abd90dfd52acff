use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" | "med" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            RiskLevel::Low => "→",
            RiskLevel::Medium => "⚠",
            RiskLevel::High => "!",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendation {
    pub crop_name: String,
    pub variety: String,
    /// 0-100
    pub suitability_score: f64,
    /// Tons per hectare
    pub expected_yield: f64,
    pub rotation_advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationStep {
    pub week: u32,
    pub frequency: f64,
    pub amount: f64,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FertilizerStep {
    pub week: u32,
    #[serde(rename = "type")]
    pub fertilizer_type: String,
    pub amount: f64,
    pub application_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PestRisk {
    pub pest_type: String,
    pub risk_level: RiskLevel,
    pub prevention_method: String,
    pub organic_solution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemical_solution: Option<String>,
}

/// A complete farming plan.
///
/// Catalog entries and generated plans share this type. A generated plan is
/// a copy of a catalog entry whose `id` has been replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmingPlan {
    pub id: String,
    pub crop_recommendations: Vec<CropRecommendation>,
    pub irrigation_schedule: Vec<IrrigationStep>,
    pub fertilizer_schedule: Vec<FertilizerStep>,
    #[serde(rename = "pestManagementPlan")]
    pub pest_management: Vec<PestRisk>,
    /// Tons per hectare
    pub expected_yield: f64,
    /// 0-100
    pub sustainability_score: f64,
}

/// Display metrics derived from a plan's overall sustainability score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityBreakdown {
    pub water_efficiency: f64,
    pub soil_health: f64,
    pub biodiversity: f64,
    pub carbon_footprint: f64,
    pub pest_management: f64,
}

impl SustainabilityBreakdown {
    pub fn labelled(&self) -> [(&'static str, f64); 5] {
        [
            ("Water Efficiency", self.water_efficiency),
            ("Soil Health", self.soil_health),
            ("Biodiversity", self.biodiversity),
            ("Carbon Footprint", self.carbon_footprint),
            ("Pest Management", self.pest_management),
        ]
    }
}

impl FarmingPlan {
    /// Same plan, different identity. Every other field is carried over as-is.
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self.clone()
        }
    }

    /// Values are not clamped, so soil health and pest management can
    /// exceed 100 for highly sustainable plans.
    pub fn sustainability_breakdown(&self) -> SustainabilityBreakdown {
        let score = self.sustainability_score;
        SustainabilityBreakdown {
            water_efficiency: score * 0.9,
            soil_health: score * 1.1,
            biodiversity: score * 0.8,
            carbon_footprint: score * 0.95,
            pest_management: score * 1.05,
        }
    }

    pub fn crop_names(&self) -> Vec<&str> {
        self.crop_recommendations
            .iter()
            .map(|c| c.crop_name.as_str())
            .collect()
    }

    /// Highest pest risk level in the plan, if any pests are listed.
    pub fn peak_risk(&self) -> Option<RiskLevel> {
        self.pest_management.iter().map(|p| p.risk_level).max()
    }
}

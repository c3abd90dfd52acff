use serde::{Deserialize, Serialize};

/// Soil analysis. pH is expected in 0-14, organic matter in percent,
/// and N/P/K on a 0-5 scale, but none of these ranges are enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilData {
    #[serde(rename = "type")]
    pub soil_type: String,
    pub ph: f64,
    pub organic_matter: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

/// Current weather. Temperature in °C, humidity in percent,
/// rainfall in cm/week and sunlight in hours/day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub sunlight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationData {
    pub method: String,
    /// Waterings per week
    pub frequency: f64,
    /// Inches per watering
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FertilizerData {
    #[serde(rename = "type")]
    pub fertilizer_type: String,
    /// Tons per hectare
    pub amount: f64,
    /// Applications per season
    pub frequency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropData {
    pub name: String,
    pub variety: String,
    pub growth_stage: String,
    pub health_status: String,
}

/// Everything the farmer tells us about current conditions.
///
/// Free-text fields (methods, types, stages, statuses) are open strings.
/// Values from the vocabulary lists are what the form offers, but anything
/// else is accepted and simply scores lower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmInput {
    pub soil: SoilData,
    pub weather: WeatherData,
    pub irrigation: IrrigationData,
    pub fertilizer: FertilizerData,
    pub crop: CropData,
}

impl FarmInput {
    pub fn from_json(content: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> crate::error::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

impl Default for SoilData {
    fn default() -> Self {
        Self {
            soil_type: "Loamy".into(),
            ph: 6.5,
            organic_matter: 3.0,
            nitrogen: 2.0,
            phosphorus: 2.0,
            potassium: 2.0,
        }
    }
}

impl Default for WeatherData {
    fn default() -> Self {
        Self {
            temperature: 22.0,
            humidity: 60.0,
            rainfall: 2.5,
            sunlight: 6.0,
        }
    }
}

impl Default for IrrigationData {
    fn default() -> Self {
        Self {
            method: "Drip irrigation".into(),
            frequency: 3.0,
            amount: 1.5,
        }
    }
}

impl Default for FertilizerData {
    fn default() -> Self {
        Self {
            fertilizer_type: "Organic compost".into(),
            amount: 2.0,
            frequency: 2.0,
        }
    }
}

impl Default for CropData {
    fn default() -> Self {
        Self {
            name: "Wheat".into(),
            variety: "Hard Red Winter".into(),
            growth_stage: "Vegetative".into(),
            health_status: "Good".into(),
        }
    }
}

impl Default for FarmInput {
    fn default() -> Self {
        Self {
            soil: SoilData::default(),
            weather: WeatherData::default(),
            irrigation: IrrigationData::default(),
            fertilizer: FertilizerData::default(),
            crop: CropData::default(),
        }
    }
}

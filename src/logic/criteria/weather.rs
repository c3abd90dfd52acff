use super::Criterion;
use crate::models::FarmInput;

/// Weather suitability score, band [0, 40]
///
/// Terms:
/// - Temperature: `10 - |20 - temp_c| * 0.5` (optimum around 15-25°C)
/// - Humidity: `10 - |55 - humidity| * 0.2` (optimum around 40-70%)
/// - Rainfall: `min(rainfall_cm * 2, 10)`
/// - Sunlight: `min(sunlight_hours * 2, 10)`
pub struct WeatherCriterion;

const OPTIMAL_TEMP_C: f64 = 20.0;
const OPTIMAL_HUMIDITY: f64 = 55.0;

impl Criterion for WeatherCriterion {
    fn id(&self) -> &'static str {
        "weather"
    }

    fn name(&self) -> &'static str {
        "Weather Suitability"
    }

    fn band_max(&self) -> f64 {
        40.0
    }

    fn raw_score(&self, input: &FarmInput) -> f64 {
        let weather = &input.weather;
        let temp_term = 10.0 - (OPTIMAL_TEMP_C - weather.temperature).abs() * 0.5;
        let humidity_term = 10.0 - (OPTIMAL_HUMIDITY - weather.humidity).abs() * 0.2;
        let rain_term = (weather.rainfall * 2.0).min(10.0);
        let sun_term = (weather.sunlight * 2.0).min(10.0);

        temp_term + humidity_term + rain_term + sun_term
    }
}

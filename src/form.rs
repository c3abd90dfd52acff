//! Interactive farm input form.

use crate::error::{FarmPlanError, Result};
use crate::models::vocabulary::{
    crop_names, position_of, varieties_for, FERTILIZER_TYPES, GROWTH_STAGES, HEALTH_STATUSES,
    IRRIGATION_METHODS, SOIL_TYPES,
};
use crate::models::{CropData, FarmInput, FertilizerData, IrrigationData, SoilData, WeatherData};
use dialoguer::{Input, Select};

fn prompt_err(e: dialoguer::Error) -> FarmPlanError {
    FarmPlanError::Prompt(e.to_string())
}

fn choose(prompt: &str, options: &[&str], current: &str) -> Result<String> {
    let idx = Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(position_of(options, current).unwrap_or(0))
        .interact()
        .map_err(prompt_err)?;
    Ok(options[idx].to_string())
}

fn number(prompt: &str, current: f64) -> Result<f64> {
    Input::<f64>::new()
        .with_prompt(prompt)
        .default(current)
        .interact_text()
        .map_err(prompt_err)
}

/// Prompt for every field, starting from `defaults`.
pub fn prompt_farm_input(defaults: &FarmInput) -> Result<FarmInput> {
    println!();
    println!("Soil Analysis");
    let soil = SoilData {
        soil_type: choose("  Soil type", SOIL_TYPES, &defaults.soil.soil_type)?,
        ph: number("  pH (0-14)", defaults.soil.ph)?,
        organic_matter: number("  Organic matter (%)", defaults.soil.organic_matter)?,
        nitrogen: number("  Nitrogen (0-5)", defaults.soil.nitrogen)?,
        phosphorus: number("  Phosphorus (0-5)", defaults.soil.phosphorus)?,
        potassium: number("  Potassium (0-5)", defaults.soil.potassium)?,
    };

    println!();
    println!("Weather Conditions");
    let weather = WeatherData {
        temperature: number("  Temperature (°C)", defaults.weather.temperature)?,
        humidity: number("  Humidity (%)", defaults.weather.humidity)?,
        rainfall: number("  Rainfall (cm/week)", defaults.weather.rainfall)?,
        sunlight: number("  Sunlight (hours/day)", defaults.weather.sunlight)?,
    };

    println!();
    println!("Irrigation");
    let irrigation = IrrigationData {
        method: choose("  Method", IRRIGATION_METHODS, &defaults.irrigation.method)?,
        frequency: number("  Frequency (times/week)", defaults.irrigation.frequency)?,
        amount: number("  Amount (inches)", defaults.irrigation.amount)?,
    };

    println!();
    println!("Fertilizer");
    let fertilizer = FertilizerData {
        fertilizer_type: choose("  Type", FERTILIZER_TYPES, &defaults.fertilizer.fertilizer_type)?,
        amount: number("  Amount (tons/hectare)", defaults.fertilizer.amount)?,
        frequency: number("  Frequency (times/season)", defaults.fertilizer.frequency)?,
    };

    println!();
    println!("Crop Details");
    let name = choose("  Crop", &crop_names(), &defaults.crop.name)?;
    // Varieties depend on the chosen crop
    let varieties = varieties_for(&name);
    let variety = if varieties.is_empty() {
        Input::<String>::new()
            .with_prompt("  Variety")
            .default(defaults.crop.variety.clone())
            .interact_text()
            .map_err(prompt_err)?
    } else {
        choose("  Variety", varieties, &defaults.crop.variety)?
    };
    let crop = CropData {
        name,
        variety,
        growth_stage: choose("  Growth stage", GROWTH_STAGES, &defaults.crop.growth_stage)?,
        health_status: choose("  Health status", HEALTH_STATUSES, &defaults.crop.health_status)?,
    };
    println!();

    Ok(FarmInput {
        soil,
        weather,
        irrigation,
        fertilizer,
        crop,
    })
}

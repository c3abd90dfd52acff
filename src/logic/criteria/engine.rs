use super::{
    crop::CropCriterion, fertilizer::FertilizerCriterion, irrigation::IrrigationCriterion,
    soil::SoilCriterion, weather::WeatherCriterion, Criterion,
};
use crate::models::FarmInput;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionScore {
    pub id: &'static str,
    pub name: &'static str,
    pub score: f64,
    pub max: f64,
}

/// Per-criterion scores for one input, in evaluation order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    pub scores: Vec<CriterionScore>,
}

impl ScoreCard {
    /// Sum of all criterion scores, added in evaluation order
    pub fn total(&self) -> f64 {
        self.scores.iter().map(|s| s.score).sum()
    }

    pub fn max_total(&self) -> f64 {
        self.scores.iter().map(|s| s.max).sum()
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.scores.iter().find(|s| s.id == id).map(|s| s.score)
    }
}

pub struct ScoringEngine {
    criteria: Vec<Box<dyn Criterion>>,
}

impl ScoringEngine {
    pub fn new() -> Self {
        let criteria: Vec<Box<dyn Criterion>> = vec![
            Box::new(SoilCriterion),
            Box::new(WeatherCriterion),
            Box::new(IrrigationCriterion),
            Box::new(FertilizerCriterion),
            Box::new(CropCriterion),
        ];

        Self { criteria }
    }

    pub fn evaluate(&self, input: &FarmInput) -> ScoreCard {
        let scores = self
            .criteria
            .iter()
            .map(|c| CriterionScore {
                id: c.id(),
                name: c.name(),
                score: c.score(input),
                max: c.band_max(),
            })
            .collect();

        ScoreCard { scores }
    }

    pub fn evaluate_criterion(&self, criterion_id: &str, input: &FarmInput) -> Option<f64> {
        self.criteria
            .iter()
            .find(|c| c.id() == criterion_id)
            .map(|c| c.score(input))
    }

    pub fn list_criteria(&self) -> Vec<(&'static str, &'static str)> {
        self.criteria.iter().map(|c| (c.id(), c.name())).collect()
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

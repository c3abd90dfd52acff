use super::catalog::Catalog;
use super::criteria::{ScoreCard, ScoringEngine};
use crate::error::{FarmPlanError, Result};
use crate::models::{FarmInput, FarmingPlan};
use serde::Serialize;
use uuid::Uuid;

/// Map a total score onto a catalog position.
///
/// The score is truncated toward zero and reduced with a non-negative
/// remainder, so every finite score lands in `[0, len)`. Returns `None` for
/// an empty catalog.
pub fn plan_index(total_score: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    // Saturating cast: NaN maps to 0, infinities to the i64 bounds
    let truncated = total_score.trunc() as i64;
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    usize::try_from(truncated.rem_euclid(len)).ok()
}

/// Fresh identifier for a generated plan. Uniqueness is the only guarantee.
pub fn generate_plan_id() -> String {
    format!("plan-{}", Uuid::new_v4())
}

/// Score an input and pick the matching catalog entry.
///
/// Fails only when the catalog is empty. Any numeric input is accepted;
/// odd values just score low.
pub fn select_plan(input: &FarmInput, catalog: &[FarmingPlan]) -> Result<FarmingPlan> {
    let engine = ScoringEngine::new();
    let (_, index) = score_and_index(&engine, input, catalog.len())?;
    Ok(catalog[index].with_id(generate_plan_id()))
}

fn score_and_index(
    engine: &ScoringEngine,
    input: &FarmInput,
    len: usize,
) -> Result<(ScoreCard, usize)> {
    let card = engine.evaluate(input);
    let total = card.total();
    let index = plan_index(total, len)
        .ok_or_else(|| FarmPlanError::InvalidInput("plan catalog is empty".into()))?;

    tracing::debug!(
        soil = card.get("soil"),
        weather = card.get("weather"),
        irrigation = card.get("irrigation"),
        fertilizer = card.get("fertilizer"),
        crop = card.get("crop"),
        total,
        index,
        "Scored farm input"
    );

    Ok((card, index))
}

/// Score breakdown and chosen catalog entry, without generating a plan
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub scores: ScoreCard,
    pub total: f64,
    pub index: usize,
    pub catalog_plan_id: String,
}

/// Selector bound to one catalog
pub struct PlanSelector {
    catalog: Catalog,
    engine: ScoringEngine,
}

impl PlanSelector {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            engine: ScoringEngine::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn select(&self, input: &FarmInput) -> Result<FarmingPlan> {
        let (_, index) = score_and_index(&self.engine, input, self.catalog.len())?;
        let plan = self.catalog.plans()[index].with_id(generate_plan_id());
        tracing::info!("Selected catalog plan #{} as {}", index, plan.id);
        Ok(plan)
    }

    pub fn assess(&self, input: &FarmInput) -> Result<Assessment> {
        let (scores, index) = score_and_index(&self.engine, input, self.catalog.len())?;
        Ok(Assessment {
            total: scores.total(),
            scores,
            index,
            catalog_plan_id: self.catalog.plans()[index].id.clone(),
        })
    }
}

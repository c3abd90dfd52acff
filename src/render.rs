//! Text output for plans, score cards and catalogs.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::logic::{Assessment, Catalog};
use crate::models::FarmingPlan;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header);
    table
}

pub fn render_plan(plan: &FarmingPlan, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(plan)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(plan)?),
        OutputFormat::Table => Ok(plan_tables(plan)),
    }
}

fn plan_tables(plan: &FarmingPlan) -> String {
    let mut sections = vec![format!(
        "Farming plan {}\nExpected yield: {} tons/hectare | Sustainability score: {}/100",
        plan.id, plan.expected_yield, plan.sustainability_score
    )];

    let mut crops = new_table(vec![
        "Crop",
        "Variety",
        "Suitability",
        "Expected Yield",
        "Rotation Advice",
    ]);
    for c in &plan.crop_recommendations {
        crops.add_row(vec![
            c.crop_name.clone(),
            c.variety.clone(),
            format!("{}%", c.suitability_score),
            format!("{} tons/ha", c.expected_yield),
            c.rotation_advice.clone(),
        ]);
    }
    sections.push(format!("Crop Recommendations\n{}", crops));

    let mut irrigation = new_table(vec!["Week", "Method", "Frequency", "Amount"]);
    for step in &plan.irrigation_schedule {
        irrigation.add_row(vec![
            format!("Week {}", step.week),
            step.method.clone(),
            format!("{} times/week", step.frequency),
            format!("{} inches", step.amount),
        ]);
    }
    sections.push(format!("Irrigation Schedule\n{}", irrigation));

    let mut fertilizer = new_table(vec!["Week", "Type", "Amount", "Application"]);
    for step in &plan.fertilizer_schedule {
        fertilizer.add_row(vec![
            format!("Week {}", step.week),
            step.fertilizer_type.clone(),
            format!("{} tons/ha", step.amount),
            step.application_method.clone(),
        ]);
    }
    sections.push(format!("Fertilizer Schedule\n{}", fertilizer));

    let mut pests = new_table(vec![
        "Pest/Disease",
        "Risk",
        "Prevention",
        "Organic Solution",
        "Chemical Solution",
    ]);
    for p in &plan.pest_management {
        pests.add_row(vec![
            p.pest_type.clone(),
            format!("{} {}", p.risk_level.symbol(), p.risk_level),
            p.prevention_method.clone(),
            p.organic_solution.clone(),
            p.chemical_solution.clone().unwrap_or_else(|| "-".into()),
        ]);
    }
    sections.push(format!("Pest Management\n{}", pests));

    let mut sustainability = new_table(vec!["Metric", "Score"]);
    for (label, value) in plan.sustainability_breakdown().labelled() {
        sustainability.add_row(vec![label.to_string(), format!("{:.1}", value)]);
    }
    sections.push(format!("Sustainability Metrics\n{}", sustainability));

    sections.join("\n\n")
}

pub fn render_assessment(assessment: &Assessment, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(assessment)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(assessment)?),
        OutputFormat::Table => {
            let mut table = new_table(vec!["Criterion", "Score", "Max"]);
            for s in &assessment.scores.scores {
                table.add_row(vec![
                    s.name.to_string(),
                    format!("{:.1}", s.score),
                    format!("{}", s.max),
                ]);
            }
            table.add_row(vec![
                "Total".to_string(),
                format!("{:.1}", assessment.total),
                format!("{}", assessment.scores.max_total()),
            ]);
            Ok(format!(
                "{}\nSelected catalog entry #{} ({})",
                table, assessment.index, assessment.catalog_plan_id
            ))
        }
    }
}

pub fn render_catalog(catalog: &Catalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(catalog.plans())?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(catalog.plans())?),
        OutputFormat::Table => {
            let mut table = new_table(vec![
                "#",
                "Plan",
                "Crops",
                "Expected Yield",
                "Sustainability",
                "Peak Pest Risk",
            ]);
            for (i, plan) in catalog.iter().enumerate() {
                table.add_row(vec![
                    i.to_string(),
                    plan.id.clone(),
                    plan.crop_names().join(", "),
                    format!("{} tons/ha", plan.expected_yield),
                    format!("{}/100", plan.sustainability_score),
                    plan.peak_risk()
                        .map_or_else(|| "-".to_string(), |r| r.to_string()),
                ]);
            }
            Ok(table.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::PlanSelector;
    use crate::models::FarmInput;

    #[test]
    fn table_output_lists_plan_content() {
        let plan = Catalog::builtin().plans()[1].clone();
        let text = render_plan(&plan, OutputFormat::Table).unwrap();
        assert!(text.contains("plan2"));
        assert!(text.contains("Basmati"));
        assert!(text.contains("Flood irrigation"));
        assert!(text.contains("Rice stem borer"));
        assert!(text.contains("Soil Health"));
    }

    #[test]
    fn json_output_parses_back() {
        let plan = Catalog::builtin().plans()[0].clone();
        let json = render_plan(&plan, OutputFormat::Json).unwrap();
        let parsed: FarmingPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, plan);
    }

    #[test]
    fn assessment_table_shows_total_and_choice() {
        let selector = PlanSelector::new(Catalog::builtin());
        let assessment = selector.assess(&FarmInput::default()).unwrap();
        let text = render_assessment(&assessment, OutputFormat::Table).unwrap();
        assert!(text.contains("Soil Condition"));
        assert!(text.contains("Total"));
        assert!(text.contains(&assessment.catalog_plan_id));
    }

    #[test]
    fn catalog_table_lists_every_plan() {
        let text = render_catalog(&Catalog::builtin(), OutputFormat::Table).unwrap();
        assert!(text.contains("plan1"));
        assert!(text.contains("Wheat, Corn, Soybeans"));
        assert!(text.contains("plan2"));
    }
}

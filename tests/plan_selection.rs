use farmplan::error::FarmPlanError;
use farmplan::logic::{plan_index, select_plan, Catalog, PlanSelector, ScoringEngine};
use farmplan::models::{
    CropData, FarmInput, FarmingPlan, FertilizerData, IrrigationData, SoilData, WeatherData,
};
use std::sync::Arc;
use std::thread;

fn reference_input() -> FarmInput {
    FarmInput {
        soil: SoilData {
            soil_type: "Loamy".into(),
            ph: 6.5,
            organic_matter: 3.0,
            nitrogen: 2.0,
            phosphorus: 2.0,
            potassium: 2.0,
        },
        weather: WeatherData {
            temperature: 20.0,
            humidity: 55.0,
            rainfall: 2.0,
            sunlight: 5.0,
        },
        irrigation: IrrigationData {
            method: "Drip irrigation".into(),
            frequency: 3.0,
            amount: 1.5,
        },
        fertilizer: FertilizerData {
            fertilizer_type: "Organic compost".into(),
            amount: 2.0,
            frequency: 2.0,
        },
        crop: CropData {
            name: "Wheat".into(),
            variety: "Hard Red Winter".into(),
            growth_stage: "Vegetative".into(),
            health_status: "Good".into(),
        },
    }
}

fn three_plan_catalog() -> Catalog {
    let base = Catalog::builtin();
    let mut plans: Vec<FarmingPlan> = base.plans().to_vec();
    plans.push(base.plans()[0].with_id("plan3"));
    Catalog::new(plans)
}

#[test]
fn reference_farm_gets_first_builtin_plan() {
    let catalog = Catalog::builtin();
    let plan = select_plan(&reference_input(), catalog.plans()).unwrap();

    assert_ne!(plan.id, "plan1");
    assert_eq!(plan.crop_names(), vec!["Wheat", "Corn", "Soybeans"]);
    assert_eq!(plan.expected_yield, 4.2);
    assert_eq!(plan.sustainability_score, 85.0);
}

#[test]
fn catalog_size_changes_the_mapping() {
    // 108 mod 3 = 0, 109 mod 3 = 1
    let selector = PlanSelector::new(three_plan_catalog());
    assert_eq!(selector.assess(&reference_input()).unwrap().index, 0);

    let mut input = reference_input();
    input.irrigation.frequency = 4.0;
    let assessment = selector.assess(&input).unwrap();
    assert_eq!(assessment.total, 109.0);
    assert_eq!(assessment.index, 1);
    assert_eq!(assessment.catalog_plan_id, "plan2");
}

#[test]
fn free_text_never_errors() {
    let mut input = reference_input();
    input.irrigation.method = "Manual bucket".into();
    input.fertilizer.fertilizer_type = "Mystery pellets".into();
    input.crop.growth_stage = "Dormant".into();
    input.crop.health_status = "Unknown".into();

    let engine = ScoringEngine::new();
    let card = engine.evaluate(&input);
    assert_eq!(card.get("irrigation"), Some(5.0 + 3.0 + 3.0));
    assert_eq!(card.get("fertilizer"), Some(5.0 + 5.0 + 2.0));
    assert_eq!(card.get("crop"), Some(2.0 + 3.0));

    assert!(select_plan(&input, Catalog::builtin().plans()).is_ok());
}

#[test]
fn empty_catalog_fails_with_invalid_input() {
    let result = select_plan(&reference_input(), &[]);
    assert!(matches!(result, Err(FarmPlanError::InvalidInput(_))));
    assert_eq!(plan_index(108.0, 0), None);
}

#[test]
fn shared_catalog_serves_concurrent_selectors() {
    let catalog = Catalog::builtin();
    let input = Arc::new(reference_input());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = catalog.clone();
            let input = Arc::clone(&input);
            thread::spawn(move || PlanSelector::new(catalog).select(&input).unwrap())
        })
        .collect();

    let plans: Vec<FarmingPlan> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for plan in &plans {
        assert_eq!(&plan.with_id("plan1"), &catalog.plans()[0]);
    }
    let mut ids: Vec<&str> = plans.iter().map(|p| p.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), plans.len());
}

#[test]
fn input_round_trips_through_json_for_selection() {
    let json = serde_json::to_string(&reference_input()).unwrap();
    let input = FarmInput::from_json(&json).unwrap();
    let selector = PlanSelector::new(Catalog::builtin());
    assert_eq!(selector.assess(&input).unwrap().total, 108.0);
}

pub mod catalog;
pub mod criteria;
pub mod selector;

pub use catalog::Catalog;
pub use criteria::{ScoreCard, ScoringEngine};
pub use selector::{plan_index, select_plan, Assessment, PlanSelector};

//! Rule-based farm condition scoring and farming plan selection.
//!
//! A [`FarmInput`](models::FarmInput) is scored on five criteria (soil,
//! weather, irrigation, fertilizer, crop). The total score picks one entry
//! from a fixed [`Catalog`](logic::Catalog) of pre-authored plans, which is
//! returned as a copy with a fresh id.
//!
//! ```no_run
//! use farmplan::logic::{select_plan, Catalog};
//! use farmplan::models::FarmInput;
//!
//! let catalog = Catalog::builtin();
//! let plan = select_plan(&FarmInput::default(), catalog.plans())?;
//! println!("{} -> {:?}", plan.id, plan.crop_names());
//! # Ok::<(), farmplan::error::FarmPlanError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod logic;
pub mod models;
pub mod render;

#![forbid(unsafe_code)]

//! Core domain model and plan engines for fitplan.
//!
//! This crate provides:
//! - Domain types (profile, catalog content, plans, schedules)
//! - Catalog repository with a built-in static catalog
//! - Fasting, exercise and meal engines plus the schedule composer
//! - Export, configuration and logging for the CLI
//!
//! Every engine is a pure function of the profile, the day number and an
//! explicit `today` date. Nothing here touches the clock or the network.

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod profile;
pub mod fasting;
pub mod targets;
pub mod shuffle;
pub mod progression;
pub mod exercise;
pub mod meal;
pub mod schedule;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, CatalogRepository};
pub use config::{Config, OutputFormat};
pub use fasting::generate_fasting_plan;
pub use targets::compute_targets;
pub use exercise::generate_workout;
pub use meal::generate_meal_plan;
pub use schedule::{
    generate_daily_schedule, generate_plan, generate_week, is_rest_day, week_start_day,
};
pub use export::{export_weeks, ExportFormat};

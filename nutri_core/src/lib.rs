#![forbid(unsafe_code)]

//! Core domain model and business logic for the NutriGuide food engine.
//!
//! This crate provides:
//! - Domain types (food records, goals, diets, meal slots)
//! - Name-based diet classification and goal scoring
//! - The build-once food catalog and CSV ingestion
//! - Filter/sort stages and the recommendation engine
//! - The health profile calculator (BMI, calories, macros)

pub mod types;
pub mod error;
pub mod classify;
pub mod scoring;
pub mod ingest;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod filter;
pub mod health;
pub mod recommend;

#[cfg(test)]
mod fixtures;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{Catalog, CatalogHandle, CatalogStats, Page, Pagination};
pub use config::Config;
pub use health::{bmi, bmi_category, bmi_report, health_profile, BmiReport, HealthProfile, Macros};
pub use recommend::{
    daily_meal_plan, foods_high_in, recommend, smart_recommend, DailyMealPlan, NutrientHighlight,
    Recommendation, RecommendRequest, SmartRecommendation,
};

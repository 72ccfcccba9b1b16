//! Core domain types for the NutriGuide engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Food records and their derived tags/scores
//! - Query axes (goal, diet, meal category, ranked nutrient)
//! - Biometric inputs for the health profile calculator

use crate::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// One raw dataset row: column name → cell text
pub type RawRow = HashMap<String, String>;

// ============================================================================
// Query Axes
// ============================================================================

/// Dietary goal; selects which suitability score drives ranking
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightGain,
    WeightLoss,
    #[default]
    Maintenance,
}

impl Goal {
    /// Lenient parse: anything unrecognized is maintenance
    pub fn parse(value: &str) -> Self {
        match value {
            "weight_gain" => Goal::WeightGain,
            "weight_loss" => Goal::WeightLoss,
            _ => Goal::Maintenance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightGain => "weight_gain",
            Goal::WeightLoss => "weight_loss",
            Goal::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dietary filter axis
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    #[default]
    Vegetarian,
    Vegan,
    /// No dietary restriction (`non-veg`, `nonveg`, or anything unrecognized)
    Any,
}

impl Diet {
    /// Lenient parse: unknown strings behave as unrestricted
    pub fn parse(value: &str) -> Self {
        match value {
            "veg" | "vegetarian" => Diet::Vegetarian,
            "vegan" => Diet::Vegan,
            _ => Diet::Any,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Diet::Vegetarian => "veg",
            Diet::Vegan => "vegan",
            Diet::Any => "non-veg",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse meal slot used to bucket foods by name keywords
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Beverage,
}

impl MealCategory {
    /// Case-insensitive parse; `None` for anything outside the five slots
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "breakfast" => Some(MealCategory::Breakfast),
            "lunch" => Some(MealCategory::Lunch),
            "dinner" => Some(MealCategory::Dinner),
            "snack" => Some(MealCategory::Snack),
            "beverage" => Some(MealCategory::Beverage),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "breakfast",
            MealCategory::Lunch => "lunch",
            MealCategory::Dinner => "dinner",
            MealCategory::Snack => "snack",
            MealCategory::Beverage => "beverage",
        }
    }
}

/// Nutrients that `foods_high_in` is allowed to rank by
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Protein,
    Calcium,
    Iron,
    Fiber,
    VitaminC,
    VitaminA,
}

impl Nutrient {
    pub const ALL: [Nutrient; 6] = [
        Nutrient::Protein,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::Fiber,
        Nutrient::VitaminC,
        Nutrient::VitaminA,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Protein => "protein",
            Nutrient::Calcium => "calcium",
            Nutrient::Iron => "iron",
            Nutrient::Fiber => "fiber",
            Nutrient::VitaminC => "vitamin_c",
            Nutrient::VitaminA => "vitamin_a",
        }
    }
}

impl FromStr for Nutrient {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Nutrient::ALL
            .into_iter()
            .find(|n| n.as_str() == value)
            .ok_or_else(|| Error::InvalidNutrient(value.to_string()))
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Biometric Types
// ============================================================================

/// Binary gender used by the Harris-Benedict equation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Only the exact string `male` selects the male equation
    pub fn parse(value: &str) -> Self {
        if value == "male" {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

/// Physical activity level used to scale BMR
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Lenient parse: unknown levels count as moderate
    pub fn parse(value: &str) -> Self {
        match value {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "active" => ActivityLevel::Active,
            "very_active" => ActivityLevel::VeryActive,
            _ => ActivityLevel::Moderate,
        }
    }

    /// BMR multiplier
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// A user's biometrics for one health-profile request
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub age: f64,
    pub gender: Gender,
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

// ============================================================================
// Food Record
// ============================================================================

/// One enriched catalog entry (nutrients are per 100g unless noted)
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FoodRecord {
    pub food_code: String,
    pub food_name: String,
    pub source: String,

    pub energy_kcal: f64,
    pub energy_kj: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,

    // Fat subfractions (mg)
    pub sfa: f64,
    pub mufa: f64,
    pub pufa: f64,
    pub cholesterol: f64,

    // Minerals (mg)
    pub calcium: f64,
    pub phosphorus: f64,
    pub magnesium: f64,
    pub sodium: f64,
    pub potassium: f64,
    pub iron: f64,
    pub zinc: f64,

    // Vitamins (A, D and folate in µg; the rest in mg)
    pub vitamin_a: f64,
    pub vitamin_c: f64,
    pub vitamin_d: f64,
    pub vitamin_e: f64,
    pub vitamin_b1: f64,
    pub vitamin_b2: f64,
    pub vitamin_b3: f64,
    pub vitamin_b6: f64,
    pub folate: f64,

    pub serving_unit: String,
    pub serving_energy_kcal: f64,
    pub serving_carbs: f64,
    pub serving_protein: f64,
    pub serving_fat: f64,

    pub is_vegetarian: bool,
    pub is_vegan: bool,

    pub weight_gain_score: f64,
    pub weight_loss_score: f64,
    pub maintenance_score: f64,
}

impl FoodRecord {
    /// The suitability score that ranks this food for `goal`
    pub fn score_for(&self, goal: Goal) -> f64 {
        match goal {
            Goal::WeightGain => self.weight_gain_score,
            Goal::WeightLoss => self.weight_loss_score,
            Goal::Maintenance => self.maintenance_score,
        }
    }

    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Protein => self.protein,
            Nutrient::Calcium => self.calcium,
            Nutrient::Iron => self.iron,
            Nutrient::Fiber => self.fiber,
            Nutrient::VitaminC => self.vitamin_c,
            Nutrient::VitaminA => self.vitamin_a,
        }
    }
}

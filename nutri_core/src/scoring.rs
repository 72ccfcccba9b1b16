//! Goal-suitability scoring.
//!
//! Three linear heuristics rank a food for weight gain, weight loss and
//! maintenance. They are fixed ranking formulas, not calibrated nutrition
//! metrics.
//!
//! Weight-gain has an upper clamp only; a food with negative macro values
//! can score below zero and that value is kept as-is.

use serde::{Deserialize, Serialize};

/// The macro inputs the scoring formulas read (per 100g)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MacroPanel {
    pub energy_kcal: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
}

/// Suitability of one food for each goal
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GoalScores {
    pub weight_gain: f64,
    pub weight_loss: f64,
    pub maintenance: f64,
}

/// Compute all three goal scores
pub fn score(panel: &MacroPanel) -> GoalScores {
    let MacroPanel {
        energy_kcal,
        protein,
        carbs,
        fat,
        fiber,
        sugar,
    } = *panel;

    let weight_gain = f64::min(
        100.0,
        energy_kcal / 5.0 + protein * 3.0 + carbs * 0.5 + fat * 0.3,
    );

    let weight_loss = f64::min(
        100.0,
        (100.0 - energy_kcal / 5.0) + protein * 2.0 + fiber * 5.0 - sugar * 2.0 - fat * 0.5,
    );

    let maintenance = f64::min(
        100.0,
        50.0 + protein * 1.5 + fiber * 2.0 - (carbs - 30.0).abs() * 0.2 - sugar * 1.0,
    );

    GoalScores {
        weight_gain,
        weight_loss: floor_at_zero(weight_loss),
        maintenance: floor_at_zero(maintenance),
    }
}

fn floor_at_zero(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

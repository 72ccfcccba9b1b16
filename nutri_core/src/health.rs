//! Health profile calculator.
//!
//! BMI and its category, Harris-Benedict calorie needs, goal-adjusted calorie
//! targets and macro splits. The suggested goal produced here is what seeds a
//! meal-plan request unless the caller overrides it.

use crate::{ActivityLevel, BodyMetrics, Gender, Goal};
use serde::Serialize;

/// Calories per gram of protein and of carbohydrate
const KCAL_PER_GRAM_PROTEIN_CARB: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

const MIN_WEIGHT_LOSS_CALORIES: i64 = 1200;
const GOAL_CALORIE_DELTA: i64 = 500;

/// A BMI band and the goal it suggests
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmiCategory {
    pub label: &'static str,
    pub goal: Goal,
}

pub const UNDERWEIGHT: BmiCategory = BmiCategory {
    label: "Underweight",
    goal: Goal::WeightGain,
};
pub const NORMAL: BmiCategory = BmiCategory {
    label: "Normal",
    goal: Goal::Maintenance,
};
pub const OVERWEIGHT: BmiCategory = BmiCategory {
    label: "Overweight",
    goal: Goal::WeightLoss,
};
pub const OBESE: BmiCategory = BmiCategory {
    label: "Obese",
    goal: Goal::WeightLoss,
};

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Macros {
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fat_g: i64,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct WeightRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct BmiSummary {
    pub value: f64,
    pub category: &'static str,
    pub suggested_goal: Goal,
}

/// Full health assessment for one set of biometrics
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct HealthProfile {
    pub bmi: BmiSummary,
    /// Goal-adjusted daily calorie target
    pub daily_calories: i64,
    pub macros: Macros,
}

/// BMI lookup result with the healthy weight range for the height,
/// plus calorie needs when age and gender were supplied
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: &'static str,
    pub suggested_goal: Goal,
    pub ideal_weight: WeightRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_calories: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros: Option<Macros>,
}

/// Round to nearest, ties toward positive infinity
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

fn round_to_int(value: f64) -> i64 {
    round_half_up(value) as i64
}

/// Body mass index to one decimal place
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    round_half_up(bmi * 10.0) / 10.0
}

/// Bands are half-open on the upper side: 18.5 is Normal, 25 is Overweight
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        UNDERWEIGHT
    } else if bmi < 25.0 {
        NORMAL
    } else if bmi < 30.0 {
        OVERWEIGHT
    } else {
        OBESE
    }
}

/// Maintenance calories from the Harris-Benedict BMR and activity factor
pub fn daily_calories(
    height_cm: f64,
    weight_kg: f64,
    age: f64,
    gender: Gender,
    activity: ActivityLevel,
) -> i64 {
    let bmr = match gender {
        Gender::Male => 88.362 + (13.397 * weight_kg) + (4.799 * height_cm) - (5.677 * age),
        Gender::Female => 447.593 + (9.247 * weight_kg) + (3.098 * height_cm) - (4.330 * age),
    };
    round_to_int(bmr * activity.factor())
}

/// Shift maintenance calories toward the goal (weight loss never below 1200)
pub fn goal_calories(maintenance_calories: i64, goal: Goal) -> i64 {
    match goal {
        Goal::WeightGain => maintenance_calories + GOAL_CALORIE_DELTA,
        Goal::WeightLoss => {
            MIN_WEIGHT_LOSS_CALORIES.max(maintenance_calories - GOAL_CALORIE_DELTA)
        }
        Goal::Maintenance => maintenance_calories,
    }
}

/// Gram targets for each macro; each field is rounded on its own
pub fn macro_split(calories: i64, goal: Goal) -> Macros {
    let (protein_pct, carb_pct, fat_pct) = match goal {
        Goal::WeightLoss => (0.35, 0.35, 0.30),
        Goal::WeightGain | Goal::Maintenance => (0.25, 0.50, 0.25),
    };
    let calories = calories as f64;

    Macros {
        protein_g: round_to_int(calories * protein_pct / KCAL_PER_GRAM_PROTEIN_CARB),
        carbs_g: round_to_int(calories * carb_pct / KCAL_PER_GRAM_PROTEIN_CARB),
        fat_g: round_to_int(calories * fat_pct / KCAL_PER_GRAM_FAT),
    }
}

/// Weights at BMI 18.5 and 24.9 for this height
pub fn ideal_weight_range(height_cm: f64) -> WeightRange {
    let height_m = height_cm / 100.0;
    WeightRange {
        min: round_to_int(18.5 * height_m * height_m),
        max: round_to_int(24.9 * height_m * height_m),
    }
}

pub fn health_profile(metrics: &BodyMetrics) -> HealthProfile {
    let value = bmi(metrics.height_cm, metrics.weight_kg);
    let category = bmi_category(value);
    let maintenance = daily_calories(
        metrics.height_cm,
        metrics.weight_kg,
        metrics.age,
        metrics.gender,
        metrics.activity_level,
    );
    let target = goal_calories(maintenance, category.goal);

    tracing::debug!(
        "Health profile: bmi {} ({}), maintenance {} kcal, target {} kcal",
        value,
        category.label,
        maintenance,
        target
    );

    HealthProfile {
        bmi: BmiSummary {
            value,
            category: category.label,
            suggested_goal: category.goal,
        },
        daily_calories: target,
        macros: macro_split(target, category.goal),
    }
}

/// BMI with its band; calorie needs are added only when age and gender are known
pub fn bmi_report(
    height_cm: f64,
    weight_kg: f64,
    age: Option<f64>,
    gender: Option<Gender>,
    activity: Option<ActivityLevel>,
) -> BmiReport {
    let value = bmi(height_cm, weight_kg);
    let category = bmi_category(value);

    let profile = match (age, gender) {
        (Some(age), Some(gender)) => Some(health_profile(&BodyMetrics {
            height_cm,
            weight_kg,
            age,
            gender,
            activity_level: activity.unwrap_or_default(),
        })),
        _ => None,
    };

    BmiReport {
        bmi: value,
        category: category.label,
        suggested_goal: category.goal,
        ideal_weight: ideal_weight_range(height_cm),
        daily_calories: profile.as_ref().map(|p| p.daily_calories),
        macros: profile.map(|p| p.macros),
    }
}

//! Recommendation engine.
//!
//! Composes the filter stages into ranked recommendation lists, full-day
//! meal plans, and "high in nutrient" rankings.
//!
//! Pipeline for a single list:
//! `all → exclude → diet → category (optional) → sort by goal → take(limit)`

use crate::filter::{exclude, filter_by_category, filter_by_diet, sort_by_goal, sort_by_nutrient};
use crate::health::{health_profile, HealthProfile};
use crate::{BodyMetrics, Catalog, Diet, FoodRecord, Goal, MealCategory, Nutrient, Result};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashSet;

pub const DEFAULT_RECOMMEND_LIMIT: usize = 20;
pub const DEFAULT_HIGH_IN_LIMIT: usize = 10;

const BREAKFAST_SLOTS: usize = 3;
const LUNCH_SLOTS: usize = 3;
const DINNER_SLOTS: usize = 3;
const SNACK_SLOTS: usize = 2;
const BEVERAGE_SLOTS: usize = 2;

/// Parameters for one recommendation list
#[derive(Clone, Debug)]
pub struct RecommendRequest {
    pub goal: Goal,
    pub diet: Diet,
    pub category: Option<MealCategory>,
    pub limit: usize,
    /// Food codes already eaten today
    pub exclude_codes: HashSet<String>,
}

impl Default for RecommendRequest {
    fn default() -> Self {
        Self {
            goal: Goal::Maintenance,
            diet: Diet::Vegetarian,
            category: None,
            limit: DEFAULT_RECOMMEND_LIMIT,
            exclude_codes: HashSet::new(),
        }
    }
}

/// Reduced view of a food returned by recommendation queries
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Recommendation {
    pub food_code: String,
    pub food_name: String,
    pub energy_kcal: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub serving_unit: String,
    pub serving_energy_kcal: f64,
    pub is_vegetarian: bool,
    /// Score for the goal the list was ranked by
    pub suitability_score: f64,
}

impl Recommendation {
    fn project(food: &FoodRecord, goal: Goal) -> Self {
        Self {
            food_code: food.food_code.clone(),
            food_name: food.food_name.clone(),
            energy_kcal: food.energy_kcal,
            protein: food.protein,
            carbs: food.carbs,
            fat: food.fat,
            fiber: food.fiber,
            serving_unit: food.serving_unit.clone(),
            serving_energy_kcal: food.serving_energy_kcal,
            is_vegetarian: food.is_vegetarian,
            suitability_score: food.score_for(goal),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct MealPlan {
    pub breakfast: Vec<Recommendation>,
    pub lunch: Vec<Recommendation>,
    pub dinner: Vec<Recommendation>,
    pub snacks: Vec<Recommendation>,
    pub beverages: Vec<Recommendation>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SuggestedTotals {
    pub estimated_calories: f64,
    /// Echoed from the request; no reconciliation against the estimate
    pub target_calories: Option<i64>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DailyMealPlan {
    pub meal_plan: MealPlan,
    pub suggested_totals: SuggestedTotals,
}

/// One entry of a "foods high in X" ranking
///
/// Serializes with the nutrient name as its own key, e.g. `"iron": 8.2`.
#[derive(Clone, Debug, PartialEq)]
pub struct NutrientHighlight {
    pub food_code: String,
    pub food_name: String,
    pub nutrient: Nutrient,
    pub value: f64,
    pub energy_kcal: f64,
    pub is_vegetarian: bool,
}

impl Serialize for NutrientHighlight {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("food_code", &self.food_code)?;
        map.serialize_entry("food_name", &self.food_name)?;
        map.serialize_entry(self.nutrient.as_str(), &self.value)?;
        map.serialize_entry("energy_kcal", &self.energy_kcal)?;
        map.serialize_entry("is_vegetarian", &self.is_vegetarian)?;
        map.end()
    }
}

/// Profile-driven plan: health assessment plus a meal plan for its goal
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SmartRecommendation {
    pub health_assessment: HealthProfile,
    pub recommended_goal: Goal,
    #[serde(flatten)]
    pub plan: DailyMealPlan,
}

/// Ranked recommendations for one goal/diet/slot
pub fn recommend(catalog: &Catalog, request: &RecommendRequest) -> Vec<Recommendation> {
    let foods: Vec<&FoodRecord> = catalog.all().iter().collect();
    let foods = exclude(&foods, &request.exclude_codes);
    let foods = filter_by_diet(&foods, request.diet);
    let foods = filter_by_category(&foods, request.category);
    let ranked = sort_by_goal(&foods, request.goal);

    tracing::debug!(
        "recommend goal={} diet={} category={:?}: {} candidates, limit {}",
        request.goal,
        request.diet,
        request.category,
        ranked.len(),
        request.limit
    );

    ranked
        .into_iter()
        .take(request.limit)
        .map(|food| Recommendation::project(food, request.goal))
        .collect()
}

/// A full day: five independent slot recommendations plus a calorie estimate
///
/// Slots do not share exclusions, so one food can appear in several slots.
/// The estimate sums the top pick of breakfast, lunch, dinner and snacks;
/// beverages and empty slots do not count.
pub fn daily_meal_plan(
    catalog: &Catalog,
    goal: Goal,
    diet: Diet,
    target_calories: Option<i64>,
) -> DailyMealPlan {
    let slot = |category: MealCategory, limit: usize| {
        recommend(
            catalog,
            &RecommendRequest {
                goal,
                diet,
                category: Some(category),
                limit,
                exclude_codes: HashSet::new(),
            },
        )
    };

    let meal_plan = MealPlan {
        breakfast: slot(MealCategory::Breakfast, BREAKFAST_SLOTS),
        lunch: slot(MealCategory::Lunch, LUNCH_SLOTS),
        dinner: slot(MealCategory::Dinner, DINNER_SLOTS),
        snacks: slot(MealCategory::Snack, SNACK_SLOTS),
        beverages: slot(MealCategory::Beverage, BEVERAGE_SLOTS),
    };

    let estimated_calories = [
        &meal_plan.breakfast,
        &meal_plan.lunch,
        &meal_plan.dinner,
        &meal_plan.snacks,
    ]
    .into_iter()
    .filter_map(|items| items.first())
    .fold(0.0, |total, top| total + top.energy_kcal);

    DailyMealPlan {
        meal_plan,
        suggested_totals: SuggestedTotals {
            estimated_calories,
            target_calories,
        },
    }
}

/// Foods richest in `nutrient`, after diet filtering
///
/// `nutrient` must be on the allow-list; anything else is
/// [`Error::InvalidNutrient`](crate::Error::InvalidNutrient), never an empty list.
pub fn foods_high_in(
    catalog: &Catalog,
    nutrient: &str,
    diet: Diet,
    limit: usize,
) -> Result<Vec<NutrientHighlight>> {
    let nutrient: Nutrient = nutrient.parse()?;

    let foods: Vec<&FoodRecord> = catalog.all().iter().collect();
    let foods = filter_by_diet(&foods, diet);
    let ranked = sort_by_nutrient(&foods, nutrient);

    Ok(ranked
        .into_iter()
        .take(limit)
        .map(|food| NutrientHighlight {
            food_code: food.food_code.clone(),
            food_name: food.food_name.clone(),
            nutrient,
            value: food.nutrient(nutrient),
            energy_kcal: food.energy_kcal,
            is_vegetarian: food.is_vegetarian,
        })
        .collect())
}

/// Assess the user, pick a goal (override wins), and plan the day around it
pub fn smart_recommend(
    catalog: &Catalog,
    metrics: &BodyMetrics,
    diet: Diet,
    custom_goal: Option<Goal>,
) -> SmartRecommendation {
    let health_assessment = health_profile(metrics);
    let goal = custom_goal.unwrap_or(health_assessment.bmi.suggested_goal);

    tracing::info!(
        "Smart recommendation: BMI {} ({}), goal {}, target {} kcal",
        health_assessment.bmi.value,
        health_assessment.bmi.category,
        goal,
        health_assessment.daily_calories
    );

    let plan = daily_meal_plan(catalog, goal, diet, Some(health_assessment.daily_calories));

    SmartRecommendation {
        health_assessment,
        recommended_goal: goal,
        plan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{category_keywords, contains_any};
    use crate::fixtures::{catalog_without_beverages, sample_catalog};
    use crate::{ActivityLevel, Error, Gender};

    #[test]
    fn test_recommend_weight_loss_vegan_breakfast() {
        let catalog = sample_catalog();
        let request = RecommendRequest {
            goal: Goal::parse("weight_loss"),
            diet: Diet::parse("vegan"),
            category: MealCategory::parse("breakfast"),
            limit: 3,
            ..Default::default()
        };
        let results = recommend(&catalog, &request);

        assert!(!results.is_empty());
        assert!(results.len() <= 3);
        for item in &results {
            let food = catalog.find_by_code(&item.food_code).unwrap();
            assert!(food.is_vegan, "{} is not vegan", food.food_name);
            assert!(contains_any(
                &food.food_name,
                category_keywords(MealCategory::Breakfast)
            ));
            assert_eq!(item.suitability_score, food.weight_loss_score);
        }
        assert!(results
            .windows(2)
            .all(|w| w[0].suitability_score >= w[1].suitability_score));
    }

    #[test]
    fn test_recommend_defaults() {
        let catalog = sample_catalog();
        let results = recommend(&catalog, &RecommendRequest::default());
        let veg_count = catalog.all().iter().filter(|f| f.is_vegetarian).count();
        assert_eq!(results.len(), veg_count.min(DEFAULT_RECOMMEND_LIMIT));
        assert!(results.iter().all(|r| r.is_vegetarian));
    }

    #[test]
    fn test_recommend_excludes_codes() {
        let catalog = sample_catalog();
        let top = recommend(
            &catalog,
            &RecommendRequest {
                goal: Goal::WeightGain,
                diet: Diet::Any,
                limit: 1,
                ..Default::default()
            },
        );
        let top_code = top[0].food_code.clone();

        let without = recommend(
            &catalog,
            &RecommendRequest {
                goal: Goal::WeightGain,
                diet: Diet::Any,
                limit: 50,
                exclude_codes: [top_code.clone()].into_iter().collect(),
                ..Default::default()
            },
        );
        assert!(without.iter().all(|r| r.food_code != top_code));
        assert_eq!(without.len(), catalog.len() - 1);
    }

    #[test]
    fn test_recommend_zero_limit() {
        let catalog = sample_catalog();
        let request = RecommendRequest {
            limit: 0,
            ..Default::default()
        };
        assert!(recommend(&catalog, &request).is_empty());
    }

    #[test]
    fn test_daily_meal_plan_slot_sizes_and_estimate() {
        let catalog = sample_catalog();
        let plan = daily_meal_plan(&catalog, Goal::Maintenance, Diet::Any, Some(2200));

        assert_eq!(plan.meal_plan.breakfast.len(), 3);
        assert_eq!(plan.meal_plan.lunch.len(), 3);
        assert_eq!(plan.meal_plan.dinner.len(), 3);
        assert_eq!(plan.meal_plan.snacks.len(), 2);
        assert_eq!(plan.meal_plan.beverages.len(), 2);

        let expected: f64 = [
            &plan.meal_plan.breakfast[0],
            &plan.meal_plan.lunch[0],
            &plan.meal_plan.dinner[0],
            &plan.meal_plan.snacks[0],
        ]
        .iter()
        .map(|r| r.energy_kcal)
        .sum();
        assert_eq!(plan.suggested_totals.estimated_calories, expected);
        assert_eq!(plan.suggested_totals.target_calories, Some(2200));
    }

    #[test]
    fn test_daily_meal_plan_slots_may_share_foods() {
        let catalog = sample_catalog();
        let plan = daily_meal_plan(&catalog, Goal::WeightLoss, Diet::Vegan, None);
        let lunch: HashSet<_> = plan.meal_plan.lunch.iter().map(|r| &r.food_code).collect();
        assert!(plan
            .meal_plan
            .dinner
            .iter()
            .any(|r| lunch.contains(&r.food_code)));
    }

    #[test]
    fn test_daily_meal_plan_empty_beverage_slot() {
        let catalog = catalog_without_beverages();
        let plan = daily_meal_plan(&catalog, Goal::WeightGain, Diet::Vegetarian, None);

        assert!(plan.meal_plan.beverages.is_empty());
        assert!(plan.suggested_totals.target_calories.is_none());
        let expected: f64 = [
            &plan.meal_plan.breakfast,
            &plan.meal_plan.lunch,
            &plan.meal_plan.dinner,
            &plan.meal_plan.snacks,
        ]
        .iter()
        .filter_map(|slot| slot.first())
        .map(|r| r.energy_kcal)
        .sum();
        assert_eq!(plan.suggested_totals.estimated_calories, expected);
    }

    #[test]
    fn test_daily_meal_plan_on_empty_catalog() {
        let catalog = Catalog::default();
        let plan = daily_meal_plan(&catalog, Goal::Maintenance, Diet::Any, Some(1800));
        assert_eq!(plan.meal_plan, MealPlan::default());
        assert_eq!(plan.suggested_totals.estimated_calories, 0.0);
    }

    #[test]
    fn test_foods_high_in_ranks_by_nutrient() {
        let catalog = sample_catalog();
        let results = foods_high_in(&catalog, "protein", Diet::Any, 3).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].food_name, "Roasted nuts");
        assert_eq!(results[1].food_name, "Fish curry");
        assert!(results.windows(2).all(|w| w[0].value >= w[1].value));
    }

    #[test]
    fn test_foods_high_in_respects_diet() {
        let catalog = sample_catalog();
        let results = foods_high_in(&catalog, "protein", Diet::Vegetarian, 10).unwrap();
        assert!(results.iter().all(|r| r.is_vegetarian));
        assert!(results.iter().all(|r| r.food_name != "Fish curry"));
    }

    #[test]
    fn test_foods_high_in_invalid_nutrient() {
        let catalog = sample_catalog();
        let err = foods_high_in(&catalog, "sodium", Diet::Any, 10).unwrap_err();
        assert!(matches!(err, Error::InvalidNutrient(ref n) if n == "sodium"));
    }

    #[test]
    fn test_nutrient_highlight_serializes_dynamic_key() {
        let catalog = sample_catalog();
        let results = foods_high_in(&catalog, "fiber", Diet::Any, 1).unwrap();
        let json = serde_json::to_value(&results[0]).unwrap();
        assert_eq!(json["fiber"], serde_json::json!(8.0));
        assert_eq!(json["food_name"], "Roasted nuts");
        assert!(json.get("value").is_none());
    }

    #[test]
    fn test_smart_recommend_uses_profile_goal() {
        let catalog = sample_catalog();
        let metrics = BodyMetrics {
            height_cm: 175.0,
            weight_kg: 52.0,
            age: 22.0,
            gender: Gender::Male,
            activity_level: ActivityLevel::Active,
        };
        let smart = smart_recommend(&catalog, &metrics, Diet::Vegetarian, None);

        assert_eq!(smart.health_assessment.bmi.category, "Underweight");
        assert_eq!(smart.recommended_goal, Goal::WeightGain);
        assert_eq!(
            smart.plan.suggested_totals.target_calories,
            Some(smart.health_assessment.daily_calories)
        );
        assert_eq!(
            smart.plan,
            daily_meal_plan(
                &catalog,
                Goal::WeightGain,
                Diet::Vegetarian,
                Some(smart.health_assessment.daily_calories)
            )
        );
    }

    #[test]
    fn test_smart_recommend_custom_goal_overrides() {
        let catalog = sample_catalog();
        let metrics = BodyMetrics {
            height_cm: 175.0,
            weight_kg: 52.0,
            age: 22.0,
            gender: Gender::Female,
            activity_level: ActivityLevel::Moderate,
        };
        let smart = smart_recommend(&catalog, &metrics, Diet::Vegan, Some(Goal::Maintenance));
        assert_eq!(smart.recommended_goal, Goal::Maintenance);
        assert_eq!(smart.health_assessment.bmi.suggested_goal, Goal::WeightGain);

        let json = serde_json::to_value(&smart).unwrap();
        assert!(json.get("meal_plan").is_some());
        assert!(json.get("suggested_totals").is_some());
        assert_eq!(json["recommended_goal"], "maintenance");
    }
}

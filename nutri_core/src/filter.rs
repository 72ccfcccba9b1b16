//! Filter and ranking stages of the recommendation pipeline.
//!
//! Each stage takes an ordered sequence of borrowed records and returns a new
//! one, so stages compose freely and the catalog itself is never touched.

use crate::classify::{category_keywords, contains_any};
use crate::{Diet, FoodRecord, Goal, MealCategory, Nutrient};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Keep foods compatible with `diet`; [`Diet::Any`] keeps everything
pub fn filter_by_diet<'a>(foods: &[&'a FoodRecord], diet: Diet) -> Vec<&'a FoodRecord> {
    match diet {
        Diet::Vegetarian => foods.iter().copied().filter(|f| f.is_vegetarian).collect(),
        Diet::Vegan => foods.iter().copied().filter(|f| f.is_vegan).collect(),
        Diet::Any => foods.to_vec(),
    }
}

/// Keep foods whose name contains one of the slot's keywords
///
/// `None` means no category, and the input comes back unchanged.
pub fn filter_by_category<'a>(
    foods: &[&'a FoodRecord],
    category: Option<MealCategory>,
) -> Vec<&'a FoodRecord> {
    let Some(category) = category else {
        return foods.to_vec();
    };

    let keywords = category_keywords(category);
    foods
        .iter()
        .copied()
        .filter(|f| contains_any(&f.food_name, keywords))
        .collect()
}

/// Drop foods whose code appears in `codes`
pub fn exclude<'a>(foods: &[&'a FoodRecord], codes: &HashSet<String>) -> Vec<&'a FoodRecord> {
    if codes.is_empty() {
        return foods.to_vec();
    }
    foods
        .iter()
        .copied()
        .filter(|f| !codes.contains(&f.food_code))
        .collect()
}

/// Stable descending sort by the goal's suitability score
pub fn sort_by_goal<'a>(foods: &[&'a FoodRecord], goal: Goal) -> Vec<&'a FoodRecord> {
    sort_descending_by(foods, |f| f.score_for(goal))
}

/// Stable descending sort by one nutrient's value
pub fn sort_by_nutrient<'a>(foods: &[&'a FoodRecord], nutrient: Nutrient) -> Vec<&'a FoodRecord> {
    sort_descending_by(foods, |f| f.nutrient(nutrient))
}

fn sort_descending_by<'a, F>(foods: &[&'a FoodRecord], key: F) -> Vec<&'a FoodRecord>
where
    F: Fn(&FoodRecord) -> f64,
{
    let mut sorted = foods.to_vec();
    // Ingested values are always finite, so partial_cmp is total here
    sorted.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    sorted
}

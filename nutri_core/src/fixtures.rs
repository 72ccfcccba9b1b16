//! Shared test data: a small, realistic slice of the food table.

use crate::{Catalog, RawRow};

#[allow(clippy::too_many_arguments)]
pub fn raw_row(
    code: &str,
    name: &str,
    energy_kcal: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    sugar: f64,
) -> RawRow {
    [
        ("food_code", code.to_string()),
        ("food_name", name.to_string()),
        ("primarysource", "test".to_string()),
        ("energy_kcal", energy_kcal.to_string()),
        ("protein_g", protein.to_string()),
        ("carb_g", carbs.to_string()),
        ("fat_g", fat.to_string()),
        ("fibre_g", fiber.to_string()),
        ("freesugar_g", sugar.to_string()),
        ("servings_unit", "bowl".to_string()),
        ("unit_serving_energy_kcal", (energy_kcal * 1.5).to_string()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

pub fn sample_rows() -> Vec<RawRow> {
    vec![
        raw_row("F01", "Poha", 130.0, 2.6, 26.0, 2.2, 1.1, 0.5),
        raw_row("F02", "Vegetable upma", 145.0, 3.5, 22.0, 4.8, 2.0, 0.8),
        raw_row("F03", "Idli", 110.0, 3.2, 23.0, 0.4, 1.3, 0.0),
        raw_row("F04", "Plain dosa", 165.0, 3.9, 29.0, 3.7, 1.5, 0.2),
        raw_row("F05", "Egg omelette", 155.0, 11.0, 1.2, 11.5, 0.0, 0.4),
        raw_row("F06", "Paneer paratha", 260.0, 9.5, 30.0, 11.0, 2.8, 1.0),
        raw_row("F07", "Jeera rice", 150.0, 3.0, 30.0, 2.5, 0.6, 0.0),
        raw_row("F08", "Dal tadka", 120.0, 7.0, 18.0, 2.0, 4.0, 1.0),
        raw_row("F09", "Rajma curry", 140.0, 8.5, 20.0, 3.0, 6.5, 1.2),
        raw_row("F10", "Chicken biryani", 210.0, 12.0, 25.0, 7.5, 1.0, 0.8),
        raw_row("F11", "Fish curry", 135.0, 16.0, 5.0, 6.0, 0.8, 0.5),
        raw_row("F12", "Vegetable soup", 45.0, 1.8, 7.5, 1.0, 2.2, 2.5),
        raw_row("F13", "Green salad", 30.0, 1.5, 5.5, 0.3, 2.6, 2.0),
        raw_row("F14", "Samosa", 310.0, 5.0, 32.0, 18.0, 2.5, 1.5),
        raw_row("F15", "Besan ladoo", 480.0, 9.0, 52.0, 26.0, 4.0, 30.0),
        raw_row("F16", "Roasted nuts", 600.0, 20.0, 18.0, 52.0, 8.0, 4.0),
        raw_row("F17", "Masala chai", 60.0, 1.5, 9.0, 2.0, 0.0, 7.0),
        raw_row("F18", "Mango lassi", 95.0, 2.8, 16.0, 2.3, 0.4, 14.0),
        raw_row("F19", "Orange juice", 45.0, 0.7, 10.4, 0.2, 0.2, 8.4),
    ]
}

pub fn sample_catalog() -> Catalog {
    Catalog::build(sample_rows())
}

/// Same foods minus every beverage
pub fn catalog_without_beverages() -> Catalog {
    let rows = sample_rows()
        .into_iter()
        .filter(|row| {
            let name = row.get("food_name").map(String::as_str).unwrap_or_default();
            !matches!(name, "Masala chai" | "Mango lassi" | "Orange juice")
        })
        .collect::<Vec<_>>();
    Catalog::build(rows)
}

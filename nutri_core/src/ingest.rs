//! Dataset ingestion: CSV rows into enriched food records.
//!
//! Every numeric cell is parsed leniently. A missing column, an empty cell,
//! or text with no leading number all become 0, so "no data" and a real zero
//! are indistinguishable downstream.

use crate::classify::{classify_vegan, classify_vegetarian};
use crate::scoring::{score, MacroPanel};
use crate::{FoodRecord, RawRow, Result};
use std::path::Path;

const DEFAULT_SERVING_UNIT: &str = "serving";

/// Read every row of a CSV file (header row supplies the column names)
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(row);
    }

    tracing::debug!("Read {} rows from {:?}", rows.len(), path);
    Ok(rows)
}

/// Parse the longest leading decimal number in `raw`, or 0 if there is none
///
/// Accepts leading whitespace, an optional sign, digits with an optional
/// fraction, and an optional exponent. Trailing text is ignored
/// (`"12.5 g"` → 12.5). Non-finite results also collapse to 0.
pub fn parse_number(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return 0.0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match text[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

fn text(row: &RawRow, column: &str) -> String {
    row.get(column).cloned().unwrap_or_default()
}

fn number(row: &RawRow, column: &str) -> f64 {
    row.get(column).map(|v| parse_number(v)).unwrap_or(0.0)
}

impl FoodRecord {
    /// Build an enriched record from one raw dataset row
    ///
    /// Diet tags and goal scores are derived here, once, and never
    /// recomputed afterwards.
    pub fn from_row(row: &RawRow) -> Self {
        let serving_unit = match row.get("servings_unit") {
            Some(unit) if !unit.is_empty() => unit.clone(),
            _ => DEFAULT_SERVING_UNIT.to_string(),
        };

        let mut food = FoodRecord {
            food_code: text(row, "food_code"),
            food_name: text(row, "food_name"),
            source: text(row, "primarysource"),

            energy_kcal: number(row, "energy_kcal"),
            energy_kj: number(row, "energy_kj"),
            carbs: number(row, "carb_g"),
            protein: number(row, "protein_g"),
            fat: number(row, "fat_g"),
            fiber: number(row, "fibre_g"),
            sugar: number(row, "freesugar_g"),

            sfa: number(row, "sfa_mg"),
            mufa: number(row, "mufa_mg"),
            pufa: number(row, "pufa_mg"),
            cholesterol: number(row, "cholesterol_mg"),

            calcium: number(row, "calcium_mg"),
            phosphorus: number(row, "phosphorus_mg"),
            magnesium: number(row, "magnesium_mg"),
            sodium: number(row, "sodium_mg"),
            potassium: number(row, "potassium_mg"),
            iron: number(row, "iron_mg"),
            zinc: number(row, "zinc_mg"),

            vitamin_a: number(row, "vita_ug"),
            vitamin_c: number(row, "vitc_mg"),
            vitamin_d: number(row, "vitd2_ug") + number(row, "vitd3_ug"),
            vitamin_e: number(row, "vite_mg"),
            vitamin_b1: number(row, "vitb1_mg"),
            vitamin_b2: number(row, "vitb2_mg"),
            vitamin_b3: number(row, "vitb3_mg"),
            vitamin_b6: number(row, "vitb6_mg"),
            folate: number(row, "folate_ug"),

            serving_unit,
            serving_energy_kcal: number(row, "unit_serving_energy_kcal"),
            serving_carbs: number(row, "unit_serving_carb_g"),
            serving_protein: number(row, "unit_serving_protein_g"),
            serving_fat: number(row, "unit_serving_fat_g"),

            ..FoodRecord::default()
        };

        food.is_vegetarian = classify_vegetarian(&food.food_name);
        food.is_vegan = classify_vegan(&food.food_name);

        let scores = score(&food.macro_panel());
        food.weight_gain_score = scores.weight_gain;
        food.weight_loss_score = scores.weight_loss;
        food.maintenance_score = scores.maintenance;

        food
    }

    /// The subset of the nutrient panel the scoring formulas read
    pub fn macro_panel(&self) -> MacroPanel {
        MacroPanel {
            energy_kcal: self.energy_kcal,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            fiber: self.fiber,
            sugar: self.sugar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_number_plain() {
        assert_eq!(parse_number("12.5"), 12.5);
        assert_eq!(parse_number("  7"), 7.0);
        assert_eq!(parse_number("-3.25"), -3.25);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("1e2"), 100.0);
    }

    #[test]
    fn test_parse_number_prefix() {
        assert_eq!(parse_number("12.5g"), 12.5);
        assert_eq!(parse_number("3e"), 3.0);
        assert_eq!(parse_number("4.2 mg"), 4.2);
    }

    #[test]
    fn test_parse_number_garbage_is_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("NA"), 0.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number("."), 0.0);
        assert_eq!(parse_number("1e999"), 0.0);
    }

    #[test]
    fn test_from_row_maps_columns() {
        let food = FoodRecord::from_row(&row(&[
            ("food_code", "ASC001"),
            ("food_name", "Hot tea (Garam Chai)"),
            ("primarysource", "asc_manual"),
            ("energy_kcal", "16.14"),
            ("carb_g", "2.58"),
            ("protein_g", "0.39"),
            ("fat_g", "0.53"),
            ("fibre_g", "0"),
            ("freesugar_g", "2.58"),
            ("calcium_mg", "14.2"),
            ("vitd2_ug", "0.1"),
            ("vitd3_ug", "0.2"),
            ("servings_unit", "tea cup"),
            ("unit_serving_energy_kcal", "59.44"),
        ]));

        assert_eq!(food.food_code, "ASC001");
        assert_eq!(food.source, "asc_manual");
        assert_eq!(food.energy_kcal, 16.14);
        assert_eq!(food.carbs, 2.58);
        assert_eq!(food.calcium, 14.2);
        assert!((food.vitamin_d - 0.3).abs() < 1e-12);
        assert_eq!(food.serving_unit, "tea cup");
        assert_eq!(food.serving_energy_kcal, 59.44);
        assert!(food.is_vegetarian);
        assert!(food.is_vegan);
    }

    #[test]
    fn test_from_row_defaults() {
        let food = FoodRecord::from_row(&row(&[
            ("food_code", "X1"),
            ("food_name", "Mystery item"),
            ("energy_kcal", "not measured"),
            ("servings_unit", ""),
        ]));

        assert_eq!(food.energy_kcal, 0.0);
        assert_eq!(food.protein, 0.0);
        assert_eq!(food.source, "");
        assert_eq!(food.serving_unit, "serving");
        assert_eq!(food.serving_fat, 0.0);
    }

    #[test]
    fn test_from_row_derives_tags_and_scores() {
        let food = FoodRecord::from_row(&row(&[
            ("food_name", "Chicken curry"),
            ("energy_kcal", "150"),
            ("protein_g", "15"),
            ("carb_g", "5"),
            ("fat_g", "8"),
        ]));

        assert!(!food.is_vegetarian);
        assert!(!food.is_vegan);
        let expected = score(&food.macro_panel());
        assert_eq!(food.weight_gain_score, expected.weight_gain);
        assert_eq!(food.weight_loss_score, expected.weight_loss);
        assert_eq!(food.maintenance_score, expected.maintenance);
    }

    #[test]
    fn test_read_rows_handles_ragged_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "food_code,food_name,energy_kcal").unwrap();
        writeln!(file, "A1,Poha,130").unwrap();
        writeln!(file, "A2,Upma").unwrap();
        file.flush().unwrap();

        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("energy_kcal").map(String::as_str), Some("130"));
        assert!(rows[1].get("energy_kcal").is_none());
    }
}

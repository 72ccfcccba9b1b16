use clap::{Parser, Subcommand};
use nutri_core::*;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

const MIN_SEARCH_QUERY_LEN: usize = 2;

#[derive(Parser)]
#[command(name = "nutriguide")]
#[command(about = "Food scoring and meal recommendation engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override the nutrition dataset (CSV)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search foods by name
    Search {
        query: String,

        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the full record for one food code
    Show { code: String },

    /// List the catalog page by page
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long)]
        limit: Option<usize>,
    },

    /// Catalog totals
    Stats,

    /// Ranked recommendations for a goal, diet and meal slot
    Recommend {
        /// weight_gain, weight_loss or maintenance
        #[arg(long)]
        goal: Option<String>,

        /// veg, vegan or non-veg
        #[arg(long)]
        diet: Option<String>,

        /// breakfast, lunch, dinner, snack or beverage
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        limit: Option<usize>,

        /// Food codes to leave out (comma separated)
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,
    },

    /// Suggest a full day of meals
    MealPlan {
        #[arg(long)]
        goal: Option<String>,

        #[arg(long)]
        diet: Option<String>,

        #[arg(long)]
        target_calories: Option<i64>,
    },

    /// Foods highest in one nutrient
    HighIn {
        /// protein, calcium, iron, fiber, vitamin_c or vitamin_a
        nutrient: String,

        #[arg(long)]
        diet: Option<String>,

        #[arg(long)]
        limit: Option<usize>,
    },

    /// Health assessment plus a meal plan built from it
    Profile {
        /// Height in cm
        #[arg(long)]
        height: f64,

        /// Weight in kg
        #[arg(long)]
        weight: f64,

        #[arg(long)]
        age: f64,

        /// male or female
        #[arg(long)]
        gender: String,

        #[arg(long)]
        diet: String,

        #[arg(long)]
        activity: Option<String>,

        /// Override the goal suggested by BMI
        #[arg(long)]
        goal: Option<String>,
    },

    /// BMI, with calorie needs when age and gender are given
    Bmi {
        #[arg(long)]
        height: f64,

        #[arg(long)]
        weight: f64,

        #[arg(long)]
        age: Option<f64>,

        #[arg(long)]
        gender: Option<String>,

        #[arg(long)]
        activity: Option<String>,
    },

    /// Write the default configuration file
    InitConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        nutri_core::logging::init_with_level("debug");
    } else {
        nutri_core::logging::init();
    }

    let config = match (&cli.command, &cli.config) {
        (Commands::InitConfig, _) => Config::default(),
        (_, Some(path)) => Config::load_from(path)?,
        (_, None) => Config::load()?,
    };
    let dataset = cli
        .data_file
        .clone()
        .unwrap_or_else(|| config.data.dataset_path.clone());

    let catalog = CatalogHandle::new();
    let defaults = &config.defaults;

    match cli.command {
        Commands::Search { query, limit } => {
            let query = query.trim();
            if query.chars().count() < MIN_SEARCH_QUERY_LEN {
                return Err(Error::InvalidInput(
                    "Search query must be at least 2 characters".into(),
                ));
            }
            let results = catalog
                .load(&dataset)?
                .search(query, limit.unwrap_or(defaults.search_limit));
            print_json(&json!({ "count": results.len(), "data": results }))
        }

        Commands::Show { code } => {
            let food = catalog
                .load(&dataset)?
                .find_by_code(&code)
                .ok_or_else(|| Error::FoodNotFound(code.clone()))?;
            print_json(&json!({ "data": food }))
        }

        Commands::List { page, limit } => {
            let page = catalog
                .load(&dataset)?
                .page(page, limit.unwrap_or(defaults.page_size));
            print_json(&page)
        }

        Commands::Stats => print_json(&json!({ "data": catalog.load(&dataset)?.stats() })),

        Commands::Recommend {
            goal,
            diet,
            category,
            limit,
            exclude,
        } => {
            let diet = diet.unwrap_or_else(|| defaults.diet.clone());
            let request = RecommendRequest {
                goal: goal.as_deref().map_or_else(|| defaults.goal(), Goal::parse),
                diet: Diet::parse(&diet),
                category: parse_category(category.as_deref()),
                limit: limit.unwrap_or(defaults.recommend_limit),
                exclude_codes: exclude.into_iter().collect(),
            };
            let results = recommend(catalog.load(&dataset)?, &request);
            print_json(&json!({
                "goal": request.goal,
                "diet": diet,
                "category": request.category,
                "count": results.len(),
                "data": results,
            }))
        }

        Commands::MealPlan {
            goal,
            diet,
            target_calories,
        } => {
            let goal = goal.as_deref().map_or_else(|| defaults.goal(), Goal::parse);
            let diet = diet.unwrap_or_else(|| defaults.diet.clone());
            let plan = daily_meal_plan(
                catalog.load(&dataset)?,
                goal,
                Diet::parse(&diet),
                target_calories,
            );
            print_json(&json!({
                "goal": goal,
                "diet": diet,
                "meal_plan": plan.meal_plan,
                "suggested_totals": plan.suggested_totals,
            }))
        }

        Commands::HighIn {
            nutrient,
            diet,
            limit,
        } => {
            let diet = diet.unwrap_or_else(|| defaults.diet.clone());
            let results = foods_high_in(
                catalog.load(&dataset)?,
                &nutrient,
                Diet::parse(&diet),
                limit.unwrap_or(defaults.high_in_limit),
            )?;
            print_json(&json!({
                "nutrient": nutrient,
                "diet": diet,
                "count": results.len(),
                "data": results,
            }))
        }

        Commands::Profile {
            height,
            weight,
            age,
            gender,
            diet,
            activity,
            goal,
        } => {
            require_positive("height", height)?;
            require_positive("weight", weight)?;
            require_positive("age", age)?;

            let metrics = BodyMetrics {
                height_cm: height,
                weight_kg: weight,
                age,
                gender: Gender::parse(&gender),
                activity_level: activity
                    .as_deref()
                    .map_or_else(|| defaults.activity_level(), ActivityLevel::parse),
            };
            let smart = smart_recommend(
                catalog.load(&dataset)?,
                &metrics,
                Diet::parse(&diet),
                goal.as_deref().map(Goal::parse),
            );
            print_json(&json!({
                "user_profile": {
                    "height": height,
                    "weight": weight,
                    "age": age,
                    "gender": gender,
                    "diet": diet,
                    "activity_level": metrics.activity_level,
                },
                "health_assessment": smart.health_assessment,
                "recommended_goal": smart.recommended_goal,
                "meal_plan": smart.plan.meal_plan,
                "suggested_totals": smart.plan.suggested_totals,
            }))
        }

        Commands::Bmi {
            height,
            weight,
            age,
            gender,
            activity,
        } => {
            require_positive("height", height)?;
            require_positive("weight", weight)?;

            let report = bmi_report(
                height,
                weight,
                age.filter(|a| *a > 0.0),
                gender.as_deref().filter(|g| !g.is_empty()).map(Gender::parse),
                Some(
                    activity
                        .as_deref()
                        .map_or_else(|| defaults.activity_level(), ActivityLevel::parse),
                ),
            );
            print_json(&report)
        }

        Commands::InitConfig => {
            let path = cli
                .config
                .clone()
                .unwrap_or_else(Config::default_config_path);
            if path.exists() {
                return Err(Error::Config(format!(
                    "Config file already exists at {}",
                    path.display()
                )));
            }
            let fresh = Config::default();
            fresh.save_to(&path)?;
            println!("✓ Wrote default configuration to {}", path.display());
            Ok(())
        }
    }
}

/// Unknown category names fall back to unfiltered results
fn parse_category(category: Option<&str>) -> Option<MealCategory> {
    let raw = category?;
    let parsed = MealCategory::parse(raw);
    if parsed.is_none() {
        tracing::warn!("Unknown meal category '{}', not filtering by category", raw);
    }
    parsed
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "{} must be a positive number",
            field
        )))
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ABOUTME: Recipe suggester CLI - command-line caller for the recommendation engine
// ABOUTME: Loads a JSON catalog, runs ingredient, label, macro or score queries and prints JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Recipes cookable with what is in the fridge
//! recipe-suggester-cli suggest --catalog data --ingredient egg --ingredient milk
//!
//! # Recipes using any of the ingredients
//! recipe-suggester-cli suggest --ingredient tofu --policy loose
//!
//! # Meal for a calorie goal and macro split, reproducible with a seed
//! recipe-suggester-cli macros --calories 600 --protein 30 --fat 30 --carbs 40 --seed 42
//!
//! # Recipes for labels returned by an image labelling service
//! recipe-suggester-cli detect --label Food --label Tomato --label Egg
//!
//! # Score ad-hoc nutrition
//! recipe-suggester-cli score --calories 500 --protein 40 --carbs 50 --fat 15
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use recipe_suggester::{
    config::intelligence::EngineConfig,
    errors::{AppError, AppResult},
    logging::LoggingConfig,
    MatchPolicy, RecommendationEngine,
};
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "recipe-suggester-cli",
    about = "Recipe suggestions and meal planning",
    long_about = "Suggests recipes from available ingredients or detected labels, scores nutrition and plans meals from macro targets."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Recommend recipes for the ingredients you have
    Suggest {
        /// Directory holding ingredients.json and dishes.json
        #[arg(long, default_value = "data")]
        catalog: PathBuf,

        /// Available ingredient (repeatable)
        #[arg(long = "ingredient", short = 'i')]
        ingredients: Vec<String>,

        /// Matching policy override (strict or loose)
        #[arg(long)]
        policy: Option<MatchPolicy>,
    },

    /// Generate a meal for a calorie goal and macro split
    Macros {
        /// Target calories (kcal)
        #[arg(long)]
        calories: f64,

        /// Protein share of calories (percent)
        #[arg(long)]
        protein: f64,

        /// Fat share of calories (percent)
        #[arg(long)]
        fat: f64,

        /// Carbohydrate share of calories (percent)
        #[arg(long)]
        carbs: f64,

        /// Seed for reproducible meal names
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Detect ingredients from image labels and recommend recipes
    Detect {
        /// Directory holding ingredients.json and dishes.json
        #[arg(long, default_value = "data")]
        catalog: PathBuf,

        /// Free-text label (repeatable)
        #[arg(long = "label", short = 'l')]
        labels: Vec<String>,
    },

    /// Score nutrition figures and infer dietary tags
    Score {
        /// Energy (kcal)
        #[arg(long)]
        calories: f64,

        /// Protein (grams)
        #[arg(long)]
        protein: f64,

        /// Carbohydrates (grams)
        #[arg(long)]
        carbs: f64,

        /// Fat (grams)
        #[arg(long)]
        fat: f64,

        /// Food name, enables name-based tags
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("failed to initialize logging: {e}")))?;

    let config = EngineConfig::load()?;
    debug!(matching.policy = %config.matching.policy, "Engine configuration loaded");
    let engine = RecommendationEngine::new(&config);

    match cli.command {
        Command::Suggest {
            catalog,
            ingredients,
            policy,
        } => commands::suggest::run(&engine, &catalog, &ingredients, policy),
        Command::Macros {
            calories,
            protein,
            fat,
            carbs,
            seed,
        } => commands::macros::run(&engine, calories, protein, fat, carbs, seed),
        Command::Detect { catalog, labels } => commands::detect::run(&engine, &catalog, &labels),
        Command::Score {
            calories,
            protein,
            carbs,
            fat,
            name,
        } => commands::score::run(&engine, calories, protein, carbs, fat, name.as_deref()),
    }
}

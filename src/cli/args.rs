use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "larder", version, about = "Recipe ideas from what's already in the pantry")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Path to a larder.toml (defaults to ./larder.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend recipes that use the ingredients you have
    Recommend {
        #[command(flatten)]
        ingredients: IngredientArgs,
        #[command(flatten)]
        filters: FilterArgs,
        /// Maximum number of recipes
        #[arg(long, short, default_value = "10", value_parser = parse_limit)]
        limit: usize,
        /// Page of results to show (1-based)
        #[arg(long, default_value = "1", value_parser = parse_limit)]
        page: usize,
    },
    /// Show full details for one recipe
    Show {
        #[arg(value_name = "TITLE")]
        title: String,
    },
    /// Rate a recipe and append the review to the log
    Rate {
        #[arg(value_name = "TITLE")]
        title: String,
        /// Rating from 1 to 5
        #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
        /// Free-text review
        #[arg(long, short, default_value = "")]
        comment: String,
    },
    /// Most common ingredients among recipes within the filters
    Common {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Ingredients that pair well with the given one
    Pairings {
        #[arg(value_name = "INGREDIENT")]
        ingredient: String,
    },
    /// Export the matching recipe graph as JSON for visualization
    Export {
        #[command(flatten)]
        ingredients: IngredientArgs,
        /// Recipes costing more than this are dropped
        #[arg(long, value_name = "PRICE", value_parser = parse_price)]
        max_price: Option<f64>,
        /// Maximum number of recipes
        #[arg(long, short, default_value = "10", value_parser = parse_limit)]
        limit: usize,
        /// Write to this file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct IngredientArgs {
    /// An ingredient you have (repeatable)
    #[arg(long = "ingredient", short = 'i', value_name = "NAME", required = true)]
    pub ingredients: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Recipes costing more than this are dropped
    #[arg(long, value_name = "PRICE", value_parser = parse_price)]
    pub max_price: Option<f64>,
    /// Minimum mean rating (1-5); unrated recipes are dropped
    #[arg(long, value_name = "RATING", value_parser = clap::value_parser!(u8).range(1..=5))]
    pub min_rating: Option<u8>,
}

fn parse_limit(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("number must be greater than 0".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{raw}' is not a valid number")),
    }
}

fn parse_price(raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(p) if p.is_finite() && p >= 0.0 => Ok(p),
        Ok(_) => Err("price must be a non-negative number".to_string()),
        Err(_) => Err(format!("'{raw}' is not a valid price")),
    }
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level shape of `larder.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataPaths,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Locations of the tabular inputs and the review log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    #[serde(default = "default_recipes")]
    pub recipes: PathBuf,
    #[serde(default = "default_vocabulary", alias = "ingredients")]
    pub vocabulary: PathBuf,
    #[serde(default = "default_prices")]
    pub prices: PathBuf,
    #[serde(default = "default_reviews")]
    pub reviews: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            recipes: default_recipes(),
            vocabulary: default_vocabulary(),
            prices: default_prices(),
            reviews: default_reviews(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Recipes shown per page in listings.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Result limit for queries that browse the whole catalog.
    #[serde(default = "default_browse_limit")]
    pub browse_limit: usize,
    /// Vertex cap for the exported graph view.
    #[serde(default = "default_max_vertices")]
    pub max_vertices: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            browse_limit: default_browse_limit(),
            max_vertices: default_max_vertices(),
        }
    }
}

fn default_recipes() -> PathBuf { PathBuf::from("data/recipes.csv") }
fn default_vocabulary() -> PathBuf { PathBuf::from("data/ingredients.csv") }
fn default_prices() -> PathBuf { PathBuf::from("data/ingredient_prices.csv") }
fn default_reviews() -> PathBuf { PathBuf::from("data/reviews.csv") }
const fn default_page_size() -> usize { 10 }
const fn default_browse_limit() -> usize { 14_000 }
const fn default_max_vertices() -> usize { 5000 }

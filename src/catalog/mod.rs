// src/catalog/mod.rs
//! Catalog inputs: ingredient vocabulary, price table and recipe rows.
//!
//! Everything here is loaded once per process and shared read-only.

pub mod loader;
pub mod prices;
pub mod recipe;
pub mod vocabulary;

pub use loader::{load_recipes, parse_ingredient_list, Rejection};
pub use prices::PriceTable;
pub use recipe::Recipe;
pub use vocabulary::Vocabulary;

use std::fs::File;
use std::path::Path;

use crate::config::DataPaths;
use crate::error::{LarderError, Result};
use crate::graph::RecipeGraph;

/// The validated catalog and the lookup tables it was cleaned against.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub vocabulary: Vocabulary,
    pub prices: PriceTable,
    pub recipes: Vec<Recipe>,
}

impl Catalog {
    /// Loads vocabulary, prices and recipes from the configured files.
    ///
    /// # Errors
    /// Returns error if any input file is missing or malformed.
    pub fn load(paths: &DataPaths) -> Result<Self> {
        let vocabulary = Vocabulary::from_path(&paths.vocabulary)?;
        let prices = PriceTable::from_path(&paths.prices)?;
        let recipes = read_recipes(&paths.recipes, &vocabulary, &prices)?;
        tracing::info!(
            vocabulary = vocabulary.len(),
            prices = prices.len(),
            recipes = recipes.len(),
            "catalog ready"
        );
        Ok(Self { vocabulary, prices, recipes })
    }

    /// Builds the root graph: nodes for every recipe first, then its edges.
    ///
    /// # Errors
    /// Returns error if a recipe references an ingredient without a price.
    pub fn graph(&self) -> Result<RecipeGraph> {
        RecipeGraph::from_recipes(&self.recipes, &self.prices)
    }
}

fn read_recipes(path: &Path, vocabulary: &Vocabulary, prices: &PriceTable) -> Result<Vec<Recipe>> {
    let file = File::open(path).map_err(|e| LarderError::from(e).at(path))?;
    load_recipes(file, vocabulary, prices).map_err(|e| e.at(path))
}

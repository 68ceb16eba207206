// src/graph/builder.rs
//! Whole-catalog construction and induced subgraphs.

use std::sync::Arc;

use super::store::RecipeGraph;
use crate::catalog::{PriceTable, Recipe};
use crate::error::{LarderError, Result};

impl RecipeGraph {
    /// Builds a graph from validated recipes, adding each recipe's vertices
    /// and then its edges.
    ///
    /// A recipe whose title collides with an ingredient name (or the
    /// reverse) is skipped with a warning.
    ///
    /// # Errors
    /// Returns error if a recipe references an unpriced ingredient.
    pub fn from_recipes(recipes: &[Recipe], prices: &PriceTable) -> Result<Self> {
        let mut graph = Self::new();
        for recipe in recipes {
            match graph.add_node(recipe.clone(), prices) {
                Ok(()) => graph.add_edges(recipe.title())?,
                Err(LarderError::KeyConflict(key)) => {
                    tracing::warn!(title = recipe.title(), %key, "skipping recipe with conflicting key");
                }
                Err(e) => return Err(e),
            }
        }
        tracing::info!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            "built recipe graph"
        );
        Ok(graph)
    }

    /// A new graph holding exactly the named recipes and the ingredients
    /// they use, with edges derived afresh.
    ///
    /// # Errors
    /// Returns `MissingNode` or `NotARecipe` for keys that are not recipe
    /// vertices of this graph.
    pub fn induced_subgraph<'a, I>(&self, keys: I, prices: &PriceTable) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut sub = Self::new();
        for key in keys {
            let node = self
                .get(key)
                .ok_or_else(|| LarderError::MissingNode(key.to_string()))?;
            let recipe = node
                .as_recipe()
                .ok_or_else(|| LarderError::NotARecipe(key.to_string()))?;
            sub.add_node(Arc::clone(recipe), prices)?;
            sub.add_edges(key)?;
        }
        Ok(sub)
    }
}

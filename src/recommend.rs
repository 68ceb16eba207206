// src/recommend.rs
//! Ranks catalog recipes against a user's ingredients and filters.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::PriceTable;
use crate::error::Result;
use crate::graph::{NodeId, NodeKind, RecipeGraph};
use crate::reviews::ReviewAggregate;

/// A recommendation request. Parameters arrive already validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Maximum number of recipes returned. Expected to be > 0.
    pub limit: usize,
    /// Ingredients on hand. Empty means "no ingredient filter".
    pub ingredients: Vec<String>,
    /// Recipes costing more are dropped.
    pub price_ceiling: Option<f64>,
    /// Recipes without reviews, or rated lower, are dropped.
    pub rating_floor: Option<f64>,
}

impl Query {
    #[must_use]
    pub fn new(limit: usize, ingredients: Vec<String>) -> Self {
        Self {
            limit,
            ingredients,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_price_ceiling(mut self, ceiling: Option<f64>) -> Self {
        self.price_ceiling = ceiling;
        self
    }

    #[must_use]
    pub fn with_rating_floor(mut self, floor: Option<f64>) -> Self {
        self.rating_floor = floor;
        self
    }
}

/// A recipe that survived ranking and filtering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeMatch {
    pub title: String,
    /// Number of the user's ingredients the recipe uses (1 when browsing).
    pub score: usize,
    pub price: f64,
    pub rating: Option<f64>,
}

/// Read-only view over the shared catalog structures.
#[derive(Debug, Clone, Copy)]
pub struct Recommender<'a> {
    graph: &'a RecipeGraph,
    prices: &'a PriceTable,
    reviews: &'a ReviewAggregate,
}

impl<'a> Recommender<'a> {
    #[must_use]
    pub fn new(graph: &'a RecipeGraph, prices: &'a PriceTable, reviews: &'a ReviewAggregate) -> Self {
        Self { graph, prices, reviews }
    }

    /// Ranked, filtered and truncated matches, best first. Equal scores keep
    /// the graph's recipe order.
    #[must_use]
    pub fn rank(&self, query: &Query) -> Vec<RecipeMatch> {
        let mut scored = self.score(&query.ingredients);
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        let candidates = scored.len();

        let matches: Vec<RecipeMatch> = scored
            .into_iter()
            .filter_map(|(id, score)| {
                let node = self.graph.node(id);
                let rating = self.reviews.mean(node.key());
                passes(query, node.price(), rating).then(|| RecipeMatch {
                    title: node.key().to_string(),
                    score,
                    price: node.price(),
                    rating,
                })
            })
            .take(query.limit)
            .collect();

        tracing::debug!(
            candidates,
            selected = matches.len(),
            limit = query.limit,
            "ranked recipes"
        );
        matches
    }

    /// The induced graph over the selected recipes. An empty graph means no
    /// recipe matched.
    ///
    /// # Errors
    /// Returns error if the induced graph cannot be rebuilt from the price
    /// table.
    pub fn select_recipes(&self, query: &Query) -> Result<RecipeGraph> {
        let matches = self.rank(query);
        if matches.is_empty() {
            return Ok(RecipeGraph::new());
        }
        self.graph
            .induced_subgraph(matches.iter().map(|m| m.title.as_str()), self.prices)
    }

    fn score(&self, ingredients: &[String]) -> Vec<(NodeId, usize)> {
        let recipes = self
            .graph
            .ids()
            .filter(|&id| self.graph.node(id).kind() == NodeKind::Recipe);

        if ingredients.is_empty() {
            return recipes.map(|id| (id, 1)).collect();
        }

        let wanted: BTreeSet<NodeId> = ingredients
            .iter()
            .filter_map(|name| self.graph.id_of(name))
            .filter(|&id| self.graph.node(id).kind() == NodeKind::Ingredient)
            .collect();

        recipes
            .map(|id| {
                let neighbors = self.graph.node(id).neighbor_ids();
                (id, wanted.intersection(neighbors).count())
            })
            .filter(|&(_, score)| score > 0)
            .collect()
    }
}

fn passes(query: &Query, price: f64, rating: Option<f64>) -> bool {
    if query.price_ceiling.is_some_and(|ceiling| price > ceiling) {
        return false;
    }
    match query.rating_floor {
        Some(floor) => rating.is_some_and(|r| r >= floor),
        None => true,
    }
}

/// Convenience wrapper over [`Recommender::select_recipes`].
///
/// # Errors
/// Returns error if the induced graph cannot be built.
pub fn select_recipes(
    graph: &RecipeGraph,
    query: &Query,
    prices: &PriceTable,
    reviews: &ReviewAggregate,
) -> Result<RecipeGraph> {
    Recommender::new(graph, prices, reviews).select_recipes(query)
}

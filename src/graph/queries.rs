// src/graph/queries.rs
//! Ingredient popularity and pairing queries.

use std::cmp::Ordering;

use serde::Serialize;

use super::node::{NodeId, NodeKind};
use super::store::RecipeGraph;
use crate::utils::round2;

/// Upper bound on `most_connected_ingredients` results.
pub const MOST_CONNECTED_LIMIT: usize = 10;
/// Upper bound on `similar_ingredients` results.
pub const SIMILAR_LIMIT: usize = 5;

/// An ingredient ranked by how many recipes use it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientDegree {
    pub degree: usize,
    pub name: String,
    pub price: f64,
}

/// Another ingredient ranked by neighbourhood overlap with a target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pairing {
    pub score: f64,
    pub name: String,
}

impl RecipeGraph {
    /// Jaccard index of the two ingredients' recipe neighbourhoods, each
    /// excluding the other ingredient, rounded to two decimals.
    ///
    /// `None` unless `a` and `b` are distinct ingredient vertices. An empty
    /// union scores `0.0`.
    #[must_use]
    pub fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        let (x, y) = self.ingredient_pair(a, b)?;
        let (shared, union) = self.overlap(x, y);
        if union == 0 {
            return Some(0.0);
        }
        #[allow(clippy::cast_precision_loss)]
        let score = shared as f64 / union as f64;
        Some(round2(score))
    }

    /// Number of recipes that use both ingredients.
    #[must_use]
    pub fn shared_neighbor_count(&self, a: &str, b: &str) -> Option<usize> {
        let (x, y) = self.ingredient_pair(a, b)?;
        Some(self.overlap(x, y).0)
    }

    /// Up to ten ingredients by descending degree, ties broken by
    /// descending name, then descending price.
    #[must_use]
    pub fn most_connected_ingredients(&self) -> Vec<IngredientDegree> {
        let mut ranked: Vec<IngredientDegree> = self
            .ingredients()
            .into_iter()
            .map(|n| IngredientDegree {
                degree: n.degree(),
                name: n.key().to_string(),
                price: n.price(),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.degree
                .cmp(&a.degree)
                .then_with(|| b.name.cmp(&a.name))
                .then_with(|| b.price.total_cmp(&a.price))
        });
        ranked.truncate(MOST_CONNECTED_LIMIT);
        ranked
    }

    /// Top five other ingredients by similarity to `key`, ties broken by
    /// descending name. Empty when `key` is not an ingredient vertex.
    #[must_use]
    pub fn similar_ingredients(&self, key: &str) -> Vec<Pairing> {
        let Some(target) = self.ingredient_id(key) else {
            return Vec::new();
        };

        let mut scores: Vec<Pairing> = self
            .ids()
            .filter(|&id| id != target && self.node(id).kind() == NodeKind::Ingredient)
            .map(|id| {
                let other = self.node(id);
                let score = self.similarity(key, other.key()).unwrap_or(0.0);
                Pairing {
                    score,
                    name: other.key().to_string(),
                }
            })
            .collect();

        scores.sort_by(|a, b| match b.score.total_cmp(&a.score) {
            Ordering::Equal => b.name.cmp(&a.name),
            other => other,
        });
        scores.truncate(SIMILAR_LIMIT);
        scores
    }

    fn ingredient_id(&self, key: &str) -> Option<NodeId> {
        self.id_of(key)
            .filter(|&id| self.node(id).kind() == NodeKind::Ingredient)
    }

    fn ingredient_pair(&self, a: &str, b: &str) -> Option<(NodeId, NodeId)> {
        let x = self.ingredient_id(a)?;
        let y = self.ingredient_id(b)?;
        (x != y).then_some((x, y))
    }

    /// `(|Sa ∩ Sb|, |Sa ∪ Sb|)` where each set drops the other endpoint.
    fn overlap(&self, a: NodeId, b: NodeId) -> (usize, usize) {
        let sa = &self.node(a).neighbors;
        let sb = &self.node(b).neighbors;
        let keep = |id: &&NodeId| **id != a && **id != b;

        let shared = sa.intersection(sb).filter(keep).count();
        let union = sa.union(sb).filter(keep).count();
        (shared, union)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PriceTable, Recipe};

    fn recipe(title: &str, ingredients: &[&str], price: f64) -> Recipe {
        Recipe::new(
            title,
            ingredients.iter().map(|s| (*s).to_string()).collect(),
            "",
            "",
            ingredients.iter().map(|s| (*s).to_string()).collect(),
            price,
        )
    }

    fn prices() -> PriceTable {
        PriceTable::from_entries([
            ("a", Some(1.0)),
            ("b", Some(1.0)),
            ("c", Some(1.0)),
            ("d", Some(1.0)),
        ])
    }

    #[test]
    fn test_overlap_ignores_mutual_endpoints() {
        let g = RecipeGraph::from_recipes(
            &[
                recipe("R1", &["a", "b"], 2.0),
                recipe("R2", &["a", "c"], 2.0),
                recipe("R3", &["b", "d"], 2.0),
            ],
            &prices(),
        )
        .expect("graph builds");

        // a: {R1, R2}, b: {R1, R3} -> 1 / 3
        assert_eq!(g.similarity("a", "b"), Some(0.33));
        assert_eq!(g.shared_neighbor_count("a", "b"), Some(1));
        assert_eq!(g.similarity("c", "d"), Some(0.0));
    }

    #[test]
    fn test_similarity_undefined_for_self_and_recipes() {
        let g = RecipeGraph::from_recipes(&[recipe("R1", &["a", "b"], 2.0)], &prices())
            .expect("graph builds");
        assert_eq!(g.similarity("a", "a"), None);
        assert_eq!(g.similarity("a", "R1"), None);
        assert_eq!(g.similarity("a", "zzz"), None);
    }
}
